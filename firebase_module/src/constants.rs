// Event names and parameter keys understood by Firebase Analytics.

pub const EVENT_ADD_PAYMENT_INFO: &str = "add_payment_info";
pub const EVENT_ADD_TO_CART: &str = "add_to_cart";
pub const EVENT_ADD_TO_WISHLIST: &str = "add_to_wishlist";
pub const EVENT_APP_OPEN: &str = "app_open";
pub const EVENT_BEGIN_CHECKOUT: &str = "begin_checkout";
pub const EVENT_CAMPAIGN_DETAILS: &str = "campaign_details";
pub const EVENT_CHECKOUT_PROGRESS: &str = "checkout_progress";
pub const EVENT_EARN_VIRTUAL_CURRENCY: &str = "earn_virtual_currency";
pub const EVENT_ECOMMERCE_PURCHASE: &str = "ecommerce_purchase";
pub const EVENT_GENERATE_LEAD: &str = "generate_lead";
pub const EVENT_JOIN_GROUP: &str = "join_group";
pub const EVENT_LEVEL_UP: &str = "level_up";
pub const EVENT_LOGIN: &str = "login";
pub const EVENT_POST_SCORE: &str = "post_score";
pub const EVENT_PRESENT_OFFER: &str = "present_offer";
pub const EVENT_PURCHASE_REFUND: &str = "purchase_refund";
pub const EVENT_REMOVE_FROM_CART: &str = "remove_from_cart";
pub const EVENT_SEARCH: &str = "search";
pub const EVENT_SELECT_CONTENT: &str = "select_content";
pub const EVENT_SET_CHECKOUT_OPTION: &str = "set_checkout_option";
pub const EVENT_SHARE: &str = "share";
pub const EVENT_SIGN_UP: &str = "sign_up";
pub const EVENT_SPEND_VIRTUAL_CURRENCY: &str = "spend_virtual_currency";
pub const EVENT_TUTORIAL_COMPLETE: &str = "tutorial_complete";
pub const EVENT_UNLOCK_ACHIEVEMENT: &str = "unlock_achievement";
pub const EVENT_VIEW_ITEM: &str = "view_item";
pub const EVENT_VIEW_SEARCH_RESULTS: &str = "view_search_results";

pub const PARAM_CAMPAIGN: &str = "campaign";
pub const PARAM_CONTENT: &str = "content";
pub const PARAM_CURRENCY: &str = "currency";
pub const PARAM_DESTINATION: &str = "destination";
pub const PARAM_END_DATE: &str = "end_date";
pub const PARAM_ITEM_CATEGORY: &str = "item_category";
pub const PARAM_ITEM_ID: &str = "item_id";
pub const PARAM_ITEM_LIST: &str = "item_list";
pub const PARAM_ITEM_LOCATION_ID: &str = "item_location_id";
pub const PARAM_ITEM_NAME: &str = "item_name";
pub const PARAM_MEDIUM: &str = "medium";
pub const PARAM_ORIGIN: &str = "origin";
pub const PARAM_QUANTITY: &str = "quantity";
pub const PARAM_SIGN_UP_METHOD: &str = "sign_up_method";
pub const PARAM_START_DATE: &str = "start_date";
pub const PARAM_TERM: &str = "term";
pub const PARAM_VALUE: &str = "value";

/// Longest text value Firebase keeps for an event parameter.
pub const MAX_TEXT_LENGTH: usize = 35;
