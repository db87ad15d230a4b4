//! Generic, vendor-neutral event names and property keys.

macro_rules! default_events {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// Generic event names. Adapters map these onto vendor constants.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum DefaultEvent {
            $($variant),*
        }

        impl DefaultEvent {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name),*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

default_events! {
    AchievedLevel => "achievedLevel",
    AddedPaymentInfo => "addedPaymentInfo",
    AddedToCart => "addedToCart",
    AddedToWishlist => "addedToWishlist",
    CampaignEvent => "campaignEvent",
    CheckoutOption => "checkoutOption",
    CheckoutProgress => "checkoutProgress",
    CompletedRegistration => "completedRegistration",
    CompletedTutorial => "completedTutorial",
    Contact => "contact",
    EarnCredits => "earnCredits",
    GenerateLead => "generateLead",
    InitiatedCheckout => "initiatedCheckout",
    JoinGroup => "joinGroup",
    LevelUp => "levelUp",
    PostScore => "postScore",
    PresentOffer => "presentOffer",
    Purchase => "purchase",
    Rated => "rated",
    Refund => "refund",
    RemoveFromCart => "removeFromCart",
    Search => "search",
    SearchResults => "searchResults",
    Share => "share",
    SignUp => "signUp",
    SpendCredits => "spendCredits",
    StartTrial => "startTrial",
    Subscribe => "subscribe",
    UnlockedAchievement => "unlockedAchievement",
    ViewContent => "viewContent",
    ViewItem => "viewItem",
    ViewItemList => "viewItemList",
}

/// Generic property keys.
pub mod property {
    pub const START_DATE: &str = "startDate";
    pub const END_DATE: &str = "endDate";
    pub const TERM: &str = "term";

    pub mod purchase {
        pub const QUANTITY: &str = "quantity";
        pub const ITEM: &str = "item";
        pub const SKU: &str = "sku";
        pub const CATEGORY: &str = "category";
        pub const SOURCE: &str = "source";
        pub const PRICE: &str = "price";
        pub const CURRENCY: &str = "currency";
        pub const MEDIUM: &str = "medium";
        pub const CAMPAIGN: &str = "campaign";
    }

    pub mod location {
        pub const ORIGIN: &str = "origin";
        pub const DESTINATION: &str = "destination";
    }

    pub mod content {
        pub const IDENTIFIER: &str = "contentIdentifier";
    }

    pub mod user {
        pub const REGISTRATION_METHOD: &str = "registrationMethod";
    }
}
