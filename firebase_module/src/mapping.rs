use crate::constants::*;
use crate::sdk::{Number, ParamValue, Parameters};
use api::{property, DefaultEvent, Properties, PropertyValue};

/// Maps a generic event name to its Firebase constant, if it has one.
pub fn event_name(name: DefaultEvent) -> Option<&'static str> {
    use DefaultEvent::*;

    match name {
        AddedPaymentInfo => Some(EVENT_ADD_PAYMENT_INFO),
        AddedToWishlist => Some(EVENT_ADD_TO_WISHLIST),
        CompletedTutorial => Some(EVENT_TUTORIAL_COMPLETE),
        AddedToCart => Some(EVENT_ADD_TO_CART),
        ViewContent => Some(EVENT_SELECT_CONTENT),
        InitiatedCheckout => Some(EVENT_BEGIN_CHECKOUT),
        CampaignEvent => Some(EVENT_CAMPAIGN_DETAILS),
        CheckoutProgress => Some(EVENT_CHECKOUT_PROGRESS),
        EarnCredits => Some(EVENT_EARN_VIRTUAL_CURRENCY),
        Purchase => Some(EVENT_ECOMMERCE_PURCHASE),
        JoinGroup => Some(EVENT_JOIN_GROUP),
        GenerateLead => Some(EVENT_GENERATE_LEAD),
        LevelUp => Some(EVENT_LEVEL_UP),
        SignUp => Some(EVENT_LOGIN),
        PostScore => Some(EVENT_POST_SCORE),
        PresentOffer => Some(EVENT_PRESENT_OFFER),
        Refund => Some(EVENT_PURCHASE_REFUND),
        RemoveFromCart => Some(EVENT_REMOVE_FROM_CART),
        Search => Some(EVENT_SEARCH),
        CheckoutOption => Some(EVENT_SET_CHECKOUT_OPTION),
        Share => Some(EVENT_SHARE),
        CompletedRegistration => Some(EVENT_SIGN_UP),
        SpendCredits => Some(EVENT_SPEND_VIRTUAL_CURRENCY),
        UnlockedAchievement => Some(EVENT_UNLOCK_ACHIEVEMENT),
        ViewItem => Some(EVENT_VIEW_ITEM),
        ViewItemList => Some(PARAM_ITEM_LIST),
        SearchResults => Some(EVENT_VIEW_SEARCH_RESULTS),
        _ => None,
    }
}

/// Rewrites an event name, passing unknown names through.
pub fn translate_event_name(name: &str) -> String {
    DefaultEvent::from_name(name)
        .and_then(event_name)
        .map(str::to_string)
        .unwrap_or_else(|| name.to_string())
}

/// Maps a generic property key to its Firebase parameter, passing unknown keys through.
pub fn property_name(key: &str) -> &str {
    match key {
        property::purchase::QUANTITY => PARAM_QUANTITY,
        property::purchase::ITEM => PARAM_ITEM_NAME,
        property::purchase::SKU => PARAM_ITEM_ID,
        property::purchase::CATEGORY => PARAM_ITEM_CATEGORY,
        property::purchase::SOURCE => PARAM_ITEM_LOCATION_ID,
        property::purchase::PRICE => PARAM_VALUE,
        property::purchase::CURRENCY => PARAM_CURRENCY,
        property::location::ORIGIN => PARAM_ORIGIN,
        property::location::DESTINATION => PARAM_DESTINATION,
        property::START_DATE => PARAM_START_DATE,
        property::END_DATE => PARAM_END_DATE,
        property::purchase::MEDIUM => PARAM_MEDIUM,
        property::purchase::CAMPAIGN => PARAM_CAMPAIGN,
        property::TERM => PARAM_TERM,
        property::content::IDENTIFIER => PARAM_CONTENT,
        property::user::REGISTRATION_METHOD => PARAM_SIGN_UP_METHOD,
        other => other,
    }
}

/// Coerces a value into a Firebase parameter. Unsupported types yield `None`.
pub fn parameter_value(value: &PropertyValue) -> Option<ParamValue> {
    match value {
        PropertyValue::Text(text) => Some(ParamValue::Text(truncate(text, MAX_TEXT_LENGTH))),
        PropertyValue::Integer(v) => Some(ParamValue::Number(Number::Int(*v))),
        PropertyValue::Unsigned(v) => Some(ParamValue::Number(Number::UInt(*v))),
        PropertyValue::Boolean(v) => Some(ParamValue::Number(Number::Bool(*v))),
        PropertyValue::Float(v) => Some(ParamValue::Number(Number::Double(*v))),
        PropertyValue::Date(_) => None,
    }
}

/// Renames keys and coerces values, dropping what Firebase cannot take.
///
/// A renamed key wins over a pass-through key that has the same Firebase name.
pub fn parameters(properties: &Properties) -> Parameters {
    let mut out = Parameters::new();
    let mut renamed = Vec::new();
    for (key, value) in properties {
        let name = property_name(key);
        if name == key.as_str() {
            insert_parameter(&mut out, key, name, value);
        } else {
            renamed.push((key, name, value));
        }
    }
    for (key, name, value) in renamed {
        insert_parameter(&mut out, key, name, value);
    }
    out
}

#[cfg_attr(not(feature = "xtralog"), allow(unused_variables))]
fn insert_parameter(out: &mut Parameters, key: &str, name: &str, value: &PropertyValue) {
    match parameter_value(value) {
        Some(v) => {
            #[cfg(feature = "xtralog")]
            log::trace!("Parameter {:?} -> {:?} = {:?}", key, name, v);
            out.insert(name.to_string(), v);
        }
        None => {
            #[cfg(feature = "xtralog")]
            log::trace!("Dropping unsupported parameter {:?}", key);
        }
    }
}

/// Keeps the first `max` characters of `text`.
fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let text = "é".repeat(40);
        assert_eq!(truncate(&text, 35).chars().count(), 35);
    }

    #[test]
    fn dates_are_not_supported() {
        let date = PropertyValue::Date(Default::default());
        assert_eq!(parameter_value(&date), None);
    }
}
