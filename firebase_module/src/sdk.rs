use api::PropertyValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Numeric wrapper accepted by the vendor for every non-text parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Bool(bool),
    Double(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::UInt(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", *v as u8),
            Self::Double(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Text(String),
    Number(Number),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(v) => f.write_str(v),
            Self::Number(n) => n.fmt(f),
        }
    }
}

impl From<ParamValue> for PropertyValue {
    fn from(value: ParamValue) -> Self {
        match value {
            ParamValue::Text(v) => PropertyValue::Text(v),
            ParamValue::Number(Number::Int(v)) => PropertyValue::Integer(v),
            ParamValue::Number(Number::UInt(v)) => PropertyValue::Unsigned(v),
            ParamValue::Number(Number::Bool(v)) => PropertyValue::Boolean(v),
            ParamValue::Number(Number::Double(v)) => PropertyValue::Float(v),
        }
    }
}

pub type Parameters = BTreeMap<String, ParamValue>;

/// The subset of the Firebase SDK this adapter drives.
pub trait FirebaseSdk: Send {
    fn configure(&mut self);
    fn log_event(&mut self, name: &str, parameters: &Parameters);
    fn set_user_id(&mut self, user_id: &str);
    fn set_user_property(&mut self, value: &str, name: &str);
    fn reset_analytics_data(&mut self);
    /// Hands the APNs device token to Firebase Messaging.
    fn set_apns_token(&mut self, token: &[u8]);
}
