mod names;
pub use names::{property, DefaultEvent};

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// A single property value. Vendors accept a subset of these.
///
/// Scalars serialize as plain JSON values. Dates serialize as `{"date": "<rfc3339>"}`
/// so that a string never reads back as a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Boolean(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Date(#[serde(with = "date_object")] DateTime<Utc>),
    Text(String),
}

mod date_object {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Repr {
        date: DateTime<Utc>,
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        Repr { date: *value }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        Repr::deserialize(deserializer).map(|r| r.date)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(v) => write!(f, "{}", v),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Unsigned(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Date(v) => write!(f, "{}", v.to_rfc3339()),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<u64> for PropertyValue {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

pub type Properties = BTreeMap<String, PropertyValue>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    #[default]
    Default,
    /// Starts a timer keyed by the event name.
    Time,
    /// Stops the timer started by a matching `Time` event.
    FinishTime,
    Screen,
    Purchase,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(default)]
    pub event_type: EventType,
    #[serde(default)]
    pub properties: Properties,
}

impl Event {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            event_type: EventType::Default,
            properties: Properties::new(),
        }
    }

    pub fn with_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

}

impl From<DefaultEvent> for Event {
    fn from(event: DefaultEvent) -> Self {
        Self::new(event.as_str())
    }
}

/// Vendor identity of a provider, used for tag-based lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Manager,
    Firebase,
    Log,
    Custom(&'static str),
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manager => f.write_str("manager"),
            Self::Firebase => f.write_str("firebase"),
            Self::Log => f.write_str("log"),
            Self::Custom(name) => f.write_str(name),
        }
    }
}

/// The capability set shared by the manager and every vendor adapter.
///
/// None of these calls report failure. Vendors that lack a capability keep
/// the default no-op.
pub trait AnalyticsProvider: Send {
    fn kind(&self) -> ProviderKind;

    fn setup(&mut self, _properties: Option<&Properties>) {}
    fn activate(&mut self) {}
    fn resign(&mut self) {}
    fn flush(&mut self) {}
    fn reset(&mut self) {}

    /// Send an event. Implementations translate their own copy.
    fn event(&mut self, event: &Event);

    fn identify(&mut self, _user_id: &str, _properties: Option<&Properties>) {}
    fn alias(&mut self, _user_id: &str, _for_id: &str) {}
    fn set(&mut self, _properties: &Properties) {}
    fn global(&mut self, _properties: &Properties, _overwrite: bool) {}
    fn increment(&mut self, _property: &str, _by: f64) {}

    /// Raw device token handed out by the platform push service.
    fn add_device(&mut self, _token: &[u8]) {}
    fn set_push_token(&mut self, _token: &str) {}
    fn push(&mut self, _payload: &serde_json::Value, _event: Option<&str>) {}

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Hook consulted before an event is dispatched and notified afterwards.
pub trait ProviderDelegate: Send + Sync {
    /// Returning `None` vetoes the event.
    fn should_send_event(&self, sender: ProviderKind, event: &Event) -> Option<Event>;

    fn did_send_event(&self, _sender: ProviderKind, _event: &Event) {}
}

/// Persisted string storage, e.g. for the device identifier.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Platform advertising identifier, only available when the user permits tracking.
pub trait AdvertisingIdSource: Send {
    fn is_tracking_enabled(&self) -> bool;
    fn advertising_identifier(&self) -> Option<Uuid>;
}

/// Identifier shared by all apps of one vendor on a device.
pub trait VendorIdSource: Send {
    fn identifier_for_vendor(&self) -> Option<Uuid>;
}
