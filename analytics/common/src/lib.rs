pub use api::{
    AdvertisingIdSource, AnalyticsProvider, DefaultEvent, Event, EventType, KeyValueStore,
    Properties, PropertyValue, ProviderDelegate, ProviderKind, VendorIdSource,
};

mod base_provider;
mod config;
pub mod device;
mod manager;
mod store;

pub use base_provider::BaseProvider;
pub use config::{load_config, AnalyticsConfig, DEFAULT_DEVICE_KEY};
pub use device::DeviceIdResolver;
pub use manager::ProviderManager;
pub use store::{JsonFileStore, MemoryStore};
