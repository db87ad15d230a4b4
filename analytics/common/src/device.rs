use api::{AdvertisingIdSource, KeyValueStore, VendorIdSource};
use log::{debug, warn};
use rand::distributions::Alphanumeric;
use rand::Rng;
use uuid::Uuid;

use crate::config::{AnalyticsConfig, DEFAULT_DEVICE_KEY};
use crate::store::MemoryStore;

/// Resolves a stable device identifier from the injected platform sources.
///
/// Precedence: advertising id (when tracking is enabled), persisted value,
/// vendor id, random id. The last two are persisted on first use.
pub struct DeviceIdResolver {
    store: Box<dyn KeyValueStore>,
    advertising: Option<Box<dyn AdvertisingIdSource>>,
    vendor: Option<Box<dyn VendorIdSource>>,
    key: String,
    random_length: usize,
}

impl DeviceIdResolver {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            store,
            advertising: None,
            vendor: None,
            key: DEFAULT_DEVICE_KEY.to_string(),
            random_length: 64,
        }
    }

    pub fn with_config(config: &AnalyticsConfig, store: Box<dyn KeyValueStore>) -> Self {
        Self {
            key: config.device_key.clone(),
            random_length: config.random_id_length,
            ..Self::new(store)
        }
    }

    pub fn with_advertising_source(mut self, source: Box<dyn AdvertisingIdSource>) -> Self {
        self.advertising = Some(source);
        self
    }

    pub fn with_vendor_source(mut self, source: Box<dyn VendorIdSource>) -> Self {
        self.vendor = Some(source);
        self
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn device_id(&mut self) -> String {
        if let Some(id) = self.advertising_identifier() {
            return uuid_string(id);
        }

        if let Some(id) = self.store.get(&self.key) {
            return id;
        }

        if let Some(id) = self.vendor.as_ref().and_then(|v| v.identifier_for_vendor()) {
            let id = uuid_string(id);
            self.persist(&id);
            return id;
        }

        let id = random_id(self.random_length);
        debug!("Generated random device id");
        self.persist(&id);
        id
    }

    fn advertising_identifier(&self) -> Option<Uuid> {
        let source = self.advertising.as_ref()?;
        if !source.is_tracking_enabled() {
            return None;
        }
        source.advertising_identifier()
    }

    fn persist(&mut self, id: &str) {
        if let Err(e) = self.store.set(&self.key, id) {
            warn!("Failed to persist device id under {:?}: {}", self.key, e);
        }
    }
}

impl Default for DeviceIdResolver {
    fn default() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }
}

fn uuid_string(id: Uuid) -> String {
    id.hyphenated()
        .encode_upper(&mut Uuid::encode_buffer())
        .to_string()
}

pub fn random_id(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_id_is_alphanumeric_of_requested_length() {
        let id = random_id(64);
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn uuid_is_rendered_upper_case() {
        let id = Uuid::from_u128(0x67e5_5044_10b1_426f_9247_bb68_0e5f_e0c8);
        assert_eq!(uuid_string(id), "67E55044-10B1-426F-9247-BB680E5FE0C8");
    }
}
