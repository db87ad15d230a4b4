use common::{
    AdvertisingIdSource, AnalyticsConfig, DeviceIdResolver, JsonFileStore, KeyValueStore,
    MemoryStore, ProviderManager, VendorIdSource, DEFAULT_DEVICE_KEY,
};
use uuid::Uuid;

const VENDOR: Uuid = Uuid::from_u128(0x0f0e_0d0c_0b0a_0908_0706_0504_0302_0100);
const ADVERTISING: Uuid = Uuid::from_u128(0xa1a2_a3a4_b1b2_c1c2_d1d2_d3d4_d5d6_d7d8);

struct FixedVendor(Option<Uuid>);

impl VendorIdSource for FixedVendor {
    fn identifier_for_vendor(&self) -> Option<Uuid> {
        self.0
    }
}

struct FixedAdvertising {
    enabled: bool,
}

impl AdvertisingIdSource for FixedAdvertising {
    fn is_tracking_enabled(&self) -> bool {
        self.enabled
    }

    fn advertising_identifier(&self) -> Option<Uuid> {
        Some(ADVERTISING)
    }
}

struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
        anyhow::bail!("disk full")
    }
}

fn upper(id: Uuid) -> String {
    id.to_string().to_uppercase()
}

#[test]
fn vendor_id_is_used_and_persisted() {
    let mut resolver = DeviceIdResolver::new(Box::new(MemoryStore::new()))
        .with_vendor_source(Box::new(FixedVendor(Some(VENDOR))));

    let id = resolver.device_id();

    assert_eq!(id, upper(VENDOR));
    assert_eq!(resolver.store().get(DEFAULT_DEVICE_KEY), Some(id.clone()));
    assert_eq!(resolver.device_id(), id);
}

#[test]
fn advertising_id_wins_when_tracking_is_enabled() {
    let mut store = MemoryStore::new();
    store.set(DEFAULT_DEVICE_KEY, "persisted").unwrap();
    let mut resolver = DeviceIdResolver::new(Box::new(store))
        .with_advertising_source(Box::new(FixedAdvertising { enabled: true }))
        .with_vendor_source(Box::new(FixedVendor(Some(VENDOR))));

    assert_eq!(resolver.device_id(), upper(ADVERTISING));
    assert_eq!(
        resolver.store().get(DEFAULT_DEVICE_KEY).as_deref(),
        Some("persisted")
    );
}

#[test]
fn advertising_id_is_skipped_without_permission() {
    let mut store = MemoryStore::new();
    store.set(DEFAULT_DEVICE_KEY, "persisted").unwrap();
    let mut resolver = DeviceIdResolver::new(Box::new(store))
        .with_advertising_source(Box::new(FixedAdvertising { enabled: false }));

    assert_eq!(resolver.device_id(), "persisted");
}

#[test]
fn persisted_value_beats_vendor_id() {
    let mut store = MemoryStore::new();
    store.set(DEFAULT_DEVICE_KEY, "persisted").unwrap();
    let mut resolver =
        DeviceIdResolver::new(Box::new(store)).with_vendor_source(Box::new(FixedVendor(Some(VENDOR))));

    assert_eq!(resolver.device_id(), "persisted");
}

#[test]
fn random_id_is_generated_once_and_reused() {
    let mut resolver = DeviceIdResolver::new(Box::new(MemoryStore::new()))
        .with_vendor_source(Box::new(FixedVendor(None)));

    let first = resolver.device_id();
    assert_eq!(first.len(), 64);
    assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(resolver.device_id(), first);
}

#[test]
fn config_controls_key_and_random_length() {
    let config = AnalyticsConfig {
        device_key: "CustomKey".into(),
        random_id_length: 16,
        ..Default::default()
    };
    let mut resolver = DeviceIdResolver::with_config(&config, Box::new(MemoryStore::new()));

    let id = resolver.device_id();
    assert_eq!(id.len(), 16);
    assert_eq!(resolver.store().get("CustomKey"), Some(id));
    assert_eq!(resolver.store().get(DEFAULT_DEVICE_KEY), None);
}

#[test]
fn file_store_keeps_id_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state").join("device.json");

    let first = {
        let store = JsonFileStore::open(&path).unwrap();
        let mut manager = ProviderManager::with_device_resolver(
            DeviceIdResolver::new(Box::new(store))
                .with_vendor_source(Box::new(FixedVendor(Some(VENDOR)))),
        );
        manager.device_id()
    };
    assert!(path.exists());

    let store = JsonFileStore::open(&path).unwrap();
    let mut resolver = DeviceIdResolver::new(Box::new(store));
    assert_eq!(resolver.device_id(), first);
}

#[test]
fn store_failures_do_not_reach_the_caller() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut vendor = DeviceIdResolver::new(Box::new(FailingStore))
        .with_vendor_source(Box::new(FixedVendor(Some(VENDOR))));
    assert_eq!(vendor.device_id(), upper(VENDOR));

    let mut random = DeviceIdResolver::new(Box::new(FailingStore));
    let id = random.device_id();
    assert_eq!(id.len(), 64);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
}
