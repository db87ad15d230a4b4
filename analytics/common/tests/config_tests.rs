use common::{load_config, AnalyticsConfig, KeyValueStore, PropertyValue};
use std::fs;

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analytics.json");

    let config = load_config(&path).unwrap();

    assert_eq!(config, AnalyticsConfig::default());
    assert!(path.exists());
    assert_eq!(load_config(&path).unwrap(), config);
}

#[test]
fn partial_config_fills_in_defaults() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analytics.json");
    fs::write(
        &path,
        r#"{ "random_id_length": 32, "global_properties": { "beta": true, "build": 42, "channel": "store" } }"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();

    assert_eq!(config.random_id_length, 32);
    assert_eq!(config.device_key, "AnalyticsDeviceKey");
    assert_eq!(config.device_store, None);
    assert_eq!(config.global_properties["beta"], PropertyValue::Boolean(true));
    assert_eq!(config.global_properties["build"], PropertyValue::Integer(42));
    assert_eq!(config.global_properties["channel"], PropertyValue::from("store"));
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analytics.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(load_config(&path).is_err());
}

#[test]
fn configured_device_store_is_file_backed() {
    let dir = tempfile::tempdir().unwrap();
    let config = AnalyticsConfig {
        device_store: Some(dir.path().join("device.json")),
        ..Default::default()
    };

    let mut store = config.open_device_store().unwrap();
    store.set("k", "v").unwrap();

    assert!(dir.path().join("device.json").exists());
    assert_eq!(store.get("k").as_deref(), Some("v"));
}
