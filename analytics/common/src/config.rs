use anyhow::{Context, Result};
use api::{KeyValueStore, Properties};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::{JsonFileStore, MemoryStore};

pub const DEFAULT_DEVICE_KEY: &str = "AnalyticsDeviceKey";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Storage key the resolved device identifier is persisted under.
    #[serde(default = "default_device_key")]
    pub device_key: String,

    #[serde(default = "default_random_id_length")]
    pub random_id_length: usize,

    /// JSON file backing the device store. In-memory when unset.
    pub device_store: Option<PathBuf>,

    /// Applied to every provider as globals during `setup`.
    pub global_properties: Properties,
}

fn default_device_key() -> String {
    DEFAULT_DEVICE_KEY.to_string()
}

fn default_random_id_length() -> usize {
    64
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            device_key: default_device_key(),
            random_id_length: default_random_id_length(),
            device_store: None,
            global_properties: Properties::new(),
        }
    }
}

impl AnalyticsConfig {
    /// Opens the configured device store, falling back to memory when no file is set.
    pub fn open_device_store(&self) -> Result<Box<dyn KeyValueStore>> {
        match &self.device_store {
            Some(path) => Ok(Box::new(JsonFileStore::open(path)?)),
            None => Ok(Box::new(MemoryStore::new())),
        }
    }
}

pub fn load_config(path: &Path) -> Result<AnalyticsConfig> {
    if path.exists() {
        info!("Loading analytics config from {:?}", path);
        let file = fs::File::open(path)
            .with_context(|| format!("Failed to open config file {:?}", path))?;
        let reader = std::io::BufReader::new(file);
        let config = serde_json::from_reader(reader).context("Failed to parse analytics config")?;
        Ok(config)
    } else {
        info!("Config not found. Creating default at {:?}", path);
        let config = AnalyticsConfig::default();
        let file = fs::File::create(path)
            .with_context(|| format!("Failed to create config file {:?}", path))?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &config).context("Failed to write default config")?;
        Ok(config)
    }
}
