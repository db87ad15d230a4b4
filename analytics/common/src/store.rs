use anyhow::{Context, Result};
use api::KeyValueStore;
use log::info;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Process-local store. Values are lost when it is dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a flat JSON object on disk, rewritten on every `set`.
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store, reading existing values if the file is present.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open store file: {:?}", path))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse store file: {:?}", path))?
        } else {
            info!("No store file found at {:?}, starting empty", path);
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create store dir: {:?}", parent))?;
            }
        }
        let file = File::create(&self.path).context("Failed to create store file")?;
        serde_json::to_writer_pretty(file, &self.values).context("Failed to serialize store")?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.save() {
            match previous {
                Some(v) => self.values.insert(key.to_string(), v),
                None => self.values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}
