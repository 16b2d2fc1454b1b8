//! Persisted key/value storage for client state.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;

/// Durable client-side key/value store.
pub trait ConfigStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Values live as long as the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with a single value.
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self { values }
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON file store. Every `set` rewrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`.
    ///
    /// A missing file is an empty store. So is a file that cannot be read or
    /// parsed; the next `set` overwrites it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = if path.exists() {
            load(&path).unwrap_or_else(|e| {
                warn!(path = %path.display(), %e, "Ignoring unreadable state file");
                BTreeMap::new()
            })
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), keys = values.len(), "Opened state store");
        Self { path, values }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn load(path: &Path) -> Result<BTreeMap<String, String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

impl ConfigStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, contents)?;

        debug!(path = %self.path.display(), key, "State saved");
        Ok(())
    }
}
