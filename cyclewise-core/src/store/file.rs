//! JSON-file backed store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::{CycleWiseError, CycleWiseResult};

pub const STORE_FILE_NAME: &str = "store.json";

/// Store kept as a single JSON object in `<data_dir>/store.json`.
///
/// The whole file is rewritten on every mutation.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store in `data_dir`. A missing file is an empty store.
    pub fn open(data_dir: &Path) -> CycleWiseResult<Self> {
        let path = data_dir.join(STORE_FILE_NAME);

        let entries: BTreeMap<String, String> = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(|e| {
                CycleWiseError::Store(format!("Could not parse {}: {e}", path.display()))
            })?
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), keys = entries.len(), "opened store");

        Ok(FileStore { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> CycleWiseResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| CycleWiseError::Serialization(e.to_string()))?;

        std::fs::write(&self.path, content)?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> CycleWiseResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> CycleWiseResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        tracing::debug!(key, "store set");
        self.flush()
    }

    fn remove(&mut self, key: &str) -> CycleWiseResult<()> {
        if self.entries.remove(key).is_some() {
            tracing::debug!(key, "store remove");
            self.flush()?;
        }
        Ok(())
    }
}
