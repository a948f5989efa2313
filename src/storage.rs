//! Opaque key-value storage used for persisted user progress.
//!
//! The quiz progress is the only thing the client persists, so the store is a
//! tiny string-to-string contract. The file-backed implementation keeps a JSON
//! map under `.cache/`, mirroring how other local caches are handled.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};

/// Injected storage boundary. Implementations must not lose previously
/// written keys on a failed write.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// JSON map persisted to a single file, write-through on every `set`.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("reading store file {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("parsing store file {}", path.display()))?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let content = serde_json::to_string(entries)?;
        fs::write(&self.path, content)
            .with_context(|| format!("writing store file {}", self.path.display()))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().expect("store lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        let previous = entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist(&entries) {
            // keep the in-memory map consistent with what is on disk
            match previous {
                Some(old) => {
                    entries.insert(key.to_string(), old);
                }
                None => {
                    entries.remove(key);
                }
            }
            return Err(e);
        }
        Ok(())
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .expect("store lock poisoned")
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .lock()
            .expect("store lock poisoned")
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Default location for the on-disk store.
pub fn default_store_path() -> PathBuf {
    Path::new(".cache").join("store.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("neoverse-store-{}-{}.json", tag, std::process::id()))
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.get("userQuizScore").unwrap(), None);
        store.set("userQuizScore", "80").unwrap();
        assert_eq!(store.get("userQuizScore").unwrap(), Some("80".to_string()));
        store.set("userQuizScore", "105").unwrap();
        assert_eq!(store.get("userQuizScore").unwrap(), Some("105".to_string()));
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let path = temp_store_path("reopen");
        let _ = fs::remove_file(&path);

        let store = FileStore::open(&path).unwrap();
        store.set("userQuizScore", "42").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("userQuizScore").unwrap(), Some("42".to_string()));

        let _ = fs::remove_file(&path);
    }
}
