use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::warn;

use crate::error::StoreError;

/// Platform key-value storage port.
///
/// Adapters persist string keys inside one named namespace. An absent key is
/// `Ok(None)`, never an error; errors are backend failures only.
pub trait Preferences: Send + Sync {
    fn get_string(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn put_string(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Namespace persisted as a single JSON object file of string keys.
///
/// Reads are served from an in-memory cache; every mutation rewrites the
/// file through a temp-file rename, so a crashed write never leaves a torn
/// namespace behind.
pub struct FilePreferences {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FilePreferences {
    /// Opens the namespace `name` under `dir`, creating the directory if
    /// needed. An absent file is an empty namespace; a file that no longer
    /// parses is moved aside to `<name>.json.corrupt` and read as empty.
    pub fn open(dir: impl AsRef<Path>, name: &str) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{name}.json"));
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(err) => {
                    warn!(%err, path = %path.display(), "unreadable preference file, starting empty");
                    fs::rename(&path, path.with_extension("json.corrupt"))?;
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let raw = serde_json::to_string(entries).map_err(StoreError::Encode)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, raw)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl Preferences for FilePreferences {
    fn get_string(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put_string(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write();
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

/// In-memory namespace for tests and ephemeral hosts.
#[derive(Default)]
pub struct MemoryPreferences {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Preferences for MemoryPreferences {
    fn get_string(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put_string(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().remove(key);
        Ok(())
    }
}
