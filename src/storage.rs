use std::{
    cell::RefCell,
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    rc::Rc,
};

use crate::{config::CartConfig, error::StorageError};

/// Per-origin string key-value storage, shaped after the browser's
/// `localStorage`. Writes replace the whole value for a key.
pub trait KeyValueStorage {
    /// Returns `Ok(None)` if the key has never been written.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Several stores (one per simulated tab) can share one backend.
impl<S: KeyValueStorage> KeyValueStorage for Rc<RefCell<S>> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.borrow().get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.borrow_mut().set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.borrow_mut().remove_item(key)
    }
}

/// In-memory storage for tests and embedding.
///
/// An optional quota (in bytes, counted over keys and values) makes writes
/// fail the way a full browser storage does.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(quota),
        }
    }

    pub fn from_config(config: &CartConfig) -> Self {
        match config.storage_quota {
            Some(quota) => Self::with_quota(quota),
            None => Self::new(),
        }
    }

    /// Bytes used by all entries.
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota {
            let existing = self.entries.get(key).map_or(0, |v| key.len() + v.len());
            let needed = self.used_bytes() - existing + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Directory-backed storage: one file per key. Values are written to a
/// sibling temp file and renamed into place, so a reader never sees a
/// half-written blob.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn from_config(config: &CartConfig) -> Result<Self, StorageError> {
        Self::open(&config.storage_dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys become file names; anything outside [A-Za-z0-9_.-] is replaced.
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// The window's `localStorage`.
#[cfg(feature = "browser")]
#[derive(Debug, Clone)]
pub struct LocalStorage {
    inner: web_sys::Storage,
}

#[cfg(feature = "browser")]
impl LocalStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "browser")]
impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }
}
