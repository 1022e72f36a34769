use crate::{event, info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use strum_macros::Display;

/// A string key-value store that survives process restarts.
pub trait DurableStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    /// # Errors
    /// - `StorageError` if the value could not be made durable.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// # Errors
    /// - `StorageError` if the removal could not be made durable.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Display)]
pub enum StorageError {
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self { StorageError::Io(value) }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self { StorageError::Serde(value) }
}

fn lock_map(map: &Mutex<HashMap<String, String>>) -> MutexGuard<'_, HashMap<String, String>> {
    map.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Volatile store, used when nothing has to outlive the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }
}

impl DurableStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> { lock_map(&self.entries).get(key).cloned() }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        lock_map(&self.entries).insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        lock_map(&self.entries).remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object on disk.
///
/// Every mutation rewrites the whole file; the store only holds a handful of small entries.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`, starting empty if the file does not exist yet.
    ///
    /// A file that is not a JSON object of strings is moved aside to `<path>.corrupt`
    /// and the store starts empty.
    ///
    /// # Arguments
    /// - `path`: Location of the JSON file backing the store.
    ///
    /// # Errors
    /// - `StorageError::Io` if the file exists but cannot be read, or cannot be moved aside.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read(&path) {
            Ok(bytes) if bytes.is_empty() => HashMap::new(),
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(entries) => entries,
                Err(e) => {
                    let aside = Self::sibling(&path, "corrupt");
                    warn!("Unreadable store at {} ({e}), moving it to {}", path.display(), aside.display());
                    std::fs::rename(&path, &aside)?;
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No store at {}, starting empty", path.display());
                HashMap::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries: Mutex::new(entries) })
    }

    pub fn path(&self) -> &Path { &self.path }

    /// `<path>.<suffix>` next to the store file.
    fn sibling(path: &Path, suffix: &str) -> PathBuf {
        let mut name = path.file_name().map(std::ffi::OsStr::to_os_string).unwrap_or_default();
        name.push(".");
        name.push(suffix);
        path.with_file_name(name)
    }

    /// Writes `entries` to a temporary sibling and renames it over the store file,
    /// so a crash mid-write never leaves a truncated store behind.
    fn flush(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = Self::sibling(&self.path, "tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        std::fs::rename(&tmp, &self.path)?;
        event!("Flushed {} store entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}

impl DurableStore for FileStore {
    fn get(&self, key: &str) -> Option<String> { lock_map(&self.entries).get(key).cloned() }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = lock_map(&self.entries);
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = lock_map(&self.entries);
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush(&entries)
    }
}
