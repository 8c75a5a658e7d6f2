//! Storage layer for key-value persistence
//!
//! Defines the asynchronous key-value contract the favorites store writes
//! through, and two implementations: a directory of files and an in-memory
//! map.

use crate::config::app::NAME;
use crate::config::storage::FILE_EXTENSION;
use crate::error::{AppError, Result};
use std::collections::HashMap;
use std::future::Future;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Asynchronous key-value storage
///
/// Stores raw bytes. Encoding is the caller's responsibility, so
/// implementations stay free of any serialization format.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`. Returns `None` if nothing is stored.
    fn get(&self, key: &str) -> impl Future<Output = io::Result<Option<Vec<u8>>>> + Send;

    /// Write `value` under `key`, replacing whatever was there.
    fn set(&self, key: &str, value: &[u8]) -> impl Future<Output = io::Result<()>> + Send;
}

/// Get the application config directory path
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir().map(|p| p.join(NAME)).ok_or_else(|| {
        AppError::Config(
            "Could not determine config directory. HOME environment variable may not be set."
                .to_string(),
        )
    })
}

// =============================================================================
// FileStore - one file per key
// =============================================================================

/// Key-value store backed by a directory, one `<key>.json` file per key
///
/// The directory is created on first write. Writes go to `<key>.json.tmp`
/// and are renamed into place, so a reader sees either the old or the new
/// record.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store rooted at the default config directory
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(config_dir()?))
    }

    /// Directory this store reads from and writes to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> io::Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{FILE_EXTENSION}")))
    }
}

/// Keys become file names, so they must not escape the store directory
fn validate_key(key: &str) -> io::Result<()> {
    let invalid = key.is_empty()
        || key.starts_with('.')
        || key.contains(['/', '\\'])
        || key.contains('\0');
    if invalid {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            format!("invalid storage key {key:?}"),
        ));
    }
    Ok(())
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        match tokio::fs::read(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> io::Result<()> {
        let path = self.path_for(key)?;
        if !self.dir.as_os_str().is_empty() {
            tokio::fs::create_dir_all(&self.dir).await?;
        }

        // Write aside, then rename over the old record
        let tmp = path.with_extension(format!("{FILE_EXTENSION}.tmp"));
        if let Err(e) = tokio::fs::write(&tmp, value).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e);
        }
        tokio::fs::rename(&tmp, &path).await
    }
}

// =============================================================================
// MemoryStore - process-local map
// =============================================================================

/// Key-value store held in memory
///
/// Nothing survives the process. Useful for tests and for hosts that
/// persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        let store = Self::new();
        store.lock().insert(key.into(), value.into());
        store
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the raw bytes under `key`, bypassing the async interface
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &[u8]) -> io::Result<()> {
        self.lock().insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
