//! Cache store implementations
//!
//! Provides the `CacheStore` abstraction the catalog client writes through, with
//! a disk-backed store for normal runs and an in-memory store for tests. Both are
//! plain string maps: no expiry timestamps, no eviction, last writer wins.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use directories::ProjectDirs;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur when opening the disk-backed store
#[derive(Debug, Error)]
pub enum StoreError {
    /// No home directory, so the XDG cache path cannot be determined
    #[error("could not determine a cache directory for this platform")]
    NoCacheDir,

    /// Creating the cache directory failed
    #[error("failed to create cache directory: {0}")]
    CreateDir(#[from] std::io::Error),
}

/// String key-value store used for catalog payloads
///
/// Implementations must tolerate arbitrary key strings produced by
/// [`crate::cache::key`]. `set` is infallible by contract: a store that cannot
/// persist an entry logs and drops it, it never surfaces the failure to the
/// catalog client (a failed cache write must not fail the fetch that produced
/// the payload).
pub trait CacheStore: Send + Sync {
    /// Returns the stored value for `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, overwriting any previous entry
    fn set(&self, key: &str, value: &str);
}

/// Disk-backed cache store, one JSON file per key
///
/// Files live in an XDG-compliant cache directory (`~/.cache/xemphim/` on
/// Linux). Keys map directly to file names; the key grammar only produces
/// URL-safe characters, so no escaping is needed.
#[derive(Debug, Clone)]
pub struct DiskStore {
    cache_dir: PathBuf,
}

impl DiskStore {
    /// Opens the store at the platform cache directory, creating it if needed
    pub fn open() -> Result<Self, StoreError> {
        let project_dirs = ProjectDirs::from("", "", "xemphim").ok_or(StoreError::NoCacheDir)?;
        Self::open_at(project_dirs.cache_dir().to_path_buf())
    }

    /// Opens the store at a custom directory, creating it if needed
    ///
    /// Used by the `--cache-dir` flag and by tests.
    pub fn open_at(cache_dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&cache_dir)?;
        Ok(Self { cache_dir })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }
}

impl CacheStore for DiskStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = fs::write(self.entry_path(key), value) {
            warn!(key, error = %err, "failed to write cache entry");
        }
    }
}

/// In-memory cache store
///
/// Behaves identically to [`DiskStore`] minus persistence. Used as the
/// injected fake in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, for test assertions
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CacheStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("cache mutex poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("cache mutex poisoned")
            .insert(key.to_string(), value.to_string());
    }
}
