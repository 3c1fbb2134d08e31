//! Local persisted key-value store
//!
//! One JSON document per key in a data directory: the equivalent of the
//! browser-local storage the system previously lived in. Reads that hit
//! a missing or unreadable document come back empty; writes replace the
//! whole value. There is no cross-process guard, so two concurrent
//! writers can overwrite each other's appends. The store assumes a
//! single logical user per data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppResult;

/// Well-known storage keys
pub mod keys {
    /// The current user's profile
    pub const USER_DATA: &str = "userData";
    /// Ordered list of certification applications
    pub const CERTIFICATION_APPLICATIONS: &str = "certificationApplications";
    /// Transient signup draft, consumed by profile setup
    pub const TEMP_USER: &str = "tempUser";
}

type Watcher = Box<dyn Fn(&str) + Send + Sync>;

/// File-backed key-value store with change notification
pub struct LocalStore {
    data_dir: PathBuf,
    watchers: Mutex<Vec<(String, Watcher)>>,
}

impl LocalStore {
    /// Open a store rooted at the given directory, creating it if needed
    pub fn open(data_dir: impl Into<PathBuf>) -> AppResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        tracing::debug!(data_dir = %data_dir.display(), "opened local store");
        Ok(Self {
            data_dir,
            watchers: Mutex::new(Vec::new()),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    /// Read a value, treating missing or unparseable documents as absent
    ///
    /// A corrupt document is logged but never surfaced: the caller sees
    /// an empty state and the next write replaces the bad document.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read stored value, treating as empty");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "stored value is unparseable, treating as empty");
                None
            }
        }
    }

    /// Replace the value stored under a key
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        fs::write(self.path_for(key), raw)?;
        tracing::debug!(key, "stored value updated");
        self.notify(key);
        Ok(())
    }

    /// Remove the value stored under a key, if any
    pub fn remove(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {
                tracing::debug!(key, "stored value removed");
                self.notify(key);
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Register a callback invoked after every write or removal of `key`
    pub fn subscribe(&self, key: impl Into<String>, watcher: impl Fn(&str) + Send + Sync + 'static) {
        let mut watchers = self.watchers.lock().unwrap_or_else(|e| e.into_inner());
        watchers.push((key.into(), Box::new(watcher)));
    }

    fn notify(&self, key: &str) {
        let watchers = self.watchers.lock().unwrap_or_else(|e| e.into_inner());
        for (watched, watcher) in watchers.iter() {
            if watched == key {
                watcher(key);
            }
        }
    }

    /// Root directory of this store
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
