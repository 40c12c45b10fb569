//! Durable storage for the session
//!
//! The session survives restarts by being mirrored to a JSON file under a
//! fixed key. The on-disk shape is `{"state": {...}, "version": 0}`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::session::Session;

/// Key the session is stored under
pub const STORAGE_KEY: &str = "token-storage";

const STORAGE_VERSION: u32 = 0;

/// Custom error type for session persistence
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stored document is not a valid session
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Type alias for Result with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Somewhere a session can be saved and restored from
pub trait SessionStorage: Send + Sync {
    /// Load the last saved session, `None` if nothing was saved yet
    fn load(&self) -> StorageResult<Option<Session>>;

    /// Replace the saved session
    fn save(&self, session: &Session) -> StorageResult<()>;
}

#[derive(Serialize, Deserialize)]
struct Persisted {
    state: Session,
    version: u32,
}

/// Session storage backed by a JSON file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at `<dir>/token-storage.json`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{STORAGE_KEY}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> StorageResult<Option<Session>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let persisted: Persisted = serde_json::from_str(&raw)?;
        info!("Restored session from {}", self.path.display());
        Ok(Some(persisted.state))
    }

    fn save(&self, session: &Session) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let document = serde_json::to_vec(&Persisted {
            state: session.clone(),
            version: STORAGE_VERSION,
        })?;

        // Write beside the target and rename so readers never see a partial file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, document)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory session storage; clones share the same slot
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<Session>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `session`
    pub fn with_session(session: Session) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(session))),
        }
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> StorageResult<Option<Session>> {
        let slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(slot.clone())
    }

    fn save(&self, session: &Session) -> StorageResult<()> {
        let mut slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(session.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(access: &str, refresh: &str) -> Session {
        Session {
            access_token: access.to_string(),
            refresh_token: refresh.to_string(),
        }
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::in_dir(dir.path());

        assert!(storage.load().unwrap().is_none());
        assert!(storage.path().ends_with("token-storage.json"));
    }

    #[test]
    fn test_file_storage_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::in_dir(dir.path().join("nested"));

        storage.save(&session("abc", "def")).unwrap();
        assert_eq!(storage.load().unwrap(), Some(session("abc", "def")));
    }

    #[test]
    fn test_file_storage_document_shape() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::in_dir(dir.path());
        storage.save(&session("abc", "def")).unwrap();

        let raw = fs::read_to_string(storage.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "state": { "accessToken": "abc", "refreshToken": "def" },
                "version": 0
            })
        );
    }

    #[test]
    fn test_file_storage_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::in_dir(dir.path());
        fs::write(storage.path(), "{not json").unwrap();

        assert!(matches!(storage.load(), Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_memory_storage_clones_share_slot() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.save(&session("abc", "")).unwrap();
        assert_eq!(other.load().unwrap(), Some(session("abc", "")));
    }
}
