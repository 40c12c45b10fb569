//! Token store holding the current session
//!
//! The store is the single source of truth for the access/refresh token
//! pair. Reads are synchronous so the HTTP client can consult it while
//! building a request, every mutation is mirrored to durable storage, and
//! subscribers are woken through a `watch` channel.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::storage::{MemoryStorage, SessionStorage};

/// Access/refresh credential pair; empty strings mean "unauthenticated"
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
}

impl Session {
    pub fn is_empty(&self) -> bool {
        self.access_token.is_empty() && self.refresh_token.is_empty()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &redact(&self.access_token))
            .field("refresh_token", &redact(&self.refresh_token))
            .finish()
    }
}

fn redact(token: &str) -> &'static str {
    if token.is_empty() { "<empty>" } else { "<redacted>" }
}

struct Inner {
    state: watch::Sender<Session>,
    storage: Box<dyn SessionStorage>,
}

/// Shared, persisted session
#[derive(Clone)]
pub struct TokenStore {
    inner: Arc<Inner>,
}

impl TokenStore {
    /// Create a store over `storage`, restoring whatever it last saved
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        let session = match storage.load() {
            Ok(Some(session)) => session,
            Ok(None) => Session::default(),
            Err(e) => {
                warn!("Discarding unreadable stored session: {}", e);
                Session::default()
            }
        };

        let (state, _) = watch::channel(session);
        Self {
            inner: Arc::new(Inner {
                state,
                storage: Box::new(storage),
            }),
        }
    }

    /// Create a store that only lives as long as the process
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    pub fn access_token(&self) -> String {
        self.inner.state.borrow().access_token.clone()
    }

    pub fn refresh_token(&self) -> String {
        self.inner.state.borrow().refresh_token.clone()
    }

    /// Snapshot of the whole session
    pub fn session(&self) -> Session {
        self.inner.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        !self.inner.state.borrow().access_token.is_empty()
    }

    pub fn set_access_token(&self, token: impl Into<String>) {
        let token = token.into();
        self.update(|session| session.access_token = token);
    }

    pub fn set_refresh_token(&self, token: impl Into<String>) {
        let token = token.into();
        self.update(|session| session.refresh_token = token);
    }

    /// Replace both tokens in a single mutation
    pub fn set_tokens(&self, access_token: impl Into<String>, refresh_token: impl Into<String>) {
        let session = Session {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        };
        self.update(|current| *current = session);
    }

    /// Reset both tokens to empty
    pub fn clear_tokens(&self) {
        info!("Clearing session tokens");
        self.update(|session| *session = Session::default());
    }

    /// Receiver that observes every change to the session
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.inner.state.subscribe()
    }

    fn update(&self, mutate: impl FnOnce(&mut Session)) {
        let storage = &self.inner.storage;
        self.inner.state.send_modify(|session| {
            mutate(session);
            if let Err(e) = storage.save(session) {
                warn!("Failed to persist session: {}", e);
            }
        });
    }
}

impl fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStore")
            .field("session", &*self.inner.state.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileStorage;

    #[test]
    fn test_starts_empty() {
        let store = TokenStore::in_memory();
        assert_eq!(store.access_token(), "");
        assert_eq!(store.refresh_token(), "");
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let store = TokenStore::in_memory();

        for token in ["abc", "", "토큰", "a.b.c"] {
            store.set_access_token(token);
            assert_eq!(store.access_token(), token);
        }
    }

    #[test]
    fn test_set_refresh_token_keeps_access_token() {
        let store = TokenStore::in_memory();
        store.set_access_token("access");
        store.set_refresh_token("refresh");

        assert_eq!(
            store.session(),
            Session {
                access_token: "access".to_string(),
                refresh_token: "refresh".to_string(),
            }
        );
    }

    #[test]
    fn test_clear_tokens_is_idempotent() {
        let store = TokenStore::in_memory();
        store.set_tokens("access", "refresh");

        store.clear_tokens();
        let once = store.session();
        store.clear_tokens();

        assert_eq!(store.session(), once);
        assert!(store.session().is_empty());
    }

    #[test]
    fn test_mutations_are_persisted() {
        let storage = MemoryStorage::new();
        let store = TokenStore::new(storage.clone());

        store.set_tokens("access", "refresh");
        assert_eq!(storage.load().unwrap(), Some(store.session()));

        store.clear_tokens();
        assert_eq!(storage.load().unwrap(), Some(Session::default()));
    }

    #[test]
    fn test_reload_restores_access_token() {
        let dir = tempfile::tempdir().unwrap();

        let store = TokenStore::new(FileStorage::in_dir(dir.path()));
        store.set_access_token("abc");
        drop(store);

        let reloaded = TokenStore::new(FileStorage::in_dir(dir.path()));
        assert_eq!(reloaded.access_token(), "abc");
    }

    #[test]
    fn test_corrupt_storage_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::in_dir(dir.path());
        std::fs::write(storage.path(), "garbage").unwrap();

        let store = TokenStore::new(storage);
        assert!(store.session().is_empty());
    }

    #[test]
    fn test_subscribers_see_changes() {
        let store = TokenStore::in_memory();
        let mut rx = store.subscribe();

        store.set_access_token("abc");
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().access_token, "abc");

        store.clear_tokens();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_empty());
    }

    #[test]
    fn test_debug_never_prints_tokens() {
        let store = TokenStore::in_memory();
        store.set_tokens("secret-access", "secret-refresh");

        let printed = format!("{:?}", store);
        assert!(!printed.contains("secret"));
        assert!(printed.contains("<redacted>"));
    }
}
