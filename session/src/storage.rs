//! Local token persistence.
//!
//! The backend session outlives the process through a locally stored
//! bearer token. Storage is synchronous and best-effort: a failure to
//! read or write is logged and swallowed, because the worst outcome is
//! that the user signs in again.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use marquee_client::AccessToken;

/// Where the session token lives between runs.
pub trait TokenStore: Send + Sync {
    /// Load the persisted token, if any.
    fn load(&self) -> Option<AccessToken>;

    /// Persist the token for the next run.
    fn save(&self, token: &AccessToken);

    /// Remove the persisted token.
    fn clear(&self);
}

/// Token storage backed by a single file.
///
/// The file holds the raw token string and nothing else. Parent
/// directories are created on first save.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store writing to the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<AccessToken> {
        std::fs::read_to_string(&self.path)
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(AccessToken::new)
    }

    fn save(&self, token: &AccessToken) {
        if let Some(parent) = self.path.parent() {
            if let Err(error) = std::fs::create_dir_all(parent) {
                tracing::warn!(%error, path = %self.path.display(), "failed to create token directory");
                return;
            }
        }
        if let Err(error) = std::fs::write(&self.path, token.as_str()) {
            tracing::warn!(%error, path = %self.path.display(), "failed to persist session token");
        }
    }

    fn clear(&self) {
        if let Err(error) = std::fs::remove_file(&self.path) {
            if error.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(%error, path = %self.path.display(), "failed to remove persisted token");
            }
        }
    }
}

/// In-memory token storage for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<AccessToken>>>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding a token, as if a previous run
    /// had saved one.
    #[must_use]
    pub fn with_token(token: AccessToken) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<AccessToken> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, token: &AccessToken) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.clone());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)] // Test code can unwrap

    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert!(store.load().is_none());

        store.save(&AccessToken::new("tok-1"));
        assert_eq!(store.load(), Some(AccessToken::new("tok-1")));

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join(format!("marquee-token-{}", std::process::id()));
        let store = FileTokenStore::new(dir.join("token"));

        assert!(store.load().is_none());

        store.save(&AccessToken::new("tok-2"));
        assert_eq!(store.load(), Some(AccessToken::new("tok-2")));

        store.clear();
        assert!(store.load().is_none());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_file_store_ignores_blank_files() {
        let dir = std::env::temp_dir().join(format!("marquee-blank-{}", std::process::id()));
        let path = dir.join("token");
        let store = FileTokenStore::new(path.clone());

        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "  \n").unwrap();

        assert!(store.load().is_none());

        let _ = std::fs::remove_dir_all(dir);
    }
}
