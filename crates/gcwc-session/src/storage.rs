//! File-backed session persistence (the `token` cookie analog).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::{Session, SessionError};

const TOKEN_FILE: &str = "token.json";

/// On-disk form of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    /// Bearer token issued at login.
    pub token: String,

    /// When the token was stored.
    pub saved_at: DateTime<Utc>,
}

/// Stores the session token under the client config directory, mirroring
/// the cookie it replaces: written at login, read by every authenticated
/// page, cleared at logout.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Store rooted at the given directory (usually `Config::config_dir`).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join("session").join(TOKEN_FILE)
    }

    /// Persist the session after a successful login.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        let path = self.token_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::Storage(e.to_string()))?;
        }

        let stored = StoredSession {
            token: session.token().to_string(),
            saved_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| SessionError::Storage(e.to_string()))?;

        fs::write(&path, json).map_err(|e| SessionError::Storage(e.to_string()))?;

        tracing::info!("Stored session token at {}", path.display());
        Ok(())
    }

    /// Load the saved session. `NotLoggedIn` when no token is stored.
    pub fn load(&self) -> Result<Session, SessionError> {
        let path = self.token_path();

        if !path.exists() {
            return Err(SessionError::NotLoggedIn);
        }

        let json = fs::read_to_string(&path).map_err(|e| SessionError::Storage(e.to_string()))?;
        let stored: StoredSession =
            serde_json::from_str(&json).map_err(|e| SessionError::Storage(e.to_string()))?;

        tracing::debug!("Loaded session saved at {}", stored.saved_at);
        Ok(Session::new(stored.token))
    }

    /// Delete the saved session (logout). A missing file is not an error.
    pub fn clear(&self) -> Result<(), SessionError> {
        let path = self.token_path();

        if path.exists() {
            fs::remove_file(&path).map_err(|e| SessionError::Storage(e.to_string()))?;
            tracing::info!("Cleared session token");
        }

        Ok(())
    }

    /// True if a session token is currently stored.
    pub fn is_logged_in(&self) -> bool {
        self.load().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        store.save(&Session::new("abc123")).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.token(), "abc123");
        assert!(store.is_logged_in());
    }

    #[test]
    fn load_without_save_is_not_logged_in() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        assert!(matches!(store.load(), Err(SessionError::NotLoggedIn)));
        assert!(!store.is_logged_in());
    }

    #[test]
    fn clear_removes_the_token() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        store.save(&Session::new("abc123")).unwrap();
        store.clear().unwrap();

        assert!(matches!(store.load(), Err(SessionError::NotLoggedIn)));
    }

    #[test]
    fn clear_when_nothing_stored_is_ok() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        assert!(store.clear().is_ok());
    }

    #[test]
    fn save_overwrites_previous_token() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        store.save(&Session::new("first")).unwrap();
        store.save(&Session::new("second")).unwrap();

        assert_eq!(store.load().unwrap().token(), "second");
    }
}
