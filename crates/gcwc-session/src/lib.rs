//! Session handling for the GCWC client.
//!
//! The browser original kept the bearer token in an HTTP-only cookie named
//! `token`. Here the same role is played by an explicit [`Session`] passed
//! into every authenticated call, persisted across runs by
//! [`SessionStore`]: written at login, read at startup, cleared at logout.

mod storage;

pub use storage::{SessionStore, StoredSession};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Explicit session context for authenticated backend calls.
///
/// Created from a successful login (or loaded from the store) and handed
/// to the API client rather than looked up ambiently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Session persistence errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No token stored; the caller should route to the login page.
    #[error("not logged in")]
    NotLoggedIn,

    #[error("session storage error: {0}")]
    Storage(String),
}

impl SessionError {
    /// User-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            SessionError::NotLoggedIn => "Please log in again.",
            SessionError::Storage(_) => {
                "Failed to access the saved session. Please log in again."
            }
        }
    }
}
