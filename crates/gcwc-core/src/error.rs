//! Configuration error type shared across the workspace.
//!
//! Network, weather, session, and API failures carry their own error enums
//! in the crates that produce them; each exposes a `user_message()` so
//! pages can surface a single human-readable string.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to write configuration: {0}")]
    WriteFailed(String),
}

impl ConfigError {
    /// User-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "Configuration not found. Using defaults.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::WriteFailed(_) => "Failed to save configuration. Check permissions.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_are_nonempty() {
        let errors = [
            ConfigError::NotFound("x".into()),
            ConfigError::ParseError("x".into()),
            ConfigError::Invalid("x".into()),
            ConfigError::WriteFailed("x".into()),
        ];
        for e in errors {
            assert!(!e.user_message().is_empty());
        }
    }
}
