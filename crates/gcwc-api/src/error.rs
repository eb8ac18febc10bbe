//! Backend API error taxonomy.

use thiserror::Error;

/// Errors from the GCWC backend client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Missing or rejected bearer token. The caller should route to login.
    #[error("authentication required")]
    Unauthorized,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("registration failed")]
    Registration,

    /// The "no golf clubs configured" signal (404 plus marker body).
    /// Not a failure: pages map this to the empty-bag state.
    #[error("no golf clubs configured")]
    NoClubs,

    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Whether this is the empty-bag signal rather than a true error.
    pub fn is_empty_bag(&self) -> bool {
        matches!(self, ApiError::NoClubs)
    }

    /// User-friendly message suitable for page state.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Request failed. Check your connection.".to_string(),
            ApiError::Unauthorized => {
                "Your session has expired. Please log in again.".to_string()
            }
            ApiError::InvalidCredentials => "Invalid username or password.".to_string(),
            ApiError::Registration => "Registration failed. Please try again.".to_string(),
            ApiError::NoClubs => "No golf clubs in your bag.".to_string(),
            ApiError::Status { status, .. } => {
                format!("Request failed with status: {}", status)
            }
            ApiError::Url(_) => "Invalid backend URL.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_clubs_is_the_empty_bag_signal() {
        assert!(ApiError::NoClubs.is_empty_bag());
        assert!(!ApiError::Unauthorized.is_empty_bag());
    }

    #[test]
    fn unauthorized_prompts_relogin() {
        assert!(ApiError::Unauthorized.user_message().contains("log in"));
    }

    #[test]
    fn status_message_names_the_code() {
        let err = ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(err.user_message().contains("500"));
    }
}
