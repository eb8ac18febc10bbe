//! Core building blocks for the Golf Club Weather Calculator client.
//!
//! Provides configuration, the shared page-state machine, and logging
//! initialization used by the rest of the workspace.

pub mod config;
pub mod error;
pub mod page_state;

pub use config::{Config, ValidationResult};
pub use error::ConfigError;
pub use page_state::PageState;

use anyhow::Result;

/// Initialize logging for the client.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::debug!("GCWC core initialized");
    Ok(())
}
