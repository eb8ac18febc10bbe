//! Client for the GCWC backend REST API.
//!
//! Covers login, registration, the profile with its embedded club bag,
//! club CRUD, and the adjusted-distance calculation. All operations take
//! an explicit [`gcwc_session::Session`] except login and registration.

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{
    AdjustedClub, CalculationRequest, ClubRequest, CompassDirection, GolfClub, UserProfile,
};
