//! Types shared across the weather resolution chain.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Geographic position supplied by the location stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Validated constructor; rejects out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, LocationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(LocationError::Invalid(format!(
                "latitude {} out of range",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(LocationError::Invalid(format!(
                "longitude {} out of range",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Point-in-time weather reading used as input to distance adjustment.
///
/// Ephemeral: recomputed on each calculations run, never persisted. Wind
/// speed keeps the provider's string form ("8 to 12 mph"); the backend
/// owns the parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub temperature_unit: String,
    pub wind_speed: String,
    pub wind_direction: String,

    /// First relative-humidity sample; `None` when the provider had no data.
    pub humidity: Option<f64>,
}

impl WeatherSnapshot {
    /// Humidity as the backend expects it on the wire: the sample value,
    /// or `"N/A"` when genuinely absent.
    pub fn humidity_field(&self) -> String {
        match self.humidity {
            Some(value) => value.to_string(),
            None => "N/A".to_string(),
        }
    }
}

/// Geolocation failures. Denial or absence is terminal: no retry.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location unavailable")]
    Unavailable,

    #[error("invalid location: {0}")]
    Invalid(String),
}

impl LocationError {
    /// User-friendly message suitable for page state.
    pub fn user_message(&self) -> &'static str {
        match self {
            LocationError::Unavailable => {
                "Unable to retrieve location. Set one in the config or environment."
            }
            LocationError::Invalid(_) => "The configured location is invalid.",
        }
    }
}

/// Weather resolution failures. One per chain run; partial snapshots are
/// never exposed.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{endpoint} request failed with status {status}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("forecast URLs are not available for this location")]
    MissingForecastUrls,

    #[error("forecast contained no periods")]
    MissingData,

    #[error("location error: {0}")]
    Location(#[from] LocationError),
}

impl WeatherError {
    /// User-friendly message suitable for page state.
    pub fn user_message(&self) -> String {
        match self {
            WeatherError::Network(_) => {
                "Weather request failed. Check your connection.".to_string()
            }
            WeatherError::Status { endpoint, status } => {
                format!("{} request failed with status: {}", endpoint, status)
            }
            WeatherError::MissingForecastUrls => {
                "Required forecast URLs are not available for this location.".to_string()
            }
            WeatherError::MissingData => "The forecast had no usable data.".to_string(),
            WeatherError::Location(e) => e.user_message().to_string(),
        }
    }
}
