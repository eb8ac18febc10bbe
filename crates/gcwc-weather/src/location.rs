//! Geolocation resolution.
//!
//! The browser original asked `navigator.geolocation`; a denied or absent
//! position was a terminal error with no retry. Here the position comes
//! from an explicit override (config or CLI flags) or the environment,
//! with the same terminal semantics.

use crate::types::{Coordinates, LocationError};

/// Environment variable holding the latitude fallback.
pub const LATITUDE_ENV: &str = "GCWC_LATITUDE";
/// Environment variable holding the longitude fallback.
pub const LONGITUDE_ENV: &str = "GCWC_LONGITUDE";

/// Resolve the user position. An explicit override wins; the environment
/// is the fallback; neither means the location stage fails terminally.
pub fn resolve(override_coords: Option<Coordinates>) -> Result<Coordinates, LocationError> {
    if let Some(coords) = override_coords {
        tracing::debug!(
            "Using explicit location {}, {}",
            coords.latitude,
            coords.longitude
        );
        return Ok(coords);
    }

    let latitude = read_env(LATITUDE_ENV)?;
    let longitude = read_env(LONGITUDE_ENV)?;

    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => {
            let coords = Coordinates::new(latitude, longitude)?;
            tracing::debug!(
                "Using environment location {}, {}",
                coords.latitude,
                coords.longitude
            );
            Ok(coords)
        }
        _ => Err(LocationError::Unavailable),
    }
}

fn read_env(name: &str) -> Result<Option<f64>, LocationError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| LocationError::Invalid(format!("{} is not a number", name))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let coords = Coordinates::new(35.5, -80.2).unwrap();
        let resolved = resolve(Some(coords)).unwrap();
        assert_eq!(resolved, coords);
    }

    #[test]
    fn override_is_used_even_with_no_environment() {
        let coords = Coordinates::new(0.0, 0.0).unwrap();
        assert!(resolve(Some(coords)).is_ok());
    }
}
