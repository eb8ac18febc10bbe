//! Weather resolution for the GCWC client.
//!
//! Resolves the user's position into a point-in-time weather snapshot via
//! the National Weather Service API: a points lookup yields forecast and
//! grid-data URLs, the forecast yields temperature and wind, the grid
//! data yields humidity.

pub mod location;
pub mod provider;
pub mod types;

pub use provider::WeatherProvider;
pub use types::{Coordinates, LocationError, WeatherError, WeatherSnapshot};
