//! Weather resolution chain against the National Weather Service API.
//!
//! Three dependent requests: a points lookup resolving coordinates into
//! forecast and grid-data URLs, the forecast itself (temperature and
//! wind), and the grid data (humidity). Any failure aborts the chain and
//! surfaces a single error; partial snapshots are never returned.

use reqwest::{header, Client};
use serde::Deserialize;
use std::time::Duration;

use crate::types::{Coordinates, WeatherError, WeatherSnapshot};

const DEFAULT_BASE_URL: &str = "https://api.weather.gov";
const FIELD_FALLBACK: &str = "N/A";

#[derive(Debug, Deserialize)]
struct PointsResponse {
    properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
struct PointsProperties {
    forecast: Option<String>,
    #[serde(rename = "forecastGridData")]
    forecast_grid_data: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    #[serde(default)]
    periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
struct ForecastPeriod {
    temperature: f64,
    #[serde(rename = "temperatureUnit")]
    temperature_unit: Option<String>,
    #[serde(rename = "windSpeed")]
    wind_speed: Option<String>,
    #[serde(rename = "windDirection")]
    wind_direction: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GridResponse {
    properties: GridProperties,
}

#[derive(Debug, Deserialize)]
struct GridProperties {
    #[serde(rename = "relativeHumidity")]
    relative_humidity: Option<HumiditySeries>,
}

#[derive(Debug, Deserialize)]
struct HumiditySeries {
    #[serde(default)]
    values: Vec<HumiditySample>,
}

#[derive(Debug, Deserialize)]
struct HumiditySample {
    value: Option<f64>,
}

/// Client for the weather provider.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    base_url: String,
}

impl WeatherProvider {
    /// Provider against the public API. The provider requires an
    /// identifying User-Agent on every request.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, WeatherError> {
        Self::with_base_url(DEFAULT_BASE_URL, user_agent, timeout)
    }

    /// Provider against an explicit base URL (mock servers in tests).
    pub fn with_base_url(
        base_url: &str,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve coordinates into a full weather snapshot.
    pub async fn fetch(&self, coords: Coordinates) -> Result<WeatherSnapshot, WeatherError> {
        let points = self.fetch_points(coords).await?;

        // Fail immediately rather than attempt a degraded fetch.
        let (forecast_url, grid_url) = match (points.forecast, points.forecast_grid_data) {
            (Some(forecast), Some(grid)) => (forecast, grid),
            _ => return Err(WeatherError::MissingForecastUrls),
        };

        let period = self.fetch_forecast(&forecast_url).await?;
        let humidity = self.fetch_humidity(&grid_url).await?;

        let snapshot = WeatherSnapshot {
            temperature: period.temperature,
            temperature_unit: period
                .temperature_unit
                .unwrap_or_else(|| FIELD_FALLBACK.to_string()),
            wind_speed: period
                .wind_speed
                .unwrap_or_else(|| FIELD_FALLBACK.to_string()),
            wind_direction: period
                .wind_direction
                .unwrap_or_else(|| FIELD_FALLBACK.to_string()),
            humidity,
        };

        tracing::info!(
            "Weather snapshot: {} {}, wind {} {}, humidity {}",
            snapshot.temperature,
            snapshot.temperature_unit,
            snapshot.wind_speed,
            snapshot.wind_direction,
            snapshot.humidity_field()
        );
        Ok(snapshot)
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header(header::ACCEPT, "application/json")
    }

    async fn fetch_points(&self, coords: Coordinates) -> Result<PointsProperties, WeatherError> {
        let url = format!(
            "{}/points/{},{}",
            self.base_url, coords.latitude, coords.longitude
        );
        tracing::debug!("Resolving location metadata from {}", url);

        let response = self.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(WeatherError::Status {
                endpoint: "Points API",
                status: response.status().as_u16(),
            });
        }

        let body: PointsResponse = response.json().await?;
        Ok(body.properties)
    }

    async fn fetch_forecast(&self, url: &str) -> Result<ForecastPeriod, WeatherError> {
        tracing::debug!("Fetching forecast from {}", url);

        let response = self.get(url).send().await?;
        if !response.status().is_success() {
            return Err(WeatherError::Status {
                endpoint: "Forecast API",
                status: response.status().as_u16(),
            });
        }

        let body: ForecastResponse = response.json().await?;
        body.properties
            .periods
            .into_iter()
            .next()
            .ok_or(WeatherError::MissingData)
    }

    async fn fetch_humidity(&self, url: &str) -> Result<Option<f64>, WeatherError> {
        tracing::debug!("Fetching grid data from {}", url);

        let response = self.get(url).send().await?;
        if !response.status().is_success() {
            return Err(WeatherError::Status {
                endpoint: "Grid Data API",
                status: response.status().as_u16(),
            });
        }

        let body: GridResponse = response.json().await?;
        Ok(body
            .properties
            .relative_humidity
            .and_then(|series| series.values.into_iter().next())
            .and_then(|sample| sample.value))
    }
}
