//! Client configuration: backend location, weather provider identity,
//! request timeouts, and an optional fixed position.
//!
//! The config lives as TOML under the user config directory and is
//! created with defaults on first run. A handful of environment
//! variables override the file for containerized runs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

use crate::error::ConfigError;

/// Environment override for the backend base URL.
pub const API_URL_ENV: &str = "GCWC_API_URL";
/// Environment override for the weather provider base URL.
pub const WEATHER_URL_ENV: &str = "GCWC_WEATHER_URL";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory the config file (and the session file) live in.
    #[serde(skip)]
    pub config_dir: PathBuf,

    /// Backend API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Weather provider settings.
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Fixed position; takes precedence over environment lookup.
    #[serde(default)]
    pub location: LocationConfig,
}

/// Backend API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the GCWC backend.
    pub base_url: String,

    /// Request timeout in seconds. Expiry is treated as a network error.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Weather provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL of the weather provider.
    pub base_url: String,

    /// Identifying User-Agent the provider requires on every request.
    pub user_agent: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.weather.gov".to_string(),
            user_agent: "gcwc/0.1.0 (golf-club-weather-calculator)".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Fixed position, for users who prefer not to rely on the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Config {
    /// The default config directory for this client.
    pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|d| d.join("gcwc"))
            .ok_or_else(|| ConfigError::NotFound("no user config directory".to_string()))
    }

    fn default_in(config_dir: PathBuf) -> Self {
        Self {
            config_dir,
            api: ApiConfig::default(),
            weather: WeatherConfig::default(),
            location: LocationConfig::default(),
        }
    }

    /// Load configuration from the default location, creating the file
    /// with defaults on first run.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::default_config_dir()?)
    }

    /// Load configuration rooted at an explicit directory.
    pub fn load_from(config_dir: PathBuf) -> Result<Self, ConfigError> {
        let path = config_dir.join("config.toml");

        if !path.exists() {
            let mut config = Self::default_in(config_dir);
            config.save()?;
            config.apply_env_overrides();
            return Ok(config);
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::NotFound(format!("{}: {}", path.display(), e)))?;

        let mut config: Config =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.config_dir = config_dir;
        config.apply_env_overrides();

        Ok(config)
    }

    /// Load configuration and validate it.
    ///
    /// Returns the config along with any validation warnings. Fails if
    /// validation produced errors.
    pub fn load_validated() -> Result<(Self, ValidationResult), ConfigError> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()));
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Write the configuration back to its file.
    pub fn save(&self) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&self.config_dir)
            .map_err(|e| ConfigError::WriteFailed(e.to_string()))?;

        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::WriteFailed(e.to_string()))?;

        let path = self.config_dir.join("config.toml");
        std::fs::write(&path, contents).map_err(|e| ConfigError::WriteFailed(e.to_string()))?;

        tracing::debug!("Saved configuration to {}", path.display());
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            tracing::debug!("Overriding api.base_url from {}", API_URL_ENV);
            self.api.base_url = url;
        }
        if let Ok(url) = std::env::var(WEATHER_URL_ENV) {
            tracing::debug!("Overriding weather.base_url from {}", WEATHER_URL_ENV);
            self.weather.base_url = url;
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.api.base_url, "api.base_url", &mut result);
        self.validate_url(&self.weather.base_url, "weather.base_url", &mut result);

        if self.weather.user_agent.trim().is_empty() {
            result.add_error(
                "weather.user_agent",
                "The weather provider requires an identifying User-Agent",
            );
        }

        if self.api.timeout_secs == 0 {
            result.add_error("api.timeout_secs", "Timeout must be greater than 0");
        }
        if self.weather.timeout_secs == 0 {
            result.add_error("weather.timeout_secs", "Timeout must be greater than 0");
        }

        match (self.location.latitude, self.location.longitude) {
            (Some(lat), _) if !(-90.0..=90.0).contains(&lat) => {
                result.add_error("location.latitude", "Latitude must be within [-90, 90]");
            }
            (_, Some(lon)) if !(-180.0..=180.0).contains(&lon) => {
                result.add_error("location.longitude", "Longitude must be within [-180, 180]");
            }
            (Some(_), None) | (None, Some(_)) => {
                result.add_warning(
                    "location",
                    "Both latitude and longitude are needed; the partial value is ignored",
                );
            }
            _ => {}
        }

        result
    }

    fn validate_url(&self, value: &str, field: &str, result: &mut ValidationResult) {
        if value.trim().is_empty() {
            result.add_error(field, "URL must not be empty");
            return;
        }
        if Url::parse(value).is_err() {
            result.add_error(field, format!("'{}' is not a valid URL", value));
        }
    }

    /// Path of the config file inside `config_dir`.
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }
}
