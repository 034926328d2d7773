//! Application configuration.
//!
//! Layered, later sources overriding earlier ones:
//!
//! 1. `config/default.toml` (optional)
//! 2. `config/local.toml` (optional, not checked in)
//! 3. environment variables prefixed `ITINERARY`, sections separated by
//!    `__`, e.g. `ITINERARY__PRICING__WAITING_TIME_BETWEEN_FLIGHTS=360`
//!
//! Every key has a default, so the server starts with no configuration at
//! all.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::pricing::{InvalidConfiguration, PricingConfig};

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or did not match the expected shape
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value was read but is out of range
    #[error(transparent)]
    Invalid(#[from] InvalidConfiguration),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub inventory: InventoryConfig,
    pub pricing: PricingSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3000,
        }
    }
}

/// Locations of the inventory files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub flights_path: PathBuf,
    pub prices_path: PathBuf,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            flights_path: "data/flights.csv".into(),
            prices_path: "data/prices.csv".into(),
        }
    }
}

/// Raw pricing settings, validated into [`PricingConfig`].
///
/// Signed so that a negative value is reported as out of range rather than
/// as a type mismatch.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PricingSettings {
    pub minimum_available_seats: i64,
    pub minimum_days_for_round_trip: i64,
    pub waiting_time_between_flights: i64,
}

impl Default for PricingSettings {
    fn default() -> Self {
        let defaults = PricingConfig::default();
        Self {
            minimum_available_seats: defaults.minimum_available_seats().into(),
            minimum_days_for_round_trip: defaults.minimum_days_for_round_trip().into(),
            waiting_time_between_flights: defaults.waiting_time_between_flights().into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `config/` in the working directory and the
    /// environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Load configuration from `default` and `local` files in `dir` and the
    /// environment.
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(dir.join("default")).required(false))
            .add_source(File::from(dir.join("local")).required(false))
            .add_source(
                Environment::with_prefix("ITINERARY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Parse configuration from a TOML document, without other sources.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate the pricing section.
    pub fn pricing_config(&self) -> Result<PricingConfig, ConfigError> {
        let p = &self.pricing;
        Ok(PricingConfig::new(
            p.minimum_available_seats,
            p.minimum_days_for_round_trip,
            p.waiting_time_between_flights,
        )?)
    }

    /// Listener address as `host:port`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
