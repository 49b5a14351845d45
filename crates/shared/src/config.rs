//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::{Currency, MonthBoundary};

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Booking rules.
    #[serde(default)]
    pub booking: BookingConfig,
    /// Revenue report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Seconds to wait when acquiring a connection.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    5
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    8
}

/// Booking rules applied when quoting and searching for rooms.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    /// Currency used when quoting prices.
    #[serde(default = "default_currency")]
    pub currency: Currency,
    /// Multiplier applied to the base price for Saturday and Sunday nights.
    #[serde(default = "default_weekend_surcharge")]
    pub weekend_surcharge: Decimal,
    /// Days added on each side of the requested stay when looking for alternatives.
    #[serde(default = "default_alternative_window_days")]
    pub alternative_window_days: i64,
    /// Maximum number of alternative rooms offered.
    #[serde(default = "default_alternative_limit")]
    pub alternative_limit: u64,
    /// Look-back window for the room popularity score.
    #[serde(default = "default_popularity_window_days")]
    pub popularity_window_days: i64,
}

fn default_currency() -> Currency {
    Currency::Usd
}

fn default_weekend_surcharge() -> Decimal {
    Decimal::new(110, 2)
}

fn default_alternative_window_days() -> i64 {
    30
}

fn default_alternative_limit() -> u64 {
    5
}

fn default_popularity_window_days() -> i64 {
    180
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            weekend_surcharge: default_weekend_surcharge(),
            alternative_window_days: default_alternative_window_days(),
            alternative_limit: default_alternative_limit(),
            popularity_window_days: default_popularity_window_days(),
        }
    }
}

/// Revenue report settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    /// Upper bound rule for December.
    #[serde(default)]
    pub month_boundary: MonthBoundary,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("HOTELRES").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
