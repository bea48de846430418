//! Application configuration management.

use serde::Deserialize;

use crate::defaults::MoneyDefaults;
use crate::types::{Currency, RoundingPolicy};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Money defaults configuration.
    #[serde(default)]
    pub money: MoneyConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Money defaults configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MoneyConfig {
    /// Currency used when none is given.
    #[serde(default = "default_currency")]
    pub currency: Currency,
    /// Rounding policy used when none is given.
    #[serde(default = "default_rounding")]
    pub rounding: RoundingPolicy,
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            rounding: default_rounding(),
        }
    }
}

const fn default_currency() -> Currency {
    Currency::Usd
}

const fn default_rounding() -> RoundingPolicy {
    RoundingPolicy::HalfEven
}

impl From<MoneyConfig> for MoneyDefaults {
    fn from(config: MoneyConfig) -> Self {
        Self::new(config.currency, config.rounding)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "monetra=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `MONETRA__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MONETRA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
