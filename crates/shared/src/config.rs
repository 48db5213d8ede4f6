//! Application configuration management.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::error::CurrencyResult;
use crate::types::{Currency, CurrencyTable, Rounding};

/// Fiyat configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FiyatConfig {
    /// Money construction defaults.
    #[serde(default)]
    pub money: MoneyConfig,
    /// Fractional-digit overrides keyed by currency code, layered on ISO 4217.
    #[serde(default)]
    pub currencies: HashMap<String, u32>,
}

/// Money construction defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoneyConfig {
    /// Rounding policy used when an amount has too many fractional digits.
    #[serde(default)]
    pub rounding: Rounding,
}

impl FiyatConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{FIYAT_RUN_MODE}`,
    /// then `FIYAT__*` environment variables (e.g. `FIYAT__MONEY__ROUNDING=HALF_EVEN`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode =
            std::env::var("FIYAT_RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FIYAT").separator("__"))
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        debug!(
            run_mode = %run_mode,
            rounding = %loaded.money.rounding,
            overrides = loaded.currencies.len(),
            "Fiyat configuration loaded"
        );
        Ok(loaded)
    }

    /// Builds the currency registry: ISO 4217 plus configured overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an override key is not a currency code or asks for
    /// more fractional digits than a decimal can hold.
    pub fn registry(&self) -> CurrencyResult<CurrencyTable> {
        let mut table = CurrencyTable::iso4217();
        for (code, digits) in &self.currencies {
            table.insert(Currency::new(code)?, *digits)?;
        }
        Ok(table)
    }
}
