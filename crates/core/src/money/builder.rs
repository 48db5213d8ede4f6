//! Staged construction of `Money` values.

use chrono::{DateTime, Utc};
use fiyat_shared::{Currency, CurrencyRegistry, FiyatConfig, Iso4217, Rounding};
use rust_decimal::Decimal;

use super::value::{Money, MoneyParts};
use crate::currency::Rate;
use crate::error::{MoneyError, MoneyResult};
use crate::temporal::Temporal;

/// Builder for [`Money`].
///
/// Mandatory fields are not checked until [`build`](Self::build), which
/// defers to [`Money::from_parts_in`] and reports every absent field. The
/// rounding policy starts at the default (half-up), or at the configured
/// policy when created with [`with_config`](Self::with_config).
#[derive(Debug, Clone)]
pub struct MoneyBuilder<T = DateTime<Utc>> {
    parts: MoneyParts<T>,
}

impl<T> Default for MoneyBuilder<T> {
    fn default() -> Self {
        Self {
            parts: MoneyParts {
                rounding: Some(Rounding::default()),
                ..MoneyParts::default()
            },
        }
    }
}

impl<T: Temporal> MoneyBuilder<T> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder using the configured rounding policy.
    ///
    /// Pair with [`build_in`](Self::build_in) and [`FiyatConfig::registry`]
    /// to apply configured currency overrides as well.
    #[must_use]
    pub fn with_config(config: &FiyatConfig) -> Self {
        Self::new().rounding(config.money.rounding)
    }

    /// Sets the currency.
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.parts.currency = Some(currency);
        self
    }

    /// Parses and sets the currency code.
    ///
    /// # Errors
    ///
    /// Fails immediately if `code` is not a three-letter code.
    pub fn currency_code(self, code: &str) -> MoneyResult<Self> {
        let currency = Currency::new(code)?;
        Ok(self.currency(currency))
    }

    /// Sets the amount, at any scale.
    #[must_use]
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.parts.amount = Some(amount);
        self
    }

    /// Parses and sets the amount from its decimal text.
    ///
    /// # Errors
    ///
    /// Fails immediately with `MoneyError::InvalidArgument` if `amount` is
    /// blank or not a decimal number.
    pub fn amount_str(self, amount: &str) -> MoneyResult<Self> {
        let trimmed = amount.trim();
        if trimmed.is_empty() {
            return Err(MoneyError::InvalidArgument {
                field: "amount",
                reason: "must not be empty".to_string(),
            });
        }
        let parsed = trimmed
            .parse::<Decimal>()
            .map_err(|e| MoneyError::InvalidArgument {
                field: "amount",
                reason: format!("{trimmed:?} is not a decimal number ({e})"),
            })?;
        Ok(self.amount(parsed))
    }

    /// Sets the time the amount applies to.
    #[must_use]
    pub fn time(mut self, time: T) -> Self {
        self.parts.time = Some(time);
        self
    }

    /// Sets the rate the amount was converted with.
    #[must_use]
    pub fn rate(mut self, rate: Rate<T>) -> Self {
        self.parts.rate = Some(rate);
        self
    }

    /// Sets the rounding policy used when scaling the amount.
    #[must_use]
    pub fn rounding(mut self, rounding: Rounding) -> Self {
        self.parts.rounding = Some(rounding);
        self
    }

    /// Builds the value against the ISO 4217 registry.
    ///
    /// The result carries exactly the optional fields that were set.
    pub fn build(self) -> MoneyResult<Money<T>> {
        self.build_in(&Iso4217)
    }

    /// Builds the value against a caller-supplied registry.
    pub fn build_in<R>(self, registry: &R) -> MoneyResult<Money<T>>
    where
        R: CurrencyRegistry + ?Sized,
    {
        Money::from_parts_in(self.parts, registry)
    }
}

impl<T: Temporal> From<&Money<T>> for MoneyBuilder<T> {
    fn from(money: &Money<T>) -> Self {
        Self::new()
            .currency(money.currency())
            .amount(money.amount())
            .with_time(money.time().cloned())
            .with_rate(money.rate().cloned())
    }
}

impl<T> MoneyBuilder<T> {
    fn with_time(mut self, time: Option<T>) -> Self {
        self.parts.time = time;
        self
    }

    fn with_rate(mut self, rate: Option<Rate<T>>) -> Self {
        self.parts.rate = rate;
        self
    }
}
