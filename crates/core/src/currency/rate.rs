//! Exchange rate types.

use std::fmt;

use chrono::{DateTime, Utc};
use fiyat_shared::Currency;
use rust_decimal::Decimal;

use crate::error::{MoneyError, MoneyResult};
use crate::temporal::Temporal;

/// Conversion factor between two currencies at a point in time.
///
/// `1 from = value to`. The value is stored exactly as supplied: it is never
/// scaled to a currency's minor unit, and its sign is the provider's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rate<T = DateTime<Utc>> {
    from: Currency,
    to: Currency,
    value: Decimal,
    time: T,
}

/// Unvalidated rate input where every field may be absent.
#[derive(Debug, Clone)]
pub struct RateParts<T = DateTime<Utc>> {
    /// Currency to convert from.
    pub from: Option<Currency>,
    /// Currency to convert to.
    pub to: Option<Currency>,
    /// Conversion factor.
    pub value: Option<Decimal>,
    /// Time the rate applies to.
    pub time: Option<T>,
}

impl<T> Default for RateParts<T> {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            value: None,
            time: None,
        }
    }
}

impl<T> RateParts<T> {
    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("from", self.from.is_none()),
            ("to", self.to.is_none()),
            ("value", self.value.is_none()),
            ("time", self.time.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }
}

impl<T: Temporal> Rate<T> {
    /// Creates a new exchange rate.
    #[must_use]
    pub fn new(from: Currency, to: Currency, value: Decimal, time: T) -> Self {
        Self {
            from,
            to,
            value,
            time,
        }
    }

    /// Creates a rate from possibly-absent parts.
    ///
    /// All four fields are checked together so the error names every absent
    /// field, not just the first.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::MissingFields` if any part is absent.
    pub fn from_parts(parts: RateParts<T>) -> MoneyResult<Self> {
        let missing = parts.missing_fields();
        match parts {
            RateParts {
                from: Some(from),
                to: Some(to),
                value: Some(value),
                time: Some(time),
            } => Ok(Self::new(from, to, value, time)),
            _ => Err(MoneyError::missing("Rate", missing)),
        }
    }

    /// Returns the currency to convert from.
    #[must_use]
    pub fn from(&self) -> Currency {
        self.from
    }

    /// Returns the currency to convert to.
    #[must_use]
    pub fn to(&self) -> Currency {
        self.to
    }

    /// Returns the conversion factor.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the time the rate applies to.
    #[must_use]
    pub fn time(&self) -> &T {
        &self.time
    }

    /// Returns the inverse rate (`to` -> `from`) at the same time.
    ///
    /// `None` for a zero rate, which has no inverse.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let value = Decimal::ONE.checked_div(self.value)?;
        Some(Self {
            from: self.to,
            to: self.from,
            value,
            time: self.time.clone(),
        })
    }
}

impl<T: fmt::Display> fmt::Display for Rate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {} @ {}", self.from, self.to, self.value, self.time)
    }
}
