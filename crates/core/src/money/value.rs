//! The `Money` value type.
//!
//! A `Money` is an amount in a currency, optionally stamped with the time it
//! applies to and the rate it was converted with. `USD 10` today and `USD 10`
//! yesterday are different values: whether they are interchangeable is a
//! decision for the client application, not for this type.

use std::fmt;

use chrono::{DateTime, Utc};
use fiyat_shared::{Currency, CurrencyRegistry, Iso4217, Rounding};
use rust_decimal::Decimal;

use super::builder::MoneyBuilder;
use super::scale::scale_amount;
use crate::currency::Rate;
use crate::error::{MoneyError, MoneyResult};
use crate::temporal::Temporal;

/// Immutable monetary amount with optional temporal and conversion context.
///
/// The amount always carries exactly the currency's fractional digits.
/// Equality and hashing cover all four fields; an absent `time` or `rate`
/// never equals a present one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money<T = DateTime<Utc>> {
    currency: Currency,
    amount: Decimal,
    time: Option<T>,
    rate: Option<Rate<T>>,
}

/// Unvalidated money input where every field may be absent.
///
/// This is what [`Money::from_parts_in`] validates; the named constructors
/// and the builder all go through it.
#[derive(Debug, Clone)]
pub struct MoneyParts<T = DateTime<Utc>> {
    /// Currency of the amount.
    pub currency: Option<Currency>,
    /// Amount at any scale; it is re-scaled on construction.
    pub amount: Option<Decimal>,
    /// Time the amount applies to.
    pub time: Option<T>,
    /// Rate the amount was converted with.
    pub rate: Option<Rate<T>>,
    /// Rounding policy for re-scaling.
    pub rounding: Option<Rounding>,
}

impl<T> Default for MoneyParts<T> {
    fn default() -> Self {
        Self {
            currency: None,
            amount: None,
            time: None,
            rate: None,
            rounding: None,
        }
    }
}

impl<T> MoneyParts<T> {
    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("currency", self.currency.is_none()),
            ("amount", self.amount.is_none()),
            ("rounding", self.rounding.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }
}

impl<T: Temporal> Money<T> {
    /// Creates a money value from possibly-absent parts, scaling the amount
    /// with the digits `registry` reports for the currency.
    ///
    /// # Errors
    ///
    /// - `MoneyError::MissingFields` naming every absent mandatory field
    ///   (currency, amount, rounding).
    /// - `MoneyError::Currency` if the registry cannot scale the currency.
    /// - `MoneyError::RoundingNecessary` / `MoneyError::ScaleOverflow` from
    ///   scaling.
    pub fn from_parts_in<R>(parts: MoneyParts<T>, registry: &R) -> MoneyResult<Self>
    where
        R: CurrencyRegistry + ?Sized,
    {
        let missing = parts.missing_fields();
        let MoneyParts {
            currency: Some(currency),
            amount: Some(amount),
            time,
            rate,
            rounding: Some(rounding),
        } = parts
        else {
            return Err(MoneyError::missing("Money", missing));
        };

        let scale = registry.fraction_digits(currency)?;
        let amount = scale_amount(currency, amount, scale, rounding)?;

        Ok(Self {
            currency,
            amount,
            time,
            rate,
        })
    }

    /// Creates a money value from possibly-absent parts using ISO 4217.
    pub fn from_parts(parts: MoneyParts<T>) -> MoneyResult<Self> {
        Self::from_parts_in(parts, &Iso4217)
    }

    /// Creates a money value, rounding half-up to the currency's digits.
    ///
    /// # Example
    ///
    /// ```
    /// use fiyat_core::Money;
    /// use fiyat_shared::Currency;
    /// use rust_decimal_macros::dec;
    ///
    /// let money: Money = Money::of(Currency::USD, dec!(10.005)).unwrap();
    /// assert_eq!(money.amount().to_string(), "10.01");
    /// ```
    pub fn of(currency: Currency, amount: Decimal) -> MoneyResult<Self> {
        Self::of_rounded(currency, amount, Rounding::default())
    }

    /// Creates a money value with an explicit rounding policy.
    pub fn of_rounded(
        currency: Currency,
        amount: Decimal,
        rounding: Rounding,
    ) -> MoneyResult<Self> {
        Self::from_parts(MoneyParts {
            currency: Some(currency),
            amount: Some(amount),
            rounding: Some(rounding),
            ..MoneyParts::default()
        })
    }

    /// Creates a money value that applies as of `time`.
    pub fn at(currency: Currency, amount: Decimal, time: T) -> MoneyResult<Self> {
        Self::from_parts(MoneyParts {
            currency: Some(currency),
            amount: Some(amount),
            time: Some(time),
            rounding: Some(Rounding::default()),
            ..MoneyParts::default()
        })
    }

    /// Creates a money value that was converted with `rate`.
    pub fn converted(currency: Currency, amount: Decimal, rate: Rate<T>) -> MoneyResult<Self> {
        Self::from_parts(MoneyParts {
            currency: Some(currency),
            amount: Some(amount),
            rate: Some(rate),
            rounding: Some(Rounding::default()),
            ..MoneyParts::default()
        })
    }

    /// Creates a money value that applies as of `time` and was converted with `rate`.
    pub fn converted_at(
        currency: Currency,
        amount: Decimal,
        time: T,
        rate: Rate<T>,
    ) -> MoneyResult<Self> {
        Self::from_parts(MoneyParts {
            currency: Some(currency),
            amount: Some(amount),
            time: Some(time),
            rate: Some(rate),
            rounding: Some(Rounding::default()),
        })
    }

    /// Returns an empty builder.
    #[must_use]
    pub fn builder() -> MoneyBuilder<T> {
        MoneyBuilder::new()
    }

    /// Returns a builder seeded with this value's fields.
    #[must_use]
    pub fn to_builder(&self) -> MoneyBuilder<T> {
        MoneyBuilder::from(self)
    }
}

impl<T> Money<T> {
    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the amount, scaled to the currency's fractional digits.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the time the amount applies to, if any.
    #[must_use]
    pub fn time(&self) -> Option<&T> {
        self.time.as_ref()
    }

    /// Returns the rate the amount was converted with, if any.
    #[must_use]
    pub fn rate(&self) -> Option<&Rate<T>> {
        self.rate.as_ref()
    }

    /// Returns the number of fractional digits of the amount.
    #[must_use]
    pub fn scale(&self) -> u32 {
        self.amount.scale()
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

impl<T> fmt::Display for Money<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}
