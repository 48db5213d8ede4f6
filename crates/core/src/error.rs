//! Money error types for construction and validation.
//!
//! Every failure here is synchronous and local to the construction call:
//! a failed construction yields no value.

use fiyat_shared::{Currency, CurrencyError};
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors that can occur while constructing `Money` or `Rate` values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Invalid Arguments ==========
    /// One or more mandatory fields were absent.
    #[error("Cannot create {target} with missing fields: {}", .fields.join(", "))]
    MissingFields {
        /// The value being constructed (`Money` or `Rate`).
        target: &'static str,
        /// Every absent field, in declaration order.
        fields: Vec<&'static str>,
    },

    /// A field was given a value that cannot be accepted.
    #[error("Invalid {field}: {reason}")]
    InvalidArgument {
        /// The rejected field.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    // ========== Currency Errors ==========
    /// The currency code is malformed or the registry cannot scale it.
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    // ========== Scaling Errors ==========
    /// The amount needs rounding but the policy forbids it.
    #[error("Amount {amount} needs rounding to fit {scale} fractional digits of {currency}")]
    RoundingNecessary {
        /// The currency of the amount.
        currency: Currency,
        /// The amount as supplied.
        amount: Decimal,
        /// The currency's fractional-digit count.
        scale: u32,
    },

    /// The amount has too many integer digits to carry the currency scale.
    #[error("Amount {amount} cannot be represented with {scale} fractional digits")]
    ScaleOverflow {
        /// The amount as supplied.
        amount: Decimal,
        /// The currency's fractional-digit count.
        scale: u32,
    },
}

impl MoneyError {
    /// Creates a missing-fields error for the given target.
    #[must_use]
    pub fn missing(target: &'static str, fields: Vec<&'static str>) -> Self {
        Self::MissingFields { target, fields }
    }

    /// Returns the error code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingFields { .. } => "MISSING_FIELDS",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::Currency(inner) => inner.error_code(),
            Self::RoundingNecessary { .. } => "ROUNDING_NECESSARY",
            Self::ScaleOverflow { .. } => "SCALE_OVERFLOW",
        }
    }

    /// Returns true if the caller passed an absent or malformed argument.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::MissingFields { .. }
                | Self::InvalidArgument { .. }
                | Self::Currency(CurrencyError::InvalidCode(_))
        )
    }
}
