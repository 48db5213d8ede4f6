//! Currency error types.

use thiserror::Error;

use crate::types::Currency;

/// Result type alias using `CurrencyError`.
pub type CurrencyResult<T> = Result<T, CurrencyError>;

/// Errors raised while parsing currency codes or looking up currency metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// The input is not a three-letter alphabetic code.
    #[error("Invalid currency code: {0:?}")]
    InvalidCode(String),

    /// The registry has no entry for the currency.
    #[error("Unknown currency: {0}")]
    Unknown(Currency),

    /// The currency exists but defines no minor unit (e.g. XAU, XDR).
    #[error("Currency {0} has no minor unit")]
    NoMinorUnit(Currency),

    /// The requested number of fractional digits exceeds the decimal range.
    #[error("Currency {currency} cannot use {digits} fractional digits")]
    UnsupportedScale {
        /// The currency being registered.
        currency: Currency,
        /// The requested number of fractional digits.
        digits: u32,
    },
}

impl CurrencyError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCode(_) => "INVALID_CURRENCY_CODE",
            Self::Unknown(_) => "UNKNOWN_CURRENCY",
            Self::NoMinorUnit(_) => "NO_MINOR_UNIT",
            Self::UnsupportedScale { .. } => "UNSUPPORTED_SCALE",
        }
    }
}
