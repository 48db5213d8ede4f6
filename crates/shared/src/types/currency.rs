//! ISO 4217 currency codes.
//!
//! A `Currency` is only a validated three-letter code. How many fractional
//! digits it uses is a registry concern, see [`crate::types::registry`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CurrencyError, CurrencyResult};

/// Three-letter currency code, always stored upper-case.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency([u8; 3]);

/// Declares well-known currency constants.
macro_rules! currencies {
    ($($name:ident => $doc:expr),* $(,)?) => {
        impl Currency {
            $(
                #[doc = $doc]
                pub const $name: Self = Self::from_ascii(stringify!($name).as_bytes());
            )*
        }
    };
}

currencies! {
    AED => "UAE Dirham",
    AUD => "Australian Dollar",
    BHD => "Bahraini Dinar",
    CAD => "Canadian Dollar",
    CHF => "Swiss Franc",
    CLF => "Unidad de Fomento",
    CNY => "Yuan Renminbi",
    EUR => "Euro",
    GBP => "Pound Sterling",
    IDR => "Indonesian Rupiah",
    JPY => "Japanese Yen",
    KRW => "Korean Won",
    KWD => "Kuwaiti Dinar",
    SGD => "Singapore Dollar",
    TRY => "Turkish Lira",
    USD => "US Dollar",
    XAU => "Gold (one troy ounce)",
    XXX => "No currency",
}

impl Currency {
    /// Builds a constant from a known-good upper-case code.
    const fn from_ascii(code: &[u8]) -> Self {
        Self([code[0], code[1], code[2]])
    }

    /// Parses a currency code, accepting any case and surrounding whitespace.
    pub fn new(code: &str) -> CurrencyResult<Self> {
        let trimmed = code.trim();
        match trimmed.as_bytes() {
            [a, b, c] if trimmed.bytes().all(|byte| byte.is_ascii_alphabetic()) => Ok(Self([
                a.to_ascii_uppercase(),
                b.to_ascii_uppercase(),
                c.to_ascii_uppercase(),
            ])),
            _ => Err(CurrencyError::InvalidCode(code.to_string())),
        }
    }

    /// Returns the upper-case code, e.g. `"USD"`.
    #[must_use]
    pub fn code(&self) -> &str {
        // Only ever constructed from ASCII letters.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({})", self.code())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = CurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}

#[cfg(test)]
#[path = "currency_tests.rs"]
mod tests;
