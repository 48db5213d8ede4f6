//! Currency metadata lookup.
//!
//! Every `Money` construction asks a [`CurrencyRegistry`] how many fractional
//! digits the currency uses. [`Iso4217`] answers from the published ISO 4217
//! minor-unit table; [`CurrencyTable`] is an owned, extensible copy of it.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::{CurrencyError, CurrencyResult};
use crate::types::Currency;

/// Largest scale a `rust_decimal::Decimal` can carry.
pub const MAX_FRACTION_DIGITS: u32 = 28;

/// Source of fractional-digit counts per currency.
pub trait CurrencyRegistry {
    /// Returns the number of fractional digits the currency uses.
    fn fraction_digits(&self, currency: Currency) -> CurrencyResult<u32>;

    /// Returns true if the registry can scale amounts in this currency.
    fn contains(&self, currency: Currency) -> bool {
        self.fraction_digits(currency).is_ok()
    }
}

impl<R: CurrencyRegistry + ?Sized> CurrencyRegistry for &R {
    fn fraction_digits(&self, currency: Currency) -> CurrencyResult<u32> {
        (**self).fraction_digits(currency)
    }
}

impl<R: CurrencyRegistry + ?Sized> CurrencyRegistry for Arc<R> {
    fn fraction_digits(&self, currency: Currency) -> CurrencyResult<u32> {
        (**self).fraction_digits(currency)
    }
}

/// ISO 4217 active codes with their minor units. `None` marks codes that
/// define no minor unit (precious metals, funds, testing codes).
static ISO_4217_TABLE: &[(&str, Option<u32>)] = &[
    ("AED", Some(2)), ("AFN", Some(2)), ("ALL", Some(2)), ("AMD", Some(2)),
    ("AOA", Some(2)), ("ARS", Some(2)), ("AUD", Some(2)), ("AWG", Some(2)),
    ("AZN", Some(2)), ("BAM", Some(2)), ("BBD", Some(2)), ("BDT", Some(2)),
    ("BGN", Some(2)), ("BHD", Some(3)), ("BIF", Some(0)), ("BMD", Some(2)),
    ("BND", Some(2)), ("BOB", Some(2)), ("BOV", Some(2)), ("BRL", Some(2)),
    ("BSD", Some(2)), ("BTN", Some(2)), ("BWP", Some(2)), ("BYN", Some(2)),
    ("BZD", Some(2)), ("CAD", Some(2)), ("CDF", Some(2)), ("CHE", Some(2)),
    ("CHF", Some(2)), ("CHW", Some(2)), ("CLF", Some(4)), ("CLP", Some(0)),
    ("CNY", Some(2)), ("COP", Some(2)), ("COU", Some(2)), ("CRC", Some(2)),
    ("CUP", Some(2)), ("CVE", Some(2)), ("CZK", Some(2)), ("DJF", Some(0)),
    ("DKK", Some(2)), ("DOP", Some(2)), ("DZD", Some(2)), ("EGP", Some(2)),
    ("ERN", Some(2)), ("ETB", Some(2)), ("EUR", Some(2)), ("FJD", Some(2)),
    ("FKP", Some(2)), ("GBP", Some(2)), ("GEL", Some(2)), ("GHS", Some(2)),
    ("GIP", Some(2)), ("GMD", Some(2)), ("GNF", Some(0)), ("GTQ", Some(2)),
    ("GYD", Some(2)), ("HKD", Some(2)), ("HNL", Some(2)), ("HTG", Some(2)),
    ("HUF", Some(2)), ("IDR", Some(2)), ("ILS", Some(2)), ("INR", Some(2)),
    ("IQD", Some(3)), ("IRR", Some(2)), ("ISK", Some(0)), ("JMD", Some(2)),
    ("JOD", Some(3)), ("JPY", Some(0)), ("KES", Some(2)), ("KGS", Some(2)),
    ("KHR", Some(2)), ("KMF", Some(0)), ("KPW", Some(2)), ("KRW", Some(0)),
    ("KWD", Some(3)), ("KYD", Some(2)), ("KZT", Some(2)), ("LAK", Some(2)),
    ("LBP", Some(2)), ("LKR", Some(2)), ("LRD", Some(2)), ("LSL", Some(2)),
    ("LYD", Some(3)), ("MAD", Some(2)), ("MDL", Some(2)), ("MGA", Some(2)),
    ("MKD", Some(2)), ("MMK", Some(2)), ("MNT", Some(2)), ("MOP", Some(2)),
    ("MRU", Some(2)), ("MUR", Some(2)), ("MVR", Some(2)), ("MWK", Some(2)),
    ("MXN", Some(2)), ("MXV", Some(2)), ("MYR", Some(2)), ("MZN", Some(2)),
    ("NAD", Some(2)), ("NGN", Some(2)), ("NIO", Some(2)), ("NOK", Some(2)),
    ("NPR", Some(2)), ("NZD", Some(2)), ("OMR", Some(3)), ("PAB", Some(2)),
    ("PEN", Some(2)), ("PGK", Some(2)), ("PHP", Some(2)), ("PKR", Some(2)),
    ("PLN", Some(2)), ("PYG", Some(0)), ("QAR", Some(2)), ("RON", Some(2)),
    ("RSD", Some(2)), ("RUB", Some(2)), ("RWF", Some(0)), ("SAR", Some(2)),
    ("SBD", Some(2)), ("SCR", Some(2)), ("SDG", Some(2)), ("SEK", Some(2)),
    ("SGD", Some(2)), ("SHP", Some(2)), ("SLE", Some(2)), ("SOS", Some(2)),
    ("SRD", Some(2)), ("SSP", Some(2)), ("STN", Some(2)), ("SVC", Some(2)),
    ("SYP", Some(2)), ("SZL", Some(2)), ("THB", Some(2)), ("TJS", Some(2)),
    ("TMT", Some(2)), ("TND", Some(3)), ("TOP", Some(2)), ("TRY", Some(2)),
    ("TTD", Some(2)), ("TWD", Some(2)), ("TZS", Some(2)), ("UAH", Some(2)),
    ("UGX", Some(0)), ("USD", Some(2)), ("USN", Some(2)), ("UYI", Some(0)),
    ("UYU", Some(2)), ("UYW", Some(4)), ("UZS", Some(2)), ("VED", Some(2)),
    ("VES", Some(2)), ("VND", Some(0)), ("VUV", Some(0)), ("WST", Some(2)),
    ("XAF", Some(0)), ("XAG", None), ("XAU", None), ("XBA", None),
    ("XBB", None), ("XBC", None), ("XBD", None), ("XCD", Some(2)),
    ("XCG", Some(2)), ("XDR", None), ("XOF", Some(0)), ("XPD", None),
    ("XPF", Some(0)), ("XPT", None), ("XSU", None), ("XTS", None),
    ("XUA", None), ("XXX", None), ("YER", Some(2)), ("ZAR", Some(2)),
    ("ZMW", Some(2)), ("ZWG", Some(2)),
];

static ISO_4217: Lazy<HashMap<Currency, Option<u32>>> = Lazy::new(|| {
    ISO_4217_TABLE
        .iter()
        .filter_map(|(code, digits)| Currency::new(code).ok().map(|c| (c, *digits)))
        .collect()
});

fn lookup(table: &HashMap<Currency, Option<u32>>, currency: Currency) -> CurrencyResult<u32> {
    match table.get(&currency) {
        Some(Some(digits)) => Ok(*digits),
        Some(None) => Err(CurrencyError::NoMinorUnit(currency)),
        None => Err(CurrencyError::Unknown(currency)),
    }
}

/// Registry backed by the static ISO 4217 minor-unit table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iso4217;

impl CurrencyRegistry for Iso4217 {
    fn fraction_digits(&self, currency: Currency) -> CurrencyResult<u32> {
        lookup(&ISO_4217, currency)
    }
}

/// Owned registry that can extend or override ISO 4217.
///
/// Useful for currencies ISO does not cover (e.g. `BTC` with 8 digits) or for
/// ledgers that keep extra precision for a given code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyTable {
    digits: HashMap<Currency, Option<u32>>,
}

impl CurrencyTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table seeded with every ISO 4217 entry.
    #[must_use]
    pub fn iso4217() -> Self {
        Self {
            digits: ISO_4217.clone(),
        }
    }

    /// Registers or overrides the fractional digits for a currency.
    pub fn with(mut self, currency: Currency, digits: u32) -> CurrencyResult<Self> {
        self.insert(currency, digits)?;
        Ok(self)
    }

    /// Registers or overrides the fractional digits for a currency in place.
    pub fn insert(&mut self, currency: Currency, digits: u32) -> CurrencyResult<()> {
        if digits > MAX_FRACTION_DIGITS {
            return Err(CurrencyError::UnsupportedScale { currency, digits });
        }
        self.digits.insert(currency, Some(digits));
        Ok(())
    }

    /// Returns the number of currencies in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl CurrencyRegistry for CurrencyTable {
    fn fraction_digits(&self, currency: Currency) -> CurrencyResult<u32> {
        lookup(&self.digits, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Currency::USD, 2)]
    #[case(Currency::EUR, 2)]
    #[case(Currency::AED, 2)]
    #[case(Currency::TRY, 2)]
    #[case(Currency::JPY, 0)]
    #[case(Currency::KRW, 0)]
    #[case(Currency::KWD, 3)]
    #[case(Currency::BHD, 3)]
    #[case(Currency::CLF, 4)]
    fn test_iso_fraction_digits(#[case] currency: Currency, #[case] expected: u32) {
        assert_eq!(Iso4217.fraction_digits(currency).unwrap(), expected);
    }

    #[test]
    fn test_iso_no_minor_unit() {
        assert_eq!(
            Iso4217.fraction_digits(Currency::XAU),
            Err(CurrencyError::NoMinorUnit(Currency::XAU))
        );
        assert_eq!(
            Iso4217.fraction_digits(Currency::XXX),
            Err(CurrencyError::NoMinorUnit(Currency::XXX))
        );
        assert!(!Iso4217.contains(Currency::XAU));
    }

    #[test]
    fn test_iso_unknown_currency() {
        let btc = Currency::new("BTC").unwrap();
        assert_eq!(
            Iso4217.fraction_digits(btc),
            Err(CurrencyError::Unknown(btc))
        );
        assert!(!Iso4217.contains(btc));
        assert!(Iso4217.contains(Currency::USD));
    }

    #[test]
    fn test_table_starts_from_iso() {
        let table = CurrencyTable::iso4217();
        assert_eq!(table.len(), ISO_4217_TABLE.len());
        assert_eq!(table.fraction_digits(Currency::JPY).unwrap(), 0);
        assert_eq!(
            table.fraction_digits(Currency::XAU),
            Err(CurrencyError::NoMinorUnit(Currency::XAU))
        );
    }

    #[test]
    fn test_table_overrides_and_extends() {
        let btc = Currency::new("BTC").unwrap();
        let table = CurrencyTable::iso4217()
            .with(btc, 8)
            .unwrap()
            .with(Currency::JPY, 2)
            .unwrap()
            .with(Currency::XAU, 4)
            .unwrap();

        assert_eq!(table.fraction_digits(btc).unwrap(), 8);
        assert_eq!(table.fraction_digits(Currency::JPY).unwrap(), 2);
        assert_eq!(table.fraction_digits(Currency::XAU).unwrap(), 4);
        assert_eq!(table.fraction_digits(Currency::USD).unwrap(), 2);
    }

    #[test]
    fn test_table_rejects_scale_beyond_decimal_range() {
        let result = CurrencyTable::new().with(Currency::USD, 29);
        assert_eq!(
            result.unwrap_err(),
            CurrencyError::UnsupportedScale {
                currency: Currency::USD,
                digits: 29,
            }
        );
        assert!(CurrencyTable::new().with(Currency::USD, 28).is_ok());
    }

    #[test]
    fn test_empty_table_knows_nothing() {
        let table = CurrencyTable::new();
        assert!(table.is_empty());
        assert_eq!(
            table.fraction_digits(Currency::USD),
            Err(CurrencyError::Unknown(Currency::USD))
        );
    }

    #[test]
    fn test_registry_through_references() {
        let shared: Arc<CurrencyTable> = Arc::new(CurrencyTable::iso4217());
        assert_eq!(shared.fraction_digits(Currency::KWD).unwrap(), 3);

        let borrowed: &dyn CurrencyRegistry = &Iso4217;
        assert_eq!(borrowed.fraction_digits(Currency::USD).unwrap(), 2);
    }
}
