//! Common types used across the workspace.

pub mod currency;
pub mod registry;
pub mod rounding;

pub use currency::Currency;
pub use registry::{CurrencyRegistry, CurrencyTable, Iso4217, MAX_FRACTION_DIGITS};
pub use rounding::Rounding;
