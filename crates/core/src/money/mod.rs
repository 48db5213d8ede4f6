//! Money values with currency-correct scaling.
//!
//! This module implements:
//! - The immutable `Money` value and its validated construction
//! - Unvalidated `MoneyParts` input
//! - The `MoneyBuilder` for copy-then-modify workflows
//! - Scaling of amounts to a currency's fractional digits

pub mod builder;
pub mod scale;
pub mod value;

#[cfg(test)]
mod props;

pub use builder::MoneyBuilder;
pub use scale::scale_amount;
pub use value::{Money, MoneyParts};
