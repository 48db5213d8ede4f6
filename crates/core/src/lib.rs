//! Core money types for Fiyat.
//!
//! This crate contains pure value types and contracts with ZERO I/O.
//! Rate sourcing and persistence are left to providers.
//!
//! # Modules
//!
//! - `money` - The `Money` value, its construction rules and builder
//! - `currency` - Exchange rates and the `Converter` contract
//! - `temporal` - Points in time money and rates can be stamped with
//! - `error` - Construction errors

pub mod currency;
pub mod error;
pub mod money;
pub mod temporal;

pub use currency::{Converter, Rate, RateParts};
pub use error::{MoneyError, MoneyResult};
pub use money::{Money, MoneyBuilder, MoneyParts};
pub use temporal::Temporal;
