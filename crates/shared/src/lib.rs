//! Shared currency types, errors, and configuration for Fiyat.
//!
//! This crate provides common types used across all other crates:
//! - ISO 4217 currency codes
//! - Rounding policies for scaling amounts
//! - Currency registries answering "how many fractional digits?"
//! - Currency error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{FiyatConfig, MoneyConfig};
pub use error::{CurrencyError, CurrencyResult};
pub use types::{Currency, CurrencyRegistry, CurrencyTable, Iso4217, Rounding};
