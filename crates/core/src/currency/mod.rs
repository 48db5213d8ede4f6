//! Exchange rates and the conversion contract.

pub mod converter;
pub mod rate;

pub use converter::Converter;
pub use rate::{Rate, RateParts};
