//! Currency conversion contract.
//!
//! This crate does not source rates or convert amounts itself. Providers
//! implement [`Converter`]; callers program against it.

use fiyat_shared::Currency;
use tracing::debug;

use crate::money::Money;
use crate::temporal::Temporal;

/// FX conversion capability for [`Money`] values.
///
/// Implementations must stamp the result with the [`Rate`](crate::currency::Rate)
/// they applied, and must fail rather than return a fabricated value when no
/// rate exists for the pair and time.
pub trait Converter<T: Temporal> {
    /// Provider-specific failure, e.g. no rate for the pair on that date.
    type Error: std::error::Error;

    /// Converts `money` to `to` using the rate applicable as of `as_of`.
    fn convert_at(
        &self,
        money: &Money<T>,
        to: Currency,
        as_of: &T,
    ) -> Result<Money<T>, Self::Error>;

    /// Converts `money` to `to`.
    ///
    /// The rate time is inherited from `money` when it has one; otherwise the
    /// current time is used.
    fn convert(&self, money: &Money<T>, to: Currency) -> Result<Money<T>, Self::Error> {
        match money.time() {
            Some(as_of) => self.convert_at(money, to, as_of),
            None => {
                let now = T::now();
                debug!(
                    from = %money.currency(),
                    %to,
                    as_of = ?now,
                    "Converting untimed money at current time"
                );
                self.convert_at(money, to, &now)
            }
        }
    }

    /// Returns true if `money` is not already in `to`.
    fn is_conversion_required(&self, money: &Money<T>, to: Currency) -> bool {
        money.currency() != to
    }

    /// Converts only when [`is_conversion_required`](Self::is_conversion_required)
    /// says so; otherwise returns `money` unchanged.
    fn convert_if_required(&self, money: &Money<T>, to: Currency) -> Result<Money<T>, Self::Error> {
        if self.is_conversion_required(money, to) {
            self.convert(money, to)
        } else {
            Ok(money.clone())
        }
    }
}
