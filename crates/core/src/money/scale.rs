//! Scaling amounts to a currency's canonical number of fractional digits.
//!
//! CRITICAL: the scaled amount always carries exactly `scale` fractional
//! digits. `10.0` and `10.000` both become `10.00` for a two-digit currency,
//! which is what makes value equality between `Money` instances hold.

use fiyat_shared::{Currency, Rounding};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::trace;

use crate::error::{MoneyError, MoneyResult};

/// Rounds `amount` with `rounding` and pads it to exactly `scale` digits.
pub fn scale_amount(
    currency: Currency,
    amount: Decimal,
    scale: u32,
    rounding: Rounding,
) -> MoneyResult<Decimal> {
    let mut scaled = match rounding.strategy() {
        Some(strategy) => amount.round_dp_with_strategy(scale, strategy),
        None => {
            let truncated = amount.round_dp_with_strategy(scale, RoundingStrategy::ToZero);
            if truncated != amount {
                return Err(MoneyError::RoundingNecessary {
                    currency,
                    amount,
                    scale,
                });
            }
            truncated
        }
    };

    // Widening only; rescale stops short when the integer part is too large.
    scaled.rescale(scale);
    if scaled.scale() != scale {
        return Err(MoneyError::ScaleOverflow { amount, scale });
    }

    if scaled != amount {
        trace!(
            %currency,
            original = %amount,
            scaled = %scaled,
            %rounding,
            "Amount rounded to currency scale"
        );
    }

    Ok(scaled)
}
