//! Rounding policies used when scaling amounts to a currency's minor unit.

use std::fmt;
use std::str::FromStr;

use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

/// Rounding policy applied when an amount has more fractional digits than its
/// currency allows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rounding {
    /// Away from zero.
    Up,
    /// Towards zero (truncation).
    Down,
    /// Towards positive infinity.
    Ceiling,
    /// Towards negative infinity.
    Floor,
    /// Nearest neighbour, ties away from zero: 10.005 -> 10.01.
    #[default]
    HalfUp,
    /// Nearest neighbour, ties towards zero: 10.005 -> 10.00.
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour (banker's rounding).
    HalfEven,
    /// No rounding allowed; the amount must already fit the scale.
    Unnecessary,
}

impl Rounding {
    /// Returns the decimal rounding strategy for this policy.
    ///
    /// `Unnecessary` has no strategy: callers must reject any amount that
    /// would need rounding.
    #[must_use]
    pub const fn strategy(self) -> Option<RoundingStrategy> {
        match self {
            Self::Up => Some(RoundingStrategy::AwayFromZero),
            Self::Down => Some(RoundingStrategy::ToZero),
            Self::Ceiling => Some(RoundingStrategy::ToPositiveInfinity),
            Self::Floor => Some(RoundingStrategy::ToNegativeInfinity),
            Self::HalfUp => Some(RoundingStrategy::MidpointAwayFromZero),
            Self::HalfDown => Some(RoundingStrategy::MidpointTowardZero),
            Self::HalfEven => Some(RoundingStrategy::MidpointNearestEven),
            Self::Unnecessary => None,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Ceiling => "CEILING",
            Self::Floor => "FLOOR",
            Self::HalfUp => "HALF_UP",
            Self::HalfDown => "HALF_DOWN",
            Self::HalfEven => "HALF_EVEN",
            Self::Unnecessary => "UNNECESSARY",
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rounding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "UP" => Ok(Self::Up),
            "DOWN" => Ok(Self::Down),
            "CEILING" => Ok(Self::Ceiling),
            "FLOOR" => Ok(Self::Floor),
            "HALF_UP" => Ok(Self::HalfUp),
            "HALF_DOWN" => Ok(Self::HalfDown),
            "HALF_EVEN" => Ok(Self::HalfEven),
            "UNNECESSARY" => Ok(Self::Unnecessary),
            _ => Err(format!("Unknown rounding policy: {s}")),
        }
    }
}
