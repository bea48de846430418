//! Rounding policies.
//!
//! A policy decides how a decimal is reduced to fewer fraction digits. All
//! of them except `Unnecessary` map onto a `rust_decimal` strategy.

use std::cmp::Ordering;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};

/// Largest number of fraction digits a `Decimal` can hold.
pub const MAX_SCALE: u32 = 28;

/// Rounding policy attached to every money value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundingPolicy {
    /// Away from zero.
    Up,
    /// Towards zero (truncate).
    Down,
    /// Towards positive infinity.
    Ceiling,
    /// Towards negative infinity.
    Floor,
    /// Nearest neighbor, ties away from zero.
    HalfUp,
    /// Nearest neighbor, ties towards zero.
    HalfDown,
    /// Nearest neighbor, ties to the even neighbor (banker's rounding).
    HalfEven,
    /// Exact results only; any digit loss is an error.
    Unnecessary,
}

impl RoundingPolicy {
    /// Every policy.
    pub const ALL: [Self; 8] = [
        Self::Up,
        Self::Down,
        Self::Ceiling,
        Self::Floor,
        Self::HalfUp,
        Self::HalfDown,
        Self::HalfEven,
        Self::Unnecessary,
    ];

    /// Canonical upper-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
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

    /// The matching `rust_decimal` strategy, `None` for `Unnecessary`.
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

    /// Re-expresses `value` with exactly `scale` fraction digits.
    ///
    /// Widening is always exact. Narrowing rounds with this policy, or fails
    /// with `RoundingNecessary` under `Unnecessary` when digits would be lost.
    pub fn rescale(self, value: Decimal, scale: u32) -> MoneyResult<Decimal> {
        if scale > MAX_SCALE {
            return Err(MoneyError::InvalidScale(scale));
        }

        let mut result = if value.scale() > scale {
            let rounded = match self.strategy() {
                Some(strategy) => value.round_dp_with_strategy(scale, strategy),
                None => value.round_dp_with_strategy(scale, RoundingStrategy::ToZero),
            };
            if rounded != value {
                if self == Self::Unnecessary {
                    return Err(MoneyError::RoundingNecessary { scale });
                }
                tracing::trace!(%value, %rounded, scale, policy = self.name(), "lossy rescale");
            }
            rounded
        } else {
            value
        };

        result.rescale(scale);
        // Widening past the 96-bit mantissa makes `rescale` settle on a
        // smaller scale instead of failing.
        if result.scale() != scale {
            return Err(MoneyError::Overflow);
        }
        if result.is_zero() {
            result.set_sign_positive(true);
        }
        Ok(result)
    }
}

/// Magnitude of an exact quotient truncated towards zero, plus what the
/// truncation dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Truncated {
    magnitude: u128,
    inexact: bool,
    half: Ordering,
    negative: bool,
}

impl Truncated {
    /// `magnitude` and `leftover` from dividing by `denominator`, all
    /// unsigned; `negative` is the sign of the exact result.
    pub(crate) fn new(magnitude: u128, leftover: u128, denominator: u128, negative: bool) -> Self {
        Self {
            magnitude,
            inexact: leftover != 0,
            half: leftover.saturating_mul(2).cmp(&denominator),
            negative,
        }
    }

    /// A value whose magnitude is below half a unit, so it truncates to zero.
    pub(crate) const fn below_half(inexact: bool, negative: bool) -> Self {
        Self {
            magnitude: 0,
            inexact,
            half: Ordering::Less,
            negative,
        }
    }

    /// The truncated magnitude.
    pub(crate) const fn magnitude(self) -> u128 {
        self.magnitude
    }
}

impl RoundingPolicy {
    /// Rounds a truncated quotient to a signed mantissa at `scale`.
    ///
    /// The single rounding step for results computed on integer mantissas.
    pub(crate) fn settle(self, truncated: Truncated, scale: u32) -> MoneyResult<i128> {
        let Truncated {
            magnitude,
            inexact,
            half,
            negative,
        } = truncated;

        let away = inexact
            && match self {
                Self::Up => true,
                Self::Down => false,
                Self::Ceiling => !negative,
                Self::Floor => negative,
                Self::HalfUp => half.is_ge(),
                Self::HalfDown => half.is_gt(),
                Self::HalfEven => half.is_gt() || (half.is_eq() && magnitude % 2 == 1),
                Self::Unnecessary => return Err(MoneyError::RoundingNecessary { scale }),
            };

        let magnitude = if away {
            magnitude.checked_add(1).ok_or(MoneyError::Overflow)?
        } else {
            magnitude
        };
        let mantissa = i128::try_from(magnitude).map_err(|_| MoneyError::Overflow)?;
        Ok(if negative { -mantissa } else { mantissa })
    }
}

impl std::fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for RoundingPolicy {
    type Err = MoneyError;

    /// Accepts `HALF_DOWN`, `half-down` and `halfdown` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|policy| policy.name().replace('_', "") == wanted)
            .ok_or_else(|| MoneyError::UnknownRoundingPolicy(s.to_string()))
    }
}
