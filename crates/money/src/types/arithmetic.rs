//! Arithmetic on `Money`.
//!
//! Every operation returns a new value. Binary operations require both
//! operands to share a currency; the result takes the left operand's
//! currency, rounding policy and (except `multiply_by_decimal`) scale.

use rust_decimal::Decimal;

use super::amount::AmountInput;
use super::money::Money;
use super::rounding::{MAX_SCALE, RoundingPolicy, Truncated};
use crate::error::{MoneyError, MoneyResult};

/// Quotient and remainder of a division.
///
/// `quotient * divisor + remainder` equals the dividend exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Division {
    /// Quotient at the dividend's scale, rounded HALF_DOWN.
    pub quotient: Money,
    /// What the quotient leaves over. Always present, possibly zero.
    pub remainder: Money,
}

impl Money {
    /// Adds `other`. An absent operand leaves `self` unchanged.
    ///
    /// ```
    /// use monetra_money::{Currency, Money, RoundingPolicy};
    ///
    /// let a = Money::of(10, Currency::Usd, RoundingPolicy::HalfEven).unwrap();
    /// let b = Money::of(2.5, Currency::Usd, RoundingPolicy::HalfEven).unwrap();
    /// assert_eq!(a.add(&b).unwrap().plain_text(), "12.50");
    /// assert_eq!(a.add(None).unwrap(), a);
    /// ```
    pub fn add<'a>(&self, other: impl Into<Option<&'a Money>>) -> MoneyResult<Self> {
        let Some(other) = other.into() else {
            return Ok(*self);
        };
        self.ensure_same_currency(other)?;

        let sum = self
            .amount()
            .checked_add(other.amount())
            .ok_or(MoneyError::Overflow)?;
        Self::normalized(sum, Some(self.scale()), self.currency(), self.rounding())
    }

    /// Subtracts `other`. An absent operand leaves `self` unchanged.
    pub fn subtract<'a>(&self, other: impl Into<Option<&'a Money>>) -> MoneyResult<Self> {
        let Some(other) = other.into() else {
            return Ok(*self);
        };
        self.ensure_same_currency(other)?;

        let difference = self
            .amount()
            .checked_sub(other.amount())
            .ok_or(MoneyError::Overflow)?;
        Self::normalized(
            difference,
            Some(self.scale()),
            self.currency(),
            self.rounding(),
        )
    }

    /// Multiplies by an integer. Exact; the scale is unchanged.
    pub fn multiply_by_integer(&self, factor: i64) -> MoneyResult<Self> {
        let product = self
            .amount()
            .mantissa()
            .checked_mul(i128::from(factor))
            .ok_or(MoneyError::Overflow)?;
        let amount = exact_decimal(product, self.scale())?;
        Ok(Self::from_parts(amount, self.currency(), self.rounding()))
    }

    /// Multiplies by a decimal factor, then rounds to the currency's
    /// canonical scale with this value's policy.
    ///
    /// The exact product is rounded once, however many fraction digits it
    /// has. This is the only operation that forces the canonical scale.
    pub fn multiply_by_decimal(&self, factor: impl AmountInput) -> MoneyResult<Self> {
        let factor = factor.to_decimal()?.normalize();
        let target = self.currency().fraction_digits();

        let Some(product) = self.amount().mantissa().checked_mul(factor.mantissa()) else {
            // Past i128 the product goes through Decimal, which keeps at most
            // 28 fraction digits.
            let product = self
                .amount()
                .checked_mul(factor)
                .ok_or(MoneyError::Overflow)?;
            return Self::normalized(product, Some(target), self.currency(), self.rounding());
        };

        let scale = self.scale() + factor.scale();
        let mantissa = if scale <= target {
            10_i128
                .checked_pow(target - scale)
                .and_then(|shift| product.checked_mul(shift))
                .ok_or(MoneyError::Overflow)?
        } else {
            let magnitude = product.unsigned_abs();
            let truncated = match 10_u128.checked_pow(scale - target) {
                Some(unit) => {
                    Truncated::new(magnitude / unit, magnitude % unit, unit, product < 0)
                }
                // 10^39 and up exceed any i128 magnitude twice over.
                None => Truncated::below_half(magnitude != 0, product < 0),
            };
            self.rounding().settle(truncated, target)?
        };

        let amount = exact_decimal(mantissa, target)?;
        Ok(Self::from_parts(amount, self.currency(), self.rounding()))
    }

    /// Divides by an integer.
    ///
    /// The quotient always rounds HALF_DOWN, whatever this value's policy.
    pub fn divide_by_integer(&self, divisor: i64) -> MoneyResult<Division> {
        self.divide(Decimal::from(divisor))
    }

    /// Divides by a decimal.
    ///
    /// The quotient always rounds HALF_DOWN, whatever this value's policy.
    pub fn divide_by_decimal(&self, divisor: impl AmountInput) -> MoneyResult<Division> {
        self.divide(divisor.to_decimal()?)
    }

    fn divide(&self, divisor: Decimal) -> MoneyResult<Division> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }

        let divisor = divisor.normalize();
        let scale = self.scale();
        let divisor_scale = divisor.scale();
        let dividend = self.amount().mantissa();
        let denominator = divisor.mantissa().unsigned_abs();

        // amount / divisor at `scale` digits is (M * 10^t) / D on mantissas.
        let (magnitude, leftover) =
            long_divide(dividend.unsigned_abs(), divisor_scale, denominator)?;
        let negative = (dividend < 0) != divisor.is_sign_negative();
        let truncated = Truncated::new(magnitude, leftover, denominator, negative);

        let quotient = RoundingPolicy::HalfDown.settle(truncated, scale)?;
        // Rounding away from zero takes one more divisor out of the dividend.
        let carried = quotient.unsigned_abs() - truncated.magnitude();
        let rest = i128::try_from(leftover).map_err(|_| MoneyError::Overflow)?
            - i128::try_from(carried * denominator).map_err(|_| MoneyError::Overflow)?;
        let rest = if dividend < 0 { -rest } else { rest };

        let quotient = exact_decimal(quotient, scale)?;
        let remainder = exact_decimal(rest, scale + divisor_scale)?.normalize();
        let remainder_scale = remainder.scale().max(scale);

        tracing::trace!(
            dividend = %self.amount(),
            %divisor,
            %quotient,
            %remainder,
            "divided"
        );

        Ok(Division {
            quotient: Self::from_parts(quotient, self.currency(), self.rounding()),
            remainder: Self::normalized(
                remainder,
                Some(remainder_scale),
                self.currency(),
                self.rounding(),
            )?,
        })
    }

    /// Flips the sign. Same result as `multiply_by_integer(-1)`.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::from_parts(-self.amount(), self.currency(), self.rounding())
    }

    /// Absolute value. Non-negative values are returned unchanged.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.negate()
        } else {
            *self
        }
    }
}

impl std::ops::Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

/// Divides `numerator * 10^shift` by `denominator` one digit at a time,
/// returning the truncated quotient and the leftover.
///
/// The leftover stays below `denominator`, so nothing wider than the
/// quotient itself is ever formed.
fn long_divide(numerator: u128, shift: u32, denominator: u128) -> MoneyResult<(u128, u128)> {
    let mut quotient = numerator / denominator;
    let mut leftover = numerator % denominator;
    for _ in 0..shift {
        leftover = leftover.checked_mul(10).ok_or(MoneyError::Overflow)?;
        quotient = quotient
            .checked_mul(10)
            .and_then(|q| q.checked_add(leftover / denominator))
            .ok_or(MoneyError::Overflow)?;
        leftover %= denominator;
    }
    Ok((quotient, leftover))
}

/// Builds `mantissa * 10^-scale`, dropping trailing zeros when the scale
/// exceeds what a `Decimal` can hold.
fn exact_decimal(mut mantissa: i128, mut scale: u32) -> MoneyResult<Decimal> {
    while scale > MAX_SCALE && mantissa % 10 == 0 {
        mantissa /= 10;
        scale -= 1;
    }
    Decimal::try_from_i128_with_scale(mantissa, scale).map_err(|_| MoneyError::Overflow)
}
