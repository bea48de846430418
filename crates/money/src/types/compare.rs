//! Sign tests and currency-checked comparisons.
//!
//! Ordered comparisons look at magnitudes only, so `10` and `10.00` compare
//! equal here even though they are different values under `==`.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use super::money::Money;
use crate::error::{MoneyError, MoneyResult};

impl Money {
    /// Returns true if the amount is greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount() > Decimal::ZERO
    }

    /// Returns true if the amount is less than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount() < Decimal::ZERO
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount().is_zero()
    }

    /// Returns true only if `other` is present and has the same currency.
    pub fn same_currency_as<'a>(&self, other: impl Into<Option<&'a Money>>) -> bool {
        other
            .into()
            .is_some_and(|other| other.currency() == self.currency())
    }

    /// Fails with `MismatchedCurrency` unless both values share a currency.
    pub fn ensure_same_currency(&self, other: &Money) -> MoneyResult<()> {
        if self.currency() == other.currency() {
            Ok(())
        } else {
            Err(MoneyError::MismatchedCurrency {
                expected: self.currency(),
                found: other.currency(),
            })
        }
    }

    /// Orders the magnitudes of two same-currency values.
    pub fn compare(&self, other: &Money) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount().cmp(&other.amount()))
    }

    /// Equal magnitudes, ignoring scale and rounding policy.
    pub fn value_eq(&self, other: &Money) -> MoneyResult<bool> {
        self.compare(other).map(Ordering::is_eq)
    }

    /// Greater than.
    pub fn gt(&self, other: &Money) -> MoneyResult<bool> {
        self.compare(other).map(Ordering::is_gt)
    }

    /// Greater than or equal to.
    pub fn gte(&self, other: &Money) -> MoneyResult<bool> {
        self.compare(other).map(Ordering::is_ge)
    }

    /// Less than.
    pub fn lt(&self, other: &Money) -> MoneyResult<bool> {
        self.compare(other).map(Ordering::is_lt)
    }

    /// Less than or equal to.
    pub fn lte(&self, other: &Money) -> MoneyResult<bool> {
        self.compare(other).map(Ordering::is_le)
    }
}
