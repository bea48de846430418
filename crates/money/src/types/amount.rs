//! Conversion of raw inputs into exact decimals.
//!
//! Binary floats are converted through their shortest round-trip decimal
//! string, so `2.345_f64` becomes exactly `2.345` and never
//! `2.34499999999999997335464740899624`.

use rust_decimal::Decimal;

use crate::error::{MoneyError, MoneyResult};

/// Anything that can be turned into an exact `Decimal` amount.
pub trait AmountInput {
    /// Converts `self` into an exact decimal.
    fn to_decimal(self) -> MoneyResult<Decimal>;
}

impl AmountInput for Decimal {
    fn to_decimal(self) -> MoneyResult<Decimal> {
        Ok(self)
    }
}

impl AmountInput for &Decimal {
    fn to_decimal(self) -> MoneyResult<Decimal> {
        Ok(*self)
    }
}

macro_rules! integer_amount {
    ($($ty:ty),*) => {
        $(
            impl AmountInput for $ty {
                fn to_decimal(self) -> MoneyResult<Decimal> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

integer_amount!(i32, i64, u32, u64);

impl AmountInput for f64 {
    fn to_decimal(self) -> MoneyResult<Decimal> {
        if !self.is_finite() {
            return Err(MoneyError::InvalidAmount(self.to_string()));
        }
        parse_exact(&self.to_string())
    }
}

impl AmountInput for f32 {
    fn to_decimal(self) -> MoneyResult<Decimal> {
        if !self.is_finite() {
            return Err(MoneyError::InvalidAmount(self.to_string()));
        }
        parse_exact(&self.to_string())
    }
}

impl AmountInput for &str {
    fn to_decimal(self) -> MoneyResult<Decimal> {
        parse_exact(self.trim())
    }
}

impl AmountInput for &String {
    fn to_decimal(self) -> MoneyResult<Decimal> {
        self.as_str().to_decimal()
    }
}

/// Parses plain decimal text, rejecting anything that would need rounding.
fn parse_exact(text: &str) -> MoneyResult<Decimal> {
    if text.is_empty() {
        return Err(MoneyError::InvalidAmount("empty amount".to_string()));
    }
    Decimal::from_str_exact(text).map_err(|e| MoneyError::InvalidAmount(format!("{text}: {e}")))
}
