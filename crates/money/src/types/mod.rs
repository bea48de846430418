//! Money value types.

pub mod amount;
pub mod arithmetic;
pub mod compare;
pub mod currency;
pub mod money;
pub mod rounding;

#[cfg(test)]
mod props;

pub use amount::AmountInput;
pub use arithmetic::Division;
pub use currency::Currency;
pub use money::{Money, MoneyBuilder, MoneyRecord};
pub use rounding::{MAX_SCALE, RoundingPolicy};
