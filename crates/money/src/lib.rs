//! Currency-aware, fixed-scale money for Monetra.
//!
//! This crate provides:
//! - `Money`, an immutable decimal amount tied to a currency and a rounding
//!   policy
//! - Arithmetic, division with remainder, and currency-checked comparisons
//! - Set-once process-wide defaults for currency and rounding
//! - Money error types
//! - Configuration management
//!
//! ```
//! use monetra_money::{Currency, Money, RoundingPolicy};
//!
//! let price = Money::of("10.00", Currency::Brl, RoundingPolicy::HalfDown).unwrap();
//! let split = price.divide_by_integer(3).unwrap();
//!
//! assert_eq!(split.quotient.display(), "R$ 3.33");
//! assert_eq!(split.remainder.plain_text(), "0.01");
//! ```

pub mod config;
pub mod defaults;
pub mod error;
pub mod types;

pub use config::{AppConfig, LoggingConfig, MoneyConfig};
pub use defaults::{DefaultsCell, MoneyDefaults, global_defaults, initialize, is_initialized};
pub use error::{MoneyError, MoneyResult};
pub use types::{
    AmountInput, Currency, Division, MAX_SCALE, Money, MoneyBuilder, MoneyRecord, RoundingPolicy,
};
