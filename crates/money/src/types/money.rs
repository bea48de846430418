//! Money type with decimal precision, currency and rounding policy.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Floats are accepted as input only, converted exactly through their
//! decimal string (see `AmountInput`).
//!
//! A `Money` is immutable. Its amount always carries exactly `scale()`
//! fraction digits. Two relations compare values:
//! - `==` is strict: amount, scale, currency and rounding must all match,
//!   so `10` and `10.00` are different values.
//! - `value_eq` and friends compare magnitudes only (`10` equals `10.00`)
//!   and fail on mismatched currencies.

use std::hash::{DefaultHasher, Hash, Hasher};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::AmountInput;
use super::currency::Currency;
use super::rounding::{MAX_SCALE, RoundingPolicy};
use crate::defaults::{self, MoneyDefaults};
use crate::error::{MoneyError, MoneyResult};

/// Represents a monetary amount with currency and rounding policy.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(into = "MoneyRecord", try_from = "MoneyRecord")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
    rounding: RoundingPolicy,
    hash: u64,
}

impl Money {
    /// Starts building a value from any exact amount input.
    pub fn builder(amount: impl AmountInput) -> MoneyBuilder {
        MoneyBuilder {
            amount: amount.to_decimal(),
            scale: None,
            currency: None,
            rounding: None,
        }
    }

    /// Creates a value using the process-wide currency and rounding policy,
    /// at the currency's canonical scale.
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` if the process-wide defaults are not set.
    pub fn new(amount: impl AmountInput) -> MoneyResult<Self> {
        Self::builder(amount).build()
    }

    /// Creates a value at the currency's canonical scale without consulting
    /// any defaults.
    pub fn of(
        amount: impl AmountInput,
        currency: Currency,
        rounding: RoundingPolicy,
    ) -> MoneyResult<Self> {
        Self::builder(amount)
            .currency(currency)
            .rounding(rounding)
            .build()
    }

    /// Creates a zero amount at the currency's canonical scale.
    #[must_use]
    pub fn zero(currency: Currency, rounding: RoundingPolicy) -> Self {
        Self::from_parts(
            Decimal::new(0, currency.fraction_digits()),
            currency,
            rounding,
        )
    }

    /// Normalizes `value` to `scale` (or the canonical currency scale) and
    /// wraps it.
    ///
    /// An input already at the target scale is stored untouched; anything
    /// else goes through `rounding`.
    pub(crate) fn normalized(
        value: Decimal,
        scale: Option<u32>,
        currency: Currency,
        rounding: RoundingPolicy,
    ) -> MoneyResult<Self> {
        let target = scale.unwrap_or_else(|| currency.fraction_digits());
        if target > MAX_SCALE {
            return Err(MoneyError::InvalidScale(target));
        }

        let amount = if value.scale() == target {
            value
        } else {
            rounding.rescale(value, target)?
        };

        Ok(Self::from_parts(amount, currency, rounding))
    }

    pub(super) fn from_parts(
        mut amount: Decimal,
        currency: Currency,
        rounding: RoundingPolicy,
    ) -> Self {
        if amount.is_zero() {
            amount.set_sign_positive(true);
        }
        let mut hasher = DefaultHasher::new();
        amount.mantissa().hash(&mut hasher);
        amount.scale().hash(&mut hasher);
        currency.hash(&mut hasher);
        rounding.hash(&mut hasher);

        Self {
            amount,
            currency,
            rounding,
            hash: hasher.finish(),
        }
    }

    /// The exact amount, carrying `scale()` fraction digits.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency of this value.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// The rounding policy of this value.
    #[must_use]
    pub const fn rounding(&self) -> RoundingPolicy {
        self.rounding
    }

    /// Number of fraction digits stored.
    ///
    /// Not necessarily the canonical currency scale.
    #[must_use]
    pub fn scale(&self) -> u32 {
        self.amount.scale()
    }

    /// The currency's display symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.currency.symbol()
    }

    /// Symbol, space, plain amount.
    ///
    /// ```
    /// use monetra_money::{Currency, Money, RoundingPolicy};
    ///
    /// let money = Money::of(2.345, Currency::Brl, RoundingPolicy::HalfDown).unwrap();
    /// assert_eq!(money.display(), "R$ 2.34");
    /// ```
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }

    /// The amount with exactly `scale()` fraction digits and `.` as the
    /// decimal point, without symbol.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.amount.to_string()
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.amount.mantissa() == other.amount.mantissa()
            && self.amount.scale() == other.amount.scale()
            && self.currency == other.currency
            && self.rounding == other.rounding
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl std::fmt::Debug for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Money")
            .field("amount", &self.amount)
            .field("currency", &self.currency)
            .field("rounding", &self.rounding)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency.symbol(), self.amount)
    }
}

/// Builder for `Money` with optional scale, currency and rounding.
///
/// Unset parameters come from the process-wide defaults (`build`) or from an
/// injected `MoneyDefaults` (`build_with`).
#[derive(Debug, Clone)]
#[must_use]
pub struct MoneyBuilder {
    amount: MoneyResult<Decimal>,
    scale: Option<u32>,
    currency: Option<Currency>,
    rounding: Option<RoundingPolicy>,
}

impl MoneyBuilder {
    /// Stores exactly this many fraction digits.
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Overrides the default currency.
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Overrides the default rounding policy.
    pub fn rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.rounding = Some(rounding);
        self
    }

    /// Builds using the process-wide defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` when a default is needed but none was set,
    /// plus any amount or normalization error.
    pub fn build(self) -> MoneyResult<Money> {
        let fallback = if self.currency.is_some() && self.rounding.is_some() {
            None
        } else {
            defaults::global_defaults().ok()
        };
        self.resolve(fallback)
    }

    /// Builds using `defaults` for anything unset.
    pub fn build_with(self, defaults: MoneyDefaults) -> MoneyResult<Money> {
        self.resolve(Some(defaults))
    }

    fn resolve(self, defaults: Option<MoneyDefaults>) -> MoneyResult<Money> {
        let currency = self
            .currency
            .or_else(|| defaults.map(|d| d.currency))
            .ok_or(MoneyError::NotInitialized)?;
        let rounding = self
            .rounding
            .or_else(|| defaults.map(|d| d.rounding))
            .ok_or(MoneyError::NotInitialized)?;
        let amount = self.amount?;

        Money::normalized(amount, self.scale, currency, rounding)
    }
}

/// Serialized form of `Money`.
///
/// Deserialization rebuilds the value through the normal constructor, so a
/// record that does not satisfy the invariants is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRecord {
    /// Amount as plain decimal text.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Currency code.
    pub currency: Currency,
    /// Rounding policy name.
    pub rounding: RoundingPolicy,
    /// Fraction digits the amount text must carry.
    pub scale: u32,
}

impl From<Money> for MoneyRecord {
    fn from(money: Money) -> Self {
        Self {
            amount: money.amount,
            currency: money.currency,
            rounding: money.rounding,
            scale: money.scale(),
        }
    }
}

impl TryFrom<MoneyRecord> for Money {
    type Error = MoneyError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        if record.amount.scale() != record.scale {
            return Err(MoneyError::InvalidAmount(format!(
                "{} does not have scale {}",
                record.amount, record.scale
            )));
        }
        Money::builder(record.amount)
            .scale(record.scale)
            .currency(record.currency)
            .rounding(record.rounding)
            .build()
    }
}
