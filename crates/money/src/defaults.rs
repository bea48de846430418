//! Process-wide money defaults.
//!
//! The defaults are a plain value (`MoneyDefaults`) that can be injected
//! wherever money is built. For call sites that want ambient access, a
//! set-once `DefaultsCell` backs the global functions in this module:
//! uninitialized at start-up, written exactly once, read-only afterwards.

use once_cell::sync::OnceCell;

use crate::error::{MoneyError, MoneyResult};
use crate::types::{Currency, RoundingPolicy};

/// Default currency and rounding policy for values built without them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoneyDefaults {
    /// Currency used when none is given.
    pub currency: Currency,
    /// Rounding policy used when none is given.
    pub rounding: RoundingPolicy,
}

impl MoneyDefaults {
    /// Creates a defaults value.
    #[must_use]
    pub const fn new(currency: Currency, rounding: RoundingPolicy) -> Self {
        Self { currency, rounding }
    }
}

/// Set-once holder for `MoneyDefaults`.
///
/// Concurrent `initialize` calls race on a single atomic slot: exactly one
/// of them succeeds and every other call gets `AlreadyInitialized`.
#[derive(Debug, Default)]
pub struct DefaultsCell {
    inner: OnceCell<MoneyDefaults>,
}

impl DefaultsCell {
    /// Creates an empty cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: OnceCell::new(),
        }
    }

    /// Stores the defaults.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyInitialized` if the cell was already written.
    pub fn initialize(&self, defaults: MoneyDefaults) -> MoneyResult<()> {
        match self.inner.set(defaults) {
            Ok(()) => {
                tracing::debug!(
                    currency = %defaults.currency,
                    rounding = %defaults.rounding,
                    "money defaults initialized"
                );
                Ok(())
            }
            Err(rejected) => {
                tracing::warn!(
                    currency = %rejected.currency,
                    rounding = %rejected.rounding,
                    "money defaults already initialized, ignoring"
                );
                Err(MoneyError::AlreadyInitialized)
            }
        }
    }

    /// Returns true once `initialize` has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.inner.get().is_some()
    }

    /// Returns the stored defaults.
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` before the first successful `initialize`.
    pub fn get(&self) -> MoneyResult<&MoneyDefaults> {
        self.inner.get().ok_or(MoneyError::NotInitialized)
    }
}

static GLOBAL: DefaultsCell = DefaultsCell::new();

/// Sets the process-wide defaults. Call once during start-up.
///
/// # Errors
///
/// Returns `AlreadyInitialized` on every call after the first successful one.
pub fn initialize(currency: Currency, rounding: RoundingPolicy) -> MoneyResult<()> {
    GLOBAL.initialize(MoneyDefaults::new(currency, rounding))
}

/// Returns true once the process-wide defaults are set.
pub fn is_initialized() -> bool {
    GLOBAL.is_initialized()
}

/// Returns a copy of the process-wide defaults.
///
/// # Errors
///
/// Returns `NotInitialized` before `initialize` has succeeded.
pub fn global_defaults() -> MoneyResult<MoneyDefaults> {
    GLOBAL.get().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_new_cell_is_uninitialized() {
        let cell = DefaultsCell::new();
        assert!(!cell.is_initialized());
        assert_eq!(cell.get(), Err(MoneyError::NotInitialized));
    }

    #[test]
    fn test_initialize_once() {
        let cell = DefaultsCell::new();
        let defaults = MoneyDefaults::new(Currency::Brl, RoundingPolicy::HalfDown);

        cell.initialize(defaults).unwrap();

        assert!(cell.is_initialized());
        assert_eq!(cell.get(), Ok(&defaults));
    }

    #[test]
    fn test_second_initialize_fails_and_keeps_first_value() {
        let cell = DefaultsCell::new();
        let first = MoneyDefaults::new(Currency::Brl, RoundingPolicy::HalfDown);
        let second = MoneyDefaults::new(Currency::Usd, RoundingPolicy::HalfEven);

        cell.initialize(first).unwrap();
        assert_eq!(cell.initialize(second), Err(MoneyError::AlreadyInitialized));
        assert_eq!(cell.initialize(first), Err(MoneyError::AlreadyInitialized));
        assert_eq!(cell.get(), Ok(&first));
    }

    #[test]
    fn test_concurrent_initialize_has_one_winner() {
        let cell = Arc::new(DefaultsCell::new());

        let handles: Vec<_> = Currency::ALL
            .into_iter()
            .map(|currency| {
                let cell = Arc::clone(&cell);
                thread::spawn(move || {
                    cell.initialize(MoneyDefaults::new(currency, RoundingPolicy::HalfUp))
                        .is_ok()
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|won| *won)
            .count();

        assert_eq!(winners, 1);
        assert!(cell.is_initialized());
    }
}
