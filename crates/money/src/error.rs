//! Money error types.
//!
//! Every variant is raised at the point of violation. Most of them are
//! programming-contract violations; only currency mismatches and malformed
//! external text are expected to be handled by callers.

use thiserror::Error;

use crate::types::Currency;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors that can occur while building or combining money values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Defaults Lifecycle ==========
    /// A default currency or rounding policy was needed before any was set.
    #[error("Money defaults need to be initialized")]
    NotInitialized,

    /// The process-wide defaults were already set.
    #[error("Money defaults have already been initialized")]
    AlreadyInitialized,

    // ========== Arithmetic ==========
    /// Both operands must share the same currency.
    #[error("{found} doesn't match the expected currency: {expected}")]
    MismatchedCurrency {
        /// Currency of the left operand.
        expected: Currency,
        /// Currency of the right operand.
        found: Currency,
    },

    /// Divisor is zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Result does not fit the decimal representation.
    #[error("Arithmetic overflow")]
    Overflow,

    /// The `UNNECESSARY` policy was asked to drop non-zero digits.
    #[error("Rounding necessary to reach scale {scale}")]
    RoundingNecessary {
        /// Requested scale.
        scale: u32,
    },

    // ========== Input ==========
    /// Amount could not be turned into an exact decimal.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Requested scale is outside the supported range.
    #[error("Invalid scale: {0} (maximum is 28)")]
    InvalidScale(u32),

    /// Currency code is not in the registry.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Rounding policy name is not recognized.
    #[error("Unknown rounding policy: {0}")]
    UnknownRoundingPolicy(String),
}

impl MoneyError {
    /// Returns a stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::AlreadyInitialized => "ALREADY_INITIALIZED",
            Self::MismatchedCurrency { .. } => "MISMATCHED_CURRENCY",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Overflow => "OVERFLOW",
            Self::RoundingNecessary { .. } => "ROUNDING_NECESSARY",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::InvalidScale(_) => "INVALID_SCALE",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::UnknownRoundingPolicy(_) => "UNKNOWN_ROUNDING_POLICY",
        }
    }

    /// Returns true if business logic may legitimately branch on this error.
    ///
    /// Everything else is a bug in the caller.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MismatchedCurrency { .. }
                | Self::InvalidAmount(_)
                | Self::UnknownCurrency(_)
                | Self::UnknownRoundingPolicy(_)
        )
    }
}
