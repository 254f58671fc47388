//! # Economy Error Types
//!
//! All errors that can occur while building or using a currency.
//!
//! An unregistered item is not an error: it is simply worth nothing.

use thiserror::Error;

/// Errors that can occur in the currency engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EconomyError {
    /// A cent value did not fit in the representable range.
    #[error("arithmetic overflow in economic calculation")]
    ArithmeticOverflow,

    /// Currency or denomination settings are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A display amount that cannot be turned into cents (negative, NaN, infinite).
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A malformed amount pattern.
    #[error("invalid amount pattern: {0}")]
    InvalidPattern(String),

    /// Containers nested deeper than the configured limit.
    #[error("containers nested deeper than {limit} levels")]
    ContainerTooDeep {
        /// The configured nesting limit.
        limit: u32,
    },
}

/// Result type for economy operations.
pub type EconomyResult<T> = Result<T, EconomyError>;
