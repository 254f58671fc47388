//! # Vault Error Types

use thiserror::Error;

/// Errors that can occur while setting up vault detection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    /// The configured sign pattern is not a valid regular expression.
    #[error("invalid vault sign pattern: {0}")]
    InvalidPattern(String),

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for vault operations.
pub type VaultResult<T> = Result<T, VaultError>;
