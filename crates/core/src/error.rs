//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on recoverable, business-level failures. There are no
/// fatal conditions in this domain: lookups miss, input fails to parse, and
/// everything else is total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A requested resource was not found (unknown product code, unknown
    /// order id).
    #[error("not found")]
    NotFound,

    /// User-supplied input could not be interpreted (unparseable number,
    /// out-of-range menu choice).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
