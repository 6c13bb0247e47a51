//! Error types for contract verification

use crate::types::Currency;
use thiserror::Error;

/// Contract result type
pub type Result<T> = std::result::Result<T, Error>;

/// Contract errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Command cardinality precondition failed (zero or multiple commands)
    #[error("Expected exactly one recognized command")]
    InvalidCommand,

    /// A contract rule was violated; carries the description of the rule
    #[error("Contract rule violated: {0}")]
    ContractViolation(String),

    /// Two amounts in different currencies were combined or compared
    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch {
        /// Currency of the left operand
        expected: Currency,
        /// Currency of the right operand
        actual: Currency,
    },

    /// Minor-unit arithmetic exceeded the representable range
    #[error("Amount overflow")]
    Overflow,

    /// Signature verification failed
    #[error("Signature verification failed: {0}")]
    SignatureInvalid(String),
}
