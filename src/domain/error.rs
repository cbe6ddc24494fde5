//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent values or operations rejected by the protocol library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid base16 value '{value}': {reason}")]
    InvalidBase16 { value: String, reason: String },

    #[error("invalid EC public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid EC private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid WIF: {0}")]
    InvalidWif(String),

    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    #[error(
        "invalid sighash token '{0}', expected one of: all, none, single, anyone_can_pay, \
         all_anyone_can_pay, none_anyone_can_pay, single_anyone_can_pay"
    )]
    InvalidHashType(String),

    #[error("invalid network '{0}', expected mainnet or testnet")]
    InvalidNetwork(String),

    #[error("EC product out of range")]
    ProductOutOfRange,

    #[error("input index {index} out of range for transaction with {count} inputs")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("signature hash failed: {0}")]
    Sighash(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
