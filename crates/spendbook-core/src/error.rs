use std::io;

use thiserror::Error;
use uuid::Uuid;

use spendbook_auth::TokenError;
use spendbook_domain::DateRangeError;

/// Unified error type for the identity and expense core.
///
/// Every variant is recoverable by the caller. Messages never carry
/// plaintext passwords, hashes, tokens, or the signing secret.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("account already registered")]
    DuplicateIdentity,
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Signature, expiry, and malformed-token failures collapse into one
    /// caller-visible kind; the source keeps the distinction for audit.
    #[error("invalid or expired session token")]
    InvalidToken(#[source] TokenError),
    #[error("access denied")]
    AccessDenied,
    #[error("credential hashing failed")]
    Hashing,
    #[error("expense not found: {0}")]
    ExpenseNotFound(Uuid),
    #[error("invalid date range: {0}")]
    InvalidDateRange(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl From<TokenError> for CoreError {
    fn from(err: TokenError) -> Self {
        CoreError::InvalidToken(err)
    }
}

impl From<DateRangeError> for CoreError {
    fn from(err: DateRangeError) -> Self {
        CoreError::InvalidDateRange(err.to_string())
    }
}
