//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Tagged failure kinds for the product write and read paths.
///
/// Messages are only rendered at the HTTP edge; tests and callers match on
/// the variant (or on [`DomainError::code`]).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The request body could not be decoded into a product.
    #[error("could not decode product payload: {0}")]
    Decode(String),

    /// A required field is empty or outside its allowed range.
    #[error("required fields are missing or invalid")]
    MissingOrInvalidField,

    /// The expiration date is not a real `DD/MM/YYYY` calendar date.
    #[error("invalid expiration date: {0:?}")]
    InvalidDate(String),

    /// Another product already uses this code value.
    #[error("code value already exists: {0}")]
    DuplicateCode(String),

    /// A path identifier was not an integer.
    #[error("invalid product id: {0}")]
    InvalidId(String),

    /// No product carries the requested identifier.
    #[error("product not found")]
    NotFound,
}

impl DomainError {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn invalid_date(raw: impl Into<String>) -> Self {
        Self::InvalidDate(raw.into())
    }

    pub fn duplicate_code(code: impl Into<String>) -> Self {
        Self::DuplicateCode(code.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Stable, machine-readable error code exposed on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Decode(_) => "decode_error",
            DomainError::MissingOrInvalidField => "missing_or_invalid_field",
            DomainError::InvalidDate(_) => "invalid_date",
            DomainError::DuplicateCode(_) => "duplicate_code",
            DomainError::InvalidId(_) => "invalid_id",
            DomainError::NotFound => "not_found",
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}
