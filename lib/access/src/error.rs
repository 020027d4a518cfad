//! Error types for the access crate.
//!
//! Errors are designed for layered context using rootcause:
//! - `TokenError`: Why a bearer token could not be inspected
//! - `StoreError`: Failures writing session state to the key/value store
//! - `UnknownRole`: A role string outside the closed role set

use std::fmt;

/// Errors from bearer-token inspection.
///
/// Every variant is treated as "expired" by the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token does not have exactly three dot-separated segments.
    Malformed { segments: usize },
    /// The claims segment is not valid base64.
    InvalidEncoding { reason: String },
    /// The claims segment is not a JSON object.
    InvalidPayload { reason: String },
    /// The claims object has no `exp` field.
    MissingExpiry,
    /// The `exp` field is not a number.
    InvalidExpiry { value: String },
    /// The `exp` field cannot be represented as an instant.
    ExpiryOutOfRange,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { segments } => {
                write!(f, "malformed token: expected 3 segments, found {segments}")
            }
            Self::InvalidEncoding { reason } => {
                write!(f, "token claims are not valid base64: {reason}")
            }
            Self::InvalidPayload { reason } => {
                write!(f, "token claims are not a JSON object: {reason}")
            }
            Self::MissingExpiry => write!(f, "token has no exp claim"),
            Self::InvalidExpiry { value } => {
                write!(f, "token exp claim is not numeric: {value}")
            }
            Self::ExpiryOutOfRange => write!(f, "token exp claim is out of range"),
        }
    }
}

impl std::error::Error for TokenError {}

/// Errors from the session key/value store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The underlying storage is not available (e.g. disabled by the browser).
    Unavailable,
    /// Writing a key failed.
    WriteFailed { key: String, reason: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "session storage is unavailable"),
            Self::WriteFailed { key, reason } => {
                write!(f, "failed to write session key '{key}': {reason}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// A role string that is not one of ADMIN, MANAGER or EMPLOYEE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole {
    pub value: String,
}

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.value)
    }
}

impl std::error::Error for UnknownRole {}
