//! Client-facing error payload for the account API.
//!
//! Port errors such as
//! [`AccountRegistrationError`](crate::domain::ports::AccountRegistrationError)
//! stay specific to their workflow. Adapters translate them into an [`Error`]
//! carrying a coarse [`ErrorCode`], a readable message, and optional JSON
//! details naming the exact rule that failed.

use serde::Serialize;
use serde_json::Value;

const FALLBACK_MESSAGE: &str = "unspecified error";

/// Failure category exposed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Malformed input, an unsupported product, or an owner rule violation.
    InvalidRequest,
    /// No account with the requested number.
    NotFound,
    /// The account number is already registered.
    Conflict,
    /// The account store or owner registry cannot be reached.
    ServiceUnavailable,
    /// Anything else; the message is redacted before leaving the process.
    InternalError,
}

/// Raised by [`Error::try_new`] when the message is blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    #[error("error message must not be empty")]
    EmptyMessage,
}

/// Error returned to API clients.
///
/// The message is never blank: [`Error::new`] substitutes a fallback text,
/// [`Error::try_new`] rejects it.
///
/// # Examples
/// ```
/// use bank_accounts::domain::{Error, ErrorCode};
/// use serde_json::json;
///
/// let err = Error::conflict("account 123456789 already exists")
///     .with_details(json!({ "code": "account_already_exists" }));
/// assert_eq!(err.code(), ErrorCode::Conflict);
/// assert!(err.details().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::try_new(code, message).unwrap_or_else(|_| Self {
            code,
            message: FALLBACK_MESSAGE.to_owned(),
            details: None,
        })
    }

    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            details: None,
        })
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach machine-readable context such as the offending field.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}
