//! Domain-level error types.
//!
//! These errors are transport agnostic. The inbound HTTP adapter maps them
//! to response statuses and a JSON envelope; nothing here references actix
//! or SQLite.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::domain::student::StudentValidationError;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed: empty body, undecodable JSON, or an
    /// unparseable path segment.
    InvalidRequest,
    /// The request decoded cleanly but violates entity constraints; carries
    /// one `violations` entry per failing field.
    ValidationFailed,
    /// The requested record does not exist.
    NotFound,
    /// A storage or server failure unrelated to the requested record.
    InternalError,
}

impl ErrorCode {
    /// Snake-case tag used in serialised payloads and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::ValidationFailed => "validation_failed",
            Self::NotFound => "not_found",
            Self::InternalError => "internal_error",
        }
    }
}

/// Tagged error payload returned by every failing endpoint.
///
/// ## Invariants
/// - `message` is non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use student_api::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("no student found with id 7");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Error {
    #[schema(example = "invalid_request")]
    code: ErrorCode,
    #[schema(example = "student id must be an integer")]
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

/// Validation errors emitted by the fallible constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorValidationError {
    /// The message was blank.
    EmptyMessage,
}

impl std::fmt::Display for ErrorValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "error message must not be empty"),
        }
    }
}

impl std::error::Error for ErrorValidationError {}

impl Error {
    /// Create a new error.
    ///
    /// # Panics
    /// Panics when `message` is blank; use [`Error::try_new`] for untrusted
    /// input.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
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

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary structured details, when attached.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach structured details to the error.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::ValidationFailed`].
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for Error {}

impl From<StudentValidationError> for Error {
    fn from(err: StudentValidationError) -> Self {
        Self::validation_failed("student payload failed validation")
            .with_details(json!({ "violations": err.violations() }))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;
    use crate::domain::NewStudent;

    #[test]
    fn try_new_rejects_blank_messages() {
        let err = Error::try_new(ErrorCode::InvalidRequest, "   ");
        assert_eq!(err, Err(ErrorValidationError::EmptyMessage));
    }

    #[test]
    fn serialises_without_details_field_when_absent() {
        let payload = serde_json::to_value(Error::not_found("missing")).expect("serialise");
        assert_eq!(payload.get("code").and_then(Value::as_str), Some("not_found"));
        assert!(payload.get("details").is_none());
    }

    #[test]
    fn validation_error_carries_one_entry_per_field() {
        let source = NewStudent::try_from_parts(
            Some("Alice".to_owned()),
            Some("not-an-email".to_owned()),
            Some(400),
        )
        .expect_err("two violations");

        let error = Error::from(source);
        assert_eq!(error.code(), ErrorCode::ValidationFailed);
        let violations = error
            .details()
            .and_then(|d| d.get("violations"))
            .and_then(Value::as_array)
            .expect("violations array");
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn display_includes_code_tag() {
        let error = Error::invalid_request("student id must be an integer");
        assert_eq!(
            error.to_string(),
            "invalid_request: student id must be an integer"
        );
    }
}
