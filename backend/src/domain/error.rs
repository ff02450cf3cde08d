//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses or any other protocol-specific envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A required request parameter was absent.
    MissingParam,
    /// A request parameter was present but malformed or out of range.
    InvalidParam,
    /// The addressed entity does not exist.
    EntityNotFound,
    /// An entity with the same key already exists.
    EntityAlreadyExists,
    /// An unexpected failure occurred, typically inside a store adapter.
    InternalError,
}

/// Validation failures raised when constructing an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The message was empty once trimmed.
    #[error("error message must not be empty")]
    EmptyMessage,
    /// The trace identifier was empty once trimmed.
    #[error("trace identifier must not be empty")]
    EmptyTraceId,
}

/// Domain error payload.
///
/// Constructors capture the ambient [`TraceId`] when one is in scope so
/// adapters can correlate the failure with request logs.
///
/// ## Invariants
/// - `message` is non-empty once trimmed of whitespace.
/// - `trace_id`, when present, is non-empty.
///
/// # Examples
/// ```
/// use employees::domain::{Error, ErrorCode};
///
/// let err = Error::missing_param("employee.name");
/// assert_eq!(err.code(), ErrorCode::MissingParam);
/// assert_eq!(err.params(), vec!["employee.name"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
    details: Option<Value>,
}

const FALLBACK_INTERNAL_MESSAGE: &str = "internal error";

impl Error {
    fn from_parts(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Fallible constructor that validates the message content.
    ///
    /// # Errors
    /// Returns [`ErrorValidationError::EmptyMessage`] for blank messages.
    pub fn try_new(code: ErrorCode, message: impl Into<String>) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self::from_parts(code, message))
    }

    /// A required parameter was not supplied.
    pub fn missing_param(param: impl Into<String>) -> Self {
        let param = param.into();
        Self::from_parts(
            ErrorCode::MissingParam,
            format!("parameter {param} is required for this request"),
        )
        .with_details(json!({ "params": [param] }))
    }

    /// A supplied parameter failed parsing or validation.
    pub fn invalid_param(param: impl Into<String>) -> Self {
        let param = param.into();
        Self::from_parts(
            ErrorCode::InvalidParam,
            format!("incorrect value for parameter: {param}"),
        )
        .with_details(json!({ "params": [param] }))
    }

    /// No entity matched the key `name = value`.
    pub fn entity_not_found(name: impl Into<String>, value: impl Into<String>) -> Self {
        let (name, value) = (name.into(), value.into());
        Self::from_parts(
            ErrorCode::EntityNotFound,
            format!("no entity found with {name}: {value}"),
        )
        .with_details(json!({ "name": name, "value": value }))
    }

    /// An entity keyed by `name = value` already exists.
    pub fn entity_already_exists(name: impl Into<String>, value: impl Into<String>) -> Self {
        let (name, value) = (name.into(), value.into());
        Self::from_parts(
            ErrorCode::EntityAlreadyExists,
            format!("entity already exists with {name}: {value}"),
        )
        .with_details(json!({ "name": name, "value": value }))
    }

    /// Unexpected failure. Blank messages are replaced with a generic one.
    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            FALLBACK_INTERNAL_MESSAGE.to_owned()
        } else {
            message
        };
        Self::from_parts(ErrorCode::InternalError, message)
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Trace identifier captured at construction, if any.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary structured details.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Parameter names listed under `details.params`.
    pub fn params(&self) -> Vec<&str> {
        self.details
            .as_ref()
            .and_then(|details| details.get("params"))
            .and_then(Value::as_array)
            .map(|params| params.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Attach structured details to the error.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Override the trace identifier.
    ///
    /// Blank identifiers are ignored; use [`Error::try_with_trace_id`] to
    /// surface them as failures instead.
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        let trace_id = trace_id.into();
        if !trace_id.trim().is_empty() {
            self.trace_id = Some(trace_id);
        }
        self
    }

    /// Override the trace identifier, rejecting blank values.
    ///
    /// # Errors
    /// Returns [`ErrorValidationError::EmptyTraceId`] for blank identifiers.
    pub fn try_with_trace_id(
        mut self,
        trace_id: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let trace_id = trace_id.into();
        if trace_id.trim().is_empty() {
            return Err(ErrorValidationError::EmptyTraceId);
        }
        self.trace_id = Some(trace_id);
        Ok(self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorDto {
    pub(crate) code: ErrorCode,
    pub(crate) message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub(crate) trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub(crate) details: Option<Value>,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        Self {
            code: value.code,
            message: value.message,
            trace_id: value.trace_id,
            details: value.details,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        let ErrorDto {
            code,
            message,
            trace_id,
            details,
        } = value;

        let mut error = Error::try_new(code, message)?;
        // A decoded payload carries its own trace, never the ambient one.
        error.trace_id = None;
        if let Some(trace_id) = trace_id {
            error = error.try_with_trace_id(trace_id)?;
        }
        error.details = details;
        Ok(error)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
