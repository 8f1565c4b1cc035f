//! Domain-level error type.
//!
//! Errors are transport agnostic. The HTTP adapter maps them onto status
//! codes; the JSON payload shape is defined here so every adapter reports
//! failures the same way:
//!
//! ```json
//! {"code": "not_found", "error": "registration not found", "params": {"value": "a"}}
//! ```

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::trace_id::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The caller is not allowed to read the resource.
    Unauthorized,
    /// The requested resource does not exist.
    NotFound,
}

/// Domain error with an explanation and the offending parameters.
///
/// ## Invariants
/// - `message` is non-empty once trimmed.
///
/// # Examples
/// ```
/// use birdhouse_mock::domain::{Error, ErrorCode};
/// use serde_json::json;
///
/// let err = Error::not_found("registration not found").with_params(json!({"value": "a"}));
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.params(), Some(&json!({"value": "a"})));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "ErrorDto")]
pub struct Error {
    code: ErrorCode,
    message: String,
    params: Option<Value>,
    trace_id: Option<String>,
}

impl Error {
    /// Create an error, capturing the trace identifier in scope.
    ///
    /// A blank message is replaced by a generic explanation.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "unspecified error".to_owned()
        } else {
            message
        };
        Self {
            code,
            message,
            params: None,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable explanation.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The parameters that caused the failure.
    #[must_use]
    pub const fn params(&self) -> Option<&Value> {
        self.params.as_ref()
    }

    /// Correlation identifier captured when the error was built.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach the offending parameters.
    #[must_use]
    pub fn with_params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

/// Wire shape of [`Error`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDto {
    code: ErrorCode,
    #[serde(rename = "error")]
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        Self {
            code: value.code,
            message: value.message,
            params: value.params,
            trace_id: value.trace_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::*;

    const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

    #[fixture]
    fn trace_id() -> TraceId {
        TRACE_ID.parse().expect("fixture trace id is a UUID")
    }

    #[rstest]
    #[case(Error::unauthorized("nope"), ErrorCode::Unauthorized)]
    #[case(Error::not_found("missing"), ErrorCode::NotFound)]
    fn constructors_set_codes(#[case] error: Error, #[case] expected: ErrorCode) {
        assert_eq!(error.code(), expected);
    }

    #[rstest]
    fn new_substitutes_blank_messages() {
        assert_eq!(Error::not_found(" ").message(), "unspecified error");
    }

    #[rstest]
    fn new_has_no_trace_id_out_of_scope() {
        assert!(Error::not_found("missing").trace_id().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn serialises_with_error_params_and_trace_keys(trace_id: TraceId) {
        let error = TraceId::scope(trace_id, async {
            Error::not_found("registration not found").with_params(json!({"value": "a"}))
        })
        .await;
        let value = serde_json::to_value(&error).expect("serialise error");
        assert_eq!(
            value,
            json!({
                "code": "not_found",
                "error": "registration not found",
                "params": {"value": "a"},
                "traceId": TRACE_ID
            })
        );
    }

    #[rstest]
    fn optional_fields_are_omitted() {
        let value = serde_json::to_value(Error::unauthorized("nope")).expect("serialise error");
        assert_eq!(value, json!({"code": "unauthorized", "error": "nope"}));
    }
}
