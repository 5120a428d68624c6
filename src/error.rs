use crate::error_code::ErrorKind;
use crate::transport::TransportError;
use thiserror::Error;

/// Message used when an error response carries no usable body.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Structured context attached to locally raised errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Request field or configuration key that caused the error (e.g. "output.volume")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g. the accepted range)
    pub details: Option<String>,
    /// Where the error was raised (e.g. "config", "validation")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the Typecast client.
///
/// Local errors (`Configuration`, `Validation`, `Closed`) are raised before any
/// network I/O and report status 0. `Api` errors always carry the HTTP status
/// and, when one was sent, the raw response body.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Decode error (HTTP {status}): {message}")]
    Decode {
        message: String,
        status: u16,
        body: Option<String>,
        source: Option<serde_json::Error>,
    },

    #[error("{kind} (HTTP {status}): {message}")]
    Api {
        kind: ErrorKind,
        status: u16,
        message: String,
        body: Option<String>,
    },

    #[error("Client closed: the transport has been released")]
    Closed,
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a configuration error without context.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new().with_source("config"))
    }

    /// Create a configuration error with structured context.
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a validation error with structured context.
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    /// Create a decode error for a 2xx body that could not be parsed.
    pub fn decode(
        msg: impl Into<String>,
        status: u16,
        body: &[u8],
        source: Option<serde_json::Error>,
    ) -> Self {
        Error::Decode {
            message: msg.into(),
            status,
            body: body_text(body),
            source,
        }
    }

    /// Create a status-mapped API error directly.
    pub fn api(kind: ErrorKind, status: u16, msg: impl Into<String>, body: Option<String>) -> Self {
        Error::Api {
            kind,
            status,
            message: msg.into(),
            body,
        }
    }

    /// Map a non-2xx status code and its (possibly empty) body to a typed error.
    ///
    /// This is a pure function: no I/O, no retained state.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        Error::Api {
            kind: ErrorKind::from_http_status(status),
            status,
            message: extract_message(body),
            body: body_text(body),
        }
    }

    /// The kind discriminant of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Configuration { .. } => ErrorKind::Configuration,
            Error::Validation { .. } => ErrorKind::Validation,
            Error::Transport(_) => ErrorKind::Network,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Api { kind, .. } => *kind,
            Error::Closed => ErrorKind::Closed,
        }
    }

    /// HTTP status of the response that produced this error, or 0 when no
    /// response was involved.
    pub fn status(&self) -> u16 {
        match self {
            Error::Api { status, .. } | Error::Decode { status, .. } => *status,
            _ => 0,
        }
    }

    /// Raw response body, when the error came from a server response.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Api { body, .. } | Error::Decode { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    /// The bare message, without the kind/status prefix used by `Display`.
    pub fn message(&self) -> String {
        match self {
            Error::Configuration { message, .. }
            | Error::Validation { message, .. }
            | Error::Decode { message, .. }
            | Error::Api { message, .. } => message.clone(),
            Error::Transport(e) => e.to_string(),
            Error::Closed => "client closed".to_string(),
        }
    }

    /// Extract error context if available.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } | Error::Validation { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }

    /// Whether the underlying network call timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(TransportError::Http(e)) if e.is_timeout())
    }
}

fn body_text(body: &[u8]) -> Option<String> {
    if body.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(body).into_owned())
    }
}

/// Pick the most specific message out of an error body.
///
/// Preference order: `detail`, `message`, `error` (structured values are
/// stringified as JSON), then the raw body text, then [`UNKNOWN_ERROR_MESSAGE`].
/// Null and blank string values are skipped.
pub fn extract_message(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return UNKNOWN_ERROR_MESSAGE.to_string();
    }

    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(trimmed)
    {
        for key in ["detail", "message", "error"] {
            match map.get(key) {
                Some(serde_json::Value::String(s)) if s.trim().is_empty() => continue,
                Some(serde_json::Value::String(s)) => return s.clone(),
                Some(serde_json::Value::Null) | None => continue,
                Some(other) => return other.to_string(),
            }
        }
    }

    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_string() {
        assert_eq!(extract_message(br#"{"detail":"Invalid API key"}"#), "Invalid API key");
    }

    #[test]
    fn test_extract_prefers_detail_over_message() {
        let body = br#"{"message":"second","detail":"first","error":"third"}"#;
        assert_eq!(extract_message(body), "first");
    }

    #[test]
    fn test_extract_structured_detail_is_stringified() {
        let body = br#"{"detail":[{"loc":["body","text"],"msg":"field required"}]}"#;
        let msg = extract_message(body);
        assert!(msg.starts_with('['));
        assert!(msg.contains("field required"));
    }

    #[test]
    fn test_extract_falls_back_through_keys() {
        assert_eq!(extract_message(br#"{"message":"quota"}"#), "quota");
        assert_eq!(extract_message(br#"{"error":"boom"}"#), "boom");
        assert_eq!(extract_message(br#"{"detail":null,"error":"boom"}"#), "boom");
    }

    #[test]
    fn test_extract_skips_blank_strings() {
        let err = Error::from_response(400, br#"{"detail":"","message":"real"}"#);
        assert_eq!(err.message(), "real");
        assert_eq!(extract_message(br#"{"detail":"  ","message":"","error":"last"}"#), "last");
    }

    #[test]
    fn test_extract_raw_body_and_empty() {
        assert_eq!(extract_message(b"Voice not found"), "Voice not found");
        assert_eq!(extract_message(br#"{"code":7}"#), r#"{"code":7}"#);
        assert_eq!(extract_message(b""), UNKNOWN_ERROR_MESSAGE);
        assert_eq!(extract_message(b"   \n"), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_from_response_preserves_status_and_body() {
        let err = Error::from_response(503, br#"{"detail":"maintenance"}"#);
        assert_eq!(err.kind(), ErrorKind::InternalServer);
        assert_eq!(err.status(), 503);
        assert_eq!(err.message(), "maintenance");
        assert_eq!(err.body(), Some(r#"{"detail":"maintenance"}"#));
    }

    #[test]
    fn test_from_response_unmapped_status() {
        let err = Error::from_response(418, b"");
        assert_eq!(err.kind(), ErrorKind::Other);
        assert_eq!(err.status(), 418);
        assert_eq!(err.message(), UNKNOWN_ERROR_MESSAGE);
        assert!(err.body().is_none());
        assert_eq!(err.to_string(), "API error (HTTP 418): Unknown error");
    }

    #[test]
    fn test_local_errors_report_status_zero() {
        let err = Error::validation_with_context(
            "volume out of range",
            ErrorContext::new().with_field_path("output.volume"),
        );
        assert_eq!(err.status(), 0);
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("output.volume")
        );
        assert_eq!(Error::configuration("missing key").status(), 0);
        assert_eq!(Error::Closed.kind(), ErrorKind::Closed);
    }

    #[test]
    fn test_decode_error_keeps_status() {
        let err = Error::decode("unexpected response body", 200, b"<html>", None);
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.status(), 200);
        assert_eq!(err.body(), Some("<html>"));
        assert_eq!(err.to_string(), "Decode error (HTTP 200): unexpected response body");
    }

    #[test]
    fn test_display_includes_context() {
        let err = Error::validation_with_context(
            "text is empty",
            ErrorContext::new().with_field_path("text"),
        );
        assert_eq!(err.to_string(), "Validation error: text is empty (field: text)");
    }
}
