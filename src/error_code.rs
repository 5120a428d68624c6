//! Error kinds and the HTTP status mapping table.
//!
//! Every [`crate::Error`] carries exactly one [`ErrorKind`]. Callers that only
//! care about "what went wrong" can match on the kind instead of the full error.
//!
//! ## Status mapping
//!
//! | Status        | Kind                  |
//! |---------------|-----------------------|
//! | 400           | `BadRequest`          |
//! | 401           | `Unauthorized`        |
//! | 402           | `PaymentRequired`     |
//! | 403           | `Forbidden`           |
//! | 404           | `NotFound`            |
//! | 422           | `UnprocessableEntity` |
//! | 429           | `RateLimited`         |
//! | 500, 502, 503 | `InternalServer`      |
//! | anything else | `Other`               |
//!
//! ## Example
//!
//! ```rust
//! use typecast::error_code::ErrorKind;
//!
//! let kind = ErrorKind::from_http_status(429);
//! assert_eq!(kind, ErrorKind::RateLimited);
//! assert_eq!(kind.name(), "rate_limited");
//! assert!(kind.is_remote());
//! ```

use std::fmt;

/// Discriminant shared by every error the client can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No API key could be resolved, or the client could not be configured.
    Configuration,
    /// A request field is out of bounds; detected before any network I/O.
    Validation,
    /// Connection failure, timeout, or an interrupted body read.
    Network,
    /// A 2xx response whose body did not match the expected schema.
    Decode,
    /// The client was closed before the call started.
    Closed,
    /// HTTP 400
    BadRequest,
    /// HTTP 401: invalid or missing API key
    Unauthorized,
    /// HTTP 402: insufficient credits
    PaymentRequired,
    /// HTTP 403
    Forbidden,
    /// HTTP 404, or an empty V1 single-voice lookup
    NotFound,
    /// HTTP 422: the server rejected the request payload
    UnprocessableEntity,
    /// HTTP 429
    RateLimited,
    /// HTTP 500, 502 or 503
    InternalServer,
    /// Any other non-2xx status.
    Other,
}

impl ErrorKind {
    /// Returns the snake_case name of the kind (e.g. `"not_found"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Validation => "validation",
            Self::Network => "network",
            Self::Decode => "decode",
            Self::Closed => "closed",
            Self::BadRequest => "bad_request",
            Self::Unauthorized => "unauthorized",
            Self::PaymentRequired => "payment_required",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::UnprocessableEntity => "unprocessable_entity",
            Self::RateLimited => "rate_limited",
            Self::InternalServer => "internal_server",
            Self::Other => "other",
        }
    }

    /// Returns a short human-readable title, used in error display strings.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Configuration => "Configuration error",
            Self::Validation => "Validation error",
            Self::Network => "Network error",
            Self::Decode => "Decode error",
            Self::Closed => "Client closed",
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::PaymentRequired => "Payment Required",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::UnprocessableEntity => "Unprocessable Entity",
            Self::RateLimited => "Too Many Requests",
            Self::InternalServer => "Internal Server Error",
            Self::Other => "API error",
        }
    }

    /// Whether errors of this kind are raised before any network I/O.
    #[inline]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Configuration | Self::Validation | Self::Closed)
    }

    /// Whether errors of this kind come from a non-2xx HTTP response.
    #[inline]
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::BadRequest
                | Self::Unauthorized
                | Self::PaymentRequired
                | Self::Forbidden
                | Self::NotFound
                | Self::UnprocessableEntity
                | Self::RateLimited
                | Self::InternalServer
                | Self::Other
        )
    }

    /// Maps a non-2xx HTTP status code to its kind.
    ///
    /// Only 500, 502 and 503 count as `InternalServer`; other 5xx codes (e.g.
    /// 504) fall through to `Other` with the raw status preserved on the error.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            402 => Self::PaymentRequired,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            422 => Self::UnprocessableEntity,
            429 => Self::RateLimited,
            500 | 502 | 503 => Self::InternalServer,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
