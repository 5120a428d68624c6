//! Transport seam between the client and the network.
//!
//! The client builds a complete [`HttpRequest`] (method, URL, fixed header set,
//! body) and hands it to a [`Transport`], which performs exactly one exchange and
//! returns the status, headers and raw body bytes. Status interpretation happens
//! in the client, never here.

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::Method;
use url::Url;

/// A fully built outgoing request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// A received response with its body fully read.
///
/// The body is raw bytes on every path: audio on a successful synthesis,
/// JSON text on voice listings and on every error.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First value of a header as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Performs one HTTP exchange per call.
///
/// Implementations must be safe to share across concurrent calls. Dropping the
/// returned future cancels the exchange.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> crate::Result<HttpResponse>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a custom [`Transport`] implementation.
    #[error("Transport error: {0}")]
    Other(String),
}
