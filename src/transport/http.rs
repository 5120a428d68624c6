use super::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Default [`Transport`] backed by a shared `reqwest::Client`.
///
/// `reqwest::Client` is reference counted internally, so clones share one
/// connection pool and an in-flight call keeps its connection even after the
/// owning client has released its handle.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Build a transport with its own connection pool.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| crate::Error::configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, timeout })
    }

    /// Wrap a caller-provided client. The timeout is applied per request so it
    /// holds even if the client was built without one.
    pub fn from_client(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .timeout(self.timeout);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(TransportError::from)?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(TransportError::from)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
