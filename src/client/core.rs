use crate::client::builder::TypecastClientBuilder;
use crate::client::validation::RequestLimits;
use crate::config::{mask_api_key, ResolvedConfig};
use crate::transport::{HttpRequest, HttpResponse, Transport};
use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use std::fmt;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};
use url::Url;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Client for the Typecast Text-to-Speech API.
///
/// Configuration is fixed at construction; the only shared resource is the
/// transport, so one instance can serve concurrent calls. Each public call
/// performs at most one HTTP request and never retries.
pub struct TypecastClient {
    transport: RwLock<Option<Arc<dyn Transport>>>,
    host: String,
    base_url: Url,
    headers: HeaderMap,
    api_key: String,
    pub(crate) limits: RequestLimits,
}

impl TypecastClient {
    pub fn builder() -> TypecastClientBuilder {
        TypecastClientBuilder::new()
    }

    /// Client with an explicit API key; host from `TYPECAST_API_HOST` or the default.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        TypecastClientBuilder::new().api_key(api_key).build()
    }

    /// Client configured entirely from `TYPECAST_API_KEY` / `TYPECAST_API_HOST`.
    pub fn from_env() -> Result<Self> {
        TypecastClientBuilder::new().build()
    }

    pub(crate) fn from_parts(
        config: ResolvedConfig,
        transport: Arc<dyn Transport>,
        limits: RequestLimits,
    ) -> Result<Self> {
        let base_url = Url::parse(&config.host).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid API host '{}': {}", config.host, e),
                ErrorContext::new().with_field_path("host").with_source("config"),
            )
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::configuration_with_context(
                format!("API host '{}' cannot carry a path", config.host),
                ErrorContext::new().with_field_path("host").with_source("config"),
            ));
        }

        let mut api_key_value = HeaderValue::from_str(&config.api_key).map_err(|_| {
            Error::configuration_with_context(
                "API key contains characters not allowed in an HTTP header",
                ErrorContext::new().with_field_path("api_key").with_source("config"),
            )
        })?;
        api_key_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            transport: RwLock::new(Some(transport)),
            host: config.host,
            base_url,
            headers,
            api_key: config.api_key,
            limits,
        })
    }

    /// Normalized API host, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.host
    }

    pub fn api_key_masked(&self) -> String {
        mask_api_key(&self.api_key)
    }

    pub fn limits(&self) -> RequestLimits {
        self.limits
    }

    /// Release the transport handle.
    ///
    /// Idempotent. Calls already in flight keep the handle they hold and finish
    /// normally; calls started afterwards fail with [`Error::Closed`].
    pub fn close(&self) {
        let mut slot = self
            .transport
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if slot.take().is_some() {
            debug!("typecast client closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.transport
            .read()
            .map(|slot| slot.is_none())
            .unwrap_or_else(|poisoned| poisoned.into_inner().is_none())
    }

    fn transport(&self) -> Result<Arc<dyn Transport>> {
        let slot = self
            .transport
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        slot.clone().ok_or(Error::Closed)
    }

    /// Build `{host}/{segments...}[?query]`. Segments are percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::configuration(format!("API host '{}' cannot carry a path", self.host)))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Send one request with the fixed header set. No status interpretation.
    pub(crate) async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse> {
        let transport = self.transport()?;
        let request = HttpRequest {
            method,
            url,
            headers: self.headers.clone(),
            body,
        };
        debug!(method = %request.method, url = %request.url, "typecast request");

        let result = transport.send(request).await;
        match &result {
            Ok(resp) => debug!(status = resp.status, bytes = resp.body.len(), "typecast response"),
            Err(e) => warn!(error = %e, "typecast request failed"),
        }
        result
    }
}

impl fmt::Debug for TypecastClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypecastClient")
            .field("host", &self.host)
            .field("api_key", &self.api_key_masked())
            .field("limits", &self.limits)
            .field("closed", &self.is_closed())
            .finish()
    }
}
