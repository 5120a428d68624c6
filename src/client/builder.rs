use crate::client::core::TypecastClient;
use crate::client::validation::{RequestLimits, DEFAULT_MAX_TEXT_LENGTH};
use crate::config::{self, EnvSource, ProcessEnv, DEFAULT_TIMEOUT};
use crate::transport::{HttpTransport, Transport};
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`TypecastClient`].
///
/// Explicit values win over the environment, the environment wins over defaults.
pub struct TypecastClientBuilder {
    api_key: Option<String>,
    host: Option<String>,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
    http_client: Option<reqwest::Client>,
    env: Option<Box<dyn EnvSource>>,
    max_text_length: usize,
}

impl TypecastClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            host: None,
            timeout: DEFAULT_TIMEOUT,
            transport: None,
            http_client: None,
            env: None,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API host. A single trailing slash is stripped.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Whole-call timeout (connect + read). Default 30 seconds.
    ///
    /// Ignored when a custom [`Transport`] is injected.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Inject a transport. Takes precedence over [`Self::http_client`].
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Reuse an existing `reqwest::Client` (and its connection pool).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Replace the process environment as the fallback source for key and host.
    pub fn env_source(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Some(Box::new(env));
        self
    }

    /// Maximum accepted `text` length in characters. Default 5000.
    pub fn max_text_length(mut self, max: usize) -> Self {
        self.max_text_length = max;
        self
    }

    /// Build the client. Fails only on local configuration problems; no network I/O.
    pub fn build(self) -> Result<TypecastClient> {
        let env: Box<dyn EnvSource> = self.env.unwrap_or_else(|| Box::new(ProcessEnv));
        let resolved = config::resolve(self.api_key.as_deref(), self.host.as_deref(), env.as_ref())?;

        if self.max_text_length == 0 {
            return Err(Error::configuration_with_context(
                "max_text_length must be greater than zero",
                ErrorContext::new()
                    .with_field_path("max_text_length")
                    .with_source("config"),
            ));
        }

        let transport: Arc<dyn Transport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, http_client) => {
                if self.timeout.is_zero() {
                    return Err(Error::configuration_with_context(
                        "timeout must be greater than zero",
                        ErrorContext::new().with_field_path("timeout").with_source("config"),
                    ));
                }
                match http_client {
                    Some(client) => Arc::new(HttpTransport::from_client(client, self.timeout)),
                    None => Arc::new(HttpTransport::new(self.timeout)?),
                }
            }
        };

        TypecastClient::from_parts(
            resolved,
            transport,
            RequestLimits {
                max_text_length: self.max_text_length,
            },
        )
    }
}

impl Default for TypecastClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
