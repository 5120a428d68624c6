//! Configuration resolution: API key and host.
//!
//! Values are taken from an explicit argument first, then from an [`EnvSource`],
//! then from built-in defaults. The API key has no default; resolving without one
//! fails with a configuration error before any network I/O.
//!
//! Loading `.env` files is left to the application. Anything that can answer a
//! string lookup can stand in for the environment.

use crate::{Error, ErrorContext, Result};
use std::collections::HashMap;
use std::time::Duration;

/// Default API host.
pub const DEFAULT_HOST: &str = "https://api.typecast.ai";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "TYPECAST_API_KEY";

/// Environment variable holding an alternative API host.
pub const API_HOST_ENV: &str = "TYPECAST_API_HOST";

/// Default whole-call timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// String lookup capability used in place of direct environment access.
pub trait EnvSource: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Effective configuration after resolution.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_key: String,
    pub host: String,
}

impl std::fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("api_key", &mask_api_key(&self.api_key))
            .field("host", &self.host)
            .finish()
    }
}

/// Resolve `(api_key, host)` from explicit values, then `env`, then defaults.
///
/// Empty or whitespace-only values count as unset at every level.
pub fn resolve(
    api_key: Option<&str>,
    host: Option<&str>,
    env: &dyn EnvSource,
) -> Result<ResolvedConfig> {
    let api_key = non_blank(api_key.map(str::to_string))
        .or_else(|| non_blank(env.var(API_KEY_ENV)))
        .ok_or_else(|| {
            Error::configuration_with_context(
                format!(
                    "API key is required: pass it explicitly or set {}",
                    API_KEY_ENV
                ),
                ErrorContext::new()
                    .with_field_path(API_KEY_ENV)
                    .with_source("config"),
            )
        })?;

    let host = non_blank(host.map(str::to_string))
        .or_else(|| non_blank(env.var(API_HOST_ENV)))
        .unwrap_or_else(|| DEFAULT_HOST.to_string());

    Ok(ResolvedConfig {
        api_key,
        host: normalize_host(&host),
    })
}

/// Strip exactly one trailing slash.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim();
    host.strip_suffix('/').unwrap_or(host).to_string()
}

/// Mask an API key for display: first and last four characters only.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "****".to_string()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
