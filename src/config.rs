//! Remote-service configuration.
//!
//! Credential material is passed in explicitly (from CLI flags or the
//! environment) and is never read from a fixed relative path.

use crate::error::{CensorError, CensorResult};
use std::path::PathBuf;
use std::time::Duration;

/// Default base URL of the Cloud Natural Language API.
pub const DEFAULT_ENDPOINT: &str = "https://language.googleapis.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How to authenticate against the remote service.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// API key sent in the `x-goog-api-key` header
    ApiKey(String),
    /// OAuth2 access token sent as a bearer token
    AccessToken(String),
    /// Service-account JSON key file exchanged for access tokens
    ServiceAccount(PathBuf),
}

// Keep secrets out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("ApiKey(***)"),
            Self::AccessToken(_) => f.write_str("AccessToken(***)"),
            Self::ServiceAccount(path) => f.debug_tuple("ServiceAccount").field(path).finish(),
        }
    }
}

impl Credentials {
    /// Picks credentials from the optional sources.
    ///
    /// Precedence: API key, then access token, then service-account file.
    pub fn resolve(
        api_key: Option<String>,
        access_token: Option<String>,
        service_account: Option<PathBuf>,
    ) -> Option<Self> {
        let non_empty = |s: &String| !s.trim().is_empty();
        api_key
            .filter(non_empty)
            .map(Self::ApiKey)
            .or_else(|| access_token.filter(non_empty).map(Self::AccessToken))
            .or_else(|| {
                service_account
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(Self::ServiceAccount)
            })
    }
}

/// Settings for the remote entity-analysis client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub credentials: Option<Credentials>,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ServiceConfig {
    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Checks the endpoint and timeout before a client is built.
    pub fn validate(&self) -> CensorResult<()> {
        let endpoint = self.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(CensorError::InvalidInput {
                parameter: "endpoint".to_string(),
                reason: format!("'{}' is not an http(s) URL", self.endpoint),
            });
        }
        if self.timeout.is_zero() {
            return Err(CensorError::InvalidInput {
                parameter: "timeout".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
