//! Service-account authentication.
//!
//! Exchanges a JWT assertion signed with a service-account JSON key for an
//! OAuth2 access token (JWT bearer grant). The key file is read when a
//! token is first needed, so a missing or broken key fails the file being
//! processed rather than the whole run. Tokens are cached until shortly
//! before they expire.

use crate::error::{CensorError, CensorResult};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

const SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
const EXPIRY_MARGIN_SECS: i64 = 60;

/// Fields of a service-account key file this client needs
#[derive(Debug, Deserialize)]
struct ServiceAccountKey {
    client_email: String,
    private_key: String,
    #[serde(default)]
    private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// JWT assertion claims
#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

struct CachedToken {
    value: String,
    expires_at: i64,
}

/// Access-token source backed by a service-account key file.
pub struct ServiceAccountTokenSource {
    path: PathBuf,
    client: reqwest::blocking::Client,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountTokenSource {
    pub fn new(path: impl Into<PathBuf>, client: reqwest::blocking::Client) -> Self {
        Self {
            path: path.into(),
            client,
            cached: Mutex::new(None),
        }
    }

    /// Returns a valid access token, fetching a new one when needed.
    pub fn access_token(&self) -> CensorResult<String> {
        let now = chrono::Utc::now().timestamp();
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(token) = cached
            .as_ref()
            .filter(|t| t.expires_at - EXPIRY_MARGIN_SECS > now)
        {
            return Ok(token.value.clone());
        }

        let key = self.load_key()?;
        let assertion = sign_assertion(&key, now)?;
        let token = self.exchange(&key.token_uri, &assertion)?;
        tracing::debug!(account = %key.client_email, "fetched service-account token");

        let value = token.access_token.clone();
        *cached = Some(CachedToken {
            value: token.access_token,
            expires_at: now + token.expires_in.unwrap_or(ASSERTION_LIFETIME_SECS),
        });
        Ok(value)
    }

    fn load_key(&self) -> CensorResult<ServiceAccountKey> {
        let raw = fs::read_to_string(&self.path).map_err(|e| CensorError::Credentials {
            reason: format!(
                "cannot read service-account key '{}': {}",
                self.path.display(),
                e
            ),
        })?;
        serde_json::from_str(&raw).map_err(|e| CensorError::Credentials {
            reason: format!(
                "invalid service-account key '{}': {}",
                self.path.display(),
                e
            ),
        })
    }

    fn exchange(&self, token_uri: &str, assertion: &str) -> CensorResult<TokenResponse> {
        let response = self
            .client
            .post(token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion)])
            .send()
            .map_err(|e| CensorError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(CensorError::RemoteService {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .map_err(|e| CensorError::Http(e.without_url()))
    }
}

fn sign_assertion(key: &ServiceAccountKey, now: i64) -> CensorResult<String> {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    let claims = Claims {
        iss: &key.client_email,
        scope: SCOPE,
        aud: &key.token_uri,
        iat: now,
        exp: now + ASSERTION_LIFETIME_SECS,
    };

    let signing_key =
        EncodingKey::from_rsa_pem(key.private_key.as_bytes()).map_err(|e| {
            CensorError::Credentials {
                reason: format!("invalid service-account private key: {}", e),
            }
        })?;
    encode(&header, &claims, &signing_key).map_err(|e| CensorError::Credentials {
        reason: format!("cannot sign token assertion: {}", e),
    })
}
