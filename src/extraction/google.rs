//! Google Cloud Natural Language entity analysis.
//!
//! Blocking client for `documents:analyzeEntities`. Each call blocks until
//! the service answers or the configured timeout elapses; there are no
//! retries.

use super::service_account::ServiceAccountTokenSource;
use super::{EncodingType, EntityAnalyzer};
use crate::config::{Credentials, ServiceConfig};
use crate::domain::{EntityCategory, EntityMatch};
use crate::error::{CensorError, CensorResult};
use serde::{Deserialize, Serialize};

const ANALYZE_ENTITIES_PATH: &str = "/v1/documents:analyzeEntities";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// analyzeEntities request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeEntitiesRequest<'a> {
    document: Document<'a>,
    encoding_type: EncodingType,
}

#[derive(Debug, Serialize)]
struct Document<'a> {
    #[serde(rename = "type")]
    doc_type: &'static str,
    content: &'a str,
}

/// analyzeEntities response body
#[derive(Debug, Deserialize)]
struct AnalyzeEntitiesResponse {
    #[serde(default)]
    entities: Vec<Entity>,
}

#[derive(Debug, Deserialize)]
struct Entity {
    name: String,
    #[serde(rename = "type", default)]
    entity_type: String,
}

/// How requests are authorized.
enum Auth {
    Missing,
    ApiKey(String),
    AccessToken(String),
    ServiceAccount(ServiceAccountTokenSource),
}

/// Cloud Natural Language API client.
pub struct GoogleLanguageClient {
    client: reqwest::blocking::Client,
    url: String,
    auth: Auth,
}

impl GoogleLanguageClient {
    /// Builds a client from explicit configuration.
    ///
    /// Missing credentials are not an error here; every call then fails
    /// with [`CensorError::Credentials`] so the batch can report it per file.
    pub fn new(config: &ServiceConfig) -> CensorResult<Self> {
        config.validate()?;
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;

        let auth = match &config.credentials {
            None => Auth::Missing,
            Some(Credentials::ApiKey(key)) => Auth::ApiKey(key.clone()),
            Some(Credentials::AccessToken(token)) => Auth::AccessToken(token.clone()),
            Some(Credentials::ServiceAccount(path)) => {
                Auth::ServiceAccount(ServiceAccountTokenSource::new(path, client.clone()))
            }
        };

        Ok(Self {
            client,
            url: format!(
                "{}{}",
                config.endpoint.trim().trim_end_matches('/'),
                ANALYZE_ENTITIES_PATH
            ),
            auth,
        })
    }

    fn authorized(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> CensorResult<reqwest::blocking::RequestBuilder> {
        match &self.auth {
            Auth::ApiKey(key) => Ok(request.header(API_KEY_HEADER, key)),
            Auth::AccessToken(token) => Ok(request.bearer_auth(token)),
            Auth::ServiceAccount(source) => Ok(request.bearer_auth(source.access_token()?)),
            Auth::Missing => Err(CensorError::Credentials {
                reason: "set GOOGLE_API_KEY, GOOGLE_ACCESS_TOKEN or GOOGLE_APPLICATION_CREDENTIALS \
                         (or pass --api-key / --access-token / --credentials)"
                    .to_string(),
            }),
        }
    }
}

impl EntityAnalyzer for GoogleLanguageClient {
    fn analyze_entities(
        &self,
        text: &str,
        encoding: EncodingType,
    ) -> CensorResult<Vec<EntityMatch>> {
        let body = AnalyzeEntitiesRequest {
            document: Document {
                doc_type: "PLAIN_TEXT",
                content: text,
            },
            encoding_type: encoding,
        };

        // Errors carry no URL so endpoints and credentials never reach the report.
        let request = self.authorized(self.client.post(&self.url))?;
        let response = request
            .json(&body)
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

        let parsed: AnalyzeEntitiesResponse = response
            .json()
            .map_err(|e| CensorError::Http(e.without_url()))?;
        Ok(parsed
            .entities
            .into_iter()
            .map(|e| EntityMatch::new(e.name, EntityCategory::from_label(&e.entity_type)))
            .collect())
    }

    fn name(&self) -> &str {
        "google-natural-language"
    }
}
