//! Pinecone control plane client.
//!
//! Only the "list indexes" operation is implemented. The checker talks to
//! it through [`Connector`] and [`IndexService`], so a simulated service can
//! stand in for the real one.

use crate::models::config::{ApiKey, PineconeSettings};
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const USER_AGENT: &str = concat!("pinecone-checker/", env!("CARGO_PKG_VERSION"));

/// Something that can list the indexes of an account.
#[async_trait]
pub trait IndexService: Send + Sync {
    async fn list_indexes(&self) -> Result<Vec<IndexModel>>;
}

/// Builds an [`IndexService`] for a given API key.
pub trait Connector: Send + Sync {
    fn connect(&self, api_key: &ApiKey) -> Result<Box<dyn IndexService>>;
}

/// List indexes response.
#[derive(Debug, Deserialize)]
pub struct IndexList {
    #[serde(default)]
    pub indexes: Vec<IndexModel>,
}

/// Index description.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexModel {
    pub name: String,
    pub dimension: Option<u32>,
    pub metric: Option<String>,
    pub host: Option<String>,
    pub status: Option<IndexStatus>,
}

/// Index readiness.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexStatus {
    pub ready: bool,
    pub state: String,
}

/// Error body returned by the control plane.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    code: Option<String>,
    message: Option<String>,
}

/// Pinecone API client bound to one API key.
pub struct PineconeClient {
    settings: PineconeSettings,
    api_key: ApiKey,
    client: reqwest::Client,
}

impl PineconeClient {
    /// Create a new Pinecone client.
    pub fn new(settings: PineconeSettings, api_key: ApiKey) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            settings,
            api_key,
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.settings.controller_host.trim_end_matches('/'),
            path
        )
    }

    /// List all indexes in the project the key belongs to.
    pub async fn list_indexes(&self) -> Result<Vec<IndexModel>> {
        let url = self.url("indexes");
        tracing::debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .header("Api-Key", self.api_key.expose())
            .header("X-Pinecone-API-Version", &self.settings.api_version)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let message = error_message(&body)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

            return Err(match status.as_u16() {
                401 | 403 => Error::Unauthorized(message),
                code => Error::Service {
                    status: code,
                    message,
                },
            });
        }

        let list: IndexList =
            serde_json::from_str(&body).map_err(|e| Error::MalformedResponse(e.to_string()))?;
        tracing::debug!("Pinecone returned {} indexes", list.indexes.len());
        Ok(list.indexes)
    }
}

#[async_trait]
impl IndexService for PineconeClient {
    async fn list_indexes(&self) -> Result<Vec<IndexModel>> {
        PineconeClient::list_indexes(self).await
    }
}

/// Extract a human-readable message from an error response body.
fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<ApiErrorBody>(trimmed) {
        Ok(parsed) => {
            let detail = parsed.error.and_then(|d| match (d.message, d.code) {
                (Some(m), _) if !m.is_empty() => Some(m),
                (_, Some(c)) if !c.is_empty() => Some(c),
                _ => None,
            });
            detail
                .or(parsed.message.filter(|m| !m.is_empty()))
                .or_else(|| Some(trimmed.to_string()))
        }
        Err(_) => Some(trimmed.to_string()),
    }
}

/// Connector producing real [`PineconeClient`]s.
#[derive(Debug, Clone, Default)]
pub struct PineconeConnector {
    settings: PineconeSettings,
}

impl PineconeConnector {
    pub fn new(settings: PineconeSettings) -> Self {
        Self { settings }
    }
}

impl Connector for PineconeConnector {
    fn connect(&self, api_key: &ApiKey) -> Result<Box<dyn IndexService>> {
        let client = PineconeClient::new(self.settings.clone(), api_key.clone())?;
        Ok(Box::new(client))
    }
}
