//! Pinecone API connectivity check.

use super::CheckResult;
use crate::models::config::Credentials;
use crate::services::pinecone::Connector;

/// Check whether the configured key can list indexes.
///
/// Returns `MissingKey` without touching the connector when no key is set.
/// Every other failure, whether building the client or listing, becomes an
/// `ExceptionMessage` carrying the error text.
pub async fn check(credentials: &Credentials, connector: &dyn Connector) -> CheckResult {
    let Some(api_key) = credentials.api_key.as_ref() else {
        tracing::info!("Pinecone check skipped: API key not configured");
        return CheckResult::missing_key();
    };

    let outcome = match connector.connect(api_key) {
        Ok(client) => client.list_indexes().await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(indexes) => {
            tracing::info!("Pinecone check succeeded: {} indexes", indexes.len());
            CheckResult::success(indexes.len())
        }
        Err(e) => {
            tracing::warn!("Pinecone check failed ({:?}): {}", e.kind(), e);
            CheckResult::exception(e.to_string())
        }
    }
}
