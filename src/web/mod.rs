//! Web UI.

pub mod handlers;

use crate::models::config::{Credentials, ServerConfig};
use crate::services::pinecone::Connector;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Resolves credentials for each request.
pub type CredentialSource = Arc<dyn Fn() -> Credentials + Send + Sync>;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub connector: Arc<dyn Connector>,
    pub credentials: CredentialSource,
}

impl AppState {
    pub fn new(connector: Arc<dyn Connector>, credentials: CredentialSource) -> Self {
        Self {
            connector,
            credentials,
        }
    }

    /// State that re-reads the process environment on every request.
    pub fn from_env(connector: Arc<dyn Connector>) -> Self {
        Self::new(connector, Arc::new(Credentials::from_env))
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/status", get(handlers::status))
        .route("/api/check", post(handlers::run_check))
        .with_state(state)
}

/// Serve on an already bound listener until the process stops.
pub async fn serve_on(listener: TcpListener, state: AppState) -> crate::Result<()> {
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Bind to the configured address and serve.
pub async fn serve(config: &ServerConfig, state: AppState) -> crate::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Pinecone API Checker listening on http://{}", listener.local_addr()?);
    serve_on(listener, state).await
}
