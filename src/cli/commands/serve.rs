//! Serve command implementation.

use crate::models::config::Config;
use crate::services::pinecone::PineconeConnector;
use crate::web::{self, AppState};
use crate::Result;
use colored::Colorize;
use std::sync::Arc;

/// Run the web UI until interrupted.
pub async fn serve(config: &Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut server = config.server.clone();
    if let Some(host) = host {
        server.host = host;
    }
    if let Some(port) = port {
        server.port = port;
    }

    println!(
        "{} http://{}:{}",
        "🔍 Pinecone API Checker running at".bold().cyan(),
        server.host,
        server.port
    );

    let connector = Arc::new(PineconeConnector::new(config.pinecone.clone()));
    web::serve(&server, AppState::from_env(connector)).await
}
