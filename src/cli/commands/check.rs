//! Check command implementation.

use crate::models::config::{Credentials, PineconeSettings};
use crate::preflight::{self, CheckResult};
use crate::services::pinecone::PineconeConnector;
use colored::Colorize;

/// Run one connectivity check and print the outcome.
pub async fn check(settings: &PineconeSettings) -> CheckResult {
    println!("{}", "Checking connection...".bold());
    println!();

    let connector = PineconeConnector::new(settings.clone());
    let result = preflight::pinecone::check(&Credentials::from_env(), &connector).await;
    preflight::print_result(&result);

    result
}
