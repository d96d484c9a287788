//! Pinecone API Checker
//!
//! A small web UI that tests a Pinecone API key and lists the number of indexes.

use clap::Parser;
use pinecone_checker::cli::{
    args::{Cli, Commands},
    commands::{check, serve, status},
};
use pinecone_checker::models::config::{load_config, load_env_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Seed the environment from .env before anything reads it
    load_env_file();
    let config = load_config(cli.config.as_deref())?;

    // Run the appropriate command
    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    }) {
        Commands::Serve { host, port } => {
            serve::serve(&config, host, port).await?;
        }

        Commands::Check => {
            let result = check::check(&config.pinecone).await;
            if !result.is_success() {
                anyhow::bail!("Pinecone connection check failed.");
            }
        }

        Commands::Status => {
            status::status();
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("pinecone_checker=debug")
    } else {
        EnvFilter::new("pinecone_checker=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
