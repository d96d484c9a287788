//! Command line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pinecone API Checker - Test your Pinecone API key
#[derive(Parser, Debug)]
#[command(name = "pinecone-checker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config.toml file
    #[arg(long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web UI (default)
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Test the Pinecone connection once and exit
    Check,

    /// Show whether an API key is configured
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["pinecone-checker"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_serve_overrides() {
        let cli =
            Cli::try_parse_from(["pinecone-checker", "serve", "--host", "0.0.0.0", "-p", "9000"])
                .unwrap();
        match cli.command {
            Some(Commands::Serve { host, port }) => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["pinecone-checker", "check", "-v", "--config", "c.toml"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Check)));
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }
}
