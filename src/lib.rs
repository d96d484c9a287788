//! Pinecone API Checker Library
//!
//! Checks whether a configured API key can authenticate against Pinecone
//! and reports the number of indexes, from a small web UI or the CLI.

pub mod cli;
pub mod error;
pub mod models;
pub mod preflight;
pub mod services;
pub mod web;

pub use error::{Error, ErrorKind, Result};
