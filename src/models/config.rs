//! Configuration model.
//!
//! The API key only ever comes from the environment (`PINECONE_API_KEY`,
//! optionally seeded from a `.env` file). Everything else can be set in
//! `config.toml` and overridden by environment variables:
//! - `PINECONE_CONTROLLER_HOST`: control plane URL (default: https://api.pinecone.io)
//! - `PINECONE_API_VERSION`: API version header (default: 2025-01)
//! - `PINECONE_TIMEOUT`: request timeout in seconds (default: 30)

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "PINECONE_API_KEY";

const DEFAULT_CONTROLLER_HOST: &str = "https://api.pinecone.io";
const DEFAULT_API_VERSION: &str = "2025-01";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8501;

/// A Pinecone API key. Never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw value, rejecting the empty string.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Credentials handed to the connectivity checker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: Option<ApiKey>,
}

/// Whether an API key is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    Found,
    Missing,
}

impl KeyStatus {
    pub fn is_present(self) -> bool {
        self == KeyStatus::Found
    }

    /// Message shown in the environment status panel.
    pub fn message(self) -> &'static str {
        match self {
            KeyStatus::Found => "✅ API key found in .env",
            KeyStatus::Missing => "❌ API key not found in .env",
        }
    }
}

impl Credentials {
    pub fn new(api_key: Option<ApiKey>) -> Self {
        Self { api_key }
    }

    /// Read credentials from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_key: lookup(API_KEY_VAR).and_then(ApiKey::new),
        }
    }

    pub fn key_status(&self) -> KeyStatus {
        if self.api_key.is_some() {
            KeyStatus::Found
        } else {
            KeyStatus::Missing
        }
    }
}

/// Load `.env` from the working directory into the process environment.
///
/// Variables already set are left untouched. A missing file is fine.
pub fn load_env_file() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!("Loaded environment from {}", path.display());
            Some(path)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            tracing::warn!("Ignoring unreadable .env file: {}", e);
            None
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Web server configuration.
    pub server: ServerConfig,
    /// Pinecone API configuration.
    pub pinecone: PineconeSettings,
}

/// Web server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

/// Pinecone API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PineconeSettings {
    /// Control plane base URL.
    pub controller_host: String,
    /// Value of the `X-Pinecone-API-Version` header.
    pub api_version: String,
    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for PineconeSettings {
    fn default() -> Self {
        Self {
            controller_host: DEFAULT_CONTROLLER_HOST.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PineconeSettings {
    /// Apply `PINECONE_*` overrides found through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("PINECONE_CONTROLLER_HOST").filter(|s| !s.is_empty()) {
            self.controller_host = host;
        }
        if let Some(version) = lookup("PINECONE_API_VERSION").filter(|s| !s.is_empty()) {
            self.api_version = version;
        }
        if let Some(timeout) = lookup("PINECONE_TIMEOUT").and_then(|s| s.parse().ok()) {
            self.timeout = timeout;
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pinecone_checker")
}

/// Parse a configuration file.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
}

/// Load configuration.
///
/// An explicit path must exist and parse. Without one, the default
/// location is tried and silently skipped if absent or invalid.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => load_config_file(path)?,
        None => {
            let default_path = dirs_config_path().join("config.toml");
            if default_path.exists() {
                load_config_file(&default_path).unwrap_or_else(|e| {
                    tracing::warn!("Ignoring {}: {}", default_path.display(), e);
                    Config::default()
                })
            } else {
                Config::default()
            }
        }
    };

    config.pinecone.apply_overrides(|name| std::env::var(name).ok());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_credentials_present() {
        let creds = Credentials::from_lookup(lookup_from(&[("PINECONE_API_KEY", "sk-valid")]));
        assert_eq!(creds.api_key.as_ref().map(ApiKey::expose), Some("sk-valid"));
        assert_eq!(creds.key_status(), KeyStatus::Found);
    }

    #[test]
    fn test_credentials_absent_or_empty() {
        let absent = Credentials::from_lookup(lookup_from(&[]));
        assert!(absent.api_key.is_none());
        assert_eq!(absent.key_status(), KeyStatus::Missing);

        let empty = Credentials::from_lookup(lookup_from(&[("PINECONE_API_KEY", "")]));
        assert!(empty.api_key.is_none());
        assert!(!empty.key_status().is_present());
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("sk-secret").unwrap();
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
    }

    #[test]
    fn test_key_status_messages() {
        assert_eq!(KeyStatus::Found.message(), "✅ API key found in .env");
        assert_eq!(KeyStatus::Missing.message(), "❌ API key not found in .env");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.pinecone.controller_host, "https://api.pinecone.io");
        assert_eq!(config.pinecone.timeout, 30);
    }

    #[test]
    fn test_load_partial_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9000\n\n[pinecone]\ncontroller_host = \"http://localhost:5080\"\n",
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.pinecone.controller_host, "http://localhost:5080");
        assert_eq!(config.pinecone.api_version, "2025-01");
    }

    #[test]
    fn test_load_invalid_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_config(Some(&temp_dir.path().join("nope.toml")));
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    #[test]
    fn test_overrides() {
        let mut settings = PineconeSettings::default();
        settings.apply_overrides(lookup_from(&[
            ("PINECONE_CONTROLLER_HOST", "http://127.0.0.1:1234"),
            ("PINECONE_TIMEOUT", "5"),
        ]));
        assert_eq!(settings.controller_host, "http://127.0.0.1:1234");
        assert_eq!(settings.timeout, 5);
        assert_eq!(settings.api_version, "2025-01");
    }

    #[test]
    fn test_unparseable_timeout_is_ignored() {
        let mut settings = PineconeSettings::default();
        settings.apply_overrides(lookup_from(&[("PINECONE_TIMEOUT", "soon")]));
        assert_eq!(settings.timeout, 30);
    }
}
