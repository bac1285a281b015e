//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use url::Url;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Base URL the fragment fetcher reads the JSON API from
    /// (default: this server, `http://127.0.0.1:{port}/`).
    pub api_base_url: Url,

    /// JSON data file with members, projects, articles and reminders.
    /// When unset, the built-in seed data is served.
    pub data_path: Option<PathBuf>,

    /// Clean block text and escape record fields when rendering (default: false).
    pub sanitize_blocks: bool,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let api_base_url = lookup("API_BASE_URL")
            .unwrap_or_else(|| format!("http://127.0.0.1:{port}/"));
        let api_base_url = Url::parse(&api_base_url).context("API_BASE_URL must be a valid URL")?;

        let data_path = lookup("DATA_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let sanitize_blocks = match lookup("SANITIZE_BLOCKS") {
            Some(v) => parse_bool(&v).context("SANITIZE_BLOCKS must be true or false")?,
            None => false,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or_else(|| vec!["*".to_string()]);

        Ok(Self {
            port,
            api_base_url,
            data_path,
            sanitize_blocks,
            cors_allowed_origins,
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("unrecognized boolean: {other}"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.api_base_url.as_str(), "http://127.0.0.1:3000/");
        assert!(config.data_path.is_none());
        assert!(!config.sanitize_blocks);
        assert_eq!(config.cors_allowed_origins, vec!["*"]);
    }

    #[test]
    fn api_base_follows_port() {
        let config = config(&[("PORT", "8080")]).unwrap();
        assert_eq!(config.api_base_url.as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn explicit_values() {
        let config = config(&[
            ("API_BASE_URL", "https://site.example/"),
            ("DATA_PATH", "data/site.json"),
            ("SANITIZE_BLOCKS", "yes"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, https://b.example"),
        ])
        .unwrap();
        assert_eq!(config.api_base_url.host_str(), Some("site.example"));
        assert_eq!(config.data_path, Some(PathBuf::from("data/site.json")));
        assert!(config.sanitize_blocks);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config(&[("PORT", "http")]).is_err());
        assert!(config(&[("API_BASE_URL", "not a url")]).is_err());
        assert!(config(&[("SANITIZE_BLOCKS", "maybe")]).is_err());
    }
}
