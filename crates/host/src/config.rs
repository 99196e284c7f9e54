//! Configuration system for kinetics-web
//!
//! Reads config from ~/.config/kinetics-web/config.toml, then applies
//! `KINETICS_*` environment overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub http_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            http_port: 8080,
        }
    }
}

/// Where `/data` requests are forwarded
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the computation service, e.g. `http://127.0.0.1:5000`
    pub url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: 30,
        }
    }
}

/// Static UI assets (index.html, pkg/)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub dir: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("crates/ui"),
        }
    }
}

/// Full application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub assets: AssetConfig,
}

impl Config {
    /// Load configuration from default path, then the environment
    pub fn load() -> Self {
        let config_path = Self::default_config_path();
        let mut config = match Self::load_from_path(&config_path) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring {}: {e}", config_path.display());
                Self::default()
            }
        };
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Get default config path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kinetics-web")
            .join("config.toml")
    }

    /// Load from specific path; `Ok(None)` if the file does not exist
    pub fn load_from_path(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        Ok(Some(toml::from_str(&content)?))
    }

    /// Apply `KINETICS_BIND`, `KINETICS_PORT`, `KINETICS_UPSTREAM`, `KINETICS_ASSETS`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(bind) = lookup("KINETICS_BIND") {
            self.server.bind = bind;
        }
        if let Some(port) = lookup("KINETICS_PORT") {
            match port.parse() {
                Ok(port) => self.server.http_port = port,
                Err(_) => tracing::warn!("KINETICS_PORT={port} is not a port, keeping {}", self.server.http_port),
            }
        }
        if let Some(url) = lookup("KINETICS_UPSTREAM") {
            self.upstream.url = Some(url).filter(|u| !u.trim().is_empty());
        }
        if let Some(dir) = lookup("KINETICS_ASSETS") {
            self.assets.dir = PathBuf::from(dir);
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.http_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.http_port, 8080);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert!(config.upstream.url.is_none());
        assert_eq!(config.upstream.timeout_secs, 30);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nhttp_port = 9090\n\n[upstream]\nurl = \"http://127.0.0.1:5000\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(config.server.http_port, 9090);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.upstream.url.as_deref(), Some("http://127.0.0.1:5000"));
        assert_eq!(config.upstream.timeout_secs, 30);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from_path(&dir.path().join("nope.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nhttp_port = ").unwrap();
        assert!(Config::load_from_path(&path).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("KINETICS_PORT", "7000"),
            ("KINETICS_UPSTREAM", "http://compute:5000"),
            ("KINETICS_ASSETS", "/srv/ui"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env(|k| env.get(k).map(ToString::to_string));
        assert_eq!(config.server.http_port, 7000);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.upstream.url.as_deref(), Some("http://compute:5000"));
        assert_eq!(config.assets.dir, PathBuf::from("/srv/ui"));
    }

    #[test]
    fn test_bad_port_is_ignored() {
        let mut config = Config::default();
        config.apply_env(|k| (k == "KINETICS_PORT").then(|| "eighty".to_string()));
        assert_eq!(config.server.http_port, 8080);
    }

    #[test]
    fn test_empty_upstream_clears() {
        let mut config = Config::default();
        config.upstream.url = Some("http://x".to_string());
        config.apply_env(|k| (k == "KINETICS_UPSTREAM").then(String::new));
        assert!(config.upstream.url.is_none());
    }
}
