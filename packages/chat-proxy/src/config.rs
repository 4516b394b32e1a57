//! Proxy configuration.
//!
//! Read from `proxy.toml` in the platform config directory when present;
//! `BACKEND_URL` overrides the backend base URL.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
pub const BACKEND_URL_ENV: &str = "BACKEND_URL";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProxyConfig {
    /// Address the proxy binds to
    pub listen_addr: String,
    /// Base URL of the chat backend, without the `/api/chat` suffix
    pub backend_url: String,
    /// Upstream request timeout; unset waits indefinitely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl ProxyConfig {
    /// `<config dir>/chat-proxy/proxy.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "chat-proxy")
            .map(|dirs| dirs.config_dir().join("proxy.toml"))
    }

    /// Load the default file, then apply the environment override.
    pub fn load() -> Result<Self> {
        let config = match Self::default_path() {
            Some(path) => Self::load_from_path(&path)?,
            None => Self::default(),
        };
        Ok(config.with_backend_override(env::var(BACKEND_URL_ENV).ok()))
    }

    /// Load from a file, falling back to defaults when it does not exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config file {} not found; using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Replace the backend URL when `value` is set and non-blank.
    pub fn with_backend_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value {
            if !url.trim().is_empty() {
                self.backend_url = url.trim().to_string();
            }
        }
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
