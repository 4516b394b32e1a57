//! Session configuration, loadable from TOML.
//!
//! Every field has a default, so an empty file (or no file) is valid:
//!
//! ```toml
//! [upload]
//! max_file_size_mb = 10
//!
//! [display]
//! max_width = 1024
//! max_height = 768
//!
//! [client]
//! timeout_secs = 30
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::upload::{DisplayBounds, ImageDimensions, UploadPolicy, BYTES_PER_MB};
use crate::{Error, Result};

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Whole-request timeout; unset means wait for the backend indefinitely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Configuration for a [`ChatSession`](crate::ChatSession).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChatConfig {
    pub upload: UploadPolicy,
    pub display: DisplayBounds,
    /// Dimensions used when an image cannot be decoded
    pub fallback_image: ImageDimensions,
    pub client: ClientConfig,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            upload: UploadPolicy::default(),
            display: DisplayBounds::default(),
            fallback_image: ImageDimensions::new(400, 300),
            client: ClientConfig::default(),
        }
    }
}

impl ChatConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Load from a file, falling back to defaults when it does not exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config file {} not found; using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    fn check(&self) -> Result<()> {
        if self.display.max_width == 0 || self.display.max_height == 0 {
            return Err(Error::Config("display bounds must be non-zero".to_string()));
        }
        if self.upload.max_file_size_mb > u64::MAX / BYTES_PER_MB {
            return Err(Error::Config(format!(
                "max_file_size_mb must be at most {}",
                u64::MAX / BYTES_PER_MB
            )));
        }
        if self.upload.allowed_extensions.is_empty() {
            return Err(Error::Config("allowed_extensions must not be empty".to_string()));
        }
        Ok(())
    }
}
