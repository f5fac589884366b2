//! Configuration for bytebridge.
//!
//! Resolution order: environment variables → config file → defaults.
//!
//! Config file location:
//!   1. $BYTEBRIDGE_CONFIG (explicit override)
//!   2. $XDG_CONFIG_HOME/bytebridge/config.toml
//!   3. ~/.config/bytebridge/config.toml

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::destination::{Destination, DestinationError};

/// Content type sent with every request. The body is binary, but KDC HTTP
/// front ends in the wild expect this header.
pub const DEFAULT_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub transport: TransportConfig,
    pub endpoint: EndpointConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Value of the Content-Type request header.
    pub content_type: String,
    /// Value of the User-Agent request header. Empty = client default.
    pub user_agent: String,
    /// Honour HTTP_PROXY / HTTPS_PROXY / NO_PROXY. Off = always connect directly.
    pub system_proxy: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Scheme, host and optional port, e.g. "http://kdc.local:8888".
    pub host: String,
    /// Appended verbatim to `host`.
    pub path: String,
}

// ── Defaults ──────────────────────────────────────────────────────────────────

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            user_agent: concat!("bytebridge/", env!("CARGO_PKG_VERSION")).to_string(),
            system_proxy: false,
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            host: "http://127.0.0.1:8888".to_string(),
            path: "/".to_string(),
        }
    }
}

impl EndpointConfig {
    pub fn destination(&self) -> Result<Destination, DestinationError> {
        Destination::join(&self.host, &self.path)
    }
}

// ── Path helpers ──────────────────────────────────────────────────────────────

fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
        .join("bytebridge")
}

fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {0}: {1}")]
    ReadFailed(PathBuf, std::io::Error),
    #[error("failed to parse {0}: {1}")]
    ParseFailed(PathBuf, toml::de::Error),
    #[error("failed to write {0}: {1}")]
    WriteFailed(PathBuf, std::io::Error),
    #[error("failed to serialize: {0}")]
    SerializeFailed(toml::ser::Error),
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl BridgeConfig {
    /// Load config: env vars → file → defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_file(&Self::file_path())?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Read a config file without env overrides. A missing file yields defaults.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(BridgeConfig::default());
        }
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadFailed(path.to_path_buf(), e))?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseFailed(path.to_path_buf(), e))
    }

    /// Config file path.
    pub fn file_path() -> PathBuf {
        std::env::var("BYTEBRIDGE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| config_dir().join("config.toml"))
    }

    /// Write default config if none exists. Returns the path.
    pub fn write_default_if_missing() -> Result<PathBuf, ConfigError> {
        let path = Self::file_path();
        Self::write_default_at(&path)?;
        Ok(path)
    }

    fn write_default_at(path: &Path) -> Result<(), ConfigError> {
        if path.exists() {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::WriteFailed(path.to_path_buf(), e))?;
        }
        let text = BridgeConfig::default().to_toml()?;
        std::fs::write(path, text).map_err(|e| ConfigError::WriteFailed(path.to_path_buf(), e))
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::SerializeFailed)
    }

    /// Apply BYTEBRIDGE_* overrides, looking each key up through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("BYTEBRIDGE_TRANSPORT__CONTENT_TYPE") {
            self.transport.content_type = v;
        }
        if let Some(v) = lookup("BYTEBRIDGE_TRANSPORT__USER_AGENT") {
            self.transport.user_agent = v;
        }
        if let Some(v) = lookup("BYTEBRIDGE_TRANSPORT__SYSTEM_PROXY") {
            self.transport.system_proxy = v == "true" || v == "1";
        }
        if let Some(v) = lookup("BYTEBRIDGE_ENDPOINT__HOST") {
            self.endpoint.host = v;
        }
        if let Some(v) = lookup("BYTEBRIDGE_ENDPOINT__PATH") {
            self.endpoint.path = v;
        }
    }
}
