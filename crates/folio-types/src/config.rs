//! Runtime configuration loaded from `folio.toml`.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working setup:
//!
//! ```toml
//! latency_ms = 300
//! store_path = "folio-prefs.json"
//! prompt = "user@portfolio:~$"
//!
//! [content.identity]
//! name = "Jane Doe"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Default artificial latency between echo and result, in milliseconds.
pub const DEFAULT_LATENCY_MS: u64 = 300;

/// Upper bound accepted for `latency_ms`.
const MAX_LATENCY_MS: u64 = 10_000;

/// Top-level folio configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    /// Delay before a command's result is attached to the history.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// File backing the preference store.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Prompt shown when no sub-dialogue is active.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Optional portfolio content overriding the built-in defaults.
    ///
    /// Kept as a raw TOML value; `folio-terminal` owns the schema.
    #[serde(default)]
    pub content: Option<toml::Value>,
}

fn default_latency_ms() -> u64 {
    DEFAULT_LATENCY_MS
}
fn default_store_path() -> PathBuf {
    PathBuf::from("folio-prefs.json")
}
fn default_prompt() -> String {
    "user@portfolio:~$".to_string()
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            store_path: default_store_path(),
            prompt: default_prompt(),
            content: None,
        }
    }
}

impl FolioConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Artificial latency as a `Duration`.
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.latency_ms > MAX_LATENCY_MS {
            return Err(FolioError::Config(format!(
                "latency_ms must be at most {MAX_LATENCY_MS}, got {}",
                self.latency_ms
            )));
        }
        if self.prompt.trim().is_empty() {
            return Err(FolioError::Config("prompt must not be empty".to_string()));
        }
        Ok(())
    }
}
