use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::domain::request::HttpMethod;

/// Settings read from `relay.json`. Missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub user_agent: String,
    pub default_url: String,
    pub default_method: HttpMethod,
    pub log_filter: String,
}
impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("relay/{}", env!("CARGO_PKG_VERSION")),
            default_url: String::from(""),
            default_method: HttpMethod::GET,
            log_filter: String::from("relay=info,relay_api=info"),
        }
    }
}

impl RelayConfig {
    pub fn parse(config_json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(config_json).context("Failed to parse config")
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&file_str)
    }

    /// `Ok(None)` when there is no file at `path`.
    pub fn load_optional(path: impl AsRef<Path>) -> anyhow::Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }
}
