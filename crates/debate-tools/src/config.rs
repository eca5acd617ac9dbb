use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use evidence::registry::DEFAULT_MAX_ATTEMPTS;

/// Default tracing filter when neither `RUST_LOG` nor `EVIDENCE_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Evidence tool configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolsConfig {
    /// Check formatted ids against a per-session registry.
    pub unique_ids: bool,
    /// Draws the registry makes before giving up (at least 1).
    pub max_id_attempts: u32,
    /// Fallback tracing filter.
    pub log_filter: String,
}

/// On-disk TOML form; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ToolsConfigFile {
    unique_ids: Option<bool>,
    max_id_attempts: Option<u32>,
    log_filter: Option<String>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        let builtin = Self::builtin();
        Self {
            unique_ids: std::env::var("EVIDENCE_UNIQUE_IDS")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(builtin.unique_ids),
            max_id_attempts: std::env::var("EVIDENCE_MAX_ID_ATTEMPTS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(builtin.max_id_attempts)
                .max(1),
            log_filter: std::env::var("EVIDENCE_LOG").unwrap_or(builtin.log_filter),
        }
    }
}

impl ToolsConfig {
    /// Built-in defaults, ignoring the environment.
    pub fn builtin() -> Self {
        Self {
            unique_ids: false,
            max_id_attempts: DEFAULT_MAX_ATTEMPTS,
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }

    /// Load from a TOML file. Missing keys take the built-in defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).context(format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ToolsConfigFile =
            toml::from_str(content).context("Failed to parse evidence tools TOML")?;
        let builtin = Self::builtin();
        Ok(Self {
            unique_ids: file.unique_ids.unwrap_or(builtin.unique_ids),
            max_id_attempts: file
                .max_id_attempts
                .unwrap_or(builtin.max_id_attempts)
                .max(1),
            log_filter: file.log_filter.unwrap_or(builtin.log_filter),
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
