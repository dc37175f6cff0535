use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::usecase::services::traversal_service::RemarkPolicy;

pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// User settings read from `settings.toml` in the config directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Column whose value identifies a record in the audit log
    pub key_column: String,
    /// Behavior when a record is re-marked with its current status
    pub remark_policy: RemarkPolicy,
    /// Header/value pairs per grid row
    pub grid_group_size: usize,
    /// Leading grid rows drawn with the highlight palette
    pub highlighted_rows: usize,
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            key_column: "CONS_NO".to_string(),
            remark_policy: RemarkPolicy::AppendHistory,
            grid_group_size: 5,
            highlighted_rows: 2,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut settings: Settings = toml::from_str(text).context("failed to parse settings")?;
        settings.grid_group_size = settings.grid_group_size.max(1);
        Ok(settings)
    }

    /// Missing file means defaults. A file that cannot be read or parsed is
    /// an error; the caller decides whether to fall back.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("invalid settings file: {}", path.display()))
    }
}
