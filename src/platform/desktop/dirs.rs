use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::config::settings::SETTINGS_FILE_NAME;

pub const LOG_FILE_NAME: &str = "record-review.log";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "record-review")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

fn ensure_dir(dir: PathBuf) -> Result<PathBuf> {
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create dir: {}", dir.display()))?;
    Ok(dir)
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    ensure_dir(base_data_dir.join("webview2"))
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}

pub fn default_logs_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_local_dir().join("logs"))
}

pub fn default_settings_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(SETTINGS_FILE_NAME))
}
