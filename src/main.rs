mod app;
mod config;
mod domain;
mod error;
mod infra;
mod platform;
mod ui;
mod usecase;


use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::settings::Settings;
use crate::platform::desktop::dirs::{
    default_logs_dir, default_settings_path, default_webview_data_dir, LOG_FILE_NAME,
};

fn init_logging(default_filter: &str) -> Result<()> {
    let log_path = default_logs_dir()?.join(LOG_FILE_NAME);
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file: {}", log_path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() {
    let loaded = default_settings_path().and_then(|path| {
        let settings = Settings::load(&path)?;
        Ok((path, settings))
    });
    let settings = loaded
        .as_ref()
        .map(|(_, settings)| settings.clone())
        .unwrap_or_default();

    if let Err(err) = init_logging(&settings.log_filter) {
        eprintln!("logging disabled: {err:#}");
    }
    match &loaded {
        Ok((path, settings)) => {
            tracing::info!(path = %path.display(), ?settings, "settings resolved");
        }
        Err(err) => tracing::warn!("using default settings: {err:#}"),
    }

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Record Review"))
                .with_data_directory(webview_data_dir),
        )
        .with_context(settings)
        .launch(App);
}
