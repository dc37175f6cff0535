use std::path::Path;

use anyhow::{Context, Result};

use crate::usecase::services::traversal_service::TraversalEngine;

pub struct ExportService;

impl ExportService {
    /// Suggested download name; the final log and a mid-session snapshot use
    /// different suffixes but the same format.
    pub fn file_name(engine: &TraversalEngine) -> String {
        let name = engine.dataset().name();
        if engine.is_complete() {
            format!("{name}_log.csv")
        } else {
            format!("{name}_progress_log.csv")
        }
    }

    pub fn save(engine: &TraversalEngine, target: &Path) -> Result<usize> {
        let contents = engine.export_log()?;
        std::fs::write(target, contents)
            .with_context(|| format!("failed to write log: {}", target.display()))?;
        let entries = engine.log().len();
        tracing::info!(entries, path = %target.display(), "exported audit log");
        Ok(entries)
    }
}
