use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::domain::entities::audit::AuditEntry;
use crate::domain::entities::dataset::{Dataset, TabularData};
use crate::infra::audit_log::csv::read_resume_log;
use crate::infra::import::csv::read_csv_table;
use crate::infra::import::xlsx::read_xlsx_table;
use crate::usecase::ports::clock::Clock;
use crate::usecase::services::traversal_service::{RemarkPolicy, TraversalEngine};

pub const SPREADSHEET_EXTENSIONS: [&str; 4] = ["xlsx", "xls", "xlsm", "ods"];
pub const DATASET_EXTENSIONS: [&str; 5] = ["xlsx", "xls", "xlsm", "ods", "csv"];
pub const LOG_EXTENSIONS: [&str; 2] = ["csv", "txt"];

pub struct ImportService {
    key_column: String,
    remark_policy: RemarkPolicy,
    clock: Arc<dyn Clock>,
}

impl ImportService {
    pub fn new(key_column: String, remark_policy: RemarkPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            key_column,
            remark_policy,
            clock,
        }
    }

    pub fn read_table(&self, path: &Path) -> Result<TabularData> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();

        if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
            read_xlsx_table(path)
        } else {
            read_csv_table(path)
        }
    }

    /// Loads a dataset file and opens a fresh session on it.
    pub fn open_session(&self, path: &Path) -> Result<TraversalEngine> {
        let table = self.read_table(path)?;
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("dataset")
            .to_string();
        Ok(self.start_session(Dataset::new(name, table)))
    }

    pub fn start_session(&self, dataset: Dataset) -> TraversalEngine {
        let engine = TraversalEngine::new(dataset, &self.key_column, self.clock.clone())
            .with_remark_policy(self.remark_policy);
        if engine.dataset().is_empty() {
            tracing::warn!(dataset = engine.dataset().name(), "dataset has no records");
        }
        if engine.uses_synthetic_keys() {
            tracing::warn!(
                key_column = %self.key_column,
                "identifier column missing, falling back to row numbers"
            );
        }
        tracing::info!(
            dataset = engine.dataset().name(),
            rows = engine.dataset().len(),
            columns = engine.dataset().columns().len(),
            "opened review session"
        );
        engine
    }

    /// Reads a resume log. Unreadable or malformed files yield `None`.
    pub fn load_resume_log(&self, path: &Path) -> Option<Vec<AuditEntry>> {
        match File::open(path) {
            Ok(file) => read_resume_log(file),
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "failed to open resume log");
                None
            }
        }
    }
}
