use crate::domain::entities::dataset::RecordKey;
use crate::ui::record_grid::{grid_rows, GridCell};
use crate::usecase::services::traversal_service::TraversalEngine;

/// Render snapshot of a session, detached from the engine borrow.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub dataset_name: String,
    pub total: usize,
    pub done: usize,
    pub skipped: usize,
    /// 1-based position of the current record, 0 once complete
    pub position: usize,
    pub complete: bool,
    pub current_key: Option<String>,
    /// The current key is a row-number fallback rather than an identifier
    pub current_key_synthetic: bool,
    pub synthetic_keys: bool,
    pub log_entries: usize,
    pub grid: Vec<Vec<GridCell>>,
}

impl SessionView {
    pub fn capture(engine: &TraversalEngine, group_size: usize) -> Self {
        let summary = engine.summary();
        let record = engine.current_record();
        Self {
            dataset_name: engine.dataset().name().to_string(),
            total: summary.total,
            done: summary.done,
            skipped: summary.skipped,
            position: if engine.is_complete() {
                0
            } else {
                engine.cursor() + 1
            },
            complete: engine.is_complete(),
            current_key: engine.current_key().map(ToString::to_string),
            current_key_synthetic: engine.current_key().is_some_and(RecordKey::is_synthetic),
            synthetic_keys: engine.uses_synthetic_keys(),
            log_entries: engine.log().len(),
            grid: record
                .map(|r| grid_rows(&r, group_size))
                .unwrap_or_default(),
        }
    }
}
