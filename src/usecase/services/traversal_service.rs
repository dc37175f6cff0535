use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Result;
use serde::Deserialize;

use crate::domain::entities::audit::{AuditEntry, ReviewAction, ReviewStatus};
use crate::domain::entities::dataset::{Dataset, Record, RecordKey};
use crate::error::ValidationError;
use crate::infra::audit_log::csv::write_audit_log;
use crate::usecase::ports::clock::Clock;

/// What happens when a record is marked with the status it already holds.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RemarkPolicy {
    /// Every mark appends an audit entry, repeats included.
    #[default]
    AppendHistory,
    /// A repeated mark moves the cursor but writes nothing.
    IgnoreRepeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub total: usize,
    pub done: usize,
    pub skipped: usize,
}

/// One review session: the dataset, the cursor, both status sets and the
/// audit log. A key is never in `done` and `skipped` at the same time.
pub struct TraversalEngine {
    dataset: Dataset,
    keys: Vec<RecordKey>,
    key_column: Option<usize>,
    cursor: usize,
    done: HashSet<String>,
    skipped: HashSet<String>,
    log: Vec<AuditEntry>,
    remark_policy: RemarkPolicy,
    clock: Arc<dyn Clock>,
}

impl TraversalEngine {
    pub fn new(dataset: Dataset, key_column: &str, clock: Arc<dyn Clock>) -> Self {
        let key_column = dataset.column_index(key_column);
        let keys = (0..dataset.len())
            .map(|position| dataset.resolve_key(position, key_column))
            .collect();
        Self {
            dataset,
            keys,
            key_column,
            cursor: 0,
            done: HashSet::new(),
            skipped: HashSet::new(),
            log: Vec::new(),
            remark_policy: RemarkPolicy::default(),
            clock,
        }
    }

    pub fn with_remark_policy(mut self, policy: RemarkPolicy) -> Self {
        self.remark_policy = policy;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn log(&self) -> &[AuditEntry] {
        &self.log
    }

    pub fn uses_synthetic_keys(&self) -> bool {
        self.key_column.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == self.dataset.len()
    }

    pub fn current_record(&self) -> Option<Record<'_>> {
        self.dataset.record(self.cursor)
    }

    pub fn current_key(&self) -> Option<&RecordKey> {
        self.keys.get(self.cursor)
    }

    pub fn status_of(&self, key: &str) -> ReviewStatus {
        if self.done.contains(key) {
            ReviewStatus::Done
        } else if self.skipped.contains(key) {
            ReviewStatus::Skipped
        } else {
            ReviewStatus::Pending
        }
    }

    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary {
            total: self.dataset.len(),
            done: self.done.len(),
            skipped: self.skipped.len(),
        }
    }

    fn is_processed(&self, position: usize) -> bool {
        self.status_of(&self.keys[position].to_log_key()).is_terminal()
    }

    /// Moves forward until the cursor rests on an unprocessed record or on
    /// `len()`, which signals completion.
    pub fn advance_forward(&mut self) {
        while self.cursor < self.dataset.len() && self.is_processed(self.cursor) {
            self.cursor += 1;
        }
    }

    /// Moves to the nearest earlier unprocessed record. Stops at 0 when every
    /// earlier record is already terminal.
    pub fn advance_backward(&mut self) {
        while self.cursor > 0 {
            self.cursor -= 1;
            if !self.is_processed(self.cursor) {
                break;
            }
        }
    }

    pub fn mark_done(&mut self, key: &str) {
        self.skipped.remove(key);
        let repeated = !self.done.insert(key.to_string());
        if repeated && self.remark_policy == RemarkPolicy::IgnoreRepeat {
            tracing::debug!(key, "record already done, no entry appended");
        } else {
            let entry = AuditEntry::done(self.clock.timestamp(), key.to_string());
            self.log.push(entry);
            tracing::debug!(key, "record marked done");
        }
        self.step_past_current();
    }

    pub fn mark_skipped(&mut self, key: &str, reason: &str) -> Result<(), ValidationError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ValidationError::EmptySkipReason);
        }

        self.done.remove(key);
        let repeated = !self.skipped.insert(key.to_string());
        if repeated && self.remark_policy == RemarkPolicy::IgnoreRepeat {
            tracing::debug!(key, "record already skipped, no entry appended");
        } else {
            let entry =
                AuditEntry::skipped(self.clock.timestamp(), key.to_string(), reason.to_string());
            self.log.push(entry);
            tracing::debug!(key, reason, "record skipped");
        }
        self.step_past_current();
        Ok(())
    }

    /// Marks the record under the cursor. Returns `false` once the session is
    /// complete and there is nothing left to mark.
    pub fn mark_current_done(&mut self) -> bool {
        let Some(key) = self.current_key().map(RecordKey::to_log_key) else {
            return false;
        };
        self.mark_done(&key);
        true
    }

    pub fn mark_current_skipped(&mut self, reason: &str) -> Result<bool, ValidationError> {
        let Some(key) = self.current_key().map(RecordKey::to_log_key) else {
            return Ok(false);
        };
        self.mark_skipped(&key, reason)?;
        Ok(true)
    }

    fn step_past_current(&mut self) {
        self.cursor = (self.cursor + 1).min(self.dataset.len());
        self.advance_forward();
    }

    /// Rebuilds both sets from a previously exported log and replaces the
    /// audit log with it. The last entry for a key decides its status.
    pub fn replay_log(&mut self, entries: Vec<AuditEntry>) {
        self.done.clear();
        self.skipped.clear();
        for entry in &entries {
            match entry.action {
                ReviewAction::Done => {
                    self.skipped.remove(&entry.key);
                    self.done.insert(entry.key.clone());
                }
                ReviewAction::Skipped => {
                    self.done.remove(&entry.key);
                    self.skipped.insert(entry.key.clone());
                }
            }
        }
        self.log = entries;
        self.cursor = 0;
        self.advance_forward();

        tracing::info!(
            entries = self.log.len(),
            done = self.done.len(),
            skipped = self.skipped.len(),
            cursor = self.cursor,
            "replayed resume log"
        );
    }

    pub fn export_log(&self) -> Result<String> {
        write_audit_log(&self.log)
    }
}
