use std::fmt;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewAction {
    Done,
    Skipped,
}

impl ReviewAction {
    pub fn label(self) -> &'static str {
        match self {
            ReviewAction::Done => "DONE",
            ReviewAction::Skipped => "SKIPPED",
        }
    }

    /// Accepts any text beginning with a known label, e.g. `SKIPPED (dup)`.
    pub fn parse_prefix(text: &str) -> Option<Self> {
        let text = text.trim_start();
        if text.starts_with("DONE") {
            Some(ReviewAction::Done)
        } else if text.starts_with("SKIPPED") {
            Some(ReviewAction::Skipped)
        } else {
            None
        }
    }
}

impl fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Pending,
    Done,
    Skipped,
}

impl ReviewStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, ReviewStatus::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub timestamp: String,
    pub key: String,
    pub action: ReviewAction,
    pub reason: String,
}

impl AuditEntry {
    pub fn done(timestamp: String, key: String) -> Self {
        Self {
            timestamp,
            key,
            action: ReviewAction::Done,
            reason: String::new(),
        }
    }

    pub fn skipped(timestamp: String, key: String, reason: String) -> Self {
        Self {
            timestamp,
            key,
            action: ReviewAction::Skipped,
            reason,
        }
    }
}
