use chrono::NaiveDateTime;

use crate::domain::entities::audit::TIMESTAMP_FORMAT;

/// Source of the wall-clock time stamped onto audit entries.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn timestamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}
