use std::io::Read;

use anyhow::{Context, Result};
use csv::StringRecord;
use serde::Serialize;

use crate::domain::entities::audit::{AuditEntry, ReviewAction};

pub const KEY_HEADER: &str = "CONS_NO";
pub const ACTION_HEADER: &str = "Action";
pub const TIMESTAMP_HEADER: &str = "Timestamp";
pub const REASON_HEADER: &str = "Reason";

#[derive(Serialize)]
struct LogRow<'a> {
    #[serde(rename = "Timestamp")]
    timestamp: &'a str,
    #[serde(rename = "CONS_NO")]
    key: &'a str,
    #[serde(rename = "Action")]
    action: &'static str,
    #[serde(rename = "Reason")]
    reason: &'a str,
}

pub fn write_audit_log(entries: &[AuditEntry]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if entries.is_empty() {
        writer
            .write_record([TIMESTAMP_HEADER, KEY_HEADER, ACTION_HEADER, REASON_HEADER])
            .context("failed to write log header")?;
    }
    for entry in entries {
        writer
            .serialize(LogRow {
                timestamp: &entry.timestamp,
                key: &entry.key,
                action: entry.action.label(),
                reason: &entry.reason,
            })
            .with_context(|| format!("failed to write log entry for {}", entry.key))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("failed to flush log writer: {err}"))?;
    String::from_utf8(bytes).context("log export is not valid utf-8")
}

struct LogColumns {
    key: usize,
    action: usize,
    timestamp: Option<usize>,
    reason: Option<usize>,
}

impl LogColumns {
    fn locate(headers: &StringRecord) -> Option<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        Some(Self {
            key: find(KEY_HEADER)?,
            action: find(ACTION_HEADER)?,
            timestamp: find(TIMESTAMP_HEADER),
            reason: find(REASON_HEADER),
        })
    }
}

/// Parses a resume log. Returns `None` when the file lacks the key or action
/// column; rows that cannot be interpreted are dropped silently.
pub fn read_resume_log<R: Read>(source: R) -> Option<Vec<AuditEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(source);
    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(err) => {
            tracing::warn!(%err, "resume log has no readable header");
            return None;
        }
    };
    let Some(columns) = LogColumns::locate(&headers) else {
        tracing::warn!(?headers, "resume log lacks {KEY_HEADER}/{ACTION_HEADER} columns");
        return None;
    };

    let cell = |record: &StringRecord, idx: Option<usize>| {
        idx.and_then(|idx| record.get(idx))
            .unwrap_or("")
            .to_string()
    };

    let mut entries = Vec::new();
    let mut dropped = 0_usize;
    for record in reader.records() {
        let Ok(record) = record else {
            dropped += 1;
            continue;
        };
        let key = cell(&record, Some(columns.key));
        let action = record
            .get(columns.action)
            .and_then(ReviewAction::parse_prefix);
        match action {
            Some(action) if !key.is_empty() => entries.push(AuditEntry {
                timestamp: cell(&record, columns.timestamp),
                key,
                action,
                reason: cell(&record, columns.reason),
            }),
            _ => dropped += 1,
        }
    }
    if dropped > 0 {
        tracing::warn!(dropped, "ignored unrecognized resume log rows");
    }
    Some(entries)
}
