use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::dataset::TabularData;
use crate::infra::import::table::build_table;

pub fn read_csv_table(csv_path: &Path) -> Result<TabularData> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read headers from csv: {}", csv_path.display()))?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse csv record")?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(build_table(
        headers.iter().map(str::to_string).collect(),
        rows,
    ))
}
