use std::path::Path;

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Data, ExcelDateTime, Reader};

use crate::domain::entities::audit::TIMESTAMP_FORMAT;
use crate::domain::entities::dataset::TabularData;
use crate::infra::import::table::build_table;

/// Renders a cell the way it reads in the spreadsheet. Whole-number floats
/// drop their fraction so identifiers like `1001` match log keys, and date
/// cells print as `YYYY-MM-DD HH:MM:SS`.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => format_float(*v),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => format_excel_datetime(v),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

fn format_excel_datetime(value: &ExcelDateTime) -> String {
    if value.is_duration() {
        return value.to_string();
    }
    value
        .as_datetime()
        .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| value.to_string())
}

fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Reads the first worksheet; its first row is the header.
pub fn read_xlsx_table(xlsx_path: &Path) -> Result<TabularData> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open spreadsheet: {}", xlsx_path.display()))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("spreadsheet has no worksheets: {}", xlsx_path.display()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("failed to read sheet: {sheet_name}"))?;

    let mut rows = range
        .rows()
        .map(|r| r.iter().map(cell_to_string).collect::<Vec<String>>());
    let headers = rows
        .next()
        .ok_or_else(|| anyhow!("sheet {sheet_name} has no header row"))?;

    Ok(build_table(headers, rows))
}
