use std::collections::HashMap;

use crate::domain::entities::dataset::TabularData;

/// Turns a raw header row plus body rows into [`TabularData`]: blank headers
/// become `Unnamed: {i}`, repeated headers get `.1`, `.2` suffixes, and rows
/// with no content are dropped.
pub fn build_table<I>(raw_headers: Vec<String>, rows: I) -> TabularData
where
    I: IntoIterator<Item = Vec<String>>,
{
    let width = raw_headers.len();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut columns = Vec::with_capacity(width);
    for (idx, header) in raw_headers.into_iter().enumerate() {
        let base = if header.trim().is_empty() {
            format!("Unnamed: {idx}")
        } else {
            header
        };
        let count = seen.entry(base.clone()).or_insert(0);
        let name = if *count == 0 {
            base.clone()
        } else {
            format!("{base}.{count}")
        };
        *count += 1;
        columns.push(name);
    }

    let rows = rows
        .into_iter()
        .filter(|row| row.iter().any(|value| !value.trim().is_empty()))
        .map(|mut row| {
            row.resize(width, String::new());
            row
        })
        .collect();

    TabularData { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn headers_are_named_and_deduplicated() {
        let table = build_table(strings(&["CONS_NO", "", "NAME", "NAME"]), Vec::new());
        assert_eq!(
            table.columns,
            strings(&["CONS_NO", "Unnamed: 1", "NAME", "NAME.1"])
        );
    }

    #[test]
    fn blank_rows_are_dropped_and_short_rows_padded() {
        let table = build_table(
            strings(&["A", "B"]),
            vec![strings(&["", " "]), strings(&["x"]), strings(&["y", "z", "extra"])],
        );
        assert_eq!(table.rows, vec![strings(&["x", ""]), strings(&["y", "z"])]);
    }
}
