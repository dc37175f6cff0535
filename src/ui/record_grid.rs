use dioxus::prelude::*;

use crate::domain::entities::dataset::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub header: String,
    pub value: String,
}

/// Splits a record into grid rows of `group_size` header/value pairs.
pub fn grid_rows(record: &Record<'_>, group_size: usize) -> Vec<Vec<GridCell>> {
    let cells: Vec<GridCell> = record
        .fields()
        .map(|(header, value)| GridCell {
            header: header.to_string(),
            value: value.to_string(),
        })
        .collect();
    cells
        .chunks(group_size.max(1))
        .map(|chunk| chunk.to_vec())
        .collect()
}

pub fn header_cell_style(highlighted: bool) -> &'static str {
    if highlighted {
        "background-color: #FFD54F; padding: 6px; border: 1px solid gray; font-weight: bold; color: black;"
    } else {
        "background-color: #2F4F4F; padding: 6px; border: 1px solid black; font-weight: bold; color: white;"
    }
}

pub fn value_cell_style(highlighted: bool) -> &'static str {
    if highlighted {
        "background-color: #FFF9C4; padding: 6px; border: 1px solid gray; font-weight: bold; color: black;"
    } else {
        "background-color: #C0C0C0; padding: 6px; border: 1px solid black; font-weight: bold; color: black;"
    }
}

#[component]
pub fn RecordGrid(rows: Vec<Vec<GridCell>>, group_size: usize, highlighted_rows: usize) -> Element {
    let grid_style = format!(
        "display: grid; grid-template-columns: repeat({}, minmax(0, 1fr)); gap: 2px;",
        group_size.max(1) * 2
    );

    rsx! {
        div { style: "{grid_style}",
            for (row_idx, row) in rows.iter().enumerate() {
                for (col_idx, cell) in row.iter().enumerate() {
                    div {
                        key: "h-{row_idx}-{col_idx}",
                        style: header_cell_style(row_idx < highlighted_rows),
                        "{cell.header}"
                    }
                    div {
                        key: "v-{row_idx}-{col_idx}",
                        style: value_cell_style(row_idx < highlighted_rows),
                        "{cell.value}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::dataset::{Dataset, TabularData};

    #[test]
    fn fields_are_grouped_in_order() {
        let columns: Vec<String> = (1..=7).map(|i| format!("C{i}")).collect();
        let values: Vec<String> = (1..=7).map(|i| format!("v{i}")).collect();
        let dataset = Dataset::new(
            "grid.csv",
            TabularData {
                columns,
                rows: vec![values],
            },
        );
        let record = dataset.record(0).expect("record should exist");

        let rows = grid_rows(&record, 5);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 5);
        assert_eq!(rows[1].len(), 2);
        assert_eq!(rows[1][1].header, "C7");
        assert_eq!(rows[1][1].value, "v7");
    }
}
