use std::fmt;

/// Raw table produced by an importer before it becomes a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabularData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Ordered, immutable set of records loaded for one review session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, data: TabularData) -> Self {
        let width = data.columns.len();
        let rows = data
            .rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self {
            name: name.into(),
            columns: data.columns,
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|name| name == column)
    }

    pub fn record(&self, position: usize) -> Option<Record<'_>> {
        self.rows.get(position).map(|values| Record {
            columns: &self.columns,
            values,
        })
    }

    /// Key of the record at `position`. Falls back to the 1-based row number
    /// when the identifier column is missing or the cell is blank.
    pub fn resolve_key(&self, position: usize, key_column: Option<usize>) -> RecordKey {
        key_column
            .and_then(|idx| self.rows.get(position).and_then(|row| row.get(idx)))
            .filter(|value| !value.trim().is_empty())
            .map(|value| RecordKey::Column(value.clone()))
            .unwrap_or(RecordKey::Synthetic { row: position + 1 })
    }
}

/// Borrowed view of one row, keeping header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    columns: &'a [String],
    values: &'a [String],
}

impl<'a> Record<'a> {
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let values = self.values;
        self.columns
            .iter()
            .position(|name| name == column)
            .and_then(|idx| values.get(idx))
            .map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        let (columns, values) = (self.columns, self.values);
        columns
            .iter()
            .map(String::as_str)
            .zip(values.iter().map(String::as_str))
    }
}

/// Identity of a record inside the status sets and the audit log.
///
/// Synthetic keys depend on row order, so a log written against one ordering
/// of a dataset will misattribute statuses when replayed against another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Column(String),
    Synthetic { row: usize },
}

impl RecordKey {
    pub fn is_synthetic(&self) -> bool {
        matches!(self, RecordKey::Synthetic { .. })
    }

    pub fn to_log_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Column(value) => write!(f, "{value}"),
            RecordKey::Synthetic { row } => write!(f, "Row{row}"),
        }
    }
}
