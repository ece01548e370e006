use common::{Dataset, TableDescriptor, Value};

use crate::format::format_cell;
use crate::sort::{self, SortState};

/// Header text of the row label column.
pub const LABEL_HEADER: &str = "Player";

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// `None` for the row label column.
    pub column: Option<String>,
    pub label: String,
    pub tooltip: Option<String>,
}

/// A rendered cell together with the value it was rendered from.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub raw: Option<Value>,
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        self.raw.as_ref().map_or(true, Value::is_missing)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub key: String,
    /// The label cell first, then one cell per column.
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub id: String,
    pub title: Option<String>,
    pub headers: Vec<Header>,
    pub rows: Vec<Row>,
    sort: SortState,
}

impl TableModel {
    /// Lays out `row_keys` in the given order against the descriptor's
    /// columns. Rows or columns absent from the dataset become missing cells.
    pub fn build(descriptor: &TableDescriptor, dataset: &Dataset, row_keys: &[String]) -> Self {
        let metadata = &dataset.field_metadata;

        let headers = std::iter::once(Header {
            column: None,
            label: LABEL_HEADER.to_owned(),
            tooltip: None,
        })
        .chain(descriptor.columns.iter().map(|column| Header {
            column: Some(column.clone()),
            label: metadata.label(column).to_owned(),
            tooltip: metadata.explanation(column).map(str::to_owned),
        }))
        .collect();

        let rows = row_keys
            .iter()
            .map(|key| {
                let label = Cell {
                    text: key.clone(),
                    raw: Some(Value::Text(key.clone())),
                };
                let cells = descriptor.columns.iter().map(|column| {
                    let raw = dataset.value(key, column);
                    Cell {
                        text: format_cell(raw, metadata.get(column)),
                        raw: raw.cloned(),
                    }
                });

                Row {
                    key: key.clone(),
                    cells: std::iter::once(label).chain(cells).collect(),
                }
            })
            .collect();

        Self {
            id: descriptor.id.clone(),
            title: descriptor.title.clone(),
            headers,
            rows,
            sort: SortState::default(),
        }
    }

    /// Header activation: flips the table's direction and reorders the
    /// rows by the column under `header_index`.
    pub fn activate(&mut self, header_index: usize) {
        if header_index >= self.headers.len() {
            tracing::warn!(table = %self.id, header_index, "Header index out of range");
            return;
        }

        let ascending = self.sort.toggle(header_index);
        sort::sort_rows(&mut self.rows, header_index, ascending);

        tracing::debug!(table = %self.id, header_index, ascending, "Sorted table");
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Rendered text of one column, top to bottom.
    pub fn column_texts(&self, header_index: usize) -> Vec<&str> {
        self.rows
            .iter()
            .filter_map(|row| row.cells.get(header_index))
            .map(|cell| cell.text.as_str())
            .collect()
    }

    pub fn row_keys(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.key.as_str()).collect()
    }
}
