use std::cmp::Ordering;

use common::Value;

use crate::table::{Cell, Row};

/// Direction memory of one table. The flag is shared by all of the table's
/// columns: every activation flips it, whichever column was clicked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    ascending: Option<bool>,
    column: Option<usize>,
}

impl SortState {
    /// Flips the direction and returns it. The first call yields ascending.
    pub fn toggle(&mut self, column: usize) -> bool {
        let ascending = !self.ascending.unwrap_or(false);
        self.ascending = Some(ascending);
        self.column = Some(column);
        ascending
    }

    pub fn ascending(&self) -> Option<bool> {
        self.ascending
    }

    /// Header index of the last activation.
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    pub fn display_symbol(&self, column: usize) -> &'static str {
        match (self.column, self.ascending) {
            (Some(c), Some(true)) if c == column => "↑",
            (Some(c), Some(false)) if c == column => "↓",
            _ => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey<'a> {
    Number(f64),
    Text(&'a str),
}

/// Numbers and numeric-looking text compare as numbers, everything else by
/// its rendered text.
pub fn sort_key(cell: &Cell) -> SortKey<'_> {
    match &cell.raw {
        Some(Value::Number(n)) if !n.is_nan() => SortKey::Number(*n),
        Some(Value::Text(s)) => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => SortKey::Number(n),
            _ => SortKey::Text(&cell.text),
        },
        _ => SortKey::Text(&cell.text),
    }
}

/// How a column orders its cells. Decided once over the whole column so
/// that every comparison within one sort agrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnOrder {
    /// Every non-empty cell has a numeric key. Empty cells lead.
    Numeric,
    /// At least one cell is text: the whole column collates by rendered text.
    Text,
}

impl ColumnOrder {
    pub fn detect<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> Self {
        let mut numeric = false;
        for cell in cells {
            match sort_key(cell) {
                SortKey::Number(_) => numeric = true,
                SortKey::Text("") => {}
                SortKey::Text(_) => return Self::Text,
            }
        }

        if numeric {
            Self::Numeric
        } else {
            Self::Text
        }
    }

    pub fn of_column(rows: &[Row], column: usize) -> Self {
        Self::detect(rows.iter().filter_map(|row| row.cells.get(column)))
    }

    pub fn compare(self, a: &Cell, b: &Cell) -> Ordering {
        match self {
            Self::Text => collate(&a.text, &b.text),
            Self::Numeric => match (sort_key(a), sort_key(b)) {
                (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(&y),
                (SortKey::Text(_), SortKey::Number(_)) => Ordering::Less,
                (SortKey::Number(_), SortKey::Text(_)) => Ordering::Greater,
                (SortKey::Text(x), SortKey::Text(y)) => collate(x, y),
            },
        }
    }
}

/// Case-insensitive ordering, lower case first between otherwise equal strings.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

/// Stable sort on the cell at `column`. Descending swaps the operands rather
/// than reversing the result.
pub fn sort_rows(rows: &mut [Row], column: usize, ascending: bool) {
    let order = ColumnOrder::of_column(rows, column);

    rows.sort_by(|a, b| {
        let (first, second) = if ascending { (a, b) } else { (b, a) };
        match (first.cells.get(column), second.cells.get(column)) {
            (Some(x), Some(y)) => order.compare(x, y),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}
