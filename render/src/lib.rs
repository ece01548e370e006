pub mod format;
pub use format::format_cell;

pub mod table;
pub use table::{Cell, Header, Row, TableModel, LABEL_HEADER};

pub mod sort;
pub use sort::SortState;

pub mod chart;
pub use chart::ChartSpec;
