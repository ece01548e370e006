pub mod dataset;
pub use dataset::{Dataset, RowRecord, Value, AGGREGATE_ROWS, ALL_ROW};

pub mod metadata;
pub use metadata::{FieldMeta, FieldMetadata};

pub mod layout;
pub use layout::{ChartDescriptor, Layout, TableDescriptor};

pub mod legacy;

mod world;
pub use world::{banner_title, world_from_fragment, DatasetVersion, DEFAULT_WORLD};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed statistics document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("statistics document must be a JSON array or object, found {0}")]
    UnexpectedShape(&'static str),
    #[error("reading {path:?}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no statistics document for world '{0}'")]
    NotFound(String),
}
