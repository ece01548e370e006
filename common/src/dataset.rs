use std::collections::BTreeMap;

use crate::{DatasetVersion, Error, FieldMetadata};

/// Label of the row aggregating every roll in the world.
pub const ALL_ROW: &str = "All";

/// Aggregate rows, in the order they lead every table.
pub const AGGREGATE_ROWS: [&str; 3] = [ALL_ROW, "All Players", "Gamemaster"];

/// A single statistic as it appears in the document.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
    Flag(bool),
    Null,
    Other(serde_json::Value),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write_number(f, *n),
            Self::Text(s) => f.write_str(s),
            Self::Flag(b) => write!(f, "{}", b),
            Self::Null => Ok(()),
            Self::Other(v) => write!(f, "{}", v),
        }
    }
}

/// Shortest round-trip digits, switching to exponent form outside
/// `[1e-6, 1e21)` the way browsers print numbers.
fn write_number(f: &mut std::fmt::Formatter<'_>, n: f64) -> std::fmt::Result {
    if n == 0.0 {
        return f.write_str("0");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "∞" } else { "-∞" });
    }
    if n.is_nan() || (1e-6..1e21).contains(&n.abs()) {
        return write!(f, "{}", n);
    }

    let exponent = format!("{:e}", n);
    match exponent.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => write!(f, "{}e+{}", mantissa, power),
        _ => f.write_str(&exponent),
    }
}

pub type RowRecord = BTreeMap<String, Value>;

#[derive(serde::Deserialize)]
struct DocumentV2 {
    #[serde(default)]
    world: Option<String>,
    #[serde(default)]
    players: Vec<String>,
    #[serde(default)]
    field_metadata: FieldMetadata,
    #[serde(flatten)]
    rest: BTreeMap<String, serde_json::Value>,
}

/// A loaded statistics document. Never mutated after parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub world: Option<String>,
    pub version: DatasetVersion,
    pub players: Vec<String>,
    pub field_metadata: FieldMetadata,
    pub rows: BTreeMap<String, RowRecord>,
}

impl Dataset {
    /// Parses either document version, telling them apart by shape.
    pub fn from_json_str(input: &str) -> Result<Self, Error> {
        match serde_json::from_str::<serde_json::Value>(input)? {
            serde_json::Value::Array(entries) => {
                let records = entries
                    .into_iter()
                    .map(serde_json::from_value::<RowRecord>)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::from_v1(records))
            }
            value @ serde_json::Value::Object(_) => Self::from_v2(serde_json::from_value(value)?),
            serde_json::Value::Null => Err(Error::UnexpectedShape("null")),
            serde_json::Value::Bool(_) => Err(Error::UnexpectedShape("a boolean")),
            serde_json::Value::Number(_) => Err(Error::UnexpectedShape("a number")),
            serde_json::Value::String(_) => Err(Error::UnexpectedShape("a string")),
        }
    }

    fn from_v2(document: DocumentV2) -> Result<Self, Error> {
        let mut rows = BTreeMap::new();
        for (key, value) in document.rest {
            // Only objects are rows, anything else is document-level data.
            if value.is_object() {
                rows.insert(key, serde_json::from_value::<RowRecord>(value)?);
            }
        }

        Ok(Self {
            world: document.world,
            version: DatasetVersion::V2,
            players: document.players,
            // Documents describe only some columns, the built-in dictionary
            // covers the rest.
            field_metadata: crate::legacy::field_metadata().overlay(document.field_metadata),
            rows,
        })
    }

    /// Builds a dataset from the flat record list of the first document
    /// version. Records name their row in a `player` field, a record without
    /// one is the aggregate over everything.
    pub fn from_v1(records: Vec<RowRecord>) -> Self {
        let mut players = Vec::new();
        let mut rows = BTreeMap::new();

        for record in records {
            let label = match record.get("player") {
                Some(Value::Text(name)) => name.clone(),
                _ => ALL_ROW.to_owned(),
            };

            if !AGGREGATE_ROWS.contains(&label.as_str()) && !players.contains(&label) {
                players.push(label.clone());
            }
            rows.insert(label, record);
        }

        Self {
            world: None,
            version: DatasetVersion::V1,
            players,
            field_metadata: crate::legacy::field_metadata(),
            rows,
        }
    }

    pub fn row(&self, key: &str) -> Option<&RowRecord> {
        self.rows.get(key)
    }

    pub fn value(&self, row: &str, column: &str) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Default row order of a table: the aggregate rows present in the
    /// document, then every participant in document order.
    pub fn row_keys(&self) -> Vec<String> {
        AGGREGATE_ROWS
            .iter()
            .filter(|key| self.rows.contains_key(**key))
            .map(|key| (*key).to_owned())
            .chain(self.players.iter().cloned())
            .collect()
    }
}
