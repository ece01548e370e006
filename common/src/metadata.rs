use std::collections::BTreeMap;

/// Display directives for one column.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pretty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// The value is a ratio in `[0, 1]` shown as a percentage.
    #[serde(default)]
    pub is_percent: bool,
    /// The value is an average dice roll shown with one decimal.
    #[serde(default, alias = "is_roll")]
    pub is_roll_average: bool,
}

impl FieldMeta {
    pub fn pretty(name: impl Into<String>) -> Self {
        Self {
            pretty: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn percent(mut self) -> Self {
        self.is_percent = true;
        self
    }

    pub fn roll_average(mut self) -> Self {
        self.is_roll_average = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FieldMetadata(BTreeMap<String, FieldMeta>);

impl FieldMetadata {
    pub fn get(&self, column: &str) -> Option<&FieldMeta> {
        self.0.get(column)
    }

    pub fn insert(&mut self, column: impl Into<String>, meta: FieldMeta) {
        self.0.insert(column.into(), meta);
    }

    /// Lays `entries` over the current ones. An entry in `entries` replaces
    /// the whole entry of the same column.
    pub fn overlay(mut self, entries: FieldMetadata) -> Self {
        self.0.extend(entries.0);
        self
    }

    /// Header text for a column, the raw identifier when nothing prettier is known.
    pub fn label<'a>(&'a self, column: &'a str) -> &'a str {
        self.get(column)
            .and_then(|m| m.pretty.as_deref())
            .unwrap_or(column)
    }

    pub fn explanation(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(|m| m.explanation.as_deref())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldMeta)> for FieldMetadata {
    fn from_iter<T: IntoIterator<Item = (K, FieldMeta)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn label_falls_back_to_identifier() {
        let metadata: FieldMetadata = [("nat_20_count", FieldMeta::pretty("# Nat 20s"))]
            .into_iter()
            .collect();

        assert_eq!("# Nat 20s", metadata.label("nat_20_count"));
        assert_eq!("nat_1_count", metadata.label("nat_1_count"));
        assert_eq!(None, metadata.explanation("nat_20_count"));
    }

    #[test]
    fn flags_default_to_false() {
        let meta: FieldMeta =
            serde_json::from_str(r#"{ "pretty": "D20 Rolls", "explanation": "rolls with a d20" }"#)
                .unwrap();

        assert_eq!(
            FieldMeta::pretty("D20 Rolls").with_explanation("rolls with a d20"),
            meta
        );
    }

    #[test]
    fn both_flags_are_independent() {
        let meta: FieldMeta =
            serde_json::from_str(r#"{ "is_percent": true, "is_roll": true }"#).unwrap();

        assert!(meta.is_percent);
        assert!(meta.is_roll_average);
    }
}
