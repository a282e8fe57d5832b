//! Label tables for status (color) and dropdown columns.
//!
//! Both column types keep their option table in the column's `settings_str`,
//! in two different shapes:
//!
//! ```text
//! color:    {"labels": {"<index>": "<name>"}, "label_positions_v2": {"<index>": <int>}}
//! dropdown: {"labels": [{"id": <int>, "name": "<string>"}, ...]}
//! ```
//!
//! Both normalize into the same [`LabelEntry`] pair.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ColumnsError, Result, ValuePart};
use crate::types::ColumnType;

/// A named option within a status or dropdown column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LabelEntry {
    pub index: String,
    pub name: String,
}

impl LabelEntry {
    pub fn new(index: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StatusSettings {
    labels: HashMap<String, String>,
    #[serde(default)]
    label_positions_v2: HashMap<String, i64>,
}

#[derive(Debug, Deserialize)]
struct DropdownSettings {
    labels: Vec<DropdownLabel>,
}

#[derive(Debug, Deserialize)]
struct DropdownLabel {
    id: u64,
    name: String,
}

/// Decode a column's settings into its label entries.
///
/// Status entries are ordered by their board position, with unpositioned
/// labels last and ties broken by index string. Dropdown entries keep the
/// order of the settings.
///
/// # Errors
///
/// * `UnsupportedColumnType` - the column is neither a status nor a dropdown
/// * `MalformedValue` - the settings do not match the type's shape; `column`
///   is `None` since no column id is known here
pub fn decode_labels(settings_raw: &str, column_type: &ColumnType) -> Result<Vec<LabelEntry>> {
    decode_entries(None, settings_raw, column_type)
}

fn decode_entries(
    column: Option<&str>,
    settings_raw: &str,
    column_type: &ColumnType,
) -> Result<Vec<LabelEntry>> {
    let malformed = |e| ColumnsError::malformed(column, ValuePart::Settings, column_type, e);
    match column_type {
        ColumnType::Color => {
            let settings: StatusSettings = serde_json::from_str(settings_raw).map_err(malformed)?;
            Ok(status_entries(settings))
        }
        ColumnType::Dropdown => {
            let settings: DropdownSettings =
                serde_json::from_str(settings_raw).map_err(malformed)?;
            Ok(settings
                .labels
                .into_iter()
                .map(|label| LabelEntry::new(label.id.to_string(), label.name))
                .collect())
        }
        _ => Err(ColumnsError::UnsupportedColumnType {
            column_type: column_type.clone(),
        }),
    }
}

fn status_entries(settings: StatusSettings) -> Vec<LabelEntry> {
    let positions = settings.label_positions_v2;
    let mut entries: Vec<LabelEntry> = settings
        .labels
        .into_iter()
        .map(|(index, name)| LabelEntry { index, name })
        .collect();
    entries.sort_by(|a, b| {
        let pa = positions.get(&a.index);
        let pb = positions.get(&b.index);
        (pa.is_none(), pa, &a.index).cmp(&(pb.is_none(), pb, &b.index))
    });
    entries
}

/// The decoded label table of one column, with lookups in both directions.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCatalog {
    column_type: ColumnType,
    entries: Vec<LabelEntry>,
}

impl LabelCatalog {
    /// Decode a column's settings. See [`decode_labels`].
    pub fn decode(settings_raw: &str, column_type: &ColumnType) -> Result<Self> {
        Ok(Self {
            column_type: column_type.clone(),
            entries: decode_labels(settings_raw, column_type)?,
        })
    }

    /// Decode the settings of a known column; errors carry the column id.
    pub fn for_column(column: &crate::Column) -> Result<Self> {
        Ok(Self {
            column_type: column.column_type.clone(),
            entries: decode_entries(
                Some(column.id.as_str()),
                &column.settings_raw,
                &column.column_type,
            )?,
        })
    }

    pub fn column_type(&self) -> &ColumnType {
        &self.column_type
    }

    pub fn entries(&self) -> &[LabelEntry] {
        &self.entries
    }

    /// Label name for a decoded index (status index or dropdown id).
    pub fn name_of(&self, index: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.index == index)
            .map(|e| e.name.as_str())
    }

    /// Index for a label name. The first match wins if names repeat.
    pub fn index_of(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.index.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for LabelCatalog {
    type Item = LabelEntry;
    type IntoIter = std::vec::IntoIter<LabelEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const STATUS: &str = r#"{"labels":{"0":"Done","1":"Stuck"},"label_positions_v2":{"0":0,"1":1}}"#;
    const DROPDOWN: &str = r#"{"labels":[{"id":5,"name":"Red"},{"id":9,"name":"Blue"}]}"#;

    #[test]
    fn status_labels_as_set() {
        let entries = decode_labels(STATUS, &ColumnType::Color).unwrap();
        let got: HashSet<LabelEntry> = entries.into_iter().collect();
        let want: HashSet<LabelEntry> = [LabelEntry::new("0", "Done"), LabelEntry::new("1", "Stuck")]
            .into_iter()
            .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn status_labels_follow_positions() {
        let settings = r#"{
            "labels": {"0": "Working on it", "1": "Done", "2": "Stuck", "5": ""},
            "label_positions_v2": {"0": 1, "1": 0, "2": 2}
        }"#;
        let entries = decode_labels(settings, &ColumnType::Color).unwrap();
        let indexes: Vec<&str> = entries.iter().map(|e| e.index.as_str()).collect();
        assert_eq!(indexes, vec!["1", "0", "2", "5"]);
    }

    #[test]
    fn status_without_positions_sorts_by_index() {
        let entries =
            decode_labels(r#"{"labels":{"2":"C","0":"A","1":"B"}}"#, &ColumnType::Color).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn dropdown_labels_keep_order() {
        let entries = decode_labels(DROPDOWN, &ColumnType::Dropdown).unwrap();
        assert_eq!(
            entries,
            vec![LabelEntry::new("5", "Red"), LabelEntry::new("9", "Blue")]
        );
    }

    #[test]
    fn unsupported_column_type() {
        for ct in [ColumnType::Text, ColumnType::Date, ColumnType::Other("rating".into())] {
            assert!(matches!(
                decode_labels(STATUS, &ct),
                Err(ColumnsError::UnsupportedColumnType { .. })
            ));
        }
    }

    #[test]
    fn malformed_settings_return_error() {
        assert!(matches!(
            decode_labels("not json", &ColumnType::Color),
            Err(ColumnsError::MalformedValue {
                column: None,
                part: ValuePart::Settings,
                ..
            })
        ));
        // dropdown shape handed to a status column
        assert!(matches!(
            decode_labels(DROPDOWN, &ColumnType::Color),
            Err(ColumnsError::MalformedValue { .. })
        ));
        assert!(matches!(
            decode_labels(STATUS, &ColumnType::Dropdown),
            Err(ColumnsError::MalformedValue { .. })
        ));
    }

    #[test]
    fn label_catalog_lookups() {
        let labels = LabelCatalog::decode(DROPDOWN, &ColumnType::Dropdown).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.column_type(), &ColumnType::Dropdown);
        assert_eq!(labels.name_of("9"), Some("Blue"));
        assert_eq!(labels.index_of("Red"), Some("5"));
        assert_eq!(labels.name_of("1"), None);
    }

    #[test]
    fn for_column_names_the_column_in_errors() {
        let column = crate::Column::new("status", "Status", ColumnType::Color).with_settings("{");
        let err = LabelCatalog::for_column(&column).unwrap_err();
        assert!(matches!(
            err,
            ColumnsError::MalformedValue { ref column, part: ValuePart::Settings, .. }
                if column.as_deref() == Some("status")
        ));
        assert!(err.to_string().contains("settings for column 'status'"));
    }
}
