//! Core column and value types.
//!
//! `Column` and `ColumnValue` deserialize directly from the monday.com GraphQL
//! response shapes. `DecodedValue` is what the codec hands back to callers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::wire::null_as_empty;

/// The declared type of a column. Determines how its values are decoded.
///
/// Tags outside the supported set are preserved in `Other` so the column can
/// still be listed; decoding such a column fails with
/// [`ColumnsError::UnsupportedColumnType`](crate::ColumnsError::UnsupportedColumnType).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    Text,
    /// Status column; values are label indexes.
    Color,
    /// Checkbox column.
    Boolean,
    Date,
    MultiplePerson,
    Dropdown,
    Other(String),
}

impl ColumnType {
    /// The tag the API uses for this type.
    pub fn as_str(&self) -> &str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Color => "color",
            ColumnType::Boolean => "boolean",
            ColumnType::Date => "date",
            ColumnType::MultiplePerson => "multiple-person",
            ColumnType::Dropdown => "dropdown",
            ColumnType::Other(tag) => tag,
        }
    }

    /// Whether values of this type decode to a list rather than a scalar.
    pub fn is_list(&self) -> bool {
        matches!(self, ColumnType::MultiplePerson | ColumnType::Dropdown)
    }
}

impl From<String> for ColumnType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "text" => ColumnType::Text,
            "color" => ColumnType::Color,
            "boolean" => ColumnType::Boolean,
            "date" => ColumnType::Date,
            "multiple-person" => ColumnType::MultiplePerson,
            "dropdown" => ColumnType::Dropdown,
            _ => ColumnType::Other(tag),
        }
    }
}

impl From<&str> for ColumnType {
    fn from(tag: &str) -> Self {
        ColumnType::from(tag.to_string())
    }
}

impl From<ColumnType> for String {
    fn from(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A board's column definition, shared by every item on the board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Raw settings JSON; carries the label tables for status and dropdown columns.
    #[serde(
        rename = "settings_str",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub settings_raw: String,
}

impl Column {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        column_type: impl Into<ColumnType>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            column_type: column_type.into(),
            settings_raw: String::new(),
        }
    }

    pub fn with_settings(mut self, settings_raw: impl Into<String>) -> Self {
        self.settings_raw = settings_raw.into();
        self
    }
}

/// One item's raw value for one column. An empty `value` means "no value set".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnValue {
    #[serde(rename = "id")]
    pub column_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
}

impl ColumnValue {
    pub fn new(column_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            value: value.into(),
        }
    }

    pub fn is_unset(&self) -> bool {
        self.value.is_empty()
    }
}

/// The decoded form of a column value: exactly one of a scalar or a list.
///
/// Which variant is produced is fixed by the column's type, never by the
/// data present. An unset value decodes to an empty scalar.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DecodedValue {
    Scalar(String),
    List(Vec<String>),
}

impl DecodedValue {
    /// The value of an unset column.
    pub fn empty() -> Self {
        DecodedValue::Scalar(String::new())
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            DecodedValue::Scalar(s) => Some(s),
            DecodedValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            DecodedValue::Scalar(_) => None,
            DecodedValue::List(items) => Some(items),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            DecodedValue::Scalar(s) => s.is_empty(),
            DecodedValue::List(items) => items.is_empty(),
        }
    }
}

impl Default for DecodedValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::Scalar(s) => f.write_str(s),
            DecodedValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_type_from_known_tags() {
        assert_eq!(ColumnType::from("text"), ColumnType::Text);
        assert_eq!(ColumnType::from("color"), ColumnType::Color);
        assert_eq!(ColumnType::from("boolean"), ColumnType::Boolean);
        assert_eq!(ColumnType::from("date"), ColumnType::Date);
        assert_eq!(ColumnType::from("multiple-person"), ColumnType::MultiplePerson);
        assert_eq!(ColumnType::from("dropdown"), ColumnType::Dropdown);
    }

    #[test]
    fn column_type_keeps_unknown_tag() {
        let ct = ColumnType::from("timeline");
        assert_eq!(ct, ColumnType::Other("timeline".into()));
        assert_eq!(ct.to_string(), "timeline");
        assert!(!ct.is_list());
    }

    #[test]
    fn column_type_json_uses_api_tag() {
        let json = serde_json::to_string(&ColumnType::MultiplePerson).unwrap();
        assert_eq!(json, r#""multiple-person""#);
        let parsed: ColumnType = serde_json::from_str(r#""numeric""#).unwrap();
        assert_eq!(parsed, ColumnType::Other("numeric".into()));
    }

    #[test]
    fn column_from_graphql_shape() {
        let json = r#"{
            "id": "status",
            "title": "Status",
            "type": "color",
            "settings_str": "{\"labels\":{\"0\":\"Done\"}}"
        }"#;
        let column: Column = serde_json::from_str(json).unwrap();
        assert_eq!(column.id, "status");
        assert_eq!(column.column_type, ColumnType::Color);
        assert_eq!(column.settings_raw, r#"{"labels":{"0":"Done"}}"#);
    }

    #[test]
    fn column_without_settings_defaults_empty() {
        let json = r#"{"id": "name", "title": "Name", "type": "name", "settings_str": null}"#;
        let column: Column = serde_json::from_str(json).unwrap();
        assert_eq!(column.settings_raw, "");
        assert_eq!(column.column_type, ColumnType::Other("name".into()));
    }

    #[test]
    fn column_value_null_is_unset() {
        let value: ColumnValue = serde_json::from_str(r#"{"id": "due", "value": null}"#).unwrap();
        assert_eq!(value.column_id, "due");
        assert!(value.is_unset());
    }

    #[test]
    fn decoded_value_accessors() {
        let scalar = DecodedValue::Scalar("3".into());
        assert_eq!(scalar.as_scalar(), Some("3"));
        assert_eq!(scalar.as_list(), None);

        let list = DecodedValue::List(vec!["11".into(), "22".into()]);
        assert_eq!(list.as_scalar(), None);
        assert_eq!(list.as_list().map(|l| l.len()), Some(2));
        assert_eq!(list.to_string(), "11, 22");

        assert!(DecodedValue::empty().is_empty());
        assert_eq!(DecodedValue::default(), DecodedValue::Scalar(String::new()));
    }
}
