//! Error types for the column codec

use std::fmt;

use thiserror::Error;

use crate::types::ColumnType;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, ColumnsError>;

/// Errors that can occur while decoding or encoding column values
#[derive(Debug, Error)]
pub enum ColumnsError {
    /// Column id not present in the board's catalog
    #[error("unknown column id: {id}")]
    UnknownColumn { id: String },

    /// Column type has no decode or label rule
    #[error("unsupported column type: {column_type}")]
    UnsupportedColumnType { column_type: ColumnType },

    /// Wire JSON does not match the shape expected for the column type.
    ///
    /// `column` is the column id, or `None` when settings were decoded
    /// without a column at hand.
    #[error("malformed {column_type} {part}{}: {source}", for_column(.column))]
    MalformedValue {
        column: Option<String>,
        part: ValuePart,
        column_type: ColumnType,
        #[source]
        source: serde_json::Error,
    },

    /// A built value could not be serialized
    #[error("failed to encode column value: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Which JSON payload of a column failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuePart {
    /// An item's column value
    Value,
    /// The column's `settings_str`
    Settings,
}

impl fmt::Display for ValuePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValuePart::Value => f.write_str("value"),
            ValuePart::Settings => f.write_str("settings"),
        }
    }
}

fn for_column(column: &Option<String>) -> String {
    column
        .as_ref()
        .map(|id| format!(" for column '{}'", id))
        .unwrap_or_default()
}

impl ColumnsError {
    pub(crate) fn malformed(
        column: Option<&str>,
        part: ValuePart,
        column_type: &ColumnType,
        source: serde_json::Error,
    ) -> Self {
        Self::MalformedValue {
            column: column.map(str::to_string),
            part,
            column_type: column_type.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ColumnsError::UnknownColumn {
            id: "status".into(),
        };
        assert_eq!(err.to_string(), "unknown column id: status");
    }

    #[test]
    fn test_unsupported_names_the_tag() {
        let err = ColumnsError::UnsupportedColumnType {
            column_type: ColumnType::Other("timeline".into()),
        };
        assert_eq!(err.to_string(), "unsupported column type: timeline");
    }

    #[test]
    fn test_malformed_error() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err =
            ColumnsError::malformed(Some("due"), ValuePart::Value, &ColumnType::Date, source);
        assert!(err.to_string().starts_with("malformed date value for column 'due': "));
    }

    #[test]
    fn test_malformed_settings_without_column() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err =
            ColumnsError::malformed(None, ValuePart::Settings, &ColumnType::Color, source);
        assert!(err.to_string().starts_with("malformed color settings: "));
    }
}
