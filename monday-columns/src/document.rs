//! The outbound column-values document sent with item mutations.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::{ColumnsError, Result};

/// A mapping from column id to built value, serialized as one JSON object.
///
/// Keys serialize in sorted order. Inserting the same column twice keeps the
/// later value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnValues {
    values: BTreeMap<String, Value>,
}

impl ColumnValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a built value (see the `build_*` functions) for a column.
    pub fn insert(mut self, column_id: impl Into<String>, value: impl Serialize) -> Result<Self> {
        let value = serde_json::to_value(value).map_err(ColumnsError::Encode)?;
        self.values.insert(column_id.into(), value);
        Ok(self)
    }

    /// Add a plain-text value.
    pub fn text(mut self, column_id: impl Into<String>, text: impl Into<String>) -> Self {
        self.values.insert(column_id.into(), Value::String(text.into()));
        self
    }

    pub fn get(&self, column_id: &str) -> Option<&Value> {
        self.values.get(column_id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Serialize the whole document as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.values).map_err(ColumnsError::Encode)
    }
}

impl Serialize for ColumnValues {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}
