//! ColumnCatalog: per-board lookup from column id to column metadata.
//!
//! Built once from a board's column fetch and never mutated afterwards, so a
//! catalog can be shared freely between threads.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::codec;
use crate::error::{ColumnsError, Result};
use crate::labels::LabelCatalog;
use crate::types::{Column, ColumnValue, DecodedValue};

/// Immutable column id → [`Column`] lookup for one board.
///
/// Columns keep their fetch order for listing. A duplicate id replaces the
/// earlier column in place (last write wins).
#[derive(Debug, Clone, Default)]
pub struct ColumnCatalog {
    columns: Vec<Column>,
    id_index: HashMap<String, usize>,
}

impl ColumnCatalog {
    /// Build a catalog from a board's columns.
    pub fn build(columns: impl IntoIterator<Item = Column>) -> Self {
        let mut catalog = Self::default();
        for column in columns {
            if let Some(&idx) = catalog.id_index.get(&column.id) {
                warn!(id = %column.id, "duplicate column id, keeping the later definition");
                catalog.columns[idx] = column;
            } else {
                catalog.id_index.insert(column.id.clone(), catalog.columns.len());
                catalog.columns.push(column);
            }
        }

        debug!(columns = catalog.columns.len(), "column catalog built");
        catalog
    }

    /// Get a column by id.
    pub fn get(&self, id: &str) -> Option<&Column> {
        self.id_index.get(id).map(|&i| &self.columns[i])
    }

    /// Get a column by id, failing with `UnknownColumn` if absent.
    pub fn require(&self, id: &str) -> Result<&Column> {
        self.get(id)
            .ok_or_else(|| ColumnsError::UnknownColumn { id: id.to_string() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_index.contains_key(id)
    }

    /// All columns, in fetch order.
    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Decode one column value against this catalog.
    pub fn decode(&self, value: &ColumnValue) -> Result<DecodedValue> {
        codec::decode(self, value)
    }

    /// Decode the label table of a status or dropdown column.
    pub fn labels(&self, column_id: &str) -> Result<LabelCatalog> {
        LabelCatalog::for_column(self.require(column_id)?)
    }
}

impl FromIterator<Column> for ColumnCatalog {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        Self::build(iter)
    }
}
