//! Account and board records returned by the API.

use monday_columns::ColumnValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(deserialize_with = "crate::graphql::id_as_u64")]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Board {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Group {
    pub id: String,
    pub title: String,
}

/// A board item with its raw column values. Decode them with a
/// [`ColumnCatalog`](monday_columns::ColumnCatalog) built for the same board.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Item {
    pub id: String,
    pub group_id: String,
    pub name: String,
    pub column_values: Vec<ColumnValue>,
}

/// Item as it appears in the GraphQL response (`group { id }` nested).
#[derive(Debug, Deserialize)]
pub(crate) struct ItemData {
    id: String,
    group: GroupRef,
    name: String,
    #[serde(default)]
    column_values: Vec<ColumnValue>,
}

#[derive(Debug, Deserialize)]
struct GroupRef {
    id: String,
}

impl From<ItemData> for Item {
    fn from(data: ItemData) -> Self {
        Self {
            id: data.id,
            group_id: data.group.id,
            name: data.name,
            column_values: data.column_values,
        }
    }
}
