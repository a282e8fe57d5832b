//! Wire shapes exchanged with the monday.com API.
//!
//! Field names here are part of the external protocol. These types exist only
//! to marshal outbound values and unmarshal inbound ones.

use serde::{Deserialize, Deserializer, Serialize};

/// Date column value. `time` is empty when only a date is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateTime {
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time: String,
}

/// Status (color) column value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusIndex {
    pub index: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    Person,
    Team,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonOrTeam {
    pub id: u64,
    pub kind: PersonKind,
}

/// Outbound people column value, as produced by [`build_people`](crate::build_people).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeopleList {
    #[serde(rename = "personsAndTeams")]
    pub entries: Vec<PersonOrTeam>,
}

/// Inbound people column value. Only ids are read; `kind` may be any string
/// or absent.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PeopleIds {
    #[serde(rename = "personsAndTeams")]
    pub(crate) entries: Vec<PersonId>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PersonId {
    pub(crate) id: u64,
}

/// Checkbox column value. The API omits `checked` for unchecked boxes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Checkbox {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub checked: String,
}

/// Dropdown column value: the ids of the selected labels.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DropdownIds {
    pub ids: Vec<u64>,
}

/// Deserialize a nullable string, mapping `null` to `""`.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
