//! GraphQL request and response envelopes.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{ClientError, GraphQlMessage, Result};

/// A query or mutation with its variables, posted as `{"query", "variables"}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphQlRequest {
    query: String,
    variables: Map<String, Value>,
}

impl GraphQlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Map::new(),
        }
    }

    /// Bind a variable referenced as `$name` in the query.
    pub fn var(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn variables(&self) -> &Map<String, Value> {
        &self.variables
    }
}

/// The response envelope. `errors` wins over `data` when both are present.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlMessage>,
}

impl<T> GraphQlResponse<T> {
    pub(crate) fn into_result(self) -> Result<T> {
        if !self.errors.is_empty() {
            return Err(ClientError::GraphQl {
                errors: self.errors,
            });
        }
        self.data.ok_or(ClientError::MissingData)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

/// Ids come back as numbers from some fields and strings from others.
pub(crate) fn id_as_u64<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Number(n) => Ok(n),
        RawId::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

pub(crate) fn id_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Number(n) => Ok(n.to_string()),
        RawId::Text(s) => Ok(s),
    }
}
