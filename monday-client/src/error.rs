//! Error types for the monday.com client.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Explicitly requested configuration file does not exist
    #[error("configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Configuration sources could not be merged or extracted
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] figment::Error),

    /// No API token in any configuration source
    #[error("no API token configured; set MONDAY_API_TOKEN or api_token in the config file")]
    MissingToken,

    /// A configuration value is present but unusable
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Clone, serde::Deserialize, PartialEq)]
pub struct GraphQlMessage {
    pub message: String,
}

/// Errors returned by [`MondayClient`](crate::MondayClient) operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, TLS, body read)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The request reached the API but GraphQL reported errors
    #[error("GraphQL error: {}", join_messages(.errors))]
    GraphQl { errors: Vec<GraphQlMessage> },

    /// The response did not have the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response carried neither data nor errors
    #[error("response contained no data")]
    MissingData,

    /// A board query returned no board
    #[error("board not found: {board_id}")]
    BoardNotFound { board_id: u64 },

    /// Item ids must be numeric for update mutations
    #[error("invalid item id: {id}")]
    InvalidItemId { id: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Columns(#[from] monday_columns::ColumnsError),
}

fn join_messages(errors: &[GraphQlMessage]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
