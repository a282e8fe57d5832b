//! Typed client for the monday.com GraphQL API
//!
//! Thin request/response plumbing over [`reqwest`]: each method shapes one
//! GraphQL document, posts it with the account's API token, and unwraps the
//! response envelope. Column values come back raw; decode them with the
//! [`ColumnCatalog`](monday_columns::ColumnCatalog) for the same board.
//!
//! ```rust,no_run
//! use monday_client::{ClientConfig, MondayClient};
//!
//! # async fn run() -> monday_client::Result<()> {
//! let client = MondayClient::new(ClientConfig::load(None)?)?;
//! let catalog = client.column_catalog(123456).await?;
//! for item in client.get_items(123456).await? {
//!     for value in &item.column_values {
//!         println!("{}: {}", value.column_id, catalog.decode(value)?);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod graphql;
pub mod queries;
pub mod types;

pub use client::MondayClient;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{ClientError, ConfigError, GraphQlMessage, Result};
pub use graphql::GraphQlRequest;
pub use types::{Board, Group, Item, User};

pub use monday_columns;
