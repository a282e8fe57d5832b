//! HTTP client for the monday.com GraphQL API.

use std::fmt;

use reqwest::header::{AUTHORIZATION, CACHE_CONTROL};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

use monday_columns::{Column, ColumnCatalog, ColumnValues};

use crate::config::{redacted, ClientConfig};
use crate::error::{ClientError, Result};
use crate::graphql::{id_as_string, GraphQlRequest, GraphQlResponse};
use crate::queries;
use crate::types::{Board, Group, Item, ItemData, User};

#[derive(Deserialize)]
struct BoardsEnvelope<T> {
    boards: Vec<T>,
}

#[derive(Deserialize)]
struct BoardGroups {
    groups: Vec<Group>,
}

#[derive(Deserialize)]
struct BoardColumns {
    columns: Vec<Column>,
}

#[derive(Deserialize)]
struct BoardItems {
    items: Vec<ItemData>,
}

#[derive(Deserialize)]
struct UsersEnvelope {
    users: Vec<User>,
}

#[derive(Deserialize)]
struct IdRef {
    #[serde(deserialize_with = "id_as_string")]
    id: String,
}

#[derive(Deserialize)]
struct CreateItemEnvelope {
    create_item: IdRef,
}

#[derive(Deserialize)]
struct CreateUpdateEnvelope {
    create_update: IdRef,
}

/// Client for the monday.com API.
///
/// Each method shapes one request and unwraps its response envelope. Nothing
/// is cached between calls.
#[derive(Clone)]
pub struct MondayClient {
    http: Client,
    endpoint: String,
    api_token: String,
}

impl fmt::Debug for MondayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MondayClient")
            .field("endpoint", &self.endpoint)
            .field("api_token", &redacted(&self.api_token))
            .finish_non_exhaustive()
    }
}

impl MondayClient {
    /// Create a client from validated configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint,
            api_token: config.api_token,
        })
    }

    /// Create a client configured from `MONDAY_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::load(None)?)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a request and decode its `data` into `T`.
    pub async fn run<T: DeserializeOwned>(&self, request: &GraphQlRequest) -> Result<T> {
        debug!(variables = ?request.variables(), "sending GraphQL request");
        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, &self.api_token)
            .header(CACHE_CONTROL, "no-cache")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope: GraphQlResponse<T> = serde_json::from_str(&body)?;
        envelope.into_result()
    }

    /// All users in the account.
    #[instrument(skip(self))]
    pub async fn get_users(&self) -> Result<Vec<User>> {
        let data: UsersEnvelope = self.run(&GraphQlRequest::new(queries::USERS)).await?;
        debug!(count = data.users.len(), "fetched users");
        Ok(data.users)
    }

    /// All boards visible to the token.
    #[instrument(skip(self))]
    pub async fn get_boards(&self) -> Result<Vec<Board>> {
        let data: BoardsEnvelope<Board> = self.run(&GraphQlRequest::new(queries::BOARDS)).await?;
        debug!(count = data.boards.len(), "fetched boards");
        Ok(data.boards)
    }

    #[instrument(skip(self))]
    pub async fn get_groups(&self, board_id: u64) -> Result<Vec<Group>> {
        let board: BoardGroups = self.board_query(queries::GROUPS, board_id).await?;
        Ok(board.groups)
    }

    /// Column metadata for a board, in board order.
    #[instrument(skip(self))]
    pub async fn get_columns(&self, board_id: u64) -> Result<Vec<Column>> {
        let board: BoardColumns = self.board_query(queries::COLUMNS, board_id).await?;
        Ok(board.columns)
    }

    /// Fetch a board's columns and build the catalog used to decode its items.
    pub async fn column_catalog(&self, board_id: u64) -> Result<ColumnCatalog> {
        Ok(ColumnCatalog::build(self.get_columns(board_id).await?))
    }

    /// All items on a board with their raw column values.
    #[instrument(skip(self))]
    pub async fn get_items(&self, board_id: u64) -> Result<Vec<Item>> {
        let board: BoardItems = self.board_query(queries::ITEMS, board_id).await?;
        debug!(count = board.items.len(), "fetched items");
        Ok(board.items.into_iter().map(Item::from).collect())
    }

    /// Create an item in a group. Returns the new item's id.
    #[instrument(skip(self, column_values))]
    pub async fn add_item(
        &self,
        board_id: u64,
        group_id: &str,
        item_name: &str,
        column_values: &ColumnValues,
    ) -> Result<String> {
        let col_values = column_values.to_json()?;
        debug!(column_values = %col_values, "creating item");

        let request = GraphQlRequest::new(queries::CREATE_ITEM)
            .var("boardId", board_id)
            .var("groupId", group_id)
            .var("itemName", item_name)
            .var("colValues", col_values);
        let data: CreateItemEnvelope = self.run(&request).await?;
        Ok(data.create_item.id)
    }

    /// Post an update (comment) on an item. Returns the update's id.
    #[instrument(skip(self, body))]
    pub async fn add_item_update(&self, item_id: &str, body: &str) -> Result<String> {
        let numeric_id: u64 = item_id.trim().parse().map_err(|_| ClientError::InvalidItemId {
            id: item_id.to_string(),
        })?;

        let request = GraphQlRequest::new(queries::CREATE_UPDATE)
            .var("itemId", numeric_id)
            .var("body", body);
        let data: CreateUpdateEnvelope = self.run(&request).await?;
        Ok(data.create_update.id)
    }

    async fn board_query<T: DeserializeOwned>(&self, query: &str, board_id: u64) -> Result<T> {
        let request = GraphQlRequest::new(query).var("boardId", vec![board_id]);
        let data: BoardsEnvelope<T> = self.run(&request).await?;
        data.boards
            .into_iter()
            .next()
            .ok_or(ClientError::BoardNotFound { board_id })
    }
}
