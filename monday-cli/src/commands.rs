//! Command handlers for the `monday` CLI.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;
use tracing::{debug, warn};

use monday_client::MondayClient;
use monday_columns::{
    build_checkbox, build_date, build_date_time, build_dropdown, build_people,
    build_status_index, ColumnCatalog, ColumnValue, ColumnValues, ColumnsError, DecodedValue,
};

use crate::cli::{AddItemArgs, Assignment, Commands};

/// Run one subcommand, printing its output to stdout.
pub async fn run(client: &MondayClient, command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::Users => {
            let users = client.get_users().await?;
            emit(json, &users, || {
                table(
                    vec!["Id", "Name", "Email"],
                    users
                        .iter()
                        .map(|u| vec![u.id.to_string(), u.name.clone(), u.email.clone()]),
                )
            })
        }
        Commands::Boards => {
            let boards = client.get_boards().await?;
            emit(json, &boards, || {
                table(
                    vec!["Id", "Name"],
                    boards.iter().map(|b| vec![b.id.clone(), b.name.clone()]),
                )
            })
        }
        Commands::Groups { board } => {
            let groups = client.get_groups(board).await?;
            emit(json, &groups, || {
                table(
                    vec!["Id", "Title"],
                    groups.iter().map(|g| vec![g.id.clone(), g.title.clone()]),
                )
            })
        }
        Commands::Columns { board } => {
            let columns = client.get_columns(board).await?;
            emit(json, &columns, || {
                table(
                    vec!["Id", "Title", "Type"],
                    columns.iter().map(|c| {
                        vec![c.id.clone(), c.title.clone(), c.column_type.to_string()]
                    }),
                )
            })
        }
        Commands::Items { board } => items(client, board, json).await,
        Commands::Labels { board, column } => {
            let catalog = client.column_catalog(board).await?;
            let labels = catalog
                .labels(&column)
                .with_context(|| format!("Failed to read labels of column '{}'", column))?;
            emit(json, labels.entries(), || {
                table(
                    vec!["Index", "Name"],
                    labels
                        .entries()
                        .iter()
                        .map(|l| vec![l.index.clone(), l.name.clone()]),
                )
            })
        }
        Commands::AddItem(args) => {
            let values = build_column_values(&args)?;
            let id = client
                .add_item(args.board, &args.group, &args.name, &values)
                .await?;
            println!("{}", id);
            Ok(())
        }
        Commands::AddUpdate { item, body } => {
            let id = client.add_item_update(&item, &body).await?;
            println!("{}", id);
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct DecodedItem {
    id: String,
    group_id: String,
    name: String,
    values: BTreeMap<String, DecodedValue>,
}

async fn items(client: &MondayClient, board: u64, json: bool) -> Result<()> {
    let catalog = client.column_catalog(board).await?;
    let items = client.get_items(board).await?;

    let decoded: Vec<DecodedItem> = items
        .into_iter()
        .map(|item| DecodedItem {
            values: item
                .column_values
                .iter()
                .map(|value| {
                    (
                        value.column_id.clone(),
                        decode_for_display(&catalog, &item.id, value),
                    )
                })
                .collect(),
            id: item.id,
            group_id: item.group_id,
            name: item.name,
        })
        .collect();

    emit(json, &decoded, || items_table(&catalog, &decoded))
}

/// Decode a value for display, falling back to the raw string.
///
/// The fallback keeps the shape the column type dictates, so a list column
/// stays a list for every item. Unsupported column types are expected on
/// most boards and are not warned about.
fn decode_for_display(
    catalog: &ColumnCatalog,
    item_id: &str,
    value: &ColumnValue,
) -> DecodedValue {
    match catalog.decode(value) {
        Ok(decoded) => decoded,
        Err(ColumnsError::UnsupportedColumnType { column_type }) => {
            debug!(column = %value.column_id, %column_type, "showing raw value");
            raw_value(catalog, value)
        }
        Err(e) => {
            warn!(item = %item_id, column = %value.column_id, "{}", e);
            raw_value(catalog, value)
        }
    }
}

fn raw_value(catalog: &ColumnCatalog, value: &ColumnValue) -> DecodedValue {
    let raw = value.value.clone();
    match catalog.get(&value.column_id) {
        Some(column) if column.column_type.is_list() => DecodedValue::List(vec![raw]),
        _ => DecodedValue::Scalar(raw),
    }
}

fn items_table(catalog: &ColumnCatalog, items: &[DecodedItem]) -> Table {
    let column_ids: Vec<&str> = catalog
        .iter()
        .map(|c| c.id.as_str())
        .filter(|id| items.iter().any(|item| item.values.contains_key(*id)))
        .collect();

    let mut header = vec!["Id".to_string(), "Group".to_string(), "Name".to_string()];
    header.extend(
        column_ids
            .iter()
            .filter_map(|id| catalog.get(id))
            .map(|c| c.title.clone()),
    );

    table(
        header,
        items.iter().map(|item| {
            let mut row = vec![item.id.clone(), item.group_id.clone(), item.name.clone()];
            row.extend(column_ids.iter().map(|id| {
                item.values
                    .get(*id)
                    .map(ToString::to_string)
                    .unwrap_or_default()
            }));
            row
        }),
    )
}

/// Assemble the column-values document for `add-item` from its flags.
pub fn build_column_values(args: &AddItemArgs) -> Result<ColumnValues> {
    let mut values = ColumnValues::new();
    for Assignment { column, value } in &args.text {
        values = values.text(column, value);
    }
    for Assignment { column, value } in &args.date {
        let built = match value.trim().split_once(' ') {
            Some((date, time)) => build_date_time(date, time.trim()),
            None => build_date(value.trim()),
        };
        values = values.insert(column, built)?;
    }
    for Assignment { column, value } in &args.status {
        let index: u32 = value
            .trim()
            .parse()
            .with_context(|| format!("Invalid status index for '{}': {}", column, value))?;
        values = values.insert(column, build_status_index(index))?;
    }
    for Assignment { column, value } in &args.checkbox {
        values = values.insert(column, build_checkbox(value.as_str()))?;
    }
    for Assignment { column, value } in &args.people {
        values = values.insert(column, build_people(parse_ids(column, value)?))?;
    }
    for Assignment { column, value } in &args.dropdown {
        values = values.insert(column, build_dropdown(parse_ids(column, value)?))?;
    }
    Ok(values)
}

fn parse_ids(column: &str, value: &str) -> Result<Vec<u64>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse()
                .with_context(|| format!("Invalid id '{}' for column '{}'", s, column))
        })
        .collect()
}

fn emit<T, F>(json: bool, value: &T, render: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> Table,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", render());
    }
    Ok(())
}

fn table<H, R>(header: Vec<H>, rows: R) -> Table
where
    H: Into<comfy_table::Cell>,
    R: IntoIterator<Item = Vec<String>>,
{
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header);
    for row in rows {
        table.add_row(row);
    }
    table
}
