//! Value codec: turns a raw column value into a [`DecodedValue`].
//!
//! Dispatch is on the column's declared [`ColumnType`], one handler per
//! variant. The shape of the result (scalar or list) is fixed by the type.

use serde::de::DeserializeOwned;

use crate::catalog::ColumnCatalog;
use crate::error::{ColumnsError, Result, ValuePart};
use crate::types::{Column, ColumnType, ColumnValue, DecodedValue};
use crate::wire::{Checkbox, DateTime, DropdownIds, PeopleIds, StatusIndex};

/// Decode one item's value for one column.
///
/// An empty raw value is "unset" and decodes to an empty scalar regardless of
/// the column, without consulting the catalog.
///
/// # Errors
///
/// * `UnknownColumn` - the column id is not in the catalog
/// * `UnsupportedColumnType` - the column's type has no decode rule
/// * `MalformedValue` - the raw JSON does not match the type's wire shape
pub fn decode(catalog: &ColumnCatalog, value: &ColumnValue) -> Result<DecodedValue> {
    if value.is_unset() {
        return Ok(DecodedValue::empty());
    }
    let column = catalog.require(&value.column_id)?;
    decode_column(column, &value.value)
}

/// Decode every value of an item, preserving order. Stops at the first error.
pub fn decode_all(
    catalog: &ColumnCatalog,
    values: &[ColumnValue],
) -> Result<Vec<(String, DecodedValue)>> {
    values
        .iter()
        .map(|value| Ok((value.column_id.clone(), decode(catalog, value)?)))
        .collect()
}

fn decode_column(column: &Column, raw: &str) -> Result<DecodedValue> {
    match &column.column_type {
        ColumnType::Text => Ok(decode_text(raw)),
        ColumnType::Color => decode_status(column, raw),
        ColumnType::Boolean => decode_checkbox(column, raw),
        ColumnType::Date => decode_date(column, raw),
        ColumnType::MultiplePerson => decode_people(column, raw),
        ColumnType::Dropdown => decode_dropdown(column, raw),
        ColumnType::Other(_) => Err(ColumnsError::UnsupportedColumnType {
            column_type: column.column_type.clone(),
        }),
    }
}

fn decode_text(raw: &str) -> DecodedValue {
    DecodedValue::Scalar(raw.to_string())
}

fn decode_status(column: &Column, raw: &str) -> Result<DecodedValue> {
    let status: StatusIndex = parse(column, raw)?;
    Ok(DecodedValue::Scalar(status.index.to_string()))
}

// "true"/"false" exactly as delivered; no boolean coercion.
fn decode_checkbox(column: &Column, raw: &str) -> Result<DecodedValue> {
    let checkbox: Checkbox = parse(column, raw)?;
    Ok(DecodedValue::Scalar(checkbox.checked))
}

// Time component is dropped.
fn decode_date(column: &Column, raw: &str) -> Result<DecodedValue> {
    let date: DateTime = parse(column, raw)?;
    Ok(DecodedValue::Scalar(date.date))
}

// Kind is not interpreted, so unfamiliar kinds still decode.
fn decode_people(column: &Column, raw: &str) -> Result<DecodedValue> {
    let people: PeopleIds = parse(column, raw)?;
    Ok(DecodedValue::List(
        people.entries.iter().map(|p| p.id.to_string()).collect(),
    ))
}

fn decode_dropdown(column: &Column, raw: &str) -> Result<DecodedValue> {
    let dropdown: DropdownIds = parse(column, raw)?;
    Ok(DecodedValue::List(
        dropdown.ids.iter().map(u64::to_string).collect(),
    ))
}

fn parse<T: DeserializeOwned>(column: &Column, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|e| {
        ColumnsError::malformed(
            Some(column.id.as_str()),
            ValuePart::Value,
            &column.column_type,
            e,
        )
    })
}
