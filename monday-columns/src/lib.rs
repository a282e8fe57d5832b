//! Column catalog and value codec for monday.com boards
//!
//! `monday-columns` interprets the opaque, JSON-encoded strings the monday.com
//! API returns for each item's column values. It performs no I/O. Callers
//! fetch a board's column metadata, build a [`ColumnCatalog`] from it, and pass
//! that catalog into every decode.
//!
//! # Architecture
//!
//! - **Catalog**: immutable column id → [`Column`] lookup, built once per board
//! - **Codec**: dispatches on [`ColumnType`] to decode a raw value into a
//!   [`DecodedValue`] (a scalar or a list, fixed by the column type)
//! - **Builders**: construct outbound wire shapes (`build_date`, `build_people`, …)
//!   which callers collect into a [`ColumnValues`] document
//! - **Labels**: decode status/dropdown settings into index → name pairs
//!
//! ```rust
//! use monday_columns::{build_date, encode, Column, ColumnCatalog, ColumnType, ColumnValue};
//!
//! let catalog = ColumnCatalog::build(vec![Column::new("due", "Due", ColumnType::Date)]);
//! let raw = encode(&build_date("2024-01-05")).unwrap();
//! let decoded = catalog.decode(&ColumnValue::new("due", raw)).unwrap();
//! assert_eq!(decoded.as_scalar(), Some("2024-01-05"));
//! ```

pub mod builders;
pub mod catalog;
pub mod codec;
pub mod document;
pub mod error;
pub mod labels;
pub mod types;
pub mod wire;

pub use builders::{
    build_checkbox, build_date, build_date_time, build_dropdown, build_people,
    build_status_index, encode,
};
pub use catalog::ColumnCatalog;
pub use codec::{decode, decode_all};
pub use document::ColumnValues;
pub use error::{ColumnsError, Result, ValuePart};
pub use labels::{decode_labels, LabelCatalog, LabelEntry};
pub use types::{Column, ColumnType, ColumnValue, DecodedValue};
pub use wire::{Checkbox, DateTime, DropdownIds, PeopleList, PersonKind, PersonOrTeam, StatusIndex};
