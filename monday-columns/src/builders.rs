//! Value builders for outbound column values.
//!
//! Each builder constructs the wire shape for one column type. They validate
//! only structurally and know nothing about column ids. Callers collect the
//! results into a [`ColumnValues`](crate::ColumnValues) document.
//!
//! ```rust
//! use monday_columns::{build_date, build_people, build_status_index, ColumnValues};
//!
//! let values = ColumnValues::new()
//!     .text("text", "have a nice day")
//!     .insert("date", build_date("2019-05-22")).unwrap()
//!     .insert("status", build_status_index(2)).unwrap()
//!     .insert("people", build_people([123456, 987654])).unwrap();
//! assert_eq!(values.len(), 4);
//! ```

use serde::Serialize;

use crate::error::{ColumnsError, Result};
use crate::wire::{Checkbox, DateTime, DropdownIds, PeopleList, PersonKind, PersonOrTeam, StatusIndex};

/// A date with no time component.
pub fn build_date(date: impl Into<String>) -> DateTime {
    DateTime {
        date: date.into(),
        time: String::new(),
    }
}

pub fn build_date_time(date: impl Into<String>, time: impl Into<String>) -> DateTime {
    DateTime {
        date: date.into(),
        time: time.into(),
    }
}

/// A status label position. Whether the index names a real label is not checked.
pub fn build_status_index(index: u32) -> StatusIndex {
    StatusIndex { index }
}

/// Checked state passed through verbatim, matching how it decodes.
pub fn build_checkbox(checked: impl Into<String>) -> Checkbox {
    Checkbox {
        checked: checked.into(),
    }
}

/// Assign users, in order. Every entry is tagged as a person.
pub fn build_people(user_ids: impl IntoIterator<Item = u64>) -> PeopleList {
    PeopleList {
        entries: user_ids
            .into_iter()
            .map(|id| PersonOrTeam {
                id,
                kind: PersonKind::Person,
            })
            .collect(),
    }
}

/// Select dropdown labels by id, in order.
pub fn build_dropdown(label_ids: impl IntoIterator<Item = u64>) -> DropdownIds {
    DropdownIds {
        ids: label_ids.into_iter().collect(),
    }
}

/// Encode a built value as the raw JSON string the API stores for a column.
pub fn encode<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(ColumnsError::Encode)
}
