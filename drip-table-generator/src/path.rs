//! Addressing of nested group items.
//!
//! An item path is a list of indices, each selecting an entry of the `options.items` list of the
//! column selected so far. The empty path selects the column itself.

use serde_json::{Map, Value};
use thiserror::Error;

use drip_table::RawColumn;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemPathError {
    #[error("empty item path")]
    Empty,
    #[error("column at '{0}' has no group items")]
    NotAGroup(String),
    #[error("item index {index} out of range at '{path}' ({len} items)")]
    OutOfRange {
        path: String,
        index: usize,
        len: usize,
    },
    #[error("no column at '{0}'")]
    EmptySlot(String),
}

/// Render `path` the way column errors address items (`options/items/<i>/...`).
pub fn format_item_path(path: &[usize]) -> String {
    path.iter()
        .map(|index| format!("options/items/{index}"))
        .collect::<Vec<_>>()
        .join("/")
}

/// The column at `path`, `None` if the path leads nowhere or to an empty slot.
pub fn column_item<'a>(column: &'a RawColumn, path: &[usize]) -> Option<&'a Map<String, Value>> {
    let mut current = column.as_map();
    for &index in path {
        current = current
            .get("options")?
            .get("items")?
            .get(index)?
            .as_object()?;
    }
    Some(current)
}

/// Put `item` (or an empty slot for `None`) at `path`, returning what was there before.
pub fn set_column_item(
    column: &mut RawColumn,
    path: &[usize],
    item: Option<RawColumn>,
) -> Result<Value, ItemPathError> {
    let (&last, parents) = path.split_last().ok_or(ItemPathError::Empty)?;

    let mut current = column.as_map_mut();
    for (depth, &index) in parents.iter().enumerate() {
        let items = group_items_mut(current, &path[..depth])?;
        let len = items.len();
        current = match items.get_mut(index) {
            Some(Value::Object(child)) => child,
            Some(_) => return Err(ItemPathError::EmptySlot(format_item_path(&path[..=depth]))),
            None => {
                return Err(ItemPathError::OutOfRange {
                    path: format_item_path(&path[..depth]),
                    index,
                    len,
                })
            }
        };
    }

    let items = group_items_mut(current, parents)?;
    let len = items.len();
    let slot = items.get_mut(last).ok_or_else(|| ItemPathError::OutOfRange {
        path: format_item_path(parents),
        index: last,
        len,
    })?;

    let value = item.map_or(Value::Null, Value::from);
    Ok(std::mem::replace(slot, value))
}

fn group_items_mut<'a>(
    column: &'a mut Map<String, Value>,
    path: &[usize],
) -> Result<&'a mut Vec<Value>, ItemPathError> {
    column
        .get_mut("options")
        .and_then(|options| options.get_mut("items"))
        .and_then(Value::as_array_mut)
        .ok_or_else(|| ItemPathError::NotAGroup(format_item_path(path)))
}
