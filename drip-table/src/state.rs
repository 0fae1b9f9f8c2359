//! Host owned view state.
//!
//! The core never mutates the state itself. It derives [`TableStateUpdate`]s and hands them to a
//! [`TableStateStore`], which decides when and how to apply them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::layout::TableLayout;
use crate::props::{PaginationSetting, TableProps};

pub const DEFAULT_PAGE_SIZE: u64 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub current: u64,
    pub page_size: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableState {
    pub layout: TableLayout,
    pub selected_row_keys: Vec<Value>,
    /// Active filter values by column `dataIndex`.
    pub filters: BTreeMap<String, Vec<Value>>,
    pub display_column_keys: Vec<String>,
    pub pagination: PaginationState,
}

/// Partial state change; unset fields are left alone.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableStateUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<TableLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_row_keys: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<BTreeMap<String, Vec<Value>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_column_keys: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationState>,
}

impl TableStateUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, state: &mut TableState) {
        if let Some(layout) = self.layout {
            state.layout = layout;
        }
        if let Some(keys) = self.selected_row_keys {
            state.selected_row_keys = keys;
        }
        if let Some(filters) = self.filters {
            state.filters = filters;
        }
        if let Some(keys) = self.display_column_keys {
            state.display_column_keys = keys;
        }
        if let Some(pagination) = self.pagination {
            state.pagination = pagination;
        }
    }

    /// Update selecting exactly `keys`.
    pub fn select(keys: Vec<Value>) -> Self {
        Self {
            selected_row_keys: Some(keys),
            ..Default::default()
        }
    }

    /// The state a freshly mounted table requests from its props.
    ///
    /// Filters come from every column with a plain `dataIndex` and a `defaultFilteredValue`.
    /// Without explicit `displayColumnKeys` all hidable columns are displayed.
    pub fn initial(props: &TableProps) -> Self {
        let columns = &props.schema.columns;

        let filters = columns
            .iter()
            .filter_map(|column| {
                let data_index = column.get("dataIndex")?.as_str()?;
                let values = column.get("defaultFilteredValue")?.as_array()?;
                Some((data_index.to_string(), values.clone()))
            })
            .collect();

        let display_column_keys = match &props.display_column_keys {
            Some(keys) => keys.clone(),
            None => columns
                .iter()
                .filter(|column| column.get("hidable").and_then(Value::as_bool) == Some(true))
                .filter_map(|column| column.key().map(str::to_string))
                .collect(),
        };

        let pagination = match &props.schema.pagination {
            PaginationSetting::Enabled(config) => config.page_size.map(|page_size| PaginationState {
                current: config.current.unwrap_or(1),
                page_size,
            }),
            PaginationSetting::Disabled => None,
        };

        Self {
            layout: props.schema.default_table_layout,
            selected_row_keys: props.selected_row_keys.clone(),
            filters: Some(filters),
            display_column_keys: Some(display_column_keys),
            pagination,
        }
    }
}

/// Store owning the view state of one table.
pub trait TableStateStore {
    fn table_state(&self) -> &TableState;

    fn set_table_state(&mut self, update: TableStateUpdate);
}

impl TableStateStore for TableState {
    fn table_state(&self) -> &TableState {
        self
    }

    fn set_table_state(&mut self, update: TableStateUpdate) {
        update.apply(self);
    }
}
