//! One table, prepared for rendering.

use serde_json::Value;
use thiserror::Error;

use crate::column::ColumnSchema;
use crate::diagnostics::DiagnosticSink;
use crate::layout::{render_layout, LayoutContext, LayoutRenderer};
use crate::pipeline::resolve_columns;
use crate::props::{validate_props, PropsError, TableProps};
use crate::registry::ComponentRegistry;
use crate::slot::{resolve_header, resolve_slot, SlotSchema};
use crate::state::{TableState, TableStateUpdate};

/// Why a table could not be prepared at all.
///
/// Column level problems never end up here, they are contained in the resolved columns.
#[derive(Error, Debug)]
pub enum PrepareError {
    #[error(transparent)]
    Props(#[from] PropsError),
    #[error("invalid table props: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Props together with their resolved columns and slots.
#[derive(Clone, Debug)]
pub struct PreparedTable {
    pub props: TableProps,
    pub columns: Vec<ColumnSchema>,
    pub header: Option<SlotSchema>,
    pub footer: Option<SlotSchema>,
}

impl PreparedTable {
    /// Verify and parse raw props, then resolve them.
    pub fn prepare(
        props: &Value,
        registry: &ComponentRegistry,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Self, PrepareError> {
        validate_props(props)?;
        let props: TableProps = serde_json::from_value(props.clone())?;
        Ok(Self::from_props(props, registry, sink))
    }

    pub fn from_props(
        props: TableProps,
        registry: &ComponentRegistry,
        sink: &mut dyn DiagnosticSink,
    ) -> Self {
        let columns = resolve_columns(&props.schema.columns, registry, &props.ajv, sink);
        let header = resolve_header(&props.schema.header);
        let footer = resolve_slot(&props.schema.footer);

        Self {
            props,
            columns,
            header,
            footer,
        }
    }

    pub fn initial_state_update(&self) -> TableStateUpdate {
        TableStateUpdate::initial(&self.props)
    }

    /// Columns shown for `state`; hidable columns only while listed in the display keys.
    pub fn visible_columns<'a>(&'a self, state: &TableState) -> Vec<&'a ColumnSchema> {
        self.columns
            .iter()
            .filter(|column| !column.hidable || state.display_column_keys.contains(&column.key))
            .collect()
    }

    pub fn select(&self, keys: Vec<Value>) -> TableStateUpdate {
        TableStateUpdate::select(keys)
    }

    pub fn render<R: LayoutRenderer + ?Sized>(
        &self,
        state: &TableState,
        renderer: &mut R,
    ) -> R::Output {
        let context = LayoutContext {
            props: &self.props,
            columns: &self.columns,
            state,
            header: self.header.as_ref(),
        };
        render_layout(renderer, &context, self.footer.as_ref())
    }
}
