//! Schema driven data table core.
//!
//! A table is described by a declarative schema: a list of columns, each rendered by a named
//! component, plus optional header/footer slots. This crate turns such a schema, possibly using
//! the legacy `ui:type`/`ui:props` column fields and possibly broken in places, into a list of
//! render ready columns:
//!
//! 1. legacy columns are rewritten ([`normalize`]),
//! 2. each column is checked against the column contract and the options schema of its component
//!    as found in the [`ComponentRegistry`], recursing into `group` items ([`validate`]),
//! 3. columns that fail are replaced in place by an error display column ([`pipeline`]).
//!
//! Rendering itself is left to the host, see [`layout::LayoutRenderer`].

pub mod column;
pub mod component;
pub mod components;
pub mod diagnostics;
pub mod layout;
pub mod normalize;
pub mod pipeline;
pub mod props;
pub mod registry;
pub mod slot;
pub mod state;
pub mod table;
pub mod validate;

pub use column::{ColumnSchema, RawColumn};
pub use component::{
    ComponentDescriptor, ComponentId, CustomComponents, ExternalComponents, MergeMode,
};
pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink};
pub use layout::{LayoutRenderer, TableLayout};
pub use normalize::{normalize_column, normalize_columns};
pub use pipeline::resolve_columns;
pub use props::{validate_props, PropsError, TableProps, TableSchema};
pub use registry::ComponentRegistry;
pub use slot::{resolve_header, resolve_slot, SlotSchema, SlotSetting};
pub use state::{TableState, TableStateStore, TableStateUpdate};
pub use table::{PrepareError, PreparedTable};
pub use validate::{ColumnError, ColumnValidator, ValidationSetting};
