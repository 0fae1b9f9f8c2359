//! Logic behind the drip-table schema builder.
//!
//! The builder lets users pick components from a panel, drop them as columns, edit their
//! attributes and finally export a table schema. Everything visual is left out, this crate only
//! provides the data side of those steps.

pub mod export;
pub mod factory;
pub mod field_keys;
pub mod panel;
pub mod path;

pub use export::{check_schema, export_json, export_schema};
pub use factory::{editable_descriptor, new_column, IdSource, SequentialIds};
pub use field_keys::{fill_field_key_options, FieldKeySource};
pub use panel::{ComponentPanel, UNKNOWN_COMPONENT};
pub use path::{column_item, set_column_item, ItemPathError};
