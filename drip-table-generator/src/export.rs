//! Turning the edited columns and global settings into a table schema.

use anyhow::{format_err, Error};
use serde_json::{Map, Value};

use drip_table::{ComponentRegistry, Diagnostic, RawColumn, TableSchema, ValidationSetting};

use crate::factory::INNER_INDEX_KEY;

/// The schema for `columns` with the global settings of `config`.
///
/// Generator bookkeeping fields are removed from every column, including nested group items.
pub fn export_schema(config: &TableSchema, columns: &[RawColumn]) -> TableSchema {
    let mut schema = config.clone();
    schema.columns = columns
        .iter()
        .map(|column| {
            let mut map = column.as_map().clone();
            strip_generator_fields(&mut map);
            RawColumn::new(map)
        })
        .collect();
    schema
}

pub fn export_json(config: &TableSchema, columns: &[RawColumn]) -> Result<Value, Error> {
    serde_json::to_value(export_schema(config, columns))
        .map_err(|err| format_err!("unable to serialize table schema - {err}"))
}

/// Run the exported columns through the resolution pipeline and collect what it reports.
pub fn check_schema(schema: &TableSchema, registry: &ComponentRegistry) -> Vec<Diagnostic> {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    drip_table::resolve_columns(
        &schema.columns,
        registry,
        &ValidationSetting::default(),
        &mut diagnostics,
    );
    diagnostics
}

fn strip_generator_fields(column: &mut Map<String, Value>) {
    column.remove(INNER_INDEX_KEY);

    let items = column
        .get_mut("options")
        .and_then(|options| options.get_mut("items"))
        .and_then(Value::as_array_mut);
    for item in items.into_iter().flatten() {
        if let Value::Object(item) = item {
            strip_generator_fields(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use drip_table::SlotSetting;

    use super::*;

    #[test]
    fn test_export_strips_bookkeeping() {
        let column = RawColumn::try_from(json!({
            "key": "g",
            "component": "group",
            "innerIndexForGenerator": 0,
            "options": {
                "layout": [2],
                "items": [null, {"key": "t", "component": "text", "innerIndexForGenerator": 1}],
            },
        }))
        .unwrap();

        let config = TableSchema {
            header: SlotSetting::Default,
            bordered: Some(true),
            ..Default::default()
        };

        let value = export_json(&config, &[column]).unwrap();
        assert_eq!(value["header"], true);
        assert_eq!(value["bordered"], true);
        assert!(value["columns"][0].get(INNER_INDEX_KEY).is_none());
        assert!(value["columns"][0]["options"]["items"][1]
            .get(INNER_INDEX_KEY)
            .is_none());
        assert_eq!(value["columns"][0]["options"]["items"][1]["key"], "t");
    }

    #[test]
    fn test_check_reports_invalid_columns() {
        let schema = TableSchema {
            columns: vec![
                RawColumn::try_from(json!({"key": "a", "component": "text"})).unwrap(),
                RawColumn::try_from(json!({"key": "a", "component": "unknown"})).unwrap(),
            ],
            ..Default::default()
        };
        let diagnostics = check_schema(&schema, &ComponentRegistry::default());
        assert!(matches!(
            diagnostics.as_slice(),
            [Diagnostic::InvalidColumn { .. }, Diagnostic::DuplicateKey { .. }]
        ));
    }
}
