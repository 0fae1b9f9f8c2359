//! Column resolution pass.

use std::collections::HashSet;

use crate::column::{ColumnSchema, RawColumn};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::normalize::normalize_columns;
use crate::registry::ComponentRegistry;
use crate::validate::{ColumnError, ColumnValidator, ValidationSetting, COLUMN_PATH};

/// Resolve the top-level column list into render ready columns.
///
/// Never fails: a column that does not validate or convert is replaced in place by an error
/// display column (see [`ColumnSchema::fallback`]) and reported as
/// [`Diagnostic::InvalidColumn`]. The result always has one entry per input column.
pub fn resolve_columns(
    columns: &[RawColumn],
    registry: &ComponentRegistry,
    validation: &ValidationSetting,
    sink: &mut dyn DiagnosticSink,
) -> Vec<ColumnSchema> {
    let columns = normalize_columns(columns, sink);
    let validator = validation
        .options()
        .map(|options| ColumnValidator::new(registry, options));

    let resolved: Vec<ColumnSchema> = columns
        .iter()
        .map(|column| match resolve_column(column, validator.as_ref()) {
            Ok(resolved) => resolved,
            Err(err) => {
                sink.report(Diagnostic::InvalidColumn {
                    column: column.key_text(),
                    message: err.message.clone(),
                });
                ColumnSchema::fallback(column, &err.message)
            }
        })
        .collect();

    log::debug!(
        "resolved {} columns, {} replaced by error display",
        resolved.len(),
        resolved.iter().filter(|column| column.is_fallback()).count(),
    );

    check_unique_keys(&resolved, sink);

    resolved
}

fn resolve_column(
    column: &RawColumn,
    validator: Option<&ColumnValidator>,
) -> Result<ColumnSchema, ColumnError> {
    if let Some(validator) = validator {
        validator.validate(column, COLUMN_PATH)?;
    }
    ColumnSchema::from_raw(column)
}

/// Report keys used more than once, across all nesting levels.
pub fn check_unique_keys(columns: &[ColumnSchema], sink: &mut dyn DiagnosticSink) {
    let mut seen = HashSet::new();
    for (index, column) in columns.iter().enumerate() {
        column.walk(&format!("columns/{index}"), &mut |path, column| {
            if !seen.insert(column.key.clone()) {
                sink.report(Diagnostic::DuplicateKey {
                    key: column.key.clone(),
                    path: path.to_string(),
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::column::DataIndex;

    fn columns(value: Value) -> Vec<RawColumn> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_bad_column_is_contained() {
        let raw = columns(json!([
            {"key": "a", "title": "A", "dataIndex": "a", "component": "text"},
            {"key": "b", "title": "B", "dataIndex": "b", "component": "text", "options": {"mode": 1}},
            {"key": "c", "title": "C", "dataIndex": "c", "component": "tag"},
        ]));
        let mut sink: Vec<Diagnostic> = Vec::new();
        let resolved = resolve_columns(
            &raw,
            &ComponentRegistry::default(),
            &ValidationSetting::default(),
            &mut sink,
        );

        assert_eq!(resolved.len(), 3);
        assert!(!resolved[0].is_fallback());
        assert!(!resolved[2].is_fallback());

        let fallback = &resolved[1];
        assert!(fallback.is_fallback());
        assert_eq!(fallback.key, "b");
        assert_eq!(fallback.data_index, Some(DataIndex::Key("b".into())));
        assert_eq!(fallback.title.as_ref().and_then(|title| title.text()), Some("B"));
        assert_eq!(fallback.options["mode"], "static");
        assert_eq!(fallback.options["static"], "column/options/mode: Expected string value.");

        assert_eq!(
            sink,
            [Diagnostic::InvalidColumn {
                column: "b".into(),
                message: "column/options/mode: Expected string value.".into(),
            }]
        );
    }

    #[test]
    fn test_disabled_validation_still_converts() {
        let raw = columns(json!([
            {"key": "a", "component": "nope", "options": {"whatever": true}},
            {"key": "b", "component": "text", "width": [1]},
        ]));
        let mut sink: Vec<Diagnostic> = Vec::new();
        let resolved = resolve_columns(
            &raw,
            &ComponentRegistry::default(),
            &ValidationSetting::Disabled,
            &mut sink,
        );

        assert!(!resolved[0].is_fallback());
        assert!(resolved[1].is_fallback());
        assert!(resolved[1].options["static"]
            .as_str()
            .unwrap()
            .starts_with("column: "));
    }

    #[test]
    fn test_duplicate_keys_are_reported() {
        let raw = columns(json!([
            {"key": "a", "component": "text"},
            {
                "key": "g",
                "component": "group",
                "options": {"layout": [2], "items": [null, {"key": "a", "component": "text"}]},
            },
        ]));
        let mut sink: Vec<Diagnostic> = Vec::new();
        let resolved = resolve_columns(
            &raw,
            &ComponentRegistry::default(),
            &ValidationSetting::default(),
            &mut sink,
        );

        assert!(resolved.iter().all(|column| !column.is_fallback()));
        assert_eq!(
            sink,
            [Diagnostic::DuplicateKey {
                key: "a".into(),
                path: "columns/1/options/items/1".into(),
            }]
        );
    }
}
