//! Rewriting of legacy column fields.
//!
//! Older schemas name the component `ui:type` and its options `ui:props`. Such columns are
//! accepted forever and converted forward; the legacy value wins if both spellings are present.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::column::{key_text, RawColumn, LEGACY_COMPONENT_KEY, LEGACY_OPTIONS_KEY};
use crate::diagnostics::{Diagnostic, DiagnosticSink};

const LEGACY_FIELDS: [(&str, &str); 2] = [
    (LEGACY_COMPONENT_KEY, "component"),
    (LEGACY_OPTIONS_KEY, "options"),
];

/// Convert a column (and its nested group items) to the current field names.
///
/// Returns the input unchanged if it has no legacy fields. Every legacy field found is reported
/// to `sink` once.
pub fn normalize_column<'a>(
    column: &'a RawColumn,
    sink: &mut dyn DiagnosticSink,
) -> Cow<'a, RawColumn> {
    match normalize_map(column.as_map(), sink) {
        Some(map) => Cow::Owned(RawColumn::new(map)),
        None => Cow::Borrowed(column),
    }
}

/// Normalize all columns if any of them uses legacy fields.
pub fn normalize_columns<'a>(
    columns: &'a [RawColumn],
    sink: &mut dyn DiagnosticSink,
) -> Cow<'a, [RawColumn]> {
    if !columns.iter().any(RawColumn::is_legacy) {
        return Cow::Borrowed(columns);
    }

    log::debug!("schema contains legacy columns, normalizing");

    Cow::Owned(
        columns
            .iter()
            .map(|column| normalize_column(column, sink).into_owned())
            .collect(),
    )
}

fn normalize_map(
    map: &Map<String, Value>,
    sink: &mut dyn DiagnosticSink,
) -> Option<Map<String, Value>> {
    let mut normalized = None;

    if LEGACY_FIELDS.iter().any(|(legacy, _)| map.contains_key(*legacy)) {
        let column = key_text(map);
        let mut map = map.clone();

        for (legacy, replacement) in LEGACY_FIELDS {
            if let Some(value) = map.remove(legacy) {
                sink.report(Diagnostic::Deprecated {
                    column: column.clone(),
                    field: legacy,
                    replacement,
                });
                if !value.is_null() {
                    map.insert(replacement.to_string(), value);
                }
            }
        }

        normalized = Some(map);
    }

    let items = {
        let current = normalized.as_ref().unwrap_or(map);
        normalize_items(current, sink)
    };

    if let Some(items) = items {
        let mut map = normalized.unwrap_or_else(|| map.clone());
        if let Some(Value::Object(options)) = map.get_mut("options") {
            options.insert("items".to_string(), Value::Array(items));
        }
        normalized = Some(map);
    }

    normalized
}

fn normalize_items(
    map: &Map<String, Value>,
    sink: &mut dyn DiagnosticSink,
) -> Option<Vec<Value>> {
    let items = map
        .get("options")
        .and_then(|options| options.get("items"))
        .and_then(Value::as_array)?;

    let mut changed: Option<Vec<Value>> = None;
    for (index, item) in items.iter().enumerate() {
        if let Value::Object(item) = item {
            if let Some(item) = normalize_map(item, sink) {
                changed.get_or_insert_with(|| items.clone())[index] = Value::Object(item);
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(value: Value) -> RawColumn {
        RawColumn::try_from(value).unwrap()
    }

    #[test]
    fn test_current_columns_are_borrowed() {
        let column = raw(json!({"key": "a", "component": "text", "options": {"mode": "single"}}));
        let mut sink: Vec<Diagnostic> = Vec::new();
        assert!(matches!(normalize_column(&column, &mut sink), Cow::Borrowed(_)));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_legacy_fields_win() {
        let column = raw(json!({
            "key": "a",
            "title": "A",
            "ui:type": "text",
            "ui:props": {"mode": "static", "static": "x"},
            "component": "image",
            "options": {"preview": true},
        }));
        let mut sink: Vec<Diagnostic> = Vec::new();
        let normalized = normalize_column(&column, &mut sink);

        assert_eq!(
            Value::from(normalized.into_owned()),
            json!({
                "key": "a",
                "title": "A",
                "component": "text",
                "options": {"mode": "static", "static": "x"},
            })
        );
        assert_eq!(
            sink,
            [
                Diagnostic::Deprecated {
                    column: "a".into(),
                    field: "ui:type",
                    replacement: "component",
                },
                Diagnostic::Deprecated {
                    column: "a".into(),
                    field: "ui:props",
                    replacement: "options",
                },
            ]
        );
    }

    #[test]
    fn test_single_legacy_field() {
        let column = raw(json!({"key": "b", "ui:type": "tag", "options": {"color": "red"}}));
        let mut sink: Vec<Diagnostic> = Vec::new();
        let normalized = normalize_column(&column, &mut sink);
        assert_eq!(normalized.component(), Some("tag"));
        assert_eq!(normalized.options().unwrap()["color"], "red");
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_nested_group_items() {
        let column = raw(json!({
            "key": "g",
            "component": "group",
            "options": {
                "layout": [2],
                "items": [null, {"key": "c", "ui:type": "text", "ui:props": {}}],
            },
        }));
        let mut sink: Vec<Diagnostic> = Vec::new();
        let normalized = normalize_column(&column, &mut sink);

        assert_eq!(
            normalized.options().unwrap()["items"],
            json!([null, {"key": "c", "component": "text", "options": {}}])
        );
        assert_eq!(sink.len(), 2);
        assert!(!normalized.is_legacy());
    }

    #[test]
    fn test_normalize_columns_gate() {
        let current = vec![raw(json!({"key": "a", "component": "text"}))];
        let mut sink: Vec<Diagnostic> = Vec::new();
        assert!(matches!(
            normalize_columns(&current, &mut sink),
            Cow::Borrowed(_)
        ));

        let mixed = vec![
            raw(json!({"key": "a", "component": "text"})),
            raw(json!({"key": "b", "ui:type": "text"})),
        ];
        let normalized = normalize_columns(&mixed, &mut sink);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0], mixed[0]);
        assert_eq!(normalized[1].component(), Some("text"));
        assert_eq!(sink.len(), 1);
    }
}
