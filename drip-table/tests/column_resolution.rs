use std::borrow::Cow;

use serde_json::{json, Value};

use drip_table::column::DataIndex;
use drip_table::component::AttrSchema;
use drip_table::slot::SlotElement;
use drip_table::validate::ValidationOptions;
use drip_table::*;
use drip_table_schema::{ObjectSchema, Schema, StringSchema};

static WIDGET_OPTIONS_SCHEMA: Schema = ObjectSchema::new(
    "Widget options.",
    &[("label", false, &StringSchema::new("Label.").schema())],
)
.schema();

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn raw(value: Value) -> RawColumn {
    RawColumn::try_from(value).unwrap()
}

fn validate(registry: &ComponentRegistry, column: Value) -> Result<(), ColumnError> {
    ColumnValidator::new(registry, ValidationOptions::default()).validate(&raw(column), "column")
}

fn widget() -> ComponentDescriptor {
    ComponentDescriptor::new("WidgetX", "Widget")
        .schema(&WIDGET_OPTIONS_SCHEMA)
        .attr(AttrSchema::new("options.label", "input").title("Label"))
}

#[test]
fn legacy_columns_are_converted() {
    init_log();

    let mut sink: Vec<Diagnostic> = Vec::new();
    let legacy = raw(json!({
        "key": "name",
        "dataIndex": "name",
        "ui:type": "text",
        "ui:props": {"mode": "single"},
        "component": "tag",
    }));
    let normalized = normalize_column(&legacy, &mut sink);

    assert!(!normalized.contains_key("ui:type"));
    assert!(!normalized.contains_key("ui:props"));
    assert_eq!(normalized["component"], "text");
    assert_eq!(normalized["options"], json!({"mode": "single"}));
    assert_eq!(normalized["dataIndex"], "name");
    assert_eq!(sink.len(), 2);
    assert_eq!(
        sink[0].to_string(),
        "Column name \"ui:type\" is deprecated, please use \"component\" instead."
    );

    let current = raw(json!({"key": "name", "component": "text"}));
    sink.clear();
    assert!(matches!(normalize_column(&current, &mut sink), Cow::Borrowed(_)));
    assert!(sink.is_empty());

    LogSink.report(Diagnostic::Deprecated {
        column: "name".into(),
        field: "ui:props",
        replacement: "options",
    });
}

#[test]
fn valid_columns_pass_through() {
    init_log();

    let columns: Vec<RawColumn> = serde_json::from_value(json!([
        {"key": "a", "title": "A", "dataIndex": ["info", "a"], "component": "text", "options": {"mode": "single"}},
        {"key": "b", "title": "B", "dataIndex": "b", "ui:type": "tag"},
    ]))
    .unwrap();

    let mut sink: Vec<Diagnostic> = Vec::new();
    let resolved = resolve_columns(
        &columns,
        &ComponentRegistry::default(),
        &ValidationSetting::default(),
        &mut sink,
    );

    assert_eq!(resolved[0].key, "a");
    assert_eq!(
        resolved[0].data_index,
        Some(DataIndex::Path(vec!["info".into(), "a".into()]))
    );
    assert_eq!(resolved[0].component, ComponentId::Local("text".into()));
    assert!(!resolved[0].is_fallback());

    assert_eq!(resolved[1].component, ComponentId::Local("tag".into()));
    assert!(matches!(sink.as_slice(), [Diagnostic::Deprecated { .. }]));
}

#[test]
fn failing_columns_fall_back() {
    init_log();

    let columns: Vec<RawColumn> = serde_json::from_value(json!([
        {"key": "x", "title": "X", "dataIndex": "x", "component": "missing", "width": 100},
        {"key": "y", "title": "Y", "dataIndex": "y", "component": "text"},
    ]))
    .unwrap();

    let mut sink: Vec<Diagnostic> = Vec::new();
    let resolved = resolve_columns(
        &columns,
        &ComponentRegistry::default(),
        &ValidationSetting::default(),
        &mut sink,
    );

    assert_eq!(resolved.len(), 2);
    let fallback = &resolved[0];
    assert!(fallback.is_fallback());
    assert_eq!(fallback.key, "x");
    assert_eq!(fallback.data_index, Some(DataIndex::Key("x".into())));
    assert_eq!(fallback.title.as_ref().and_then(|title| title.text()), Some("X"));
    assert_eq!(fallback.component, ComponentId::Local("text".into()));
    assert_eq!(fallback.width, None);
    assert_eq!(
        fallback.options["static"],
        "column: unknown or schema-less component 'missing'"
    );
    assert!(!resolved[1].is_fallback());
}

#[test]
fn title_slots_are_validated_before_conversion() {
    init_log();

    let columns: Vec<RawColumn> = serde_json::from_value(json!([
        {
            "key": "a",
            "component": "text",
            "title": {"body": "A", "header": {"elements": [{"type": "title", "title": 5}]}},
        },
        {
            "key": "b",
            "component": "text",
            "title": {"body": "B", "header": {"elements": [{"type": "slot", "slot": "help"}]}},
        },
    ]))
    .unwrap();

    let mut sink: Vec<Diagnostic> = Vec::new();
    let resolved = resolve_columns(
        &columns,
        &ComponentRegistry::default(),
        &ValidationSetting::default(),
        &mut sink,
    );

    assert!(resolved[0].is_fallback());
    assert_eq!(
        resolved[0].options["static"],
        "column/title/header/elements/0/title: Expected string value."
    );

    // an accepted column converts without falling back
    assert!(!resolved[1].is_fallback());
    let header = resolved[1].title.as_ref().and_then(|title| title.header()).unwrap();
    assert_eq!(header.elements[0].type_name(), "slot");
}

#[test]
fn group_validation_stops_at_first_bad_item() {
    init_log();

    let registry = ComponentRegistry::default();
    let err = validate(
        &registry,
        json!({
            "key": "g",
            "component": "group",
            "options": {
                "layout": [3],
                "items": [
                    {"key": "a", "component": "text"},
                    {"key": "b", "component": "text", "options": {"mode": 1}},
                    {"key": "c", "component": "missing"},
                ],
            },
        }),
    )
    .unwrap_err();

    assert_eq!(err.path, "column/options/items/1");
    assert_eq!(
        err.message,
        "column/options/items/1/options/mode: Expected string value."
    );

    let empty = validate(
        &registry,
        json!({
            "key": "g",
            "component": "group",
            "options": {"layout": [2], "items": [null, null]},
        }),
    );
    assert_eq!(empty, Ok(()));
}

#[test]
fn nested_groups_report_full_path() {
    let err = validate(
        &ComponentRegistry::default(),
        json!({
            "key": "outer",
            "component": "group",
            "options": {
                "layout": [1],
                "items": [{
                    "key": "inner",
                    "component": "group",
                    "options": {"layout": [2], "items": [null, {"key": "leaf", "component": "nope"}]},
                }],
            },
        }),
    )
    .unwrap_err();

    assert_eq!(
        err.message,
        "column/options/items/0/options/items/1: unknown or schema-less component 'nope'"
    );
}

#[test]
fn registry_merge_modes() {
    let add = ComponentRegistry::new(Some(&CustomComponents::new(MergeMode::Add).with(widget())));
    assert!(add.resolve_str("text").is_some());
    assert!(add.resolve_str("WidgetX").is_some());

    let replace =
        ComponentRegistry::new(Some(&CustomComponents::new(MergeMode::Replace).with(widget())));
    assert!(replace.resolve_str("text").is_none());
    assert!(replace.resolve_str("WidgetX").is_some());

    let err = validate(&replace, json!({"key": "a", "component": "text"})).unwrap_err();
    assert_eq!(err.message, "column: unknown or schema-less component 'text'");

    let mode: MergeMode = serde_json::from_value(json!("merge")).unwrap();
    assert_eq!(mode, MergeMode::Replace);
}

#[test]
fn namespaced_lookup() {
    let registry = ComponentRegistry::default().with_external(
        ExternalComponents::new()
            .with("libA", widget())
            .with("libA", ComponentDescriptor::new("Plain", "Plain")),
    );

    assert!(registry.resolve_str("libA::WidgetX").is_some());
    assert!(registry.resolve_str("libA").is_none());
    assert!(registry.resolve_str("libB::WidgetX").is_none());

    assert_eq!(
        validate(
            &registry,
            json!({"key": "w", "component": "libA::WidgetX", "options": {"label": "x"}})
        ),
        Ok(())
    );

    let err = validate(&registry, json!({"key": "w", "component": "libA::WidgetX"})).unwrap_err();
    assert_eq!(
        err.message,
        "column/options/label: property is missing and it is not optional"
    );

    // external components without an options schema are accepted as is
    assert_eq!(
        validate(
            &registry,
            json!({"key": "p", "component": "libA::Plain", "options": {"anything": 1}})
        ),
        Ok(())
    );
}

#[test]
fn slot_resolution() {
    let header: SlotSetting = serde_json::from_value(json!(true)).unwrap();
    let types: Vec<&str> = resolve_header(&header)
        .unwrap()
        .elements
        .iter()
        .map(SlotElement::type_name)
        .collect();
    assert_eq!(
        types,
        ["display-column-selector", "spacer", "search", "insert-button"]
    );

    assert_eq!(resolve_header(&SlotSetting::Absent), None);

    let empty: SlotSetting = serde_json::from_value(json!({"elements": []})).unwrap();
    assert_eq!(resolve_header(&empty), None);
}
