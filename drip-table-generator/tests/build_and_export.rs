use serde_json::json;

use drip_table::components::FIELD_KEY_OPTIONS;
use drip_table::{
    ComponentRegistry, CustomComponents, Diagnostic, MergeMode, PreparedTable, RawColumn,
    TableSchema,
};
use drip_table_generator::*;

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn build_group_and_export() {
    init_log();

    let panel = ComponentPanel::builtin();
    let mut ids = SequentialIds::default();
    let mut columns: Vec<RawColumn> = Vec::new();

    let text = panel.find("text").unwrap();
    columns.push(new_column(text, columns.len(), &mut ids));

    let group = panel.find("group").unwrap();
    let mut group_column = new_column(group, columns.len(), &mut ids);
    let child = new_column(text, 0, &mut ids);
    let child_key = child.key().unwrap().to_string();
    set_column_item(&mut group_column, &[1], Some(child)).unwrap();
    columns.push(group_column);

    assert_eq!(column_item(&columns[1], &[1]).unwrap()["key"], child_key.as_str());
    assert_eq!(panel.component_name("group"), "Group Component");

    let config = TableSchema {
        bordered: Some(true),
        ..Default::default()
    };
    let schema = export_schema(&config, &columns);
    assert!(check_schema(&schema, &ComponentRegistry::default()).is_empty());

    let exported = export_json(&config, &columns).unwrap();
    assert!(exported["columns"][1].get("innerIndexForGenerator").is_none());

    // the exported schema renders without any column falling back
    let props = json!({ "schema": exported, "dataSource": [] });
    let mut sink: Vec<Diagnostic> = Vec::new();
    let table =
        PreparedTable::prepare(&props, &ComponentRegistry::default(), &mut sink).unwrap();
    assert!(sink.is_empty());
    assert!(table.columns.iter().all(|column| !column.is_fallback()));
    assert_eq!(table.columns[1].items[1].as_ref().unwrap().key, child_key);
}

#[test]
fn editor_sees_record_fields() {
    let records = [json!({"price": 1, "title": "x"})];
    let panel = ComponentPanel::builtin();
    let descriptor = editable_descriptor(
        panel.find("button").unwrap(),
        FieldKeySource::MockData(&records),
    );

    let data_index = descriptor
        .attr_schema
        .iter()
        .find(|attr| attr.ui_props.get("optionsParam") == Some(&json!(FIELD_KEY_OPTIONS)))
        .unwrap();
    assert_eq!(
        data_index.ui_props["options"],
        json!([
            {"label": "price", "value": "price"},
            {"label": "title", "value": "title"},
        ])
    );
}

#[test]
fn replaced_panel_hides_builtins() {
    let custom = CustomComponents::new(MergeMode::Replace);
    let panel = ComponentPanel::new(Some(&custom));
    assert!(panel.components().is_empty());
    assert!(panel.groups().is_empty());
    assert_eq!(panel.component_name("text"), UNKNOWN_COMPONENT);
}
