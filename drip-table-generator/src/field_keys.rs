//! Record field choices for attributes editing a `dataIndex`.

use serde_json::{json, Map, Value};

use drip_table::component::AttrSchema;
use drip_table::components::FIELD_KEY_OPTIONS;

/// Where the selectable field names come from.
#[derive(Clone, Copy, Debug)]
pub enum FieldKeySource<'a> {
    /// Keys of the first preview record.
    MockData(&'a [Value]),
    /// Field names declared by the host.
    DataFields(&'a [String]),
}

impl FieldKeySource<'_> {
    /// `{label, value}` choices, one per field name.
    pub fn options(&self) -> Vec<Value> {
        let keys: Vec<&str> = match self {
            FieldKeySource::MockData(records) => records
                .first()
                .and_then(Value::as_object)
                .map(|record| record.keys().map(String::as_str).collect())
                .unwrap_or_default(),
            FieldKeySource::DataFields(fields) => fields.iter().map(String::as_str).collect(),
        };

        keys.into_iter()
            .map(|key| json!({ "label": key, "value": key }))
            .collect()
    }
}

/// Fill `ui:props.options` of every attribute, or item of an attribute, asking for field keys.
pub fn fill_field_key_options(attrs: &mut [AttrSchema], source: FieldKeySource) {
    let options = Value::Array(source.options());

    for attr in attrs {
        fill_props(&mut attr.ui_props, &options);

        let items = attr
            .ui_props
            .get_mut("items")
            .and_then(Value::as_array_mut);
        for item in items.into_iter().flatten() {
            if let Some(props) = item.get_mut("ui:props").and_then(Value::as_object_mut) {
                fill_props(props, &options);
            }
        }
    }
}

fn fill_props(props: &mut Map<String, Value>, options: &Value) {
    if props.get("optionsParam").and_then(Value::as_str) == Some(FIELD_KEY_OPTIONS) {
        props.insert("options".to_string(), options.clone());
    }
}
