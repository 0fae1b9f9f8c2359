//! Creation of new columns from a component descriptor.

use serde_json::{json, Map, Value};

use drip_table::column::GROUP_COMPONENT;
use drip_table::{ComponentDescriptor, RawColumn};

use crate::field_keys::{fill_field_key_options, FieldKeySource};

/// Column field the generator uses to remember the insertion position.
pub const INNER_INDEX_KEY: &str = "innerIndexForGenerator";

const OPTIONS_PREFIX: &str = "options.";
const STYLE_PREFIX: &str = "style.";
const TITLE_STYLE_PREFIX: &str = "titleStyle.";

/// Source of the unique part of new column keys.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Counts up from a start value.
#[derive(Clone, Debug)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new(start: u64) -> Self {
        Self { next: start }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new(1)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

/// A descriptor with its field key choices filled in, as shown in the attribute editor.
pub fn editable_descriptor(
    descriptor: &ComponentDescriptor,
    source: FieldKeySource,
) -> ComponentDescriptor {
    let mut descriptor = descriptor.clone();
    fill_field_key_options(&mut descriptor.attr_schema, source);
    descriptor
}

/// Build a fresh column of `descriptor`'s type, appended at `index`.
///
/// Attribute defaults go to `options`, `style`, the title style or the column itself depending on
/// the attribute name prefix.
pub fn new_column(
    descriptor: &ComponentDescriptor,
    index: usize,
    ids: &mut dyn IdSource,
) -> RawColumn {
    let mut options = Map::new();
    let mut style = Map::new();
    let mut title_style = Map::new();
    let mut additional = Map::new();

    for attr in &descriptor.attr_schema {
        let Some(default) = attr.default.clone() else {
            continue;
        };
        let name = attr.name.as_str();
        if let Some(name) = name.strip_prefix(OPTIONS_PREFIX) {
            options.insert(name.to_string(), default);
        } else if let Some(name) = name.strip_prefix(STYLE_PREFIX) {
            style.insert(name.to_string(), default);
        } else if let Some(name) = name.strip_prefix(TITLE_STYLE_PREFIX) {
            title_style.insert(name.to_string(), default);
        } else {
            additional.insert(name.to_string(), default);
        }
    }

    if descriptor.component_type == GROUP_COMPONENT {
        options.insert("items".to_string(), json!([null, null]));
    }

    let key = format!("{}_{}", descriptor.component_type, ids.next_id());
    log::debug!("new column '{key}' at position {index}");

    let mut column = Map::new();
    column.insert("key".to_string(), Value::String(key));
    column.insert("dataIndex".to_string(), json!(""));
    column.insert(
        "title".to_string(),
        json!({ "body": descriptor.title, "style": title_style }),
    );
    column.insert("description".to_string(), json!(""));
    column.insert("component".to_string(), json!(descriptor.component_type));
    column.insert("options".to_string(), Value::Object(options));
    column.insert(INNER_INDEX_KEY.to_string(), json!(index));
    column.extend(additional);
    column.insert("style".to_string(), Value::Object(style));

    RawColumn::new(column)
}

#[cfg(test)]
mod tests {
    use drip_table::components::builtin;
    use drip_table::validate::ValidationOptions;
    use drip_table::{ColumnValidator, ComponentRegistry};

    use super::*;

    #[test]
    fn test_new_text_column() {
        let mut ids = SequentialIds::new(7);
        let column = new_column(builtin("text").unwrap(), 3, &mut ids);

        assert_eq!(column.key(), Some("text_7"));
        assert_eq!(column["dataIndex"], "");
        assert_eq!(column["component"], "text");
        assert_eq!(column["title"]["body"], "Text Component");
        assert_eq!(column["title"]["style"]["fontWeight"], "normal");
        assert_eq!(column["options"]["mode"], "single");
        assert!(column["options"].get("prefix").is_none());
        assert_eq!(column[INNER_INDEX_KEY], 3);

        assert_eq!(new_column(builtin("text").unwrap(), 4, &mut ids).key(), Some("text_8"));
    }

    #[test]
    fn test_new_columns_validate() {
        let registry = ComponentRegistry::default();
        let validator = ColumnValidator::new(&registry, ValidationOptions::default());
        let mut ids = SequentialIds::default();

        for descriptor in registry.local() {
            let column = new_column(descriptor, 0, &mut ids);
            if let Err(err) = validator.validate(&column, "column") {
                panic!("{}: {err}", descriptor.component_type);
            }
        }
    }

    #[test]
    fn test_new_group_has_two_slots() {
        let column = new_column(builtin("group").unwrap(), 0, &mut SequentialIds::default());
        assert_eq!(column["options"]["items"], json!([null, null]));
        assert_eq!(column.group_items().map(Vec::len), Some(2));
    }
}
