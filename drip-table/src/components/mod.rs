//! Built-in column components.
//!
//! Every built-in carries a static options schema and the attribute list the generator uses to
//! initialize and edit columns of that type.

use std::sync::LazyLock;

use serde_json::{json, Value};

use drip_table_schema::{AnyOfSchema, BooleanSchema, Schema, StringSchema};

use crate::column::MAP_SCHEMA as STYLE;
use crate::component::{AttrSchema, ComponentDescriptor};

mod action;
mod form;
mod group;
mod media;
mod render;
mod text;

pub use action::{BUTTON_OPTIONS_SCHEMA, LINK_OPTIONS_SCHEMA};
pub use form::{
    DATE_PICKER_OPTIONS_SCHEMA, SELECT_OPTIONS_SCHEMA, SWITCH_OPTIONS_SCHEMA, TAG_OPTIONS_SCHEMA,
};
pub use group::GROUP_OPTIONS_SCHEMA;
pub use media::{ICON_OPTIONS_SCHEMA, IMAGE_OPTIONS_SCHEMA};
pub use render::{POPOVER_OPTIONS_SCHEMA, RENDER_OPTIONS_SCHEMA};
pub use text::TEXT_OPTIONS_SCHEMA;

pub const GROUP_BASIC: &str = "Basic Components";
pub const GROUP_FORM: &str = "Form Components";
pub const GROUP_ADVANCED: &str = "Advanced Components";
pub const GROUP_CONTAINER: &str = "Container Components";

/// Placeholder in `ui:props.optionsParam` replaced by the record field names.
pub const FIELD_KEY_OPTIONS: &str = "$$FIELD_KEY_OPTIONS$$";

const TEXT: Schema = StringSchema::new("Text.").schema();
const FLAG: Schema = BooleanSchema::new("Flag.").schema();
const FUNC_SOURCE: Schema =
    StringSchema::new("Expression evaluated against the current record.").schema();
const EVENT_NAME: Schema = StringSchema::new("Event name reported to the host.").schema();
const TEXT_OR_FLAG: Schema =
    AnyOfSchema::new("Text or switch.", &[&TEXT, &FLAG]).schema();

/// All built-in components, in panel order.
pub static BUILTIN_COMPONENTS: LazyLock<Vec<ComponentDescriptor>> = LazyLock::new(|| {
    vec![
        text::descriptor(),
        media::image_descriptor(),
        media::icon_descriptor(),
        action::link_descriptor(),
        form::tag_descriptor(),
        action::button_descriptor(),
        form::select_descriptor(),
        form::switch_descriptor(),
        form::date_picker_descriptor(),
        render::rich_text_descriptor(),
        render::render_html_descriptor(),
        render::popover_descriptor(),
        group::descriptor(),
    ]
});

/// Look up a built-in descriptor by component type.
pub fn builtin(component_type: &str) -> Option<&'static ComponentDescriptor> {
    BUILTIN_COMPONENTS
        .iter()
        .find(|descriptor| descriptor.component_type == component_type)
}

/// `dataIndex` attribute picking one of the record fields.
fn data_index_attr() -> AttrSchema {
    AttrSchema::new("dataIndex", "select")
        .title("Field")
        .group("Data")
        .value_type("string")
        .props(json!({
            "mode": "tags",
            "optionsParam": FIELD_KEY_OPTIONS,
        }))
}

fn title_weight_attr() -> AttrSchema {
    AttrSchema::new("titleStyle.fontWeight", "select")
        .title("Title weight")
        .group("Title")
        .value_type("string")
        .props(json!({
            "options": [
                { "label": "normal", "value": "normal" },
                { "label": "bold", "value": "bold" },
            ],
        }))
        .default(json!("normal"))
}

fn text_attr(name: &str, title: &str, default: Option<&str>) -> AttrSchema {
    let attr = AttrSchema::new(name, "input")
        .title(title)
        .value_type("string");
    match default {
        Some(default) => attr.default(Value::from(default)),
        None => attr,
    }
}

fn switch_attr(name: &str, title: &str, default: bool) -> AttrSchema {
    AttrSchema::new(name, "switch")
        .title(title)
        .value_type("boolean")
        .default(Value::Bool(default))
}

/// Allowed values of a radio/select attribute.
fn choice_props(values: &[&str]) -> Value {
    let options: Vec<Value> = values
        .iter()
        .map(|value| json!({ "label": value, "value": value }))
        .collect();
    json!({ "options": options })
}
