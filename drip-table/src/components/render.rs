use serde_json::json;

use drip_table_schema::{EnumEntry, ObjectSchema, Schema, StringFormat, StringSchema};

use super::{choice_props, data_index_attr, FUNC_SOURCE, GROUP_ADVANCED, STYLE};
use crate::component::{AttrSchema, ComponentDescriptor};

/// Options of `render-html` and `rich-text`.
pub static RENDER_OPTIONS_SCHEMA: Schema = ObjectSchema::new(
    "Render component options.",
    &[("render", false, &FUNC_SOURCE)],
)
.schema();

const PLACEMENT: Schema = StringSchema::new("Popover placement.")
    .format(&StringFormat::Enum(&[
        EnumEntry::new("top", "Above."),
        EnumEntry::new("left", "Left."),
        EnumEntry::new("right", "Right."),
        EnumEntry::new("bottom", "Below."),
        EnumEntry::new("topLeft", "Above, left aligned."),
        EnumEntry::new("topRight", "Above, right aligned."),
        EnumEntry::new("bottomLeft", "Below, left aligned."),
        EnumEntry::new("bottomRight", "Below, right aligned."),
    ]))
    .schema();

const TRIGGER: Schema = StringSchema::new("Popover trigger.")
    .format(&StringFormat::Enum(&[
        EnumEntry::new("click", "Open on click."),
        EnumEntry::new("hover", "Open on hover."),
    ]))
    .schema();

pub static POPOVER_OPTIONS_SCHEMA: Schema = ObjectSchema::new(
    "Popover component options.",
    &[
        ("placement", true, &PLACEMENT),
        ("popover", true, &STYLE),
        ("trigger", true, &TRIGGER),
    ],
)
.schema();

fn render_attr() -> AttrSchema {
    AttrSchema::new("options.render", "code-editor")
        .title("Render code")
        .value_type("string")
        .description("Receives the current record as `rec` and returns markup.")
        .default(json!("return '';"))
}

pub(super) fn rich_text_descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new("rich-text", "Rich Text Component")
        .group(GROUP_ADVANCED)
        .icon("rich-text")
        .schema(&RENDER_OPTIONS_SCHEMA)
        .attrs([data_index_attr(), render_attr()])
}

pub(super) fn render_html_descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new("render-html", "Custom Render Component")
        .group(GROUP_ADVANCED)
        .icon("render-html")
        .schema(&RENDER_OPTIONS_SCHEMA)
        .attr(render_attr())
}

pub(super) fn popover_descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new("popover", "Popover Component")
        .group(GROUP_ADVANCED)
        .icon("popover")
        .schema(&POPOVER_OPTIONS_SCHEMA)
        .attrs([
            AttrSchema::new("options.placement", "select")
                .title("Placement")
                .value_type("string")
                .props(choice_props(&["top", "left", "right", "bottom"]))
                .default(json!("top")),
            AttrSchema::new("options.trigger", "radio")
                .title("Trigger")
                .value_type("string")
                .props(choice_props(&["click", "hover"]))
                .default(json!("hover")),
        ])
}
