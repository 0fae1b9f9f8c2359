use serde_json::json;

use drip_table_schema::{
    ArraySchema, EnumEntry, IntegerSchema, ObjectSchema, Schema, StringFormat, StringSchema,
};

use super::{
    choice_props, data_index_attr, text_attr, EVENT_NAME, FIELD_KEY_OPTIONS, FUNC_SOURCE,
    GROUP_BASIC, GROUP_FORM, TEXT,
};
use crate::component::{AttrSchema, ComponentDescriptor};

const SINGLE_OR_MULTIPLE: Schema = StringSchema::new("Single action or a list of actions.")
    .format(&StringFormat::Enum(&[
        EnumEntry::new("single", "One action."),
        EnumEntry::new("multiple", "A list of actions."),
    ]))
    .schema();

const TARGET: Schema = StringSchema::new("Link target window.").schema();

static OPERATE_SCHEMA: Schema = ObjectSchema::new(
    "One link of a multiple mode link column.",
    &[
        ("disableFunc", true, &FUNC_SOURCE),
        ("event", true, &EVENT_NAME),
        ("href", true, &TEXT),
        ("label", false, &TEXT),
        ("name", true, &TEXT),
        ("target", true, &TARGET),
        ("visibleFunc", true, &FUNC_SOURCE),
    ],
)
.schema();

pub static LINK_OPTIONS_SCHEMA: Schema = ObjectSchema::new(
    "Link component options.",
    &[
        ("className", true, &TEXT),
        ("event", true, &EVENT_NAME),
        ("href", true, &TEXT),
        ("label", true, &TEXT),
        (
            "maxTiledCount",
            true,
            &IntegerSchema::new("Links shown before collapsing into a menu.")
                .minimum(0)
                .schema(),
        ),
        ("mode", true, &SINGLE_OR_MULTIPLE),
        ("name", true, &TEXT),
        (
            "operates",
            true,
            &ArraySchema::new("Links of multiple mode.", &OPERATE_SCHEMA).schema(),
        ),
        ("target", true, &TARGET),
        ("textColor", true, &TEXT),
    ],
)
.schema();

const BUTTON_TYPE: Schema = StringSchema::new("Button type.")
    .format(&StringFormat::Enum(&[
        EnumEntry::new("primary", "Primary button."),
        EnumEntry::new("default", "Default button."),
        EnumEntry::new("dashed", "Dashed border."),
        EnumEntry::new("text", "Text button."),
        EnumEntry::new("link", "Link button."),
    ]))
    .schema();

const BUTTON_SHAPE: Schema = StringSchema::new("Button shape.")
    .format(&StringFormat::Enum(&[
        EnumEntry::new("circle", "Circle."),
        EnumEntry::new("round", "Rounded corners."),
    ]))
    .schema();

const BUTTON_SIZE: Schema = StringSchema::new("Button size.")
    .format(&StringFormat::Enum(&[
        EnumEntry::new("large", "Large."),
        EnumEntry::new("middle", "Middle."),
        EnumEntry::new("small", "Small."),
    ]))
    .schema();

pub static BUTTON_OPTIONS_SCHEMA: Schema = ObjectSchema::new(
    "Button component options.",
    &[
        ("buttonType", true, &BUTTON_TYPE),
        ("disableFunc", true, &FUNC_SOURCE),
        ("event", true, &EVENT_NAME),
        ("label", true, &TEXT),
        ("mode", true, &SINGLE_OR_MULTIPLE),
        ("shape", true, &BUTTON_SHAPE),
        ("size", true, &BUTTON_SIZE),
        ("visibleFunc", true, &FUNC_SOURCE),
    ],
)
.schema();

pub(super) fn link_descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new("link", "Link Component")
        .group(GROUP_BASIC)
        .icon("link")
        .schema(&LINK_OPTIONS_SCHEMA)
        .attrs([
            AttrSchema::new("options.mode", "radio")
                .title("Mode")
                .value_type("string")
                .props(choice_props(&["single", "multiple"]))
                .default(json!("single")),
            text_attr("options.label", "Label", Some("Link")),
            text_attr("options.href", "Address", None),
            text_attr("options.event", "Event", None),
            AttrSchema::new("options.target", "select")
                .title("Open in")
                .value_type("string")
                .props(choice_props(&["_self", "_blank", "_parent", "_top"]))
                .default(json!("_blank")),
            AttrSchema::new("options.operates", "array-list")
                .title("Links")
                .value_type("array")
                .props(json!({
                    "items": [
                        { "name": "label", "ui:type": "input", "ui:title": "Label", "type": "string" },
                        { "name": "href", "ui:type": "input", "ui:title": "Address", "type": "string" },
                        {
                            "name": "dataIndex",
                            "ui:type": "select",
                            "ui:title": "Field",
                            "type": "string",
                            "ui:props": { "optionsParam": FIELD_KEY_OPTIONS },
                        },
                    ],
                })),
        ])
}

pub(super) fn button_descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new("button", "Button Component")
        .group(GROUP_FORM)
        .icon("button")
        .schema(&BUTTON_OPTIONS_SCHEMA)
        .attrs([
            data_index_attr(),
            text_attr("options.label", "Label", Some("Button")),
            AttrSchema::new("options.buttonType", "select")
                .title("Type")
                .value_type("string")
                .props(choice_props(&["primary", "default", "dashed", "text", "link"]))
                .default(json!("primary")),
            AttrSchema::new("options.size", "radio")
                .title("Size")
                .value_type("string")
                .props(choice_props(&["large", "middle", "small"]))
                .default(json!("middle")),
            text_attr("options.event", "Event", None),
        ])
}
