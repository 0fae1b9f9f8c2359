use serde_json::json;

use drip_table_schema::{
    ArraySchema, EnumEntry, NumberSchema, ObjectSchema, Schema, StringFormat, StringSchema,
};

use super::{
    choice_props, data_index_attr, switch_attr, text_attr, EVENT_NAME, FLAG, FUNC_SOURCE,
    GROUP_BASIC, GROUP_FORM, STYLE, TEXT,
};
use crate::component::{AttrSchema, ComponentDescriptor};

static LABELED_VALUE: Schema = ObjectSchema::new(
    "Label and value pair.",
    &[("label", false, &TEXT), ("value", true, &Schema::Any)],
)
.additional_properties(true)
.schema();

static LABELED_VALUES: Schema = ArraySchema::new("Label and value pairs.", &LABELED_VALUE).schema();

pub static TAG_OPTIONS_SCHEMA: Schema = ObjectSchema::new(
    "Tag component options.",
    &[
        ("borderColor", true, &TEXT),
        ("className", true, &TEXT),
        ("color", true, &TEXT),
        ("content", true, &TEXT),
        ("radius", true, &NumberSchema::new("Corner radius.").minimum(0.0).schema()),
        ("tagOptions", true, &LABELED_VALUES),
    ],
)
.schema();

pub static SELECT_OPTIONS_SCHEMA: Schema = ObjectSchema::new(
    "Select component options.",
    &[
        ("bordered", true, &FLAG),
        ("event", true, &EVENT_NAME),
        ("options", true, &LABELED_VALUES),
        ("placeholder", true, &TEXT),
        ("style", true, &STYLE),
    ],
)
.schema();

pub static SWITCH_OPTIONS_SCHEMA: Schema = ObjectSchema::new(
    "Switch component options.",
    &[
        ("checkedText", true, &TEXT),
        ("disableFunc", true, &FUNC_SOURCE),
        ("event", true, &EVENT_NAME),
        ("uncheckedText", true, &TEXT),
    ],
)
.schema();

const DISPLAY_TYPE: Schema = StringSchema::new("Single date or range.")
    .format(&StringFormat::Enum(&[
        EnumEntry::new("date", "One date."),
        EnumEntry::new("date-range", "Start and end date."),
    ]))
    .schema();

pub static DATE_PICKER_OPTIONS_SCHEMA: Schema = ObjectSchema::new(
    "Date picker component options.",
    &[
        ("displayType", true, &DISPLAY_TYPE),
        ("format", true, &TEXT),
        ("placeholder", true, &TEXT),
        ("style", true, &STYLE),
    ],
)
.schema();

pub(super) fn tag_descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new("tag", "Tag Component")
        .group(GROUP_BASIC)
        .icon("tag")
        .schema(&TAG_OPTIONS_SCHEMA)
        .attrs([
            data_index_attr(),
            text_attr("options.color", "Text color", None),
            text_attr("options.borderColor", "Border color", None),
            AttrSchema::new("options.radius", "number")
                .title("Corner radius")
                .value_type("number")
                .default(json!(2)),
            text_attr("options.content", "Static content", None),
        ])
}

pub(super) fn select_descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new("select", "Select Component")
        .group(GROUP_FORM)
        .icon("select")
        .schema(&SELECT_OPTIONS_SCHEMA)
        .attrs([
            data_index_attr(),
            text_attr("options.placeholder", "Placeholder", Some("Please select")),
            switch_attr("options.bordered", "Bordered", true),
            AttrSchema::new("options.options", "array-list")
                .title("Choices")
                .value_type("array")
                .props(json!({
                    "items": [
                        { "name": "label", "ui:type": "input", "ui:title": "Label", "type": "string" },
                        { "name": "value", "ui:type": "input", "ui:title": "Value", "type": "string" },
                    ],
                }))
                .default(json!([])),
            text_attr("options.event", "Event", None),
        ])
}

pub(super) fn switch_descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new("switch", "Switch Component")
        .group(GROUP_FORM)
        .icon("switch")
        .schema(&SWITCH_OPTIONS_SCHEMA)
        .attrs([
            data_index_attr(),
            text_attr("options.checkedText", "Text when on", None),
            text_attr("options.uncheckedText", "Text when off", None),
            text_attr("options.event", "Event", None),
        ])
}

pub(super) fn date_picker_descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new("date-picker", "Date Picker Component")
        .group(GROUP_FORM)
        .icon("date-picker")
        .schema(&DATE_PICKER_OPTIONS_SCHEMA)
        .attrs([
            data_index_attr(),
            AttrSchema::new("options.displayType", "radio")
                .title("Type")
                .value_type("string")
                .props(choice_props(&["date", "date-range"]))
                .default(json!("date")),
            text_attr("options.format", "Format", Some("YYYY-MM-DD")),
        ])
}
