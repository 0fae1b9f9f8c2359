use serde_json::json;

use drip_table_schema::{
    ArraySchema, EnumEntry, IntegerSchema, NumberSchema, ObjectSchema, Schema, StringFormat,
    StringSchema,
};

use super::{
    choice_props, data_index_attr, switch_attr, text_attr, title_weight_attr, FLAG, FUNC_SOURCE,
    GROUP_BASIC, STYLE, TEXT, TEXT_OR_FLAG,
};
use crate::column::DATA_INDEX_SCHEMA;
use crate::component::{AttrSchema, ComponentDescriptor};

const TEXT_MODE_SCHEMA: Schema = StringSchema::new("Display mode.")
    .format(&StringFormat::Enum(&[
        EnumEntry::new("single", "Show one field."),
        EnumEntry::new("multiple", "Show several fields, one per line."),
        EnumEntry::new("custom", "Format string referencing record fields."),
        EnumEntry::new("static", "Fixed text."),
    ]))
    .schema();

static PART_SCHEMA: Schema = ObjectSchema::new(
    "Part of a multiple mode text.",
    &[
        ("dataIndex", true, &DATA_INDEX_SCHEMA),
        ("i18n", true, &STYLE),
        ("prefix", true, &TEXT),
        ("suffix", true, &TEXT),
    ],
)
.schema();

pub static TEXT_OPTIONS_SCHEMA: Schema = ObjectSchema::new(
    "Text component options.",
    &[
        ("className", true, &TEXT),
        ("dataProcess", true, &FUNC_SOURCE),
        ("disableFunc", true, &FUNC_SOURCE),
        ("ellipsis", true, &FLAG),
        ("format", true, &TEXT),
        ("i18n", true, &STYLE),
        ("lineHeight", true, &NumberSchema::new("Line height.").minimum(0.0).schema()),
        ("maxRow", true, &IntegerSchema::new("Maximum rows.").minimum(1).schema()),
        ("mode", true, &TEXT_MODE_SCHEMA),
        ("parts", true, &ArraySchema::new("Text parts.", &PART_SCHEMA).schema()),
        ("placeholder", true, &TEXT),
        ("prefix", true, &TEXT),
        ("showTooltip", true, &FLAG),
        ("static", true, &TEXT),
        ("suffix", true, &TEXT),
        ("tooltip", true, &TEXT_OR_FLAG),
        ("visibleFunc", true, &FUNC_SOURCE),
    ],
)
.schema();

pub(super) fn descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new("text", "Text Component")
        .group(GROUP_BASIC)
        .icon("text")
        .schema(&TEXT_OPTIONS_SCHEMA)
        .attrs([
            data_index_attr(),
            AttrSchema::new("options.mode", "radio")
                .title("Mode")
                .group("Display")
                .value_type("string")
                .props(choice_props(&["single", "multiple", "custom", "static"]))
                .default(json!("single")),
            AttrSchema::new("options.maxRow", "number")
                .title("Maximum rows")
                .group("Display")
                .value_type("number")
                .props(json!({ "min": 1 }))
                .default(json!(1)),
            text_attr("options.prefix", "Prefix", None),
            text_attr("options.suffix", "Suffix", None),
            text_attr("options.placeholder", "Placeholder", Some("")),
            switch_attr("options.ellipsis", "Ellipsis", false),
            switch_attr("options.showTooltip", "Tooltip", false),
            text_attr("style.color", "Color", None),
            title_weight_attr(),
        ])
}
