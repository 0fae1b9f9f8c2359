use serde_json::json;

use drip_table_schema::{
    AnyOfSchema, ArraySchema, EnumEntry, IntegerSchema, NumberSchema, ObjectSchema, Schema,
    StringFormat, StringSchema,
};

use super::{choice_props, switch_attr, FLAG, GROUP_CONTAINER, STYLE};
use crate::component::{AttrSchema, ComponentDescriptor};

const GUTTER: Schema = ArraySchema::new(
    "Horizontal and vertical spacing.",
    &NumberSchema::new("Spacing in pixels.").minimum(0.0).schema(),
)
.min_length(2)
.max_length(2)
.schema();

const HORIZONTAL_ALIGN: Schema = StringSchema::new("Horizontal item alignment.")
    .format(&StringFormat::Enum(&[
        EnumEntry::new("start", "Pack to the start."),
        EnumEntry::new("end", "Pack to the end."),
        EnumEntry::new("center", "Center."),
        EnumEntry::new("space-around", "Equal space around items."),
        EnumEntry::new("space-between", "Equal space between items."),
    ]))
    .schema();

const VERTICAL_ALIGN: Schema = StringSchema::new("Vertical item alignment.")
    .format(&StringFormat::Enum(&[
        EnumEntry::new("top", "Align top."),
        EnumEntry::new("middle", "Center."),
        EnumEntry::new("bottom", "Align bottom."),
    ]))
    .schema();

/// An unfilled slot or a child column; child columns are checked on their own.
const ITEM: Schema = AnyOfSchema::new("Group item.", &[&Schema::Null, &STYLE]).schema();

const LAYOUT: Schema = ArraySchema::new(
    "Items per row.",
    &IntegerSchema::new("Item count.").minimum(1).schema(),
)
.schema();

pub static GROUP_OPTIONS_SCHEMA: Schema = ObjectSchema::new(
    "Group component options.",
    &[
        ("gutter", true, &GUTTER),
        ("horizontalAlign", true, &HORIZONTAL_ALIGN),
        ("items", false, &ArraySchema::new("Group items.", &ITEM).schema()),
        ("layout", false, &LAYOUT),
        ("verticalAlign", true, &VERTICAL_ALIGN),
        ("wrap", true, &FLAG),
    ],
)
.schema();

pub(super) fn descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new("group", "Group Component")
        .group(GROUP_CONTAINER)
        .icon("group")
        .schema(&GROUP_OPTIONS_SCHEMA)
        .attrs([
            AttrSchema::new("options.layout", "array-number")
                .title("Items per row")
                .value_type("array")
                .props(json!({ "min": 1 }))
                .default(json!([2])),
            AttrSchema::new("options.gutter", "array-number")
                .title("Spacing")
                .value_type("array")
                .default(json!([8, 8])),
            AttrSchema::new("options.horizontalAlign", "select")
                .title("Horizontal alignment")
                .value_type("string")
                .props(choice_props(&[
                    "start",
                    "end",
                    "center",
                    "space-around",
                    "space-between",
                ]))
                .default(json!("start")),
            AttrSchema::new("options.verticalAlign", "select")
                .title("Vertical alignment")
                .value_type("string")
                .props(choice_props(&["top", "middle", "bottom"]))
                .default(json!("top")),
            switch_attr("options.wrap", "Wrap", false),
        ])
}
