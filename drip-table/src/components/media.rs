use serde_json::json;

use drip_table_schema::{NumberSchema, ObjectSchema, Schema};

use super::{data_index_attr, switch_attr, text_attr, FLAG, GROUP_BASIC, STYLE, TEXT};
use crate::component::{AttrSchema, ComponentDescriptor};

const PIXELS: Schema = NumberSchema::new("Size in pixels.").minimum(0.0).schema();

pub static IMAGE_OPTIONS_SCHEMA: Schema = ObjectSchema::new(
    "Image component options.",
    &[
        ("className", true, &TEXT),
        ("imageHeight", true, &PIXELS),
        ("imageWidth", true, &PIXELS),
        ("popover", true, &FLAG),
        ("preview", true, &FLAG),
    ],
)
.schema();

pub static ICON_OPTIONS_SCHEMA: Schema = ObjectSchema::new(
    "Icon component options.",
    &[
        ("className", true, &TEXT),
        ("icon", true, &TEXT),
        ("style", true, &STYLE),
    ],
)
.schema();

pub(super) fn image_descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new("image", "Image Component")
        .group(GROUP_BASIC)
        .icon("image")
        .schema(&IMAGE_OPTIONS_SCHEMA)
        .attrs([
            data_index_attr(),
            AttrSchema::new("options.imageWidth", "number")
                .title("Width")
                .value_type("number")
                .default(json!(86)),
            AttrSchema::new("options.imageHeight", "number")
                .title("Height")
                .value_type("number")
                .default(json!(86)),
            switch_attr("options.preview", "Preview on click", true),
            switch_attr("options.popover", "Popover preview", false),
        ])
}

pub(super) fn icon_descriptor() -> ComponentDescriptor {
    ComponentDescriptor::new("icon", "Icon Component")
        .group(GROUP_BASIC)
        .icon("icon")
        .schema(&ICON_OPTIONS_SCHEMA)
        .attrs([
            text_attr("options.icon", "Icon name", Some("HomeOutlined")),
            text_attr("options.className", "Class name", None),
        ])
}
