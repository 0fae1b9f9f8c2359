//! Header and footer slot resolution.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Value};

use drip_table_schema::{
    AnyOfSchema, ArraySchema, BooleanSchema, EnumEntry, NumberSchema, ObjectSchema, OneOfSchema,
    Schema, SchemaPropertyEntry, StringFormat, StringSchema,
};

/// Keyword span used by the default header to push the following elements to the right.
pub const SPAN_FLEX_AUTO: &str = "flex-auto";

/// Width of a slot element: grid columns or a layout keyword.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotSpan {
    Columns(f64),
    Keyword(String),
}

/// Layout attributes shared by all slot elements.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<SlotSpan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Map<String, Value>>,
    /// Attributes not known to this crate, kept for the renderer.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One element of a header or footer slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SlotElement {
    Spacer {
        #[serde(flatten)]
        layout: SlotLayout,
    },
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        #[serde(flatten)]
        layout: SlotLayout,
    },
    Html {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        html: Option<String>,
        #[serde(flatten)]
        layout: SlotLayout,
    },
    Title {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(flatten)]
        layout: SlotLayout,
    },
    #[serde(rename_all = "camelCase")]
    Search {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        allow_clear: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        search_button_text: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        search_keys: Vec<Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        search_key_default: Option<Value>,
        #[serde(flatten)]
        layout: SlotLayout,
    },
    /// Host rendered element, looked up by `slot` name.
    Slot {
        slot: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        props: Option<Map<String, Value>>,
        #[serde(flatten)]
        layout: SlotLayout,
    },
    #[serde(rename_all = "camelCase", alias = "add-button", alias = "addButton")]
    InsertButton {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        insert_button_text: Option<String>,
        /// Older name of `insertButtonText`, see [`SlotElement::button_text`].
        #[serde(default, skip_serializing_if = "Option::is_none")]
        add_btn_text: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        show_icon: Option<bool>,
        #[serde(flatten)]
        layout: SlotLayout,
    },
    #[serde(rename_all = "camelCase")]
    DisplayColumnSelector {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        selector_button_text: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        selector_button_type: Option<String>,
        #[serde(flatten)]
        layout: SlotLayout,
    },
    #[serde(rename_all = "camelCase")]
    LayoutSelector {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        selector_button_text: Option<String>,
        #[serde(flatten)]
        layout: SlotLayout,
    },
}

impl SlotElement {
    /// The `type` tag of this element.
    pub fn type_name(&self) -> &'static str {
        match self {
            SlotElement::Spacer { .. } => "spacer",
            SlotElement::Text { .. } => "text",
            SlotElement::Html { .. } => "html",
            SlotElement::Title { .. } => "title",
            SlotElement::Search { .. } => "search",
            SlotElement::Slot { .. } => "slot",
            SlotElement::InsertButton { .. } => "insert-button",
            SlotElement::DisplayColumnSelector { .. } => "display-column-selector",
            SlotElement::LayoutSelector { .. } => "layout-selector",
        }
    }

    /// Label of an insert button, `insertButtonText` taking precedence over `addBtnText`.
    pub fn button_text(&self) -> Option<&str> {
        match self {
            SlotElement::InsertButton {
                insert_button_text,
                add_btn_text,
                ..
            } => insert_button_text.as_deref().or(add_btn_text.as_deref()),
            _ => None,
        }
    }

    pub fn layout(&self) -> &SlotLayout {
        match self {
            SlotElement::Spacer { layout }
            | SlotElement::Text { layout, .. }
            | SlotElement::Html { layout, .. }
            | SlotElement::Title { layout, .. }
            | SlotElement::Search { layout, .. }
            | SlotElement::Slot { layout, .. }
            | SlotElement::InsertButton { layout, .. }
            | SlotElement::DisplayColumnSelector { layout, .. }
            | SlotElement::LayoutSelector { layout, .. } => layout,
        }
    }
}

/// Resolved header or footer decoration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Map<String, Value>>,
    #[serde(default)]
    pub elements: Vec<SlotElement>,
}

/// The `header`/`footer` field of a table schema.
///
/// Deserializes from `true` (default toolbar), an object (explicit slot) or `false`/`null`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SlotSetting {
    Default,
    Explicit(SlotSchema),
    #[default]
    Absent,
}

impl SlotSetting {
    pub fn is_absent(&self) -> bool {
        matches!(self, SlotSetting::Absent)
    }
}

impl Serialize for SlotSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SlotSetting::Default => serializer.serialize_bool(true),
            SlotSetting::Explicit(schema) => schema.serialize(serializer),
            SlotSetting::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for SlotSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        match Value::deserialize(deserializer)? {
            Value::Bool(true) => Ok(SlotSetting::Default),
            Value::Bool(false) | Value::Null => Ok(SlotSetting::Absent),
            value @ Value::Object(_) => serde_json::from_value(value)
                .map(SlotSetting::Explicit)
                .map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "expected boolean or slot object, got {other}"
            ))),
        }
    }
}

/// The toolbar used for `header: true`.
pub fn default_header() -> SlotSchema {
    SlotSchema {
        style: None,
        elements: vec![
            SlotElement::DisplayColumnSelector {
                selector_button_text: None,
                selector_button_type: Some("primary".to_string()),
                layout: SlotLayout::default(),
            },
            SlotElement::Spacer {
                layout: SlotLayout {
                    span: Some(SlotSpan::Keyword(SPAN_FLEX_AUTO.to_string())),
                    ..Default::default()
                },
            },
            SlotElement::Search {
                placeholder: None,
                allow_clear: None,
                search_button_text: None,
                search_keys: Vec::new(),
                search_key_default: None,
                layout: SlotLayout::default(),
            },
            SlotElement::InsertButton {
                insert_button_text: None,
                add_btn_text: None,
                show_icon: Some(true),
                layout: SlotLayout::default(),
            },
        ],
    }
}

fn resolve_explicit(schema: &SlotSchema) -> Option<SlotSchema> {
    if schema.elements.is_empty() {
        return None;
    }
    Some(SlotSchema {
        style: schema.style.clone(),
        elements: schema.elements.clone(),
    })
}

/// Resolve a table header; `true` yields [`default_header`].
pub fn resolve_header(setting: &SlotSetting) -> Option<SlotSchema> {
    match setting {
        SlotSetting::Default => Some(default_header()),
        SlotSetting::Explicit(schema) => resolve_explicit(schema),
        SlotSetting::Absent => None,
    }
}

/// Resolve a slot without boolean shorthand: table footers and column title slots.
pub fn resolve_slot(setting: &SlotSetting) -> Option<SlotSchema> {
    match setting {
        SlotSetting::Explicit(schema) => resolve_explicit(schema),
        SlotSetting::Default | SlotSetting::Absent => None,
    }
}

/// Keep as JSON for the generator's default header preview.
pub fn default_header_json() -> Value {
    json!({
        "elements": [
            { "type": "display-column-selector", "selectorButtonType": "primary" },
            { "type": "spacer", "span": SPAN_FLEX_AUTO },
            { "type": "search" },
            { "type": "insert-button", "showIcon": true },
        ],
    })
}

const SLOT_ELEMENT_TYPE_SCHEMA: Schema = StringSchema::new("Slot element type.")
    .format(&StringFormat::Enum(&[
        EnumEntry::new("add-button", "Alias of 'insert-button'."),
        EnumEntry::new("addButton", "Alias of 'insert-button'."),
        EnumEntry::new("display-column-selector", "Column visibility selector."),
        EnumEntry::new("html", "Raw html snippet."),
        EnumEntry::new("insert-button", "Button adding a record."),
        EnumEntry::new("layout-selector", "Table/card/calendar switch."),
        EnumEntry::new("search", "Search box."),
        EnumEntry::new("slot", "Host rendered slot."),
        EnumEntry::new("spacer", "Empty space."),
        EnumEntry::new("text", "Plain text."),
        EnumEntry::new("title", "Table title."),
    ]))
    .schema();

const SLOT_SPAN_SCHEMA: Schema = AnyOfSchema::new(
    "Grid columns or layout keyword.",
    &[
        &NumberSchema::new("Grid columns.").minimum(0.0).schema(),
        &StringSchema::new("Layout keyword.").schema(),
    ],
)
.schema();

const STYLE_SCHEMA: Schema = ObjectSchema::new("CSS style declarations.", &[])
    .additional_properties(true)
    .schema();

const STRING_SCHEMA: Schema = StringSchema::new("Text.").schema();
const FLAG_SCHEMA: Schema = BooleanSchema::new("Flag.").schema();
const PROPS_SCHEMA: Schema = ObjectSchema::new("Props passed to the host slot.", &[])
    .additional_properties(true)
    .schema();

const ALIGN_ENTRY: SchemaPropertyEntry = (
    "align",
    true,
    &StringSchema::new("Element alignment.").schema(),
);
const POSITION_ENTRY: SchemaPropertyEntry = (
    "position",
    true,
    &StringSchema::new("Element position.").schema(),
);
const SPAN_ENTRY: SchemaPropertyEntry = ("span", true, &SLOT_SPAN_SCHEMA);
const STYLE_ENTRY: SchemaPropertyEntry = ("style", true, &STYLE_SCHEMA);
const TYPE_ENTRY: SchemaPropertyEntry = ("type", false, &SLOT_ELEMENT_TYPE_SCHEMA);

static SPACER_ELEMENT_SCHEMA: Schema = ObjectSchema::new(
    "Spacer element.",
    &[ALIGN_ENTRY, POSITION_ENTRY, SPAN_ENTRY, STYLE_ENTRY, TYPE_ENTRY],
)
.additional_properties(true)
.schema();

static TEXT_ELEMENT_SCHEMA: Schema = ObjectSchema::new(
    "Text element.",
    &[
        ALIGN_ENTRY,
        POSITION_ENTRY,
        SPAN_ENTRY,
        STYLE_ENTRY,
        ("text", true, &STRING_SCHEMA),
        TYPE_ENTRY,
    ],
)
.additional_properties(true)
.schema();

static HTML_ELEMENT_SCHEMA: Schema = ObjectSchema::new(
    "Html element.",
    &[
        ALIGN_ENTRY,
        ("html", true, &STRING_SCHEMA),
        POSITION_ENTRY,
        SPAN_ENTRY,
        STYLE_ENTRY,
        TYPE_ENTRY,
    ],
)
.additional_properties(true)
.schema();

static TITLE_ELEMENT_SCHEMA: Schema = ObjectSchema::new(
    "Title element.",
    &[
        ALIGN_ENTRY,
        POSITION_ENTRY,
        SPAN_ENTRY,
        STYLE_ENTRY,
        ("title", true, &STRING_SCHEMA),
        TYPE_ENTRY,
    ],
)
.additional_properties(true)
.schema();

static SEARCH_ELEMENT_SCHEMA: Schema = ObjectSchema::new(
    "Search element.",
    &[
        ALIGN_ENTRY,
        ("allowClear", true, &FLAG_SCHEMA),
        ("placeholder", true, &STRING_SCHEMA),
        POSITION_ENTRY,
        ("searchButtonText", true, &STRING_SCHEMA),
        ("searchKeyDefault", true, &Schema::Any),
        (
            "searchKeys",
            true,
            &ArraySchema::new("Selectable search keys.", &Schema::Any).schema(),
        ),
        SPAN_ENTRY,
        STYLE_ENTRY,
        TYPE_ENTRY,
    ],
)
.additional_properties(true)
.schema();

static HOST_SLOT_ELEMENT_SCHEMA: Schema = ObjectSchema::new(
    "Host rendered slot element.",
    &[
        ALIGN_ENTRY,
        POSITION_ENTRY,
        ("props", true, &PROPS_SCHEMA),
        ("slot", false, &StringSchema::new("Slot name.").schema()),
        SPAN_ENTRY,
        STYLE_ENTRY,
        TYPE_ENTRY,
    ],
)
.additional_properties(true)
.schema();

static INSERT_BUTTON_ELEMENT_SCHEMA: Schema = ObjectSchema::new(
    "Insert button element.",
    &[
        ("addBtnText", true, &STRING_SCHEMA),
        ALIGN_ENTRY,
        ("insertButtonText", true, &STRING_SCHEMA),
        POSITION_ENTRY,
        ("showIcon", true, &FLAG_SCHEMA),
        SPAN_ENTRY,
        STYLE_ENTRY,
        TYPE_ENTRY,
    ],
)
.additional_properties(true)
.schema();

static DISPLAY_COLUMN_SELECTOR_ELEMENT_SCHEMA: Schema = ObjectSchema::new(
    "Column visibility selector element.",
    &[
        ALIGN_ENTRY,
        POSITION_ENTRY,
        ("selectorButtonText", true, &STRING_SCHEMA),
        ("selectorButtonType", true, &STRING_SCHEMA),
        SPAN_ENTRY,
        STYLE_ENTRY,
        TYPE_ENTRY,
    ],
)
.additional_properties(true)
.schema();

static LAYOUT_SELECTOR_ELEMENT_SCHEMA: Schema = ObjectSchema::new(
    "Layout selector element.",
    &[
        ALIGN_ENTRY,
        POSITION_ENTRY,
        ("selectorButtonText", true, &STRING_SCHEMA),
        SPAN_ENTRY,
        STYLE_ENTRY,
        TYPE_ENTRY,
    ],
)
.additional_properties(true)
.schema();

/// One slot element, checked against the schema of its `type`.
static SLOT_ELEMENT_SCHEMA: Schema = OneOfSchema::new(
    "Slot element.",
    &TYPE_ENTRY,
    &[
        ("add-button", &INSERT_BUTTON_ELEMENT_SCHEMA),
        ("addButton", &INSERT_BUTTON_ELEMENT_SCHEMA),
        ("display-column-selector", &DISPLAY_COLUMN_SELECTOR_ELEMENT_SCHEMA),
        ("html", &HTML_ELEMENT_SCHEMA),
        ("insert-button", &INSERT_BUTTON_ELEMENT_SCHEMA),
        ("layout-selector", &LAYOUT_SELECTOR_ELEMENT_SCHEMA),
        ("search", &SEARCH_ELEMENT_SCHEMA),
        ("slot", &HOST_SLOT_ELEMENT_SCHEMA),
        ("spacer", &SPACER_ELEMENT_SCHEMA),
        ("text", &TEXT_ELEMENT_SCHEMA),
        ("title", &TITLE_ELEMENT_SCHEMA),
    ],
)
.schema();

static SLOT_ELEMENTS_SCHEMA: Schema =
    ArraySchema::new("Slot elements.", &SLOT_ELEMENT_SCHEMA).schema();

/// Structural schema of an explicit slot object.
pub static SLOT_SCHEMA: Schema = ObjectSchema::new(
    "Header or footer slot.",
    &[
        ("elements", true, &SLOT_ELEMENTS_SCHEMA),
        ("style", true, &STYLE_SCHEMA),
    ],
)
.schema();
