//! Column schemas, raw and typed.
//!
//! A [`RawColumn`] is the column exactly as the host supplied it. Normalization and validation
//! operate on raw columns, only columns that passed are converted into a typed [`ColumnSchema`].

use std::ops::Deref;

use anyhow::{bail, Error};
use const_format::concatcp;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use drip_table_schema::{
    const_regex, AnyOfSchema, ArraySchema, BooleanSchema, EnumEntry, NumberSchema, ObjectSchema,
    Schema, StringFormat, StringSchema,
};

use crate::component::{ComponentId, LIBRARY_SEPARATOR};
use crate::slot::{resolve_slot, SlotSchema, SlotSetting, SLOT_SCHEMA};
use crate::validate::ColumnError;

/// Legacy name of the `component` field.
pub const LEGACY_COMPONENT_KEY: &str = "ui:type";
/// Legacy name of the `options` field.
pub const LEGACY_OPTIONS_KEY: &str = "ui:props";

/// Component of the composite column type.
pub const GROUP_COMPONENT: &str = "group";
/// Component used for error display fallback columns.
pub const FALLBACK_COMPONENT: &str = "text";
/// Class name of error display fallback columns.
pub const ERROR_CLASS_NAME: &str = "jfe-drip-table-column-ajv-error";

/// A column as supplied by the host, not yet validated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawColumn(Map<String, Value>);

impl Deref for RawColumn {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Map<String, Value>> for RawColumn {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<RawColumn> for Value {
    fn from(column: RawColumn) -> Self {
        Value::Object(column.0)
    }
}

impl TryFrom<Value> for RawColumn {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => bail!("column must be an object, got {other}"),
        }
    }
}

impl RawColumn {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    pub fn key(&self) -> Option<&str> {
        self.0.get("key").and_then(Value::as_str)
    }

    /// The key rendered for messages; non-string keys are shown as JSON.
    pub fn key_text(&self) -> String {
        key_text(&self.0)
    }

    pub fn component(&self) -> Option<&str> {
        self.0.get("component").and_then(Value::as_str)
    }

    pub fn options(&self) -> Option<&Map<String, Value>> {
        self.0.get("options").and_then(Value::as_object)
    }

    /// Child slots of a group column, `None` for every other column.
    pub fn group_items(&self) -> Option<&Vec<Value>> {
        if self.component() != Some(GROUP_COMPONENT) {
            return None;
        }
        self.options()?.get("items")?.as_array()
    }

    /// Whether this column or any nested group item still uses legacy fields.
    pub fn is_legacy(&self) -> bool {
        is_legacy_map(&self.0)
    }
}

pub(crate) fn key_text(map: &Map<String, Value>) -> String {
    match map.get("key") {
        Some(Value::String(key)) => key.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn is_legacy_map(map: &Map<String, Value>) -> bool {
    if map.contains_key(LEGACY_COMPONENT_KEY) || map.contains_key(LEGACY_OPTIONS_KEY) {
        return true;
    }
    map.get("options")
        .and_then(|options| options.get("items"))
        .and_then(Value::as_array)
        .is_some_and(|items| {
            items
                .iter()
                .filter_map(Value::as_object)
                .any(is_legacy_map)
        })
}

/// Record path of a column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataIndex {
    Key(String),
    Path(Vec<String>),
}

impl DataIndex {
    /// The plain key, if this is not a nested path.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            DataIndex::Key(key) => Some(key),
            DataIndex::Path(_) => None,
        }
    }

    /// Look up the value addressed by this index in `record`.
    pub fn lookup<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        match self {
            DataIndex::Key(key) => record.get(key),
            DataIndex::Path(path) => path
                .iter()
                .try_fold(record, |value, segment| value.get(segment)),
        }
    }
}

/// Structured column title.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnTitleSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    #[serde(default, skip_serializing_if = "SlotSetting::is_absent")]
    pub header: SlotSetting,
    #[serde(default, skip_serializing_if = "SlotSetting::is_absent")]
    pub footer: SlotSetting,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnTitle {
    Text(String),
    Structured(ColumnTitleSchema),
}

impl ColumnTitle {
    /// Plain title text, if there is one.
    pub fn text(&self) -> Option<&str> {
        match self {
            ColumnTitle::Text(text) => Some(text),
            ColumnTitle::Structured(title) => match &title.body {
                Some(Value::String(text)) => Some(text),
                Some(Value::Object(body)) => body.get("content").and_then(Value::as_str),
                _ => None,
            },
        }
    }

    /// Title header slot. Titles have no `true` shorthand.
    pub fn header(&self) -> Option<SlotSchema> {
        match self {
            ColumnTitle::Text(_) => None,
            ColumnTitle::Structured(title) => resolve_slot(&title.header),
        }
    }

    pub fn footer(&self) -> Option<SlotSchema> {
        match self {
            ColumnTitle::Text(_) => None,
            ColumnTitle::Structured(title) => resolve_slot(&title.footer),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnWidth {
    Pixels(f64),
    Css(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnVerticalAlign {
    Top,
    Middle,
    Bottom,
    Stretch,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnFilter {
    pub text: String,
    pub value: Value,
}

/// A validated, render ready column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSchema {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<ColumnTitle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_index: Option<DataIndex>,
    pub component: ComponentId,
    #[serde(default)]
    pub options: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<ColumnWidth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<ColumnAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<ColumnVerticalAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<ColumnFilter>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_filtered_value: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Map<String, Value>>,
    /// Typed child slots of a group column; `options.items` keeps the raw form.
    #[serde(skip)]
    pub items: Vec<Option<ColumnSchema>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ColumnSchema {
    /// Convert a (validated) raw column, including all nested group items.
    pub fn from_raw(raw: &RawColumn) -> Result<Self, ColumnError> {
        Self::parse_at(raw.as_map(), "column")
    }

    fn parse_at(map: &Map<String, Value>, path: &str) -> Result<Self, ColumnError> {
        let mut column: ColumnSchema = serde_json::from_value(Value::Object(map.clone()))
            .map_err(|err| ColumnError::new(path, format!("{path}: {err}")))?;

        if column.is_group() {
            if let Some(items) = column.options.get("items").and_then(Value::as_array) {
                for (index, item) in items.iter().enumerate() {
                    let item_path = format!("{path}/options/items/{index}");
                    column.items.push(match item {
                        Value::Null => None,
                        Value::Object(item) => Some(Self::parse_at(item, &item_path)?),
                        _ => {
                            return Err(ColumnError::new(
                                &item_path,
                                format!("{item_path}: group item must be an object or null"),
                            ))
                        }
                    });
                }
            }
        }

        Ok(column)
    }

    /// Error display column standing in for `raw`.
    ///
    /// Only `key`, `title` and `dataIndex` are taken over, and only if they are well formed.
    pub fn fallback(raw: &RawColumn, message: &str) -> Self {
        let lenient = |name: &str| raw.get(name).cloned().filter(|value| !value.is_null());

        let mut options = Map::new();
        options.insert("mode".to_string(), json!("static"));
        options.insert("static".to_string(), json!(message));
        options.insert("className".to_string(), json!(ERROR_CLASS_NAME));

        Self {
            key: raw.key_text(),
            title: lenient("title").and_then(|title| serde_json::from_value(title).ok()),
            data_index: lenient("dataIndex").and_then(|index| serde_json::from_value(index).ok()),
            component: ComponentId::Local(FALLBACK_COMPONENT.to_string()),
            options,
            width: None,
            align: None,
            vertical_align: None,
            description: None,
            filters: Vec::new(),
            hidable: false,
            default_filtered_value: None,
            style: None,
            items: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn is_group(&self) -> bool {
        self.component == ComponentId::Local(GROUP_COMPONENT.to_string())
    }

    /// Whether this is an error display fallback column.
    pub fn is_fallback(&self) -> bool {
        self.component == ComponentId::Local(FALLBACK_COMPONENT.to_string())
            && self.options.get("className").and_then(Value::as_str) == Some(ERROR_CLASS_NAME)
    }

    /// Walk this column and every nested group item, depth first.
    pub fn walk<'a>(&'a self, path: &str, visit: &mut dyn FnMut(&str, &'a ColumnSchema)) {
        visit(path, self);
        for (index, item) in self.items.iter().enumerate() {
            if let Some(item) = item {
                item.walk(&format!("{path}/options/items/{index}"), visit);
            }
        }
    }
}

const COMPONENT_NAME_REGEX_STR: &str = r"[^\s:]+";

const_regex! {
    pub COMPONENT_ID_REGEX = concatcp!(
        r"^", COMPONENT_NAME_REGEX_STR,
        r"(?:", LIBRARY_SEPARATOR, COMPONENT_NAME_REGEX_STR, r")?$"
    );
}

pub const COMPONENT_ID_SCHEMA: Schema = StringSchema::new("Component identifier.")
    .format(&StringFormat::Pattern(&COMPONENT_ID_REGEX))
    .schema();

const COLUMN_KEY_SCHEMA: Schema = StringSchema::new("Unique column key.")
    .min_length(1)
    .schema();

const ALIGN_SCHEMA: Schema = StringSchema::new("Horizontal alignment.")
    .format(&StringFormat::Enum(&[
        EnumEntry::new("left", "Align left."),
        EnumEntry::new("center", "Center."),
        EnumEntry::new("right", "Align right."),
    ]))
    .schema();

const VERTICAL_ALIGN_SCHEMA: Schema = StringSchema::new("Vertical alignment.")
    .format(&StringFormat::Enum(&[
        EnumEntry::new("top", "Align top."),
        EnumEntry::new("middle", "Center."),
        EnumEntry::new("bottom", "Align bottom."),
        EnumEntry::new("stretch", "Fill the cell."),
    ]))
    .schema();

const TEXT_SCHEMA: Schema = StringSchema::new("Text.").schema();

pub(crate) const DATA_INDEX_SCHEMA: Schema = AnyOfSchema::new(
    "Record key or path of record keys.",
    &[
        &TEXT_SCHEMA,
        &ArraySchema::new("Record path.", &TEXT_SCHEMA).schema(),
    ],
)
.schema();

const WIDTH_SCHEMA: Schema = AnyOfSchema::new(
    "Pixels or css width.",
    &[&NumberSchema::new("Pixels.").schema(), &TEXT_SCHEMA],
)
.schema();

const FILTER_SCHEMA: Schema = ObjectSchema::new(
    "Column filter entry.",
    &[("text", false, &TEXT_SCHEMA), ("value", false, &Schema::Any)],
)
.schema();

pub const MAP_SCHEMA: Schema = ObjectSchema::new("Free form object.", &[])
    .additional_properties(true)
    .schema();

static TITLE_OBJECT_SCHEMA: Schema = ObjectSchema::new(
    "Structured column title.",
    &[
        ("body", true, &Schema::Any),
        ("footer", true, &SLOT_SCHEMA),
        ("header", true, &SLOT_SCHEMA),
        ("style", true, &MAP_SCHEMA),
    ],
)
.additional_properties(true)
.schema();

static TITLE_SCHEMA: Schema = AnyOfSchema::new(
    "Column title.",
    &[&TEXT_SCHEMA, &TITLE_OBJECT_SCHEMA],
)
.schema();

/// Contract every column has to fulfil, independent of its component.
pub static COLUMN_SCHEMA: ObjectSchema = ObjectSchema::new(
    "Column.",
    &[
        ("align", true, &ALIGN_SCHEMA),
        ("component", false, &COMPONENT_ID_SCHEMA),
        ("dataIndex", true, &DATA_INDEX_SCHEMA),
        (
            "defaultFilteredValue",
            true,
            &ArraySchema::new("Initially active filter values.", &Schema::Any).schema(),
        ),
        ("description", true, &TEXT_SCHEMA),
        (
            "filters",
            true,
            &ArraySchema::new("Filter entries.", &FILTER_SCHEMA).schema(),
        ),
        ("hidable", true, &BooleanSchema::new("Column may be hidden.").schema()),
        ("key", false, &COLUMN_KEY_SCHEMA),
        ("options", true, &MAP_SCHEMA),
        ("style", true, &MAP_SCHEMA),
        ("title", true, &TITLE_SCHEMA),
        ("verticalAlign", true, &VERTICAL_ALIGN_SCHEMA),
        ("width", true, &WIDTH_SCHEMA),
    ],
)
.additional_properties(true);
