//! Table properties as supplied by the host, and their structural verification.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

use drip_table_schema::{
    AnyOfSchema, ArraySchema, BooleanSchema, EnumEntry, IntegerSchema, ObjectSchema, Schema,
    StringFormat, StringSchema, VerifyError,
};

use crate::column::{RawColumn, MAP_SCHEMA};
use crate::layout::TableLayout;
use crate::slot::{SlotSetting, SLOT_SCHEMA};
use crate::validate::ValidationSetting;

/// Leading path token of every props error line.
pub const PROPS_PATH: &str = "props";

/// Host integration error: the props do not have the required shape.
///
/// Displayed as a single report, lines separated by newlines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Props validate failed: {}", render_report(.lines))]
pub struct PropsError {
    pub lines: Vec<String>,
}

fn render_report(lines: &[String]) -> String {
    let report = lines.join("\n");
    if report.contains('\n') {
        format!("\n{report}")
    } else {
        report
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationConfig {
    #[serde(
        default,
        deserialize_with = "deserialize_page_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub current: Option<u64>,
    #[serde(
        default,
        deserialize_with = "deserialize_page_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_quick_jumper: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_size_changer: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Page numbers are integers, whole floats such as `2.0` included.
fn deserialize_page_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u64>, D::Error> {
    use serde::de::Error;

    let number = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(number)) => number,
        Some(other) => return Err(D::Error::custom(format!("expected page number, got {other}"))),
    };

    let value = number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|value| value.fract() == 0.0 && *value >= 0.0 && *value < u64::MAX as f64)
            .map(|value| value as u64)
    });
    match value {
        Some(value) => Ok(Some(value)),
        None => Err(D::Error::custom(format!("expected page number, got {number}"))),
    }
}

/// The `pagination` field: `false`/absent or a configuration (`true` means all defaults).
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PaginationSetting {
    #[default]
    Disabled,
    Enabled(PaginationConfig),
}

impl PaginationSetting {
    pub fn is_disabled(&self) -> bool {
        matches!(self, PaginationSetting::Disabled)
    }
}

impl Serialize for PaginationSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PaginationSetting::Disabled => serializer.serialize_bool(false),
            PaginationSetting::Enabled(config) => config.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for PaginationSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        match Value::deserialize(deserializer)? {
            Value::Bool(false) | Value::Null => Ok(PaginationSetting::Disabled),
            Value::Bool(true) => Ok(PaginationSetting::Enabled(PaginationConfig::default())),
            value @ Value::Object(_) => serde_json::from_value(value)
                .map(PaginationSetting::Enabled)
                .map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "expected boolean or pagination object, got {other}"
            ))),
        }
    }
}

/// The declarative table schema.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSchema {
    pub columns: Vec<RawColumn>,
    #[serde(default, skip_serializing_if = "SlotSetting::is_absent")]
    pub header: SlotSetting,
    #[serde(default, skip_serializing_if = "SlotSetting::is_absent")]
    pub footer: SlotSetting,
    #[serde(default, skip_serializing_if = "PaginationSetting::is_disabled")]
    pub pagination: PaginationSetting,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_table_layout: Option<TableLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_key: Option<String>,
    /// `true` or a selection configuration object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_selection: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bordered: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticky: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#virtual: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Everything the host passes to one table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableProps {
    pub schema: TableSchema,
    pub data_source: Vec<Value>,
    #[serde(default)]
    pub ajv: ValidationSetting,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_column_keys: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_row_keys: Option<Vec<Value>>,
    #[serde(default)]
    pub loading: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Verify the shape of raw table props.
///
/// Skipped entirely when `ajv` is `false`. Unless `ajv.allErrors` is set only the first error
/// per top-level property is reported.
pub fn validate_props(props: &Value) -> Result<(), PropsError> {
    let all_errors = match props.get("ajv") {
        Some(Value::Bool(false)) => return Ok(()),
        Some(Value::Object(options)) => {
            options.get("allErrors").and_then(Value::as_bool) == Some(true)
        }
        _ => false,
    };

    let errors = match TABLE_PROPS_SCHEMA.verify(props) {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let mut reported = HashSet::new();
    let errors: VerifyError = errors
        .into_inner()
        .into_iter()
        .filter(|(path, _)| {
            let property = path.split('/').next().unwrap_or_default();
            all_errors || reported.insert(property.to_string())
        })
        .collect();

    let lines = errors.messages(PROPS_PATH);
    log::debug!("props verification failed with {} errors", lines.len());

    Err(PropsError { lines })
}

const TEXT_SCHEMA: Schema = StringSchema::new("Text.").schema();

const FLAG_SCHEMA: Schema = BooleanSchema::new("Flag.").schema();

const FLAG_OR_MAP_SCHEMA: Schema = AnyOfSchema::new(
    "Flag or configuration object.",
    &[&FLAG_SCHEMA, &MAP_SCHEMA],
)
.schema();

static SLOT_SETTING_SCHEMA: Schema = AnyOfSchema::new(
    "Boolean shorthand or explicit slot.",
    &[&FLAG_SCHEMA, &SLOT_SCHEMA],
)
.schema();

const PAGE_NUMBER_SCHEMA: Schema = IntegerSchema::new("Page number or size.")
    .minimum(1)
    .schema();

const PAGINATION_POSITION_SCHEMA: Schema = StringSchema::new("Pagination position.")
    .format(&StringFormat::Enum(&[
        EnumEntry::new("topLeft", "Above the table, left."),
        EnumEntry::new("topCenter", "Above the table, centered."),
        EnumEntry::new("topRight", "Above the table, right."),
        EnumEntry::new("bottomLeft", "Below the table, left."),
        EnumEntry::new("bottomCenter", "Below the table, centered."),
        EnumEntry::new("bottomRight", "Below the table, right."),
    ]))
    .schema();

const PAGINATION_SIZE_SCHEMA: Schema = StringSchema::new("Pagination size.")
    .format(&StringFormat::Enum(&[
        EnumEntry::new("small", "Small."),
        EnumEntry::new("default", "Default."),
    ]))
    .schema();

const PAGINATION_OBJECT_SCHEMA: Schema = ObjectSchema::new(
    "Pagination configuration.",
    &[
        ("current", true, &PAGE_NUMBER_SCHEMA),
        ("pageSize", true, &PAGE_NUMBER_SCHEMA),
        ("position", true, &PAGINATION_POSITION_SCHEMA),
        ("showQuickJumper", true, &FLAG_SCHEMA),
        ("showSizeChanger", true, &FLAG_SCHEMA),
        ("size", true, &PAGINATION_SIZE_SCHEMA),
    ],
)
.additional_properties(true)
.schema();

const PAGINATION_SCHEMA: Schema = AnyOfSchema::new(
    "Pagination switch or configuration.",
    &[&FLAG_SCHEMA, &PAGINATION_OBJECT_SCHEMA],
)
.schema();

const TABLE_LAYOUT_SCHEMA: Schema = StringSchema::new("Table layout.")
    .format(&StringFormat::Enum(&[
        EnumEntry::new("table", "Rows and columns."),
        EnumEntry::new("card", "One card per record."),
        EnumEntry::new("calendar", "Records placed in a calendar."),
    ]))
    .schema();

const TABLE_SIZE_SCHEMA: Schema = StringSchema::new("Table size.")
    .format(&StringFormat::Enum(&[
        EnumEntry::new("small", "Small."),
        EnumEntry::new("middle", "Middle."),
        EnumEntry::new("large", "Large."),
        EnumEntry::new("default", "Default."),
    ]))
    .schema();

const COLUMNS_SCHEMA: Schema = ArraySchema::new("Table columns.", &MAP_SCHEMA).schema();

static TABLE_SCHEMA_SCHEMA: Schema = ObjectSchema::new(
    "Table schema.",
    &[
        ("bordered", true, &FLAG_SCHEMA),
        ("className", true, &TEXT_SCHEMA),
        ("columns", false, &COLUMNS_SCHEMA),
        ("defaultTableLayout", true, &TABLE_LAYOUT_SCHEMA),
        ("footer", true, &SLOT_SETTING_SCHEMA),
        ("header", true, &SLOT_SETTING_SCHEMA),
        ("pagination", true, &PAGINATION_SCHEMA),
        ("rowKey", true, &TEXT_SCHEMA),
        ("rowSelection", true, &FLAG_OR_MAP_SCHEMA),
        ("scroll", true, &MAP_SCHEMA),
        ("size", true, &TABLE_SIZE_SCHEMA),
        ("sticky", true, &FLAG_SCHEMA),
        ("style", true, &MAP_SCHEMA),
        ("virtual", true, &FLAG_SCHEMA),
    ],
)
.additional_properties(true)
.schema();

const VALIDATION_OPTIONS_SCHEMA: Schema = ObjectSchema::new(
    "Validation options.",
    &[("allErrors", true, &FLAG_SCHEMA)],
)
.additional_properties(true)
.schema();

const VALIDATION_SETTING_SCHEMA: Schema = AnyOfSchema::new(
    "Validation switch or options.",
    &[&FLAG_SCHEMA, &VALIDATION_OPTIONS_SCHEMA],
)
.schema();

/// Structural schema of [`TableProps`].
pub static TABLE_PROPS_SCHEMA: Schema = ObjectSchema::new(
    "Table properties.",
    &[
        ("ajv", true, &VALIDATION_SETTING_SCHEMA),
        ("className", true, &TEXT_SCHEMA),
        (
            "dataSource",
            false,
            &ArraySchema::new("Records.", &MAP_SCHEMA).schema(),
        ),
        (
            "displayColumnKeys",
            true,
            &ArraySchema::new("Displayed hidable column keys.", &TEXT_SCHEMA).schema(),
        ),
        ("loading", true, &FLAG_SCHEMA),
        ("schema", false, &TABLE_SCHEMA_SCHEMA),
        (
            "selectedRowKeys",
            true,
            &ArraySchema::new("Selected row keys.", &Schema::Any).schema(),
        ),
        ("style", true, &MAP_SCHEMA),
    ],
)
.additional_properties(true)
.schema();
