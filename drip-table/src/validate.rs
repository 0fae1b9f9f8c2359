//! Per column validation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

use drip_table_schema::{Schema, VerifyError};

use crate::column::{RawColumn, COLUMN_SCHEMA, GROUP_COMPONENT};
use crate::component::ComponentId;
use crate::registry::ComponentRegistry;

/// Leading path token of every column error message.
pub const COLUMN_PATH: &str = "column";

/// Separator between the error entries of one column.
const MESSAGE_SEPARATOR: &str = ", ";

/// A column failed validation.
///
/// `message` is complete and already starts with `path`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ColumnError {
    pub path: String,
    pub message: String,
}

impl ColumnError {
    pub fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }

    fn unresolved(path: &str, component: Option<&Value>) -> Self {
        let component = match component {
            Some(Value::String(component)) => component.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        Self::new(
            path,
            format!("{path}: unknown or schema-less component '{component}'"),
        )
    }
}

/// Options of the structural validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOptions {
    /// Report every schema violation of a column instead of only the first one.
    #[serde(default)]
    pub all_errors: bool,
}

/// The `ajv` table property: `false` disables validation, `true`, absence or an options object
/// enable it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationSetting {
    Disabled,
    Enabled(ValidationOptions),
}

impl Default for ValidationSetting {
    fn default() -> Self {
        ValidationSetting::Enabled(ValidationOptions::default())
    }
}

impl ValidationSetting {
    pub fn options(&self) -> Option<ValidationOptions> {
        match self {
            ValidationSetting::Disabled => None,
            ValidationSetting::Enabled(options) => Some(*options),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, ValidationSetting::Enabled(_))
    }
}

impl Serialize for ValidationSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ValidationSetting::Disabled => serializer.serialize_bool(false),
            ValidationSetting::Enabled(options) => options.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ValidationSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        match Value::deserialize(deserializer)? {
            Value::Bool(false) => Ok(ValidationSetting::Disabled),
            Value::Bool(true) | Value::Null => Ok(ValidationSetting::default()),
            value @ Value::Object(_) => serde_json::from_value(value)
                .map(ValidationSetting::Enabled)
                .map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "expected boolean or validation options, got {other}"
            ))),
        }
    }
}

/// Rewrite the leading [`COLUMN_PATH`] token of an error entry to `path`.
///
/// Only a complete leading token is replaced, occurrences anywhere else are left alone.
pub fn relocate_message(message: &str, path: &str) -> String {
    match message.strip_prefix(COLUMN_PATH) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with(':') => {
            format!("{path}{rest}")
        }
        _ => message.to_string(),
    }
}

/// Validates columns against the column contract and their component's options schema.
pub struct ColumnValidator<'a> {
    registry: &'a ComponentRegistry,
    options: ValidationOptions,
}

impl<'a> ColumnValidator<'a> {
    pub fn new(registry: &'a ComponentRegistry, options: ValidationOptions) -> Self {
        Self { registry, options }
    }

    /// Validate `column` and, for groups, all its items.
    ///
    /// `path` is the location reported for this column, nested items extend it with
    /// `/options/items/<index>`. The first failing item aborts the group.
    pub fn validate(&self, column: &RawColumn, path: &str) -> Result<(), ColumnError> {
        self.validate_map(column.as_map(), path, &mut |_| ())
    }

    /// Like [`validate`](Self::validate), calling `on_column` with the path of every column
    /// before it is checked.
    pub fn validate_with(
        &self,
        column: &RawColumn,
        path: &str,
        on_column: &mut dyn FnMut(&str),
    ) -> Result<(), ColumnError> {
        self.validate_map(column.as_map(), path, on_column)
    }

    fn validate_map(
        &self,
        column: &Map<String, Value>,
        path: &str,
        on_column: &mut dyn FnMut(&str),
    ) -> Result<(), ColumnError> {
        on_column(path);

        let mut errors = VerifyError::new();
        if let Err(err) = COLUMN_SCHEMA.verify_map(column) {
            errors.add_errors("", err);
        }
        self.bail_on(errors, path)?;

        let component = column.get("component");
        let id = match component.and_then(Value::as_str) {
            Some(id) => ComponentId::parse(id),
            None => return Err(ColumnError::unresolved(path, component)),
        };

        let schema = self.options_schema(&id, path, component)?;

        if let Some(schema) = schema {
            let empty = Value::Object(Map::new());
            let options = column
                .get("options")
                .filter(|options| !options.is_null())
                .unwrap_or(&empty);

            let mut errors = VerifyError::new();
            if let Err(err) = schema.verify_json(options) {
                errors.add_errors("options", err);
            }
            self.bail_on(errors, path)?;
        }

        if id == ComponentId::Local(GROUP_COMPONENT.to_string()) {
            self.validate_items(column, path, on_column)?;
        }

        Ok(())
    }

    /// The options schema of `id`; `None` if the component does not declare one but may be used
    /// anyway.
    fn options_schema(
        &self,
        id: &ComponentId,
        path: &str,
        component: Option<&Value>,
    ) -> Result<Option<&'static Schema>, ColumnError> {
        match (self.registry.resolve(id), id) {
            (Some(descriptor), _) if descriptor.schema.is_some() => Ok(descriptor.schema),
            (Some(_), ComponentId::External { .. }) => Ok(None),
            _ => Err(ColumnError::unresolved(path, component)),
        }
    }

    fn validate_items(
        &self,
        column: &Map<String, Value>,
        path: &str,
        on_column: &mut dyn FnMut(&str),
    ) -> Result<(), ColumnError> {
        let items = match column
            .get("options")
            .and_then(|options| options.get("items"))
            .and_then(Value::as_array)
        {
            Some(items) => items,
            None => return Ok(()),
        };

        for (index, item) in items.iter().enumerate() {
            let item_path = format!("{path}/options/items/{index}");
            match item {
                Value::Null => continue,
                Value::Object(item) => self.validate_map(item, &item_path, on_column)?,
                _ => {
                    return Err(ColumnError::new(
                        &item_path,
                        format!("{item_path}: group item must be an object or null"),
                    ))
                }
            }
        }

        Ok(())
    }

    fn bail_on(&self, mut errors: VerifyError, path: &str) -> Result<(), ColumnError> {
        if errors.is_empty() {
            return Ok(());
        }
        if !self.options.all_errors {
            errors.truncate(1);
        }

        let message = errors
            .messages(COLUMN_PATH)
            .iter()
            .map(|message| relocate_message(message, path))
            .collect::<Vec<_>>()
            .join(MESSAGE_SEPARATOR);

        Err(ColumnError::new(path, message))
    }
}
