//! Data types to describe data types.
//!
//! This is loosely based on JSON Schema, but uses static rust data types. This way component
//! option schemas can be declared as constants right next to the component they belong to, and
//! every host application can add its own without any runtime schema compilation step.

use std::fmt;

use anyhow::{bail, format_err, Error};
use serde_json::{Map, Value};

use crate::ConstRegexPattern;

/// Error type for schema verification.
///
/// The verification functions may produce several error messages, i.e. when verifying objects,
/// one message is produced for each erroneous object property. Every entry carries the
/// `/`-separated path of the offending value relative to the verified root.
#[derive(Default, Debug)]
pub struct VerifyError {
    error_list: Vec<(String, Error)>,
}

/// Like anyhow's `format_err` but producing a `VerifyError`.
#[macro_export]
macro_rules! verify_format_err {
    ($field:expr, $err:expr) => {
        $crate::VerifyError::from(($field, $err))
    };

    ($field:expr, $($msg:tt)+) => {
        $crate::VerifyError::from(($field, ::anyhow::format_err!($($msg)+)))
    };
}

/// Like anyhow's `bail` but enclosing a `VerifyError`, so a `downcast` can extract it later.
#[macro_export]
macro_rules! verify_bail {
    ($field:expr, $err:expr) => {{
        return Err($crate::verify_format_err!($field, $err).into());
    }};

    ($field:expr, $($msg:tt)+) => {{
        return Err($crate::verify_format_err!($field, $($msg)+).into());
    }};
}

impl std::error::Error for VerifyError {}

fn join_path(prefix: &str, key: &str) -> String {
    match (prefix.is_empty(), key.is_empty()) {
        (true, _) => key.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}/{key}"),
    }
}

impl VerifyError {
    pub fn new() -> Self {
        Self {
            error_list: Vec::new(),
        }
    }

    pub fn push(&mut self, path: String, value: Error) {
        self.error_list.push((path, value));
    }

    pub fn len(&self) -> usize {
        self.error_list.len()
    }

    pub fn errors(&self) -> &[(String, Error)] {
        &self.error_list
    }

    pub fn into_inner(self) -> Vec<(String, Error)> {
        self.error_list
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keep only the first `len` entries.
    pub fn truncate(&mut self, len: usize) {
        self.error_list.truncate(len);
    }

    /// Add the errors contained in `err` below `prefix`.
    ///
    /// Nested `VerifyError`s are flattened, their paths get `prefix` prepended. Any other error
    /// is recorded at `prefix` itself.
    pub fn add_errors(&mut self, prefix: &str, err: Error) {
        match err.downcast::<VerifyError>() {
            Ok(verify_err) => {
                self.extend(
                    verify_err
                        .into_iter()
                        .map(|(path, err)| (join_path(prefix, &path), err)),
                );
            }
            Err(err) => self.push(prefix.to_string(), err),
        }
    }

    /// Render every entry as `<data_var>/<path>: <message>`.
    ///
    /// Entries at the root of the verified value are rendered as `<data_var>: <message>`.
    pub fn messages(&self, data_var: &str) -> Vec<String> {
        self.error_list
            .iter()
            .map(|(path, err)| format!("{}: {err}", join_path(data_var, path)))
            .collect()
    }
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use std::fmt::Write;

        let mut msg = String::new();

        if !self.is_empty() {
            if self.len() == 1 {
                msg.push_str("schema verification failed - ");
                let _ = write!(msg, "'{}': {}", self.error_list[0].0, self.error_list[0].1);
            } else {
                msg.push_str("schema verification failed:\n");
                for (path, err) in self.error_list.iter() {
                    let _ = writeln!(msg, "- '{}': {}", path, err);
                }
            }
        }

        write!(f, "{}", msg.trim())
    }
}

impl From<(String, Error)> for VerifyError {
    fn from(err: (String, Error)) -> Self {
        let mut this = Self::new();
        this.push(err.0, err.1);
        this
    }
}

impl<'a> From<(&'a str, Error)> for VerifyError {
    fn from(err: (&'a str, Error)) -> Self {
        Self::from((err.0.to_string(), err.1))
    }
}

impl std::iter::Extend<(String, Error)> for VerifyError {
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = (String, Error)>,
    {
        self.error_list.extend(iter);
    }
}

impl IntoIterator for VerifyError {
    type Item = (String, Error);
    type IntoIter = <Vec<(String, Error)> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

impl FromIterator<(String, Error)> for VerifyError {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (String, Error)>,
    {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

/// Data type to describe boolean values
#[derive(Debug)]
#[non_exhaustive]
pub struct BooleanSchema {
    pub description: &'static str,
    /// Optional default value.
    pub default: Option<bool>,
}

impl BooleanSchema {
    pub const fn new(description: &'static str) -> Self {
        BooleanSchema {
            description,
            default: None,
        }
    }

    pub const fn default(mut self, default: bool) -> Self {
        self.default = Some(default);
        self
    }

    pub const fn schema(self) -> Schema {
        Schema::Boolean(self)
    }

    /// Verify JSON value using a `BooleanSchema`.
    pub fn verify_json(&self, data: &Value) -> Result<(), Error> {
        if !data.is_boolean() {
            bail!("Expected boolean value.");
        }
        Ok(())
    }
}

/// Data type to describe integer values.
#[derive(Debug)]
#[non_exhaustive]
pub struct IntegerSchema {
    pub description: &'static str,
    /// Optional minimum.
    pub minimum: Option<isize>,
    /// Optional maximum.
    pub maximum: Option<isize>,
    /// Optional default.
    pub default: Option<isize>,
}

impl IntegerSchema {
    pub const fn new(description: &'static str) -> Self {
        IntegerSchema {
            description,
            default: None,
            minimum: None,
            maximum: None,
        }
    }

    pub const fn default(mut self, default: isize) -> Self {
        self.default = Some(default);
        self
    }

    pub const fn minimum(mut self, minimum: isize) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub const fn maximum(mut self, maximum: isize) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub const fn schema(self) -> Schema {
        Schema::Integer(self)
    }

    pub fn check_constraints(&self, value: isize) -> Result<(), Error> {
        if let Some(minimum) = self.minimum {
            if value < minimum {
                bail!("value must have a minimum value of {minimum} (got {value})");
            }
        }

        if let Some(maximum) = self.maximum {
            if value > maximum {
                bail!("value must have a maximum value of {maximum} (got {value})");
            }
        }

        Ok(())
    }

    /// Verify JSON value using an `IntegerSchema`.
    ///
    /// Floats without a fractional part (`2.0`) count as integers.
    pub fn verify_json(&self, data: &Value) -> Result<(), Error> {
        match integer_value(data) {
            Some(value) => self.check_constraints(value),
            None => bail!("Expected integer value."),
        }
    }
}

fn integer_value(data: &Value) -> Option<isize> {
    if let Some(value) = data.as_i64() {
        return isize::try_from(value).ok();
    }
    let value = data.as_f64()?;
    if value.fract() != 0.0 || value < isize::MIN as f64 || value >= isize::MAX as f64 {
        return None;
    }
    Some(value as isize)
}

/// Data type to describe (JSON like) number value
#[derive(Debug)]
#[non_exhaustive]
pub struct NumberSchema {
    pub description: &'static str,
    /// Optional minimum.
    pub minimum: Option<f64>,
    /// Optional maximum.
    pub maximum: Option<f64>,
    /// Optional default.
    pub default: Option<f64>,
}

impl NumberSchema {
    pub const fn new(description: &'static str) -> Self {
        NumberSchema {
            description,
            default: None,
            minimum: None,
            maximum: None,
        }
    }

    pub const fn default(mut self, default: f64) -> Self {
        self.default = Some(default);
        self
    }

    pub const fn minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub const fn maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub const fn schema(self) -> Schema {
        Schema::Number(self)
    }

    pub fn check_constraints(&self, value: f64) -> Result<(), Error> {
        if let Some(minimum) = self.minimum {
            if value < minimum {
                bail!("value must have a minimum value of {minimum} (got {value})");
            }
        }

        if let Some(maximum) = self.maximum {
            if value > maximum {
                bail!("value must have a maximum value of {maximum} (got {value})");
            }
        }

        Ok(())
    }

    /// Verify JSON value using a `NumberSchema`.
    pub fn verify_json(&self, data: &Value) -> Result<(), Error> {
        match data.as_f64() {
            Some(value) => self.check_constraints(value),
            None => bail!("Expected number value."),
        }
    }
}

/// Data type to describe string values.
#[derive(Debug)]
#[non_exhaustive]
pub struct StringSchema {
    pub description: &'static str,
    /// Optional default value.
    pub default: Option<&'static str>,
    /// Optional minimal length.
    pub min_length: Option<usize>,
    /// Optional maximal length.
    pub max_length: Option<usize>,
    /// Optional microformat.
    pub format: Option<&'static StringFormat>,
}

impl StringSchema {
    pub const fn new(description: &'static str) -> Self {
        StringSchema {
            description,
            default: None,
            min_length: None,
            max_length: None,
            format: None,
        }
    }

    pub const fn default(mut self, text: &'static str) -> Self {
        self.default = Some(text);
        self
    }

    pub const fn format(mut self, format: &'static StringFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub const fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub const fn schema(self) -> Schema {
        Schema::String(self)
    }

    fn check_length(&self, length: usize) -> Result<(), Error> {
        if let Some(min_length) = self.min_length {
            if length < min_length {
                bail!("value must be at least {min_length} characters long");
            }
        }

        if let Some(max_length) = self.max_length {
            if length > max_length {
                bail!("value may only be {max_length} characters long");
            }
        }

        Ok(())
    }

    pub fn check_constraints(&self, value: &str) -> Result<(), Error> {
        self.check_length(value.chars().count())?;

        if let Some(format) = self.format {
            match format {
                StringFormat::Pattern(regex) => {
                    if !regex.is_match(value) {
                        bail!("value does not match the regex pattern");
                    }
                }
                StringFormat::Enum(variants) => {
                    if !variants.iter().any(|e| e.value == value) {
                        bail!("value '{value}' is not defined in the enumeration.");
                    }
                }
                StringFormat::VerifyFn(verify_fn) => {
                    verify_fn(value)?;
                }
            }
        }

        Ok(())
    }

    /// Verify JSON value using this `StringSchema`.
    pub fn verify_json(&self, data: &Value) -> Result<(), Error> {
        match data.as_str() {
            Some(value) => self.check_constraints(value),
            None => bail!("Expected string value."),
        }
    }
}

/// Data type to describe array of values.
///
/// All array elements are of the same type, as defined in the `items` schema. Use an
/// [`AnyOfSchema`] item schema to allow elements of different types (i.e. nullable entries).
#[derive(Debug)]
#[non_exhaustive]
pub struct ArraySchema {
    pub description: &'static str,
    /// Element type schema.
    pub items: &'static Schema,
    /// Optional minimal length.
    pub min_length: Option<usize>,
    /// Optional maximal length.
    pub max_length: Option<usize>,
}

impl ArraySchema {
    pub const fn new(description: &'static str, item_schema: &'static Schema) -> Self {
        ArraySchema {
            description,
            items: item_schema,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub const fn schema(self) -> Schema {
        Schema::Array(self)
    }

    fn check_length(&self, length: usize) -> Result<(), Error> {
        if let Some(min_length) = self.min_length {
            if length < min_length {
                bail!("array must contain at least {min_length} elements");
            }
        }

        if let Some(max_length) = self.max_length {
            if length > max_length {
                bail!("array may only contain {max_length} elements");
            }
        }

        Ok(())
    }

    /// Verify JSON value using an `ArraySchema`.
    ///
    /// Element errors are reported with the element index as path segment.
    pub fn verify_json(&self, data: &Value) -> Result<(), Error> {
        let list = match data {
            Value::Array(ref list) => list,
            Value::Object(_) => bail!("Expected array - got object."),
            _ => bail!("Expected array - got scalar value."),
        };

        self.check_length(list.len())?;

        let mut errors = VerifyError::new();
        for (i, item) in list.iter().enumerate() {
            if let Err(err) = self.items.verify_json(item) {
                errors.add_errors(&i.to_string(), err);
            }
        }

        if !errors.is_empty() {
            Err(errors.into())
        } else {
            Ok(())
        }
    }
}

/// Property entry in an object schema:
///
/// - `name`: The name of the property
/// - `optional`: Set when the property is optional
/// - `schema`: Property type schema
pub type SchemaPropertyEntry = (&'static str, bool, &'static Schema);

/// Lookup table to Schema properties
///
/// Stores a sorted list of `(name, optional, schema)` tuples.
///
/// **Note:** The list has to be sorted by name, because we use a binary search to find items.
pub type SchemaPropertyMap = &'static [SchemaPropertyEntry];

/// Data type to describe objects (maps).
#[derive(Debug)]
#[non_exhaustive]
pub struct ObjectSchema {
    pub description: &'static str,
    /// If set, allow additional properties which are not defined in the schema.
    pub additional_properties: bool,
    /// Property schema definitions.
    pub properties: SchemaPropertyMap,
}

impl ObjectSchema {
    pub const fn new(description: &'static str, properties: SchemaPropertyMap) -> Self {
        ObjectSchema {
            description,
            properties,
            additional_properties: false,
        }
    }

    pub const fn additional_properties(mut self, additional_properties: bool) -> Self {
        self.additional_properties = additional_properties;
        self
    }

    pub const fn schema(self) -> Schema {
        Schema::Object(self)
    }

    pub fn lookup(&self, key: &str) -> Option<(bool, &Schema)> {
        if let Ok(ind) = self
            .properties
            .binary_search_by_key(&key, |(name, _, _)| name)
        {
            let (_name, optional, prop_schema) = self.properties[ind];
            Some((optional, prop_schema))
        } else {
            None
        }
    }

    /// Returns `true` if the property list is sorted by name (and free of duplicates).
    pub fn properties_sorted(&self) -> bool {
        self.properties.windows(2).all(|w| w[0].0 < w[1].0)
    }

    /// Verify JSON value using an `ObjectSchema`.
    pub fn verify_json(&self, data: &Value) -> Result<(), Error> {
        match data {
            Value::Object(ref map) => self.verify_map(map),
            Value::Array(_) => bail!("Expected object - got array."),
            _ => bail!("Expected object - got scalar value."),
        }
    }

    /// Verify the properties of an already destructured JSON object.
    pub fn verify_map(&self, map: &Map<String, Value>) -> Result<(), Error> {
        let mut errors = VerifyError::new();

        for (key, value) in map {
            if let Some((_optional, prop_schema)) = self.lookup(key) {
                if let Err(err) = prop_schema.verify_json(value) {
                    errors.add_errors(key, err);
                };
            } else if !self.additional_properties {
                errors.push(
                    key.to_string(),
                    format_err!("schema does not allow additional properties"),
                );
            }
        }

        for (name, optional, _prop_schema) in self.properties {
            if !(*optional) && map.get(*name).is_none_or(Value::is_null) {
                errors.push(
                    name.to_string(),
                    format_err!("property is missing and it is not optional"),
                );
            }
        }

        if !errors.is_empty() {
            Err(errors.into())
        } else {
            Ok(())
        }
    }
}

/// A value matching at least one of the listed schemas.
///
/// When no alternative matches, the error of the first alternative whose basic type fits the
/// value is reported, so nested problems keep their path. If no alternative has the right type at
/// all, a single type mismatch message is produced.
#[derive(Debug)]
#[non_exhaustive]
pub struct AnyOfSchema {
    pub description: &'static str,
    pub list: &'static [&'static Schema],
}

impl AnyOfSchema {
    pub const fn new(description: &'static str, list: &'static [&'static Schema]) -> Self {
        Self { description, list }
    }

    pub const fn schema(self) -> Schema {
        Schema::AnyOf(self)
    }

    /// Verify JSON value using an `AnyOfSchema`.
    pub fn verify_json(&self, data: &Value) -> Result<(), Error> {
        let mut type_error = None;

        for schema in self.list {
            match schema.verify_json(data) {
                Ok(()) => return Ok(()),
                Err(err) => {
                    if type_error.is_none() && schema.accepts_type_of(data) {
                        type_error = Some(err);
                    }
                }
            }
        }

        if let Some(err) = type_error {
            return Err(err);
        }

        let expected: Vec<&str> = self.list.iter().map(|s| s.type_text()).collect();
        bail!("Expected {} value.", expected.join(" or "));
    }
}

/// An object schema selected by a string `type` property, like an internally tagged enum.
///
/// Every variant must be an object schema which also lists the type property. Several names may
/// map to the same variant schema.
#[derive(Debug)]
#[non_exhaustive]
pub struct OneOfSchema {
    pub description: &'static str,
    /// The type property entry.
    pub type_property_entry: &'static SchemaPropertyEntry,
    /// `(type name, object schema)` pairs.
    pub list: &'static [(&'static str, &'static Schema)],
}

impl OneOfSchema {
    pub const fn new(
        description: &'static str,
        type_property_entry: &'static SchemaPropertyEntry,
        list: &'static [(&'static str, &'static Schema)],
    ) -> Self {
        Self {
            description,
            type_property_entry,
            list,
        }
    }

    pub const fn schema(self) -> Schema {
        Schema::OneOf(self)
    }

    pub fn type_property(&self) -> &'static str {
        self.type_property_entry.0
    }

    pub fn type_schema(&self) -> &'static Schema {
        self.type_property_entry.2
    }

    pub fn lookup_variant(&self, name: &str) -> Option<&'static Schema> {
        self.list
            .iter()
            .find(|(variant, _)| *variant == name)
            .map(|(_, schema)| *schema)
    }

    /// Verify JSON value using a `OneOfSchema`.
    ///
    /// Type property problems are reported under the type property path, nothing else is
    /// checked in that case.
    pub fn verify_json(&self, data: &Value) -> Result<(), Error> {
        let map = match data {
            Value::Object(ref map) => map,
            Value::Array(_) => bail!("Expected object - got array."),
            _ => bail!("Expected object - got scalar value."),
        };

        let type_property = self.type_property();
        let variant = match map.get(type_property) {
            None | Some(Value::Null) => {
                return Err(VerifyError::from((
                    type_property,
                    format_err!("property is missing and it is not optional"),
                ))
                .into());
            }
            Some(value) => {
                if let Err(err) = self.type_schema().verify_json(value) {
                    let mut errors = VerifyError::new();
                    errors.add_errors(type_property, err);
                    return Err(errors.into());
                }
                value.as_str().unwrap_or_default()
            }
        };

        match self.lookup_variant(variant) {
            Some(schema) => schema.verify_json(data),
            None => Err(VerifyError::from((
                type_property,
                format_err!("invalid '{type_property}': {variant}"),
            ))
            .into()),
        }
    }
}

/// Schemas are used to describe complex data types.
///
/// All schema types implement constant builder methods, and a final `schema()` method to convert
/// them into a `Schema`.
///
/// ```
/// use drip_table_schema::{BooleanSchema, IntegerSchema, ObjectSchema, Schema};
///
/// const SIMPLE_OBJECT: Schema = ObjectSchema::new(
///     "A very simple object with 2 properties",
///     &[ // this arrays needs to be sorted by name!
///         (
///             "maxRow",
///             false /* required */,
///             &IntegerSchema::new("A required integer property.")
///                 .minimum(1)
///                 .schema()
///         ),
///         (
///             "tooltip",
///             true /* optional */,
///             &BooleanSchema::new("An optional boolean property.")
///                 .default(false)
///                 .schema()
///         ),
///     ],
/// ).schema();
///
/// assert!(SIMPLE_OBJECT.verify_json(&serde_json::json!({ "maxRow": 2 })).is_ok());
/// assert!(SIMPLE_OBJECT.verify_json(&serde_json::json!({ "tooltip": true })).is_err());
/// ```
#[derive(Debug)]
pub enum Schema {
    Null,
    /// Accepts every value.
    Any,
    Boolean(BooleanSchema),
    Integer(IntegerSchema),
    Number(NumberSchema),
    String(StringSchema),
    Object(ObjectSchema),
    Array(ArraySchema),
    AnyOf(AnyOfSchema),
    OneOf(OneOfSchema),
}

impl Schema {
    /// Verify JSON value with `schema`.
    pub fn verify_json(&self, data: &Value) -> Result<(), Error> {
        match self {
            Schema::Null => {
                if !data.is_null() {
                    bail!("Expected Null, but value is not Null.");
                }
            }
            Schema::Any => (),
            Schema::Object(s) => s.verify_json(data)?,
            Schema::Array(s) => s.verify_json(data)?,
            Schema::Boolean(s) => s.verify_json(data)?,
            Schema::Integer(s) => s.verify_json(data)?,
            Schema::Number(s) => s.verify_json(data)?,
            Schema::String(s) => s.verify_json(data)?,
            Schema::AnyOf(s) => s.verify_json(data)?,
            Schema::OneOf(s) => s.verify_json(data)?,
        }
        Ok(())
    }

    /// Verify JSON value and always report failures as a [`VerifyError`].
    ///
    /// Errors of the root value itself (i.e. a type mismatch) get an empty path.
    pub fn verify(&self, data: &Value) -> Result<(), VerifyError> {
        self.verify_json(data).map_err(|err| {
            let mut errors = VerifyError::new();
            errors.add_errors("", err);
            errors
        })
    }

    /// Short type name used in error messages and documentation.
    pub fn type_text(&self) -> &'static str {
        match self {
            Schema::Null => "null",
            Schema::Any => "any",
            Schema::Boolean(_) => "boolean",
            Schema::Integer(_) => "integer",
            Schema::Number(_) => "number",
            Schema::String(_) => "string",
            Schema::Object(_) => "object",
            Schema::Array(_) => "array",
            Schema::AnyOf(_) => "any of",
            Schema::OneOf(_) => "object",
        }
    }

    /// Check whether the basic JSON type of `data` fits this schema, ignoring all constraints.
    pub fn accepts_type_of(&self, data: &Value) -> bool {
        match self {
            Schema::Null => data.is_null(),
            Schema::Any => true,
            Schema::Boolean(_) => data.is_boolean(),
            Schema::Integer(_) => integer_value(data).is_some(),
            Schema::Number(_) => data.is_number(),
            Schema::String(_) => data.is_string(),
            Schema::Object(_) => data.is_object(),
            Schema::Array(_) => data.is_array(),
            Schema::AnyOf(s) => s.list.iter().any(|s| s.accepts_type_of(data)),
            Schema::OneOf(_) => data.is_object(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Schema::Null | Schema::Any => "",
            Schema::Boolean(s) => s.description,
            Schema::Integer(s) => s.description,
            Schema::Number(s) => s.description,
            Schema::String(s) => s.description,
            Schema::Object(s) => s.description,
            Schema::Array(s) => s.description,
            Schema::AnyOf(s) => s.description,
            Schema::OneOf(s) => s.description,
        }
    }

    /// Gets the underlying [`StringSchema`].
    pub const fn string(&self) -> Option<&StringSchema> {
        match self {
            Schema::String(s) => Some(s),
            _ => None,
        }
    }

    /// Gets the underlying [`ObjectSchema`].
    pub const fn object(&self) -> Option<&ObjectSchema> {
        match self {
            Schema::Object(s) => Some(s),
            _ => None,
        }
    }

    /// Gets the underlying [`ArraySchema`].
    pub const fn array(&self) -> Option<&ArraySchema> {
        match self {
            Schema::Array(s) => Some(s),
            _ => None,
        }
    }

    /// Gets the underlying [`AnyOfSchema`].
    pub const fn any_of(&self) -> Option<&AnyOfSchema> {
        match self {
            Schema::AnyOf(s) => Some(s),
            _ => None,
        }
    }

    /// Gets the underlying [`OneOfSchema`].
    pub const fn one_of(&self) -> Option<&OneOfSchema> {
        match self {
            Schema::OneOf(s) => Some(s),
            _ => None,
        }
    }
}

/// A string enum entry. An enum entry must have a value and a description.
#[derive(Clone, Debug)]
pub struct EnumEntry {
    pub value: &'static str,
    pub description: &'static str,
}

impl EnumEntry {
    /// Convenience method as long as we only have 2 mandatory fields in an `EnumEntry`.
    pub const fn new(value: &'static str, description: &'static str) -> Self {
        Self { value, description }
    }
}

/// String microformat definitions.
///
/// ## Enumerations
///
/// ```
/// use drip_table_schema::{EnumEntry, StringFormat};
///
/// const FORMAT: StringFormat = StringFormat::Enum(&[
///     EnumEntry::new("single", "Render one data field."),
///     EnumEntry::new("multiple", "Render several data fields."),
/// ]);
/// ```
///
/// ## Regular Expressions
///
/// ```
/// use drip_table_schema::{const_regex, StringFormat};
///
/// const_regex! {
///     pub CSS_LENGTH_REGEX = r"^\d+(px|em|rem|%)$";
/// }
/// const FORMAT: StringFormat = StringFormat::Pattern(&CSS_LENGTH_REGEX);
/// ```
pub enum StringFormat {
    /// Enumerate all valid strings
    Enum(&'static [EnumEntry]),
    /// Use a regular expression to describe valid strings.
    Pattern(&'static ConstRegexPattern),
    /// Use a verification function.
    VerifyFn(StringVerifyFn),
}

/// Type of a verification function for [`StringSchema`]s.
pub type StringVerifyFn = fn(&str) -> Result<(), Error>;

impl fmt::Debug for StringFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StringFormat::VerifyFn(fnptr) => write!(f, "VerifyFn({:p})", fnptr),
            StringFormat::Enum(variants) => write!(f, "Enum({:?})", variants),
            StringFormat::Pattern(regex) => write!(f, "Pattern({:?})", regex),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const MODE_SCHEMA: Schema = StringSchema::new("Mode.")
        .format(&StringFormat::Enum(&[
            EnumEntry::new("multiple", "multiple"),
            EnumEntry::new("single", "single"),
        ]))
        .schema();

    const NULLABLE_OBJECT: Schema = AnyOfSchema::new(
        "Object or nothing.",
        &[
            &Schema::Null,
            &ObjectSchema::new("Object.", &[("mode", false, &MODE_SCHEMA)]).schema(),
        ],
    )
    .schema();

    #[test]
    fn test_any_of_reports_matching_type() {
        assert!(NULLABLE_OBJECT.verify_json(&Value::Null).is_ok());
        assert!(NULLABLE_OBJECT.verify_json(&json!({"mode": "single"})).is_ok());

        let err = NULLABLE_OBJECT.verify(&json!({"mode": "none"})).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.errors()[0].0, "mode");

        let err = NULLABLE_OBJECT.verify(&json!(5)).unwrap_err();
        assert_eq!(err.errors()[0].0, "");
        assert_eq!(
            err.errors()[0].1.to_string(),
            "Expected null or object value."
        );
    }

    #[test]
    fn test_messages_use_data_var() {
        let schema = ArraySchema::new("List.", &NULLABLE_OBJECT).schema();
        let err = schema
            .verify(&json!([null, {"mode": "x"}, {}]))
            .unwrap_err();

        assert_eq!(
            err.messages("column"),
            vec![
                "column/1/mode: value 'x' is not defined in the enumeration.".to_string(),
                "column/2/mode: property is missing and it is not optional".to_string(),
            ]
        );
    }

    #[test]
    fn test_integer_is_not_number() {
        let schema = IntegerSchema::new("Rows.").minimum(1).schema();
        assert!(schema.verify_json(&json!(2)).is_ok());
        assert!(schema.verify_json(&json!(2.5)).is_err());
        assert!(schema.verify_json(&json!(0)).is_err());
    }
}
