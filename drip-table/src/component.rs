//! Component identifiers and descriptors.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use drip_table_schema::Schema;

/// Separator between library and component name of an external component.
pub const LIBRARY_SEPARATOR: &str = "::";

/// A parsed `component` field.
///
/// Identifiers containing [`LIBRARY_SEPARATOR`] with a non-empty part on both sides address a
/// component of an external library, everything else is looked up in the local (built-in plus
/// custom) component list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ComponentId {
    Local(String),
    External { library: String, name: String },
}

impl ComponentId {
    pub fn parse(id: &str) -> Self {
        match id.split_once(LIBRARY_SEPARATOR) {
            Some((library, name)) if !library.is_empty() && !name.is_empty() => {
                ComponentId::External {
                    library: library.to_string(),
                    name: name.to_string(),
                }
            }
            _ => ComponentId::Local(id.to_string()),
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, ComponentId::External { .. })
    }
}

impl From<&str> for ComponentId {
    fn from(id: &str) -> Self {
        Self::parse(id)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComponentId::Local(name) => f.write_str(name),
            ComponentId::External { library, name } => {
                write!(f, "{library}{LIBRARY_SEPARATOR}{name}")
            }
        }
    }
}

impl Serialize for ComponentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ComponentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(Self::parse(&id))
    }
}

/// Editable attribute of a component, as shown in the generator's property panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttrSchema {
    /// Attribute path; `options.*`, `style.*` and `titleStyle.*` prefixes select the target map.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(rename = "ui:title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "ui:type")]
    pub ui_type: String,
    #[serde(rename = "ui:props", default, skip_serializing_if = "Map::is_empty")]
    pub ui_props: Map<String, Value>,
    #[serde(
        rename = "ui:description",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl AttrSchema {
    pub fn new(name: &str, ui_type: &str) -> Self {
        Self {
            name: name.to_string(),
            group: None,
            title: None,
            ui_type: ui_type.to_string(),
            ui_props: Map::new(),
            description: None,
            value_type: None,
            default: None,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    pub fn value_type(mut self, value_type: &str) -> Self {
        self.value_type = Some(value_type.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Set the `ui:props` map. Non-object values are ignored.
    pub fn props(mut self, props: Value) -> Self {
        if let Value::Object(map) = props {
            self.ui_props = map;
        }
        self
    }
}

/// Registry entry describing one column component.
#[derive(Clone, Debug)]
pub struct ComponentDescriptor {
    /// The identifier used in a column's `component` field.
    pub component_type: String,
    pub title: String,
    /// Panel section the generator lists this component under.
    pub group: String,
    pub icon: Option<String>,
    /// Schema for the column's `options`.
    pub schema: Option<&'static Schema>,
    pub attr_schema: Vec<AttrSchema>,
}

impl ComponentDescriptor {
    pub fn new(component_type: &str, title: &str) -> Self {
        Self {
            component_type: component_type.to_string(),
            title: title.to_string(),
            group: String::new(),
            icon: None,
            schema: None,
            attr_schema: Vec::new(),
        }
    }

    pub fn group(mut self, group: &str) -> Self {
        self.group = group.to_string();
        self
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn schema(mut self, schema: &'static Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn attr(mut self, attr: AttrSchema) -> Self {
        self.attr_schema.push(attr);
        self
    }

    pub fn attrs(mut self, attrs: impl IntoIterator<Item = AttrSchema>) -> Self {
        self.attr_schema.extend(attrs);
        self
    }
}

/// How host supplied local components combine with the built-in set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MergeMode {
    /// Custom components are appended after the built-ins.
    Add,
    /// Only the custom components are available.
    #[default]
    Replace,
}

impl MergeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeMode::Add => "add",
            MergeMode::Replace => "replace",
        }
    }
}

impl Serialize for MergeMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MergeMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mode = Value::deserialize(deserializer)?;
        Ok(match mode.as_str() {
            Some("add") => MergeMode::Add,
            _ => MergeMode::Replace,
        })
    }
}

/// Host supplied local components.
#[derive(Clone, Debug, Default)]
pub struct CustomComponents {
    pub mode: MergeMode,
    pub configs: Vec<ComponentDescriptor>,
}

impl CustomComponents {
    pub fn new(mode: MergeMode) -> Self {
        Self {
            mode,
            configs: Vec::new(),
        }
    }

    pub fn with(mut self, descriptor: ComponentDescriptor) -> Self {
        self.configs.push(descriptor);
        self
    }

    /// Merge with `builtins` according to [`MergeMode`].
    pub fn merge_with<'a>(&'a self, builtins: &'a [ComponentDescriptor]) -> Vec<&'a ComponentDescriptor> {
        match self.mode {
            MergeMode::Add => builtins.iter().chain(self.configs.iter()).collect(),
            MergeMode::Replace => self.configs.iter().collect(),
        }
    }
}

/// Components of external libraries, addressed as `library::name`.
#[derive(Clone, Debug, Default)]
pub struct ExternalComponents {
    libraries: HashMap<String, HashMap<String, ComponentDescriptor>>,
}

impl ExternalComponents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `descriptor` in `library` under its `component_type`.
    pub fn insert(&mut self, library: &str, descriptor: ComponentDescriptor) {
        self.libraries
            .entry(library.to_string())
            .or_default()
            .insert(descriptor.component_type.clone(), descriptor);
    }

    pub fn with(mut self, library: &str, descriptor: ComponentDescriptor) -> Self {
        self.insert(library, descriptor);
        self
    }

    pub fn get(&self, library: &str, name: &str) -> Option<&ComponentDescriptor> {
        self.libraries.get(library)?.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}
