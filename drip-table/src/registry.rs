//! Component lookup.

use crate::component::{ComponentDescriptor, ComponentId, CustomComponents, ExternalComponents};
use crate::components::BUILTIN_COMPONENTS;

/// Maps component identifiers to descriptors.
///
/// Local identifiers are searched in the merged built-in and custom list, first match wins.
/// Namespaced identifiers (`library::name`) are only searched in the external libraries.
#[derive(Clone, Debug)]
pub struct ComponentRegistry {
    local: Vec<ComponentDescriptor>,
    external: ExternalComponents,
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ComponentRegistry {
    /// Build a registry from the built-ins and optional host components.
    ///
    /// Without custom components only the built-ins are available.
    pub fn new(custom: Option<&CustomComponents>) -> Self {
        let local: Vec<ComponentDescriptor> = match custom {
            None => BUILTIN_COMPONENTS.to_vec(),
            Some(custom) => custom
                .merge_with(&BUILTIN_COMPONENTS)
                .into_iter()
                .cloned()
                .collect(),
        };

        log::debug!(
            "component registry with {} local components ({})",
            local.len(),
            custom.map_or("built-in", |custom| custom.mode.as_str()),
        );

        Self {
            local,
            external: ExternalComponents::new(),
        }
    }

    pub fn with_external(mut self, external: ExternalComponents) -> Self {
        self.external = external;
        self
    }

    pub fn local(&self) -> &[ComponentDescriptor] {
        &self.local
    }

    pub fn external(&self) -> &ExternalComponents {
        &self.external
    }

    pub fn resolve(&self, id: &ComponentId) -> Option<&ComponentDescriptor> {
        match id {
            ComponentId::Local(name) => self
                .local
                .iter()
                .find(|descriptor| descriptor.component_type == *name),
            ComponentId::External { library, name } => self.external.get(library, name),
        }
    }

    pub fn resolve_str(&self, id: &str) -> Option<&ComponentDescriptor> {
        self.resolve(&ComponentId::parse(id))
    }
}

#[cfg(test)]
mod tests {
    use drip_table_schema::{ObjectSchema, Schema};

    use super::*;
    use crate::component::MergeMode;

    static SAMPLE_SCHEMA: Schema = ObjectSchema::new("Sample.", &[]).schema();

    fn sample() -> ComponentDescriptor {
        ComponentDescriptor::new("sample", "Sample").schema(&SAMPLE_SCHEMA)
    }

    #[test]
    fn test_merge_add() {
        let custom = CustomComponents::new(MergeMode::Add).with(sample());
        let registry = ComponentRegistry::new(Some(&custom));
        assert!(registry.resolve_str("text").is_some());
        assert!(registry.resolve_str("sample").is_some());
        assert_eq!(registry.local().len(), BUILTIN_COMPONENTS.len() + 1);
    }

    #[test]
    fn test_merge_replace() {
        let custom = CustomComponents::new(MergeMode::Replace).with(sample());
        let registry = ComponentRegistry::new(Some(&custom));
        assert!(registry.resolve_str("text").is_none());
        assert!(registry.resolve_str("group").is_none());
        assert!(registry.resolve_str("sample").is_some());
    }

    #[test]
    fn test_builtin_wins_over_custom_duplicate() {
        let custom = CustomComponents::new(MergeMode::Add)
            .with(ComponentDescriptor::new("text", "Shadowed text"));
        let registry = ComponentRegistry::new(Some(&custom));
        assert_eq!(registry.resolve_str("text").unwrap().title, "Text Component");
    }

    #[test]
    fn test_namespaced_lookup() {
        let registry = ComponentRegistry::default()
            .with_external(ExternalComponents::new().with("libA", sample()));

        assert_eq!(
            registry.resolve_str("libA::sample").unwrap().component_type,
            "sample"
        );
        assert!(registry.resolve_str("libA").is_none());
        assert!(registry.resolve_str("libB::sample").is_none());
        assert!(registry.resolve_str("sample").is_none());
    }
}
