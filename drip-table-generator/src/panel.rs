//! The component panel: which components can be added, grouped by section.

use drip_table::components::BUILTIN_COMPONENTS;
use drip_table::{ComponentDescriptor, CustomComponents};

/// Display name of component types missing from the panel.
pub const UNKNOWN_COMPONENT: &str = "Unknown component";

const GROUP_SUFFIX: &str = " Components";
const TITLE_SUFFIX: &str = " Component";

/// Components available in the generator, in panel order.
#[derive(Clone, Debug)]
pub struct ComponentPanel<'a> {
    components: Vec<&'a ComponentDescriptor>,
}

impl ComponentPanel<'static> {
    /// Panel with the built-in components only.
    pub fn builtin() -> Self {
        Self {
            components: BUILTIN_COMPONENTS.iter().collect(),
        }
    }
}

impl<'a> ComponentPanel<'a> {
    /// Panel combining the built-ins with `custom`, following its merge mode.
    pub fn new(custom: Option<&'a CustomComponents>) -> Self {
        match custom {
            None => ComponentPanel::builtin(),
            Some(custom) => Self {
                components: custom.merge_with(&BUILTIN_COMPONENTS),
            },
        }
    }

    pub fn components(&self) -> &[&'a ComponentDescriptor] {
        &self.components
    }

    /// Distinct panel sections in order of first appearance.
    pub fn groups(&self) -> Vec<&'a str> {
        let mut groups: Vec<&'a str> = Vec::new();
        for descriptor in self.components.iter().copied() {
            if !groups.contains(&descriptor.group.as_str()) {
                groups.push(descriptor.group.as_str());
            }
        }
        groups
    }

    pub fn components_in(&self, group: &str) -> Vec<&'a ComponentDescriptor> {
        self.components
            .iter()
            .copied()
            .filter(|descriptor| descriptor.group == group)
            .collect()
    }

    pub fn find(&self, component_type: &str) -> Option<&'a ComponentDescriptor> {
        self.components
            .iter()
            .copied()
            .find(|descriptor| descriptor.component_type == component_type)
    }

    /// Title of `component_type`, or [`UNKNOWN_COMPONENT`].
    pub fn component_name(&self, component_type: &str) -> &'a str {
        self.find(component_type)
            .map_or(UNKNOWN_COMPONENT, |descriptor| descriptor.title.as_str())
    }
}

/// Section heading without the trailing " Components".
pub fn group_label(group: &str) -> &str {
    strip_label(group, GROUP_SUFFIX)
}

/// Button label without the trailing " Component".
pub fn component_label(descriptor: &ComponentDescriptor) -> &str {
    strip_label(&descriptor.title, TITLE_SUFFIX)
}

fn strip_label<'s>(label: &'s str, suffix: &str) -> &'s str {
    match label.strip_suffix(suffix) {
        Some(short) if !short.is_empty() => short,
        _ => label,
    }
}

#[cfg(test)]
mod tests {
    use drip_table::components::{GROUP_BASIC, GROUP_CONTAINER};
    use drip_table::MergeMode;

    use super::*;

    fn custom(mode: MergeMode) -> CustomComponents {
        CustomComponents::new(mode)
            .with(ComponentDescriptor::new("rating", "Rating Component").group("Custom Components"))
    }

    #[test]
    fn test_builtin_groups() {
        let panel = ComponentPanel::builtin();
        let groups = panel.groups();
        assert_eq!(groups.first(), Some(&GROUP_BASIC));
        assert_eq!(groups.last(), Some(&GROUP_CONTAINER));
        assert_eq!(panel.components_in(GROUP_CONTAINER).len(), 1);
        assert_eq!(group_label(GROUP_BASIC), "Basic");
    }

    #[test]
    fn test_merge_modes() {
        let add = custom(MergeMode::Add);
        let panel = ComponentPanel::new(Some(&add));
        assert_eq!(panel.components().len(), BUILTIN_COMPONENTS.len() + 1);
        assert_eq!(panel.groups().last(), Some(&"Custom Components"));
        assert_eq!(panel.component_name("text"), "Text Component");

        let replace = custom(MergeMode::Replace);
        let panel = ComponentPanel::new(Some(&replace));
        assert_eq!(panel.groups(), ["Custom Components"]);
        assert_eq!(panel.component_name("text"), UNKNOWN_COMPONENT);
        assert_eq!(component_label(panel.components()[0]), "Rating");
    }

    #[test]
    fn test_labels_keep_bare_suffix() {
        assert_eq!(strip_label(" Component", TITLE_SUFFIX), " Component");
        assert_eq!(strip_label("Custom", TITLE_SUFFIX), "Custom");
    }
}
