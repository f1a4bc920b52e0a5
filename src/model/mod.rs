//! Documentation model: flatten registry contracts into render-ready views.

use crate::registry::Registry;
use crate::spec::{ComponentSpec, PropType};

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PropView {
    pub name: String,
    /// Human-readable type, e.g. `"small" | "large"`.
    pub type_label: String,
    /// Default rendered as JSON text.
    pub default: Option<String>,
    pub required: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventView {
    pub name: String,
    pub payload: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotView {
    pub name: String,
    pub scope: Vec<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentView {
    pub name: String,
    pub description: Option<String>,
    pub props: Vec<PropView>,
    pub events: Vec<EventView>,
    pub slots: Vec<SlotView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsView {
    pub components: usize,
    pub props: usize,
    pub enum_props: usize,
    pub events: usize,
    pub slots: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogData {
    pub components: Vec<ComponentView>,
    pub totals: TotalsView,
}

/// Build documentation data. Components come out in name order; props,
/// events and slots keep declaration order.
pub fn build_catalog_data(registry: &Registry) -> CatalogData {
    let mut totals = TotalsView {
        components: 0,
        props: 0,
        enum_props: 0,
        events: 0,
        slots: 0,
    };

    let components: Vec<ComponentView> = registry
        .components()
        .map(|spec| {
            totals.components += 1;
            totals.props += spec.props.len();
            totals.enum_props += spec
                .props
                .iter()
                .filter(|p| matches!(p.ty, PropType::Enum { .. }))
                .count();
            totals.events += spec.events.len();
            totals.slots += spec.slots.len();
            component_view(spec)
        })
        .collect();

    CatalogData { components, totals }
}

fn component_view(spec: &ComponentSpec) -> ComponentView {
    ComponentView {
        name: spec.name.clone(),
        description: spec.description.clone(),
        props: spec
            .props
            .iter()
            .map(|p| PropView {
                name: p.name.clone(),
                type_label: p.ty.label(),
                default: p.default.as_ref().map(|d| d.to_string()),
                required: p.required,
                description: p.description.clone(),
            })
            .collect(),
        events: spec
            .events
            .iter()
            .map(|e| EventView {
                name: e.name.clone(),
                payload: e.payload.clone(),
                description: e.description.clone(),
            })
            .collect(),
        slots: spec
            .slots
            .iter()
            .map(|s| SlotView {
                name: s.name.clone(),
                scope: s.scope.clone(),
                description: s.description.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_cover_the_builtin_catalog() {
        let registry = Registry::builtin().unwrap();
        let data = build_catalog_data(&registry);

        assert_eq!(data.totals.components, 5);
        assert_eq!(data.components.len(), 5);
        let props: usize = data.components.iter().map(|c| c.props.len()).sum();
        assert_eq!(data.totals.props, props);
    }

    #[test]
    fn button_view_keeps_declaration_order() {
        let registry = Registry::builtin().unwrap();
        let data = build_catalog_data(&registry);
        let button = data
            .components
            .iter()
            .find(|c| c.name == "Button")
            .unwrap();

        let names: Vec<&str> = button.props.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["variant", "size", "disabled", "fullWidth", "type"]);
        assert_eq!(button.props[1].default.as_deref(), Some("\"medium\""));
        assert_eq!(button.props[2].type_label, "boolean");
    }
}
