//! Catalog document (components.json) and its structural validation.
//!
//! JSON shape:
//! {
//!   "components": [
//!     {
//!       "name": "Button",                    // PascalCase, unique
//!       "description": "...",                // optional
//!       "props": [
//!         { "name": "size", "type": { "kind": "enum", "values": ["small", "large"] }, "default": "small" }
//!       ],
//!       "events": [{ "name": "click", "payload": "MouseEvent" }],
//!       "slots": [{ "name": "default", "scope": [] }]
//!     },
//!     ...
//!   ]
//! }
//!
//! We check naming, uniqueness, enum literal sets and defaults, then hand the
//! contracts to a Registry keyed by name.

use crate::error::{ContractError, Result, Violation};
use crate::registry::Registry;
use crate::spec::{ComponentSpec, FieldSpec, PropSpec, PropType};

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../../catalog/components.json");

const COMPONENT_NAME_RE: &str = r"^[A-Z][A-Za-z0-9]*$";
const PROP_NAME_RE: &str = r"^[a-z][A-Za-z0-9]*$";
// click, row-click, update:modelValue
const EVENT_NAME_RE: &str = r"^[a-z][A-Za-z0-9]*(?:-[a-z0-9]+)*(?::[a-z][A-Za-z0-9]*)?$";
const SLOT_NAME_RE: &str = r"^[a-z][a-z0-9]*(?:-[a-z0-9]+)*$";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub components: Vec<ComponentSpec>,
}

struct NamingRules {
    component: Regex,
    prop: Regex,
    event: Regex,
    slot: Regex,
}

impl NamingRules {
    fn compile() -> Result<Self> {
        Ok(Self {
            component: Regex::new(COMPONENT_NAME_RE)?,
            prop: Regex::new(PROP_NAME_RE)?,
            event: Regex::new(EVENT_NAME_RE)?,
            slot: Regex::new(SLOT_NAME_RE)?,
        })
    }
}

fn invalid(msg: impl Into<String>) -> ContractError {
    ContractError::Catalog(msg.into())
}

impl Catalog {
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| invalid(format!("cannot parse catalog: {e}")))
    }

    /// Validate every contract and build the registry.
    ///
    /// Phases:
    /// 1) Component names: pattern + uniqueness.
    /// 2) Per component: props, events and slots (names, types, defaults).
    /// 3) Index by name.
    pub fn validate_and_build(self) -> Result<Registry> {
        let rules = NamingRules::compile()?;

        if self.components.is_empty() {
            return Err(invalid("catalog contains no components"));
        }

        let mut components: BTreeMap<String, ComponentSpec> = BTreeMap::new();
        for component in self.components {
            if !rules.component.is_match(&component.name) {
                return Err(invalid(format!(
                    "component name {:?} must be PascalCase",
                    component.name
                )));
            }
            if components.contains_key(&component.name) {
                return Err(invalid(format!(
                    "duplicate component name: {}",
                    component.name
                )));
            }

            validate_component(&component, &rules)?;
            tracing::trace!(
                component = %component.name,
                props = component.props.len(),
                events = component.events.len(),
                slots = component.slots.len(),
                "contract accepted"
            );
            components.insert(component.name.clone(), component);
        }

        Ok(Registry::from_components(components))
    }
}

fn validate_component(component: &ComponentSpec, rules: &NamingRules) -> Result<()> {
    let name = &component.name;

    let mut seen = BTreeSet::new();
    for prop in &component.props {
        if !rules.prop.is_match(&prop.name) {
            return Err(invalid(format!(
                "{name}: prop name {:?} must be camelCase",
                prop.name
            )));
        }
        if !seen.insert(prop.name.as_str()) {
            return Err(invalid(format!("{name}: duplicate prop {}", prop.name)));
        }
        validate_prop(name, prop, rules)?;
    }

    let mut seen = BTreeSet::new();
    for event in &component.events {
        if !rules.event.is_match(&event.name) {
            return Err(invalid(format!(
                "{name}: malformed event name {:?}",
                event.name
            )));
        }
        if !seen.insert(event.name.as_str()) {
            return Err(invalid(format!("{name}: duplicate event {}", event.name)));
        }
    }

    let mut seen = BTreeSet::new();
    for slot in &component.slots {
        if !rules.slot.is_match(&slot.name) {
            return Err(invalid(format!(
                "{name}: slot name {:?} must be kebab-case",
                slot.name
            )));
        }
        if !seen.insert(slot.name.as_str()) {
            return Err(invalid(format!("{name}: duplicate slot {}", slot.name)));
        }
        let mut vars = BTreeSet::new();
        for var in &slot.scope {
            if !vars.insert(var.as_str()) {
                return Err(invalid(format!(
                    "{name}: slot {} exposes {var} twice",
                    slot.name
                )));
            }
        }
    }

    Ok(())
}

fn validate_prop(component: &str, prop: &PropSpec, rules: &NamingRules) -> Result<()> {
    let at = format!("{component}.{}", prop.name);
    validate_type(&at, &prop.ty, rules)?;

    if let Some(default) = &prop.default {
        if prop.required {
            return Err(invalid(format!(
                "{at}: required prop cannot declare a default"
            )));
        }

        let mut out: Vec<Violation> = Vec::new();
        prop.ty.check(&prop.name, &prop.name, default, &mut out);
        if !out.is_empty() {
            let reasons: Vec<String> = out.iter().map(Violation::to_string).collect();
            return Err(invalid(format!(
                "{at}: default does not match its type ({})",
                reasons.join("; ")
            )));
        }
    }

    Ok(())
}

/// Structural checks on a type, recursing into array item fields.
fn validate_type(at: &str, ty: &PropType, rules: &NamingRules) -> Result<()> {
    match ty {
        PropType::Enum { values } => {
            if values.is_empty() {
                return Err(invalid(format!("{at}: enum must list at least one value")));
            }
            let mut seen = BTreeSet::new();
            for v in values {
                if v.is_empty() {
                    return Err(invalid(format!("{at}: enum values cannot be empty")));
                }
                if !seen.insert(v.as_str()) {
                    return Err(invalid(format!("{at}: duplicate enum value {v:?}")));
                }
            }
        }
        PropType::ArrayOf { fields } => {
            let mut seen = BTreeSet::new();
            for FieldSpec { name, ty, .. } in fields {
                if !rules.prop.is_match(name) {
                    return Err(invalid(format!(
                        "{at}: item field {name:?} must be camelCase"
                    )));
                }
                if !seen.insert(name.as_str()) {
                    return Err(invalid(format!("{at}: duplicate item field {name}")));
                }
                validate_type(&format!("{at}[].{name}"), ty, rules)?;
            }
        }
        PropType::String | PropType::Number | PropType::Boolean | PropType::Object => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn build(doc: Value) -> Result<Registry> {
        let catalog: Catalog = serde_json::from_value(doc).unwrap();
        catalog.validate_and_build()
    }

    fn catalog_error(doc: Value) -> String {
        match build(doc) {
            Err(ContractError::Catalog(msg)) => msg,
            other => panic!("expected catalog error, got {other:?}"),
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let registry = Catalog::builtin().unwrap().validate_and_build().unwrap();
        let names: Vec<&str> = registry.component_names().collect();
        assert_eq!(names, vec!["Button", "Input", "Modal", "Select", "Table"]);
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(
            catalog_error(json!({"components": []})),
            "catalog contains no components"
        );
    }

    #[test]
    fn rejects_duplicate_components() {
        let msg = catalog_error(json!({"components": [{"name": "Card"}, {"name": "Card"}]}));
        assert_eq!(msg, "duplicate component name: Card");
    }

    #[test]
    fn rejects_duplicate_props() {
        let msg = catalog_error(json!({"components": [{
            "name": "Card",
            "props": [
                {"name": "title", "type": {"kind": "string"}},
                {"name": "title", "type": {"kind": "number"}}
            ]
        }]}));
        assert_eq!(msg, "Card: duplicate prop title");
    }

    #[test]
    fn rejects_duplicate_events_and_slots() {
        let msg = catalog_error(json!({"components": [{
            "name": "Card",
            "events": [{"name": "close"}, {"name": "close"}]
        }]}));
        assert_eq!(msg, "Card: duplicate event close");

        let msg = catalog_error(json!({"components": [{
            "name": "Card",
            "slots": [{"name": "footer"}, {"name": "footer"}]
        }]}));
        assert_eq!(msg, "Card: duplicate slot footer");
    }

    #[test]
    fn rejects_empty_or_repeated_enum_literals() {
        let msg = catalog_error(json!({"components": [{
            "name": "Card",
            "props": [{"name": "tone", "type": {"kind": "enum", "values": []}}]
        }]}));
        assert_eq!(msg, "Card.tone: enum must list at least one value");

        let msg = catalog_error(json!({"components": [{
            "name": "Card",
            "props": [{"name": "tone", "type": {"kind": "enum", "values": ["a", "a"]}}]
        }]}));
        assert_eq!(msg, "Card.tone: duplicate enum value \"a\"");
    }

    #[test]
    fn rejects_default_outside_enum() {
        let msg = catalog_error(json!({"components": [{
            "name": "Card",
            "props": [{
                "name": "tone",
                "type": {"kind": "enum", "values": ["light", "dark"]},
                "default": "neon"
            }]
        }]}));
        assert!(msg.starts_with("Card.tone: default does not match its type"), "{msg}");
    }

    #[test]
    fn rejects_required_prop_with_default() {
        let msg = catalog_error(json!({"components": [{
            "name": "Card",
            "props": [{"name": "title", "type": {"kind": "string"}, "required": true, "default": "x"}]
        }]}));
        assert_eq!(msg, "Card.title: required prop cannot declare a default");
    }

    #[test]
    fn rejects_bad_names() {
        assert!(catalog_error(json!({"components": [{"name": "card"}]})).contains("PascalCase"));

        let msg = catalog_error(json!({"components": [{
            "name": "Card",
            "props": [{"name": "Title", "type": {"kind": "string"}}]
        }]}));
        assert!(msg.contains("camelCase"), "{msg}");

        let msg = catalog_error(json!({"components": [{
            "name": "Card",
            "events": [{"name": "Close"}]
        }]}));
        assert!(msg.contains("malformed event name"), "{msg}");
    }

    #[test]
    fn accepts_framework_event_names() {
        let registry = build(json!({"components": [{
            "name": "Card",
            "events": [{"name": "click"}, {"name": "row-click"}, {"name": "update:modelValue"}]
        }]}))
        .unwrap();
        assert_eq!(registry.get_spec("Card").unwrap().events.len(), 3);
    }

    #[test]
    fn rejects_duplicate_item_fields() {
        let msg = catalog_error(json!({"components": [{
            "name": "List",
            "props": [{
                "name": "items",
                "type": {"kind": "array_of", "fields": [
                    {"name": "id", "type": {"kind": "string"}},
                    {"name": "id", "type": {"kind": "number"}}
                ]}
            }]
        }]}));
        assert_eq!(msg, "List.items: duplicate item field id");
    }

    #[test]
    fn unparsable_document_is_a_catalog_error() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ContractError::Catalog(_)));
    }
}
