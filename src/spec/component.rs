//! Component contracts: props, events and slots of one UI component.

use crate::spec::PropType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Unique registry key, e.g. `Button`.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Declaration order is kept; validated configs follow it.
    #[serde(default)]
    pub props: Vec<PropSpec>,

    #[serde(default)]
    pub events: Vec<EventSpec>,

    #[serde(default)]
    pub slots: Vec<SlotSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropSpec {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: PropType,

    /// Inserted when the prop is omitted. A JSON `null` here means no default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSpec {
    /// Event name as emitted, e.g. `click` or `update:modelValue`.
    pub name: String,

    /// Free-form description of the payload shape.
    #[serde(default = "no_payload")]
    pub payload: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotSpec {
    pub name: String,

    /// Variables the component exposes to the slot content.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scope: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn no_payload() -> String {
    "void".to_string()
}

impl ComponentSpec {
    pub fn event(&self, name: &str) -> Option<&EventSpec> {
        self.events.iter().find(|e| e.name == name)
    }

    pub fn slot(&self, name: &str) -> Option<&SlotSpec> {
        self.slots.iter().find(|s| s.name == name)
    }
}
