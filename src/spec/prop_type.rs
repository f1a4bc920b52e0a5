//! Prop types as a tagged variant, and per-value checking against them.
//!
//! JSON shape:
//! { "kind": "string" }
//! { "kind": "enum", "values": ["small", "medium", "large"] }
//! { "kind": "array_of", "fields": [{ "name": "label", "type": { "kind": "string" }, "required": true }] }

use crate::error::Violation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropType {
    String,
    Number,
    Boolean,
    /// Any JSON object, shape unchecked.
    Object,
    /// A string drawn from a fixed set of literals.
    Enum { values: Vec<String> },
    /// An array of objects. Declared item fields are checked; others pass.
    ArrayOf {
        #[serde(default)]
        fields: Vec<FieldSpec>,
    },
}

/// One field of an array item object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: PropType,

    #[serde(default)]
    pub required: bool,
}

impl PropType {
    /// Short label used in messages and documentation.
    pub fn label(&self) -> String {
        match self {
            PropType::String => "string".to_string(),
            PropType::Number => "number".to_string(),
            PropType::Boolean => "boolean".to_string(),
            PropType::Object => "object".to_string(),
            PropType::Enum { values } => values
                .iter()
                .map(|v| format!("{v:?}"))
                .collect::<Vec<_>>()
                .join(" | "),
            PropType::ArrayOf { fields } if fields.is_empty() => "array<object>".to_string(),
            PropType::ArrayOf { fields } => {
                let inner = fields
                    .iter()
                    .map(|f| {
                        let opt = if f.required { "" } else { "?" };
                        format!("{}{}: {}", f.name, opt, f.ty.label())
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("array<{{ {inner} }}>")
            }
        }
    }

    /// Check a value, pushing one violation per offending location.
    ///
    /// `null` matches no type.
    ///
    /// `prop` is the top-level prop being checked; `path` is where `value`
    /// sits beneath it.
    pub fn check(&self, prop: &str, path: &str, value: &Value, out: &mut Vec<Violation>) {
        match self {
            PropType::String => expect_kind(value.is_string(), self, prop, path, value, out),
            PropType::Number => expect_kind(value.is_number(), self, prop, path, value, out),
            PropType::Boolean => expect_kind(value.is_boolean(), self, prop, path, value, out),
            PropType::Object => expect_kind(value.is_object(), self, prop, path, value, out),
            PropType::Enum { values } => {
                let member = value
                    .as_str()
                    .map(|s| values.iter().any(|v| v == s))
                    .unwrap_or(false);
                if !member {
                    out.push(Violation::new(
                        prop,
                        path,
                        format!(
                            "expected one of [{}], got {}",
                            values.join(", "),
                            describe(value)
                        ),
                    ));
                }
            }
            PropType::ArrayOf { fields } => {
                let Some(items) = value.as_array() else {
                    out.push(Violation::new(
                        prop,
                        path,
                        format!("expected array of objects, got {}", describe(value)),
                    ));
                    return;
                };

                for (idx, item) in items.iter().enumerate() {
                    let item_path = format!("{path}[{idx}]");
                    let Some(obj) = item.as_object() else {
                        out.push(Violation::new(
                            prop,
                            item_path,
                            format!("expected object, got {}", describe(item)),
                        ));
                        continue;
                    };

                    for field in fields {
                        let field_path = format!("{item_path}.{}", field.name);
                        match obj.get(&field.name) {
                            None | Some(Value::Null) if field.required => {
                                out.push(Violation::new(
                                    prop,
                                    field_path,
                                    "missing required field",
                                ));
                            }
                            None => {}
                            Some(v) => field.ty.check(prop, &field_path, v, out),
                        }
                    }
                }
            }
        }
    }
}

fn expect_kind(
    ok: bool,
    ty: &PropType,
    prop: &str,
    path: &str,
    value: &Value,
    out: &mut Vec<Violation>,
) {
    if !ok {
        out.push(Violation::new(
            prop,
            path,
            format!("expected {}, got {}", ty.label(), describe(value)),
        ));
    }
}

/// Render a value for an error message without dumping whole objects.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("{s:?}"),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
