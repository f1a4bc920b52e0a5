//! Component contract registry: name lookup and config validation.

use crate::error::{ContractError, Result, Violation};
use crate::spec::{Catalog, ComponentSpec};

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Read-only table of validated component contracts, keyed by name.
#[derive(Debug, Clone)]
pub struct Registry {
    components: BTreeMap<String, ComponentSpec>,
}

impl Registry {
    /// Only `Catalog::validate_and_build` constructs registries.
    pub(crate) fn from_components(components: BTreeMap<String, ComponentSpec>) -> Self {
        Self { components }
    }

    pub fn builtin() -> Result<Self> {
        Catalog::builtin()?.validate_and_build()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Registered names, sorted.
    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn components(&self) -> impl Iterator<Item = &ComponentSpec> {
        self.components.values()
    }

    pub fn get_spec(&self, name: &str) -> Result<&ComponentSpec> {
        self.components
            .get(name)
            .ok_or_else(|| ContractError::NotFound {
                name: name.to_string(),
            })
    }

    /// Check `config` against the component's props and fill in defaults.
    ///
    /// - omitted prop: required => violation; otherwise its default, if any
    /// - `null` on a required prop: reported as missing
    /// - anything else, `null` included: checked against the prop type
    ///
    /// Undeclared keys fall through untouched after the declared props.
    /// All violations are collected before failing.
    pub fn validate_config(&self, name: &str, config: &Map<String, Value>) -> Result<Map<String, Value>> {
        let spec = self.get_spec(name)?;

        let mut out = Map::new();
        let mut violations: Vec<Violation> = Vec::new();

        for prop in &spec.props {
            match config.get(&prop.name) {
                None | Some(Value::Null) if prop.required => {
                    violations.push(Violation::new(
                        &prop.name,
                        prop.name.as_str(),
                        "missing required prop",
                    ));
                }
                None => {
                    if let Some(default) = &prop.default {
                        out.insert(prop.name.clone(), default.clone());
                    }
                }
                Some(value) => {
                    prop.ty.check(&prop.name, &prop.name, value, &mut violations);
                    out.insert(prop.name.clone(), value.clone());
                }
            }
        }

        if !violations.is_empty() {
            tracing::debug!(
                component = name,
                count = violations.len(),
                "config rejected"
            );
            return Err(ContractError::Validation {
                component: name.to_string(),
                violations,
            });
        }

        for (key, value) in config {
            if !spec.props.iter().any(|p| &p.name == key) {
                tracing::debug!(component = name, key = %key, "undeclared key passed through");
                out.insert(key.clone(), value.clone());
            }
        }

        Ok(out)
    }

    /// Fail if any provided slot name is not declared by the component.
    pub fn validate_slots<'a, I>(&self, name: &str, provided: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let spec = self.get_spec(name)?;

        let violations: Vec<Violation> = provided
            .into_iter()
            .filter(|slot| spec.slot(slot).is_none())
            .map(|slot| Violation::new(slot, format!("#{slot}"), "undeclared slot"))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ContractError::Validation {
                component: name.to_string(),
                violations,
            })
        }
    }

    /// Validate a config and the slots a template fills in one pass.
    ///
    /// Config and slot violations land in the same error, config first.
    pub fn validate_usage<'a, I>(
        &self,
        name: &str,
        config: &Map<String, Value>,
        slots: I,
    ) -> Result<Map<String, Value>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        match (self.validate_config(name, config), self.validate_slots(name, slots)) {
            (Ok(out), Ok(())) => Ok(out),
            (Err(err), Ok(())) | (Ok(_), Err(err)) => Err(err),
            (
                Err(ContractError::Validation {
                    component,
                    mut violations,
                }),
                Err(ContractError::Validation {
                    violations: slot_violations,
                    ..
                }),
            ) => {
                violations.extend(slot_violations);
                Err(ContractError::Validation {
                    component,
                    violations,
                })
            }
            (Err(err), Err(_)) => Err(err),
        }
    }
}
