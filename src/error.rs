//! Error types for registry lookups, config validation and catalog loading.

use std::fmt;
use thiserror::Error;

/// One offending value found while validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Top-level prop (or slot) the problem belongs to.
    pub prop: String,
    /// Full location of the offending value, e.g. `options[1].value`.
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(prop: &str, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            prop: prop.to_string(),
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

#[derive(Error, Debug)]
pub enum ContractError {
    /// The requested component is not registered.
    #[error("component not found: {name}")]
    NotFound { name: String },

    /// A configuration broke one or more prop contracts. Every violation is listed.
    #[error("invalid configuration for {component}: {}", join_violations(.violations))]
    Validation {
        component: String,
        violations: Vec<Violation>,
    },

    #[error("component {component} does not declare event {event:?}")]
    UnknownEvent { component: String, event: String },

    /// The catalog document itself is malformed.
    #[error("invalid catalog: {0}")]
    Catalog(String),

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

impl ContractError {
    /// Violations carried by a validation error; empty for every other kind.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ContractError::Validation { violations, .. } => violations,
            _ => &[],
        }
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, ContractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_every_violation() {
        let err = ContractError::Validation {
            component: "Button".to_string(),
            violations: vec![
                Violation::new("variant", "variant", "expected one of [primary], got \"huge\""),
                Violation::new("disabled", "disabled", "expected boolean, got \"yes\""),
            ],
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration for Button: variant: expected one of [primary], got \"huge\"; \
             disabled: expected boolean, got \"yes\""
        );
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn non_validation_errors_have_no_violations() {
        let err = ContractError::NotFound {
            name: "Tooltip".to_string(),
        };
        assert_eq!(err.to_string(), "component not found: Tooltip");
        assert!(err.violations().is_empty());
    }
}
