//! Spec layer: JSON schemas + validated in-memory structures.
//!
//! This module is intentionally separate from lookup and rendering.
//! It owns:
//! - PropType (tagged prop types + value checking)
//! - ComponentSpec and its props, events and slots
//! - Catalog (the authored document, validated into a Registry)

pub mod catalog;
pub mod component;
pub mod prop_type;

pub use catalog::Catalog;
pub use component::{ComponentSpec, PropSpec};
pub use prop_type::{FieldSpec, PropType};
