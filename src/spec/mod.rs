//! Spec layer: JSON schemas for the rule and attribute inputs.
//!
//! Kept separate from classification and rendering. Owns:
//! - rules.json (levels of pattern rules) and its validation
//! - node_attrs.json (display attributes per node name)

pub mod attrs;
pub mod rules;

pub use attrs::NodeAttrs;
pub use rules::RulesSpec;
