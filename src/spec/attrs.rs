//! Node attributes (node_attrs.json): node name -> attribute tokens.
//!
//! JSON shape:
//! {
//!   "Alignment": ["displayMode=\"EXPANDED\""],
//!   "Base":      ["autoscale=\"true\""]
//! }
//!
//! Tokens are opaque and emitted verbatim on every resource beneath the node.

use anyhow::Context;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct NodeAttrs {
    pub by_node: IndexMap<String, Vec<String>>,
}

impl NodeAttrs {
    pub fn from_path(path: &str) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read node attributes file {}", path))?;
        Self::from_json_str(&text).with_context(|| format!("parse node attributes file {}", path))
    }

    pub fn from_json_str(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Attributes registered for `node`; empty when there are none.
    pub fn get(&self, node: &str) -> &[String] {
        self.by_node.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}
