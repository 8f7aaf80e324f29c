use std::collections::BTreeMap;

/// Index of a node in its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub struct CategoryNode {
    name: String,
    parent: Option<NodeId>,
    /// Keyed by name; BTreeMap iteration gives the emission order.
    children: BTreeMap<String, NodeId>,
    attrs: Vec<String>,
    /// Only set on leaves, in insertion order.
    filenames: Vec<String>,
}

impl CategoryNode {
    pub(crate) fn new(name: impl Into<String>, parent: Option<NodeId>, attrs: &[String]) -> Self {
        Self {
            name: name.into(),
            parent,
            children: BTreeMap::new(),
            attrs: attrs.to_vec(),
            filenames: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn attrs(&self) -> &[String] {
        &self.attrs
    }

    pub fn filenames(&self) -> &[String] {
        &self.filenames
    }

    pub fn child(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    /// Children in lexicographic name order.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.values().copied()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn add_child(&mut self, name: &str, id: NodeId) {
        self.children.insert(name.to_string(), id);
    }

    pub(crate) fn insert_leaf(&mut self, filename: &str) {
        debug_assert!(
            self.children.is_empty(),
            "filename {} added to internal node {}",
            filename,
            self.name
        );
        self.filenames.push(filename.to_string());
    }
}
