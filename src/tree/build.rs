use crate::classify::Classification;
use crate::spec::NodeAttrs;
use crate::tree::{CategoryNode, NodeId};
use anyhow::bail;
use indexmap::IndexSet;

#[derive(Debug, Clone)]
pub struct CategoryTree {
    nodes: Vec<CategoryNode>,
    root: NodeId,
    levels: Vec<String>,
}

impl CategoryTree {
    /// An empty tree whose root takes the attributes registered under its own
    /// name, so they reach every resource.
    pub fn new(root_name: &str, levels: Vec<String>, attrs: &NodeAttrs) -> Self {
        Self {
            nodes: vec![CategoryNode::new(root_name, None, attrs.get(root_name))],
            root: NodeId(0),
            levels,
        }
    }

    /// Insert every filename, in order, and check the resulting shape.
    pub fn build(
        root_name: &str,
        classification: &Classification,
        filenames: &[String],
        attrs: &NodeAttrs,
    ) -> anyhow::Result<Self> {
        if filenames.is_empty() {
            bail!("no filenames to place under {}", root_name);
        }

        let levels = classification.level_names().map(str::to_string).collect();
        let mut tree = Self::new(root_name, levels, attrs);
        for filename in filenames {
            tree.insert(filename, classification, attrs)?;
        }
        tree.check_shape()?;

        log::info!(
            "built tree '{}' over {} levels: {} nodes, {} leaves, {} filenames",
            root_name,
            tree.levels().len(),
            tree.len(),
            tree.nodes.iter().filter(|n| !n.filenames().is_empty()).count(),
            filenames.len()
        );
        Ok(tree)
    }

    /// Walk the levels in order, descending into (or creating) the child named
    /// by each level's assignment, then file `filename` on the node reached.
    ///
    /// Every level must already hold an assignment for `filename`.
    pub fn insert(
        &mut self,
        filename: &str,
        classification: &Classification,
        attrs: &NodeAttrs,
    ) -> anyhow::Result<NodeId> {
        if classification.levels().len() != self.levels.len() {
            bail!(
                "classification has {} levels, tree was built for {}",
                classification.levels().len(),
                self.levels.len()
            );
        }

        let mut cursor = self.root;
        for level in classification.levels() {
            let Some(name) = level.node_for(filename) else {
                bail!(
                    "filename {} was not classified at level '{}'",
                    filename,
                    level.level()
                );
            };
            cursor = self.resolve_or_create_child(cursor, name, attrs.get(name));
        }
        self.nodes[cursor.0].insert_leaf(filename);
        Ok(cursor)
    }

    /// The child of `parent` called `name`, created with `attrs` if absent.
    /// An existing child keeps the attributes it was created with.
    pub fn resolve_or_create_child(
        &mut self,
        parent: NodeId,
        name: &str,
        attrs: &[String],
    ) -> NodeId {
        if let Some(id) = self.nodes[parent.0].child(name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(CategoryNode::new(name, Some(parent), attrs));
        self.nodes[parent.0].add_child(name, id);
        id
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &CategoryNode {
        &self.nodes[id.0]
    }

    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Parent, grandparent, ... up to and including the root. Excludes `id`.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.node(id).parent(),
        }
    }

    /// Union of the attributes of `id` and all its ancestors, duplicates
    /// removed, ordered by first occurrence from `id` upward.
    pub fn effective_attrs(&self, id: NodeId) -> Vec<&str> {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .flat_map(|n| self.node(n).attrs().iter().map(String::as_str))
            .collect::<IndexSet<&str>>()
            .into_iter()
            .collect()
    }

    /// Verify the root is internal and every other node is purely internal
    /// or purely a leaf.
    pub fn check_shape(&self) -> anyhow::Result<()> {
        let root = self.node(self.root);
        if root.child_count() == 0 || !root.filenames().is_empty() {
            bail!(
                "root {} must have children and no filenames (children: {}, filenames: {})",
                root.name(),
                root.child_count(),
                root.filenames().len()
            );
        }

        for (idx, node) in self.nodes.iter().enumerate().skip(1) {
            let has_children = node.child_count() > 0;
            let has_filenames = !node.filenames().is_empty();
            if has_children == has_filenames {
                bail!(
                    "node {} (#{}) is neither purely internal nor purely a leaf \
                     (children: {}, filenames: {})",
                    node.name(),
                    idx,
                    node.child_count(),
                    node.filenames().len()
                );
            }
        }
        Ok(())
    }
}

pub struct Ancestors<'a> {
    tree: &'a CategoryTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.tree.node(id).parent();
        Some(id)
    }
}
