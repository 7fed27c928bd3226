//! Arena storage for one tree generation

use crate::node::{NodeId, TreeNode};
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One generation of the publication hierarchy
///
/// Holds the arena of nodes plus the string-id index for O(1) lookups. The
/// index is rebuilt wholesale with each generation and never carries stale
/// entries. Derived trees (filter results) are brand-new generations; node
/// objects are never shared between generations, so a reader holding a
/// previous generation never observes a half-updated tree.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PublicationTree {
    /// Arena storage; `NodeId` values index into this
    nodes: Vec<TreeNode>,
    /// String id -> arena index, one entry per node in this generation
    index: HashMap<String, NodeId>,
}

impl PublicationTree {
    /// Create a generation seeded with its root node
    pub(crate) fn with_root(root: TreeNode) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        };
        tree.push(root);
        tree
    }

    /// Append a node to the arena and index its id
    pub(crate) fn push(&mut self, node: TreeNode) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.index.insert(node.id.clone(), id);
        self.nodes.push(node);
        id
    }

    /// Append `child` to `parent`'s child list
    ///
    /// A no-op for leaf parents; builders only call this on group nodes.
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        if let Some(children) = self
            .nodes
            .get_mut(parent.get())
            .and_then(|n| n.children.as_mut())
        {
            children.push(child);
        }
    }

    /// The root of this generation (always present)
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The root node itself
    pub fn root_node(&self) -> &TreeNode {
        &self.nodes[NodeId::ROOT.get()]
    }

    /// Get a node by its arena id
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.get())
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        self.nodes.get_mut(id.get())
    }

    /// Resolve a string id to this generation's arena id
    pub fn lookup(&self, id: &str) -> Option<NodeId> {
        self.index.get(id).copied()
    }

    /// Get a node by its string id
    pub fn node(&self, id: &str) -> Option<&TreeNode> {
        self.get(self.lookup(id)?)
    }

    /// Check whether a string id exists in this generation
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Count of nodes in this generation
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All string ids indexed by this generation
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Iterate over the children of a node
    ///
    /// Empty for leaves and invalid ids.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.get(id)
            .and_then(|n| n.children.as_deref())
            .unwrap_or(&[])
            .iter()
            .copied()
    }

    /// Sort every node's child list by display name
    ///
    /// Gives the render projections a deterministic order regardless of the
    /// record order the tree was built from.
    pub(crate) fn sort_children_by_name(&mut self) {
        for idx in 0..self.nodes.len() {
            let Some(mut children) = self.nodes[idx].children.clone() else {
                continue;
            };
            children.sort_by(|&a, &b| self.nodes[a.get()].name.cmp(&self.nodes[b.get()].name));
            self.nodes[idx].children = Some(children);
        }
    }
}
