//! Render projections consumed by the chart and the checkbox tree

use crate::node::{FlatNode, NodeId, TreeNode};
use crate::traverse::TraversalOrder;
use crate::tree::PublicationTree;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Checkbox-tree node shape expected by the selection UI
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DataNode {
    pub key: String,
    pub title: String,
    pub children: Vec<DataNode>,
    /// Only grouping levels can become drill-down roots
    pub selectable: bool,
}

impl PublicationTree {
    /// Flat level-order array for the partition/hierarchy layout
    ///
    /// The first entry is the root-of-array and carries `parent: None`
    /// regardless of where the generation was drilled down from.
    pub fn flatten(&self) -> Vec<FlatNode> {
        let mut array = Vec::with_capacity(self.node_count());
        for id in self.walk(TraversalOrder::PreOrder) {
            if let Some(node) = self.get(id) {
                let mut flat = FlatNode::from_node(node);
                if id == self.root() {
                    flat.parent = None;
                }
                array.push(flat);
            }
        }
        array
    }

    /// Point projection of a single node by string id (hover highlight)
    pub fn to_flat(&self, id: &str) -> Option<FlatNode> {
        self.node(id).map(FlatNode::from_node)
    }

    /// Nested checkbox-tree projection of the whole generation
    pub fn data_nodes(&self) -> DataNode {
        self.to_data_node(self.root_node(), self.root())
    }

    fn to_data_node(&self, node: &TreeNode, id: NodeId) -> DataNode {
        // Depth is bounded by the hierarchy (four levels), so recursion is fine
        let children = self
            .children(id)
            .filter_map(|child| self.get(child).map(|n| self.to_data_node(n, child)))
            .collect();
        DataNode {
            key: node.id.clone(),
            title: node.name.clone(),
            children,
            selectable: !node.is_leaf(),
        }
    }
}
