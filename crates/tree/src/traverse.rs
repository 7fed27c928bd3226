//! Lazy traversal over a tree generation

use smallvec::SmallVec;
use std::collections::{HashSet, VecDeque};

use crate::node::{NodeId, TreeNode};
use crate::tree::PublicationTree;

/// Traversal order for walking a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Level by level from the start node, parents before children
    ///
    /// This is the order the render projections depend on.
    PreOrder,
    /// Children fully visited, in child order, before the node itself
    PostOrder,
}

enum WalkerState {
    Pre(VecDeque<NodeId>),
    Post {
        stack: Vec<NodeId>,
        expanded: HashSet<NodeId>,
    },
}

/// Iterator over arena ids in a fixed traversal order
///
/// A fresh walker is created per call, so traversals are restartable and
/// never observe mutation.
pub struct TreeWalker<'a> {
    tree: &'a PublicationTree,
    state: WalkerState,
}

impl<'a> TreeWalker<'a> {
    fn new(tree: &'a PublicationTree, start: NodeId, order: TraversalOrder) -> Self {
        let state = match order {
            TraversalOrder::PreOrder => WalkerState::Pre(VecDeque::from([start])),
            TraversalOrder::PostOrder => WalkerState::Post {
                stack: vec![start],
                expanded: HashSet::new(),
            },
        };
        Self { tree, state }
    }
}

impl Iterator for TreeWalker<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        match &mut self.state {
            WalkerState::Pre(queue) => {
                let id = queue.pop_front()?;
                for child in tree.children(id) {
                    queue.push_back(child);
                }
                Some(id)
            }
            WalkerState::Post { stack, expanded } => {
                while let Some(&top) = stack.last() {
                    if expanded.contains(&top) {
                        stack.pop();
                        return Some(top);
                    }
                    expanded.insert(top);
                    // Push in reverse so children pop in child order
                    let children: Vec<_> = tree.children(top).collect();
                    for child in children.into_iter().rev() {
                        stack.push(child);
                    }
                }
                None
            }
        }
    }
}

/// Nearest-first ancestor iterator following `parent` id strings
///
/// Resolution goes through the generation's id index, so a chain can break
/// when an id from another generation is queried. That case stops the walk
/// with an error log instead of panicking; it is a recoverable
/// data-integrity warning, not a fatal defect.
pub struct Ancestors<'a> {
    tree: &'a PublicationTree,
    current: Option<&'a str>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let parent_id = self.current.take()?;
        match self.tree.node(parent_id) {
            Some(parent) => {
                self.current = parent.parent.as_deref();
                Some(parent)
            }
            None => {
                log::error!("failed parent traversal: node with id {parent_id} not found");
                None
            }
        }
    }
}

impl PublicationTree {
    /// Walk the whole generation in the given order
    pub fn walk(&self, order: TraversalOrder) -> TreeWalker<'_> {
        self.walk_from(self.root(), order)
    }

    /// Walk the subtree rooted at `start`
    pub fn walk_from(&self, start: NodeId, order: TraversalOrder) -> TreeWalker<'_> {
        TreeWalker::new(self, start, order)
    }

    /// Pre-order search for the first node satisfying the predicate
    pub fn find<F>(&self, predicate: F) -> Option<NodeId>
    where
        F: Fn(&TreeNode) -> bool,
    {
        self.walk(TraversalOrder::PreOrder)
            .find(|&id| self.get(id).map(&predicate).unwrap_or(false))
    }

    /// Ancestors of the node with the given string id, nearest first
    ///
    /// Empty when the id itself is unknown or names the root.
    pub fn ancestors(&self, id: &str) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            current: self.node(id).and_then(|n| n.parent.as_deref()),
        }
    }

    /// Ancestor ids nearest first, the breadcrumb/highlight form
    pub fn ancestor_ids(&self, id: &str) -> SmallVec<[String; 4]> {
        self.ancestors(id).map(|n| n.id.clone()).collect()
    }
}
