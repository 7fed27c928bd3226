//! Predicate-based structural pruning into a new tree generation

use std::collections::{HashSet, VecDeque};

use crate::node::{NodeId, TreeNode, YearRange};
use crate::tree::PublicationTree;

/// The filter kinds a derived tree can be pruned by
///
/// An explicit tagged variant rather than an ad-hoc closure, so every derived
/// generation records exactly which parameters produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeFilter {
    /// Keep nodes whose year range overlaps the given inclusive range
    YearRange(YearRange),
    /// Keep nodes present in either checkbox selection set
    Selection {
        fully: HashSet<String>,
        half: HashSet<String>,
    },
}

impl TreeFilter {
    /// Single dispatch point for predicate evaluation
    pub fn matches(&self, node: &TreeNode) -> bool {
        match self {
            TreeFilter::YearRange(range) => node.years.overlaps(range),
            TreeFilter::Selection { fully, half } => {
                fully.contains(&node.id) || half.contains(&node.id)
            }
        }
    }
}

impl PublicationTree {
    /// Derive a new generation from the subtree rooted at `start`, pruned
    /// top-down by `filter`
    ///
    /// Returns `None` when the start node itself fails the predicate. A
    /// failing child is a hard cut: its entire subtree is discarded without
    /// being visited, even if some descendant would match. Leaves keep
    /// `children: None`; a group whose children are all pruned keeps
    /// `Some(vec![])`.
    ///
    /// The returned tree's `value`/`years` aggregates are stale and must be
    /// corrected with [`PublicationTree::recalculate`] before any reader sees
    /// them.
    pub fn filter_from(&self, start: NodeId, filter: &TreeFilter) -> Option<PublicationTree> {
        let source_root = self.get(start)?;
        if !filter.matches(source_root) {
            return None;
        }

        let mut root = source_root.clone_shallow();
        if source_root.children.is_some() {
            root.children = Some(Vec::new());
        }
        let mut derived = PublicationTree::with_root(root);

        // (source child, destination parent) pairs, breadth-first
        let mut queue: VecDeque<(NodeId, NodeId)> =
            self.children(start).map(|c| (c, NodeId::ROOT)).collect();
        while let Some((source, parent)) = queue.pop_front() {
            let Some(node) = self.get(source) else {
                continue;
            };
            if !filter.matches(node) {
                continue;
            }
            let mut clone = node.clone_shallow();
            if node.children.is_some() {
                clone.children = Some(Vec::new());
            }
            let attached = derived.push(clone);
            derived.attach(parent, attached);
            for child in self.children(source) {
                queue.push_back((child, attached));
            }
        }
        Some(derived)
    }

    /// Filter the whole generation from its root
    pub fn filtered(&self, filter: &TreeFilter) -> Option<PublicationTree> {
        self.filter_from(self.root(), filter)
    }
}
