//! Bottom-up recomputation of aggregates after structural pruning

use crate::node::{NodeId, YearRange};
use crate::traverse::TraversalOrder;
use crate::tree::PublicationTree;

impl PublicationTree {
    /// Recompute `value` and `years` for every group node, bottom-up
    ///
    /// Leaves are authoritative from the build step and left untouched; each
    /// group is reset and refolded over its (already corrected, because
    /// post-order) children. Must run after every `filter_from` before the
    /// result is exposed to a reader.
    pub fn recalculate(&mut self) {
        let order: Vec<NodeId> = self.walk(TraversalOrder::PostOrder).collect();
        for id in order {
            let Some(children) = self.get(id).and_then(|n| n.children.clone()) else {
                continue;
            };
            let mut value = 0u32;
            let mut years = YearRange::EMPTY;
            for child_id in children {
                if let Some(child) = self.get(child_id) {
                    value += child.value;
                    years.union(child.years);
                }
            }
            if let Some(node) = self.get_mut(id) {
                node.value = value;
                node.years = years;
            }
        }
    }
}
