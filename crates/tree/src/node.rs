//! Core node types for the publication hierarchy

use derive_more::Display;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a node within one tree generation
///
/// Internally an index into arena-based storage. A `NodeId` is only
/// meaningful for the generation that produced it; string ids are the
/// cross-generation currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root node always has ID 0
    pub const ROOT: NodeId = NodeId(0);

    /// Create a new NodeId from a usize
    pub const fn new(id: usize) -> Self {
        NodeId(id)
    }

    /// Get the inner usize value
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        NodeId(id)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// The level of a node in the publication hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeType {
    #[display(fmt = "root")]
    Root,

    #[display(fmt = "university")]
    University,

    #[display(fmt = "faculty")]
    Faculty,

    #[display(fmt = "department")]
    Department,

    #[display(fmt = "person")]
    Person,
}

impl NodeType {
    /// Returns true for the leaf level of the hierarchy
    pub const fn is_leaf(self) -> bool {
        matches!(self, NodeType::Person)
    }
}

/// Inclusive `[min, max]` year range covered by a node and its descendants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    /// Sentinel range that any `widen`/`union` replaces
    pub const EMPTY: YearRange = YearRange {
        min: i32::MAX,
        max: i32::MIN,
    };

    /// Create a range from inclusive endpoints
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Range covering a single year
    pub const fn single(year: i32) -> Self {
        Self::new(year, year)
    }

    /// Grow the range to include the given year
    pub fn widen(&mut self, year: i32) {
        self.min = self.min.min(year);
        self.max = self.max.max(year);
    }

    /// Grow the range to include another range
    pub fn union(&mut self, other: YearRange) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Inclusive overlap check between two ranges
    pub const fn overlaps(&self, other: &YearRange) -> bool {
        let lo = if self.min > other.min { self.min } else { other.min };
        let hi = if self.max < other.max { self.max } else { other.max };
        lo <= hi
    }

    /// True for the sentinel state (nothing widened in yet)
    pub const fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// A single node in one tree generation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeNode {
    /// Globally unique id, stable across rebuilds of the same input
    pub id: String,

    /// Parent node id (`None` only for the root)
    pub parent: Option<String>,

    /// Hierarchy level of this node
    pub kind: NodeType,

    /// Display name: a university, a department, a person's name
    pub name: String,

    /// Year range covered by this node and, transitively, its descendants
    pub years: YearRange,

    /// Own publication count for leaves; sum of descendant leaf values otherwise
    pub value: u32,

    /// Arena indices of children
    ///
    /// `None` marks a leaf; `Some(vec![])` a non-leaf whose children were all
    /// filtered away. The two states are distinct on purpose.
    pub children: Option<Vec<NodeId>>,
}

impl TreeNode {
    /// Returns true if this node can never have children
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Copy identity fields and `value`, dropping any child list
    ///
    /// The basis for rebuilding derived trees node by node without carrying
    /// a stale child list into the new generation.
    pub fn clone_shallow(&self) -> TreeNode {
        TreeNode {
            id: self.id.clone(),
            parent: self.parent.clone(),
            kind: self.kind,
            name: self.name.clone(),
            years: self.years,
            value: self.value,
            children: None,
        }
    }
}

/// Render-oriented projection of a node
///
/// Exactly one of `value` (leaf) or `grouped_value` (non-leaf aggregate) is
/// set, because the chart's partition layout sizes leaves and groups
/// differently.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlatNode {
    pub id: String,
    pub parent: Option<String>,
    pub kind: NodeType,
    pub name: String,
    pub years: YearRange,
    /// Own publication count (leaves only)
    pub value: Option<u32>,
    /// Aggregated publication count (non-leaves only)
    pub grouped_value: Option<u32>,
}

impl FlatNode {
    /// Project a tree node into its flat render form
    pub fn from_node(node: &TreeNode) -> FlatNode {
        let mut flat = FlatNode {
            id: node.id.clone(),
            parent: node.parent.clone(),
            kind: node.kind,
            name: node.name.clone(),
            years: node.years,
            value: None,
            grouped_value: None,
        };
        if node.is_leaf() {
            flat.value = Some(node.value);
        } else {
            flat.grouped_value = Some(node.value);
        }
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str, year: i32, value: u32) -> TreeNode {
        TreeNode {
            id: id.to_string(),
            parent: Some("/".to_string()),
            kind: NodeType::Person,
            name: id.to_string(),
            years: YearRange::single(year),
            value,
            children: None,
        }
    }

    #[test]
    fn test_node_id() {
        assert_eq!(NodeId::ROOT, NodeId(0));
        assert_eq!(NodeId::new(5).get(), 5);
        assert_eq!(NodeId::from(10), NodeId(10));
        assert_eq!(usize::from(NodeId(7)), 7);
    }

    #[test]
    fn test_node_type() {
        assert!(NodeType::Person.is_leaf());
        assert!(!NodeType::Department.is_leaf());
        assert_eq!(NodeType::University.to_string(), "university");
        assert_eq!(NodeType::Root.to_string(), "root");
    }

    #[test]
    fn test_year_range_widen() {
        let mut range = YearRange::EMPTY;
        assert!(range.is_empty());

        range.widen(2005);
        assert_eq!(range, YearRange::new(2005, 2005));

        range.widen(2001);
        range.widen(2010);
        assert_eq!(range, YearRange::new(2001, 2010));
    }

    #[test]
    fn test_year_range_union() {
        let mut range = YearRange::new(2000, 2003);
        range.union(YearRange::new(2005, 2008));
        assert_eq!(range, YearRange::new(2000, 2008));

        // Union with the sentinel is a no-op
        range.union(YearRange::EMPTY);
        assert_eq!(range, YearRange::new(2000, 2008));
    }

    #[test]
    fn test_year_range_overlaps() {
        let range = YearRange::new(2000, 2005);
        assert!(range.overlaps(&YearRange::new(2005, 2010)));
        assert!(range.overlaps(&YearRange::new(1990, 2000)));
        assert!(range.overlaps(&YearRange::single(2003)));
        assert!(!range.overlaps(&YearRange::new(2006, 2010)));
        assert!(!range.overlaps(&YearRange::EMPTY));
    }

    #[test]
    fn test_clone_shallow_drops_children() {
        let node = TreeNode {
            id: "d1".to_string(),
            parent: Some("f1".to_string()),
            kind: NodeType::Department,
            name: "Dept".to_string(),
            years: YearRange::new(2000, 2002),
            value: 7,
            children: Some(vec![NodeId(3), NodeId(4)]),
        };

        let clone = node.clone_shallow();
        assert_eq!(clone.id, node.id);
        assert_eq!(clone.parent, node.parent);
        assert_eq!(clone.years, node.years);
        assert_eq!(clone.value, 7);
        assert_eq!(clone.children, None);
    }

    #[test]
    fn test_flat_node_exclusive_values() {
        let person = leaf("p1", 2000, 3);
        let flat = FlatNode::from_node(&person);
        assert_eq!(flat.value, Some(3));
        assert_eq!(flat.grouped_value, None);

        let mut group = leaf("d1", 2000, 9);
        group.kind = NodeType::Department;
        group.children = Some(Vec::new());
        let flat = FlatNode::from_node(&group);
        assert_eq!(flat.value, None);
        assert_eq!(flat.grouped_value, Some(9));
    }
}
