// Core publication-tree library
// This crate builds, filters, and aggregates the
// university -> faculty -> department -> person hierarchy

mod aggregate;
mod build;
mod filter;
mod node;
mod project;
mod record;
mod traverse;
mod tree;

pub use build::ROOT_ID;
pub use filter::TreeFilter;
pub use node::{FlatNode, NodeId, NodeType, TreeNode, YearRange};
pub use project::DataNode;
pub use record::{year_limits, PublicationRecord};
pub use traverse::{Ancestors, TraversalOrder, TreeWalker};
pub use tree::PublicationTree;
