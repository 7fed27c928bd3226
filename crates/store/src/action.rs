//! External triggers, each causing one atomic state transition

use publication_tree::{PublicationRecord, YearRange};
use std::collections::HashSet;

/// Checkbox selection payload: fully checked ids plus half (indeterminate)
/// checked ancestors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectedIds {
    pub fully: HashSet<String>,
    pub half: HashSet<String>,
}

impl SelectedIds {
    /// Build a selection from id iterators
    pub fn new<F, H>(fully: F, half: H) -> Self
    where
        F: IntoIterator<Item = String>,
        H: IntoIterator<Item = String>,
    {
        Self {
            fully: fully.into_iter().collect(),
            half: half.into_iter().collect(),
        }
    }
}

/// Everything that can change the store
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the raw dataset and rebuild every derived artifact
    LoadRaw(Vec<PublicationRecord>),
    /// Re-filter the full tree by an inclusive year range
    SetYearRange(YearRange),
    /// Drill down to the node with the given id
    SetRoot(String),
    /// Replace the checkbox selection
    SelectIds(SelectedIds),
    /// Hover a node; `None` clears the highlight
    HoverNode(Option<String>),
}
