//! Store state and its read-side selectors

use publication_tree::{FlatNode, PublicationRecord, PublicationTree, YearRange};

use crate::action::SelectedIds;

/// The whole derived state of the visualization
///
/// Fields follow the recomputation dependency order: raw records feed the
/// full tree, which feeds the year-filtered tree, which feeds the selected
/// (drill-down) tree; parent and hover paths resolve against the full tree's
/// id index.
#[derive(Debug, Clone)]
pub struct AppState {
    pub(crate) raw: Vec<PublicationRecord>,
    pub(crate) full_tree: PublicationTree,

    pub(crate) year_limits: YearRange,
    pub(crate) year_range: YearRange,
    pub(crate) filtered_tree: PublicationTree,

    pub(crate) root_id: String,
    pub(crate) tree_parent_ids: Vec<String>,

    pub(crate) selected_ids: SelectedIds,
    /// `None` when the drill-down root did not survive the current filters
    pub(crate) selected_tree: Option<PublicationTree>,

    pub(crate) hovered_node_id: Option<String>,
    pub(crate) hovered_parent_ids: Option<Vec<String>>,
}

impl Default for AppState {
    fn default() -> Self {
        let placeholder = PublicationTree::empty();
        Self {
            raw: Vec::new(),
            root_id: placeholder.root_node().id.clone(),
            year_limits: YearRange::EMPTY,
            year_range: YearRange::EMPTY,
            filtered_tree: placeholder.clone(),
            tree_parent_ids: Vec::new(),
            selected_ids: SelectedIds::default(),
            selected_tree: Some(placeholder.clone()),
            hovered_node_id: None,
            hovered_parent_ids: None,
            full_tree: placeholder,
        }
    }
}

impl AppState {
    /// The raw records of the current load
    pub fn raw(&self) -> &[PublicationRecord] {
        &self.raw
    }

    /// The complete, unfiltered hierarchy of the current load
    pub fn full_tree(&self) -> &PublicationTree {
        &self.full_tree
    }

    /// Year bounds of the raw dataset
    pub fn year_limits(&self) -> YearRange {
        self.year_limits
    }

    /// Currently applied year filter
    pub fn year_range(&self) -> YearRange {
        self.year_range
    }

    /// Full tree pruned by the year range
    pub fn filtered_tree(&self) -> &PublicationTree {
        &self.filtered_tree
    }

    /// Id of the current drill-down root
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// Breadcrumb path of the drill-down root, nearest ancestor first
    pub fn tree_parent_ids(&self) -> &[String] {
        &self.tree_parent_ids
    }

    /// The current checkbox selection
    pub fn selected_ids(&self) -> &SelectedIds {
        &self.selected_ids
    }

    /// Year-filtered tree further pruned by the selection, rooted at the
    /// drill-down node
    pub fn selected_tree(&self) -> Option<&PublicationTree> {
        self.selected_tree.as_ref()
    }

    /// Id of the hovered node, if any
    pub fn hovered_node_id(&self) -> Option<&str> {
        self.hovered_node_id.as_deref()
    }

    /// Ancestor ids of the hovered node, nearest first
    pub fn hovered_parent_ids(&self) -> Option<&[String]> {
        self.hovered_parent_ids.as_deref()
    }

    /// Point projection of the hovered node for the highlight signal
    pub fn hovered_node(&self) -> Option<FlatNode> {
        self.full_tree.to_flat(self.hovered_node_id.as_deref()?)
    }
}
