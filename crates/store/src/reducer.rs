//! State transitions, one per action, in strict dependency order

use anyhow::{anyhow, bail, Result};
use publication_tree::{
    year_limits, NodeType, PublicationRecord, PublicationTree, TreeFilter, YearRange,
};
use std::collections::HashSet;

use crate::action::{Action, SelectedIds};
use crate::state::AppState;

impl AppState {
    /// Apply one action as a single synchronous transition
    ///
    /// Derived artifacts are recomputed in dependency order: full tree, then
    /// year-filtered tree, then selected tree, then parent/hover paths. On
    /// `Err` nothing has been committed and the state reads exactly as
    /// before.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::LoadRaw(records) => self.load_raw(records),
            Action::SetYearRange(range) => self.set_year_range(range),
            Action::SetRoot(id) => self.set_root(&id),
            Action::SelectIds(ids) => self.select_ids(ids),
            Action::HoverNode(id) => self.hover_node(id.as_deref()),
        }
    }

    fn load_raw(&mut self, records: Vec<PublicationRecord>) -> Result<()> {
        let full_tree = PublicationTree::build(&records)?;
        let limits = year_limits(&records);

        self.raw = records;
        self.root_id = full_tree.root_node().id.clone();
        self.year_limits = limits;
        self.year_range = limits;
        self.filtered_tree = full_tree.clone();
        self.selected_ids = SelectedIds {
            fully: full_tree.ids().map(|id| id.to_string()).collect(),
            half: HashSet::new(),
        };
        self.selected_tree = Some(full_tree.clone());
        self.full_tree = full_tree;
        self.tree_parent_ids = self.full_tree.ancestor_ids(&self.root_id).into_vec();
        self.hovered_node_id = None;
        self.hovered_parent_ids = None;
        Ok(())
    }

    fn set_year_range(&mut self, range: YearRange) -> Result<()> {
        let filter = TreeFilter::YearRange(range);
        let mut tree = self
            .full_tree
            .filtered(&filter)
            .ok_or_else(|| anyhow!("year range {range} excludes the entire tree"))?;
        if tree.root_node().kind != NodeType::Root {
            bail!("unexpected non-root filtered tree");
        }
        tree.recalculate();

        self.filtered_tree = tree;
        self.year_range = range;
        self.replace_selected_tree();
        Ok(())
    }

    fn set_root(&mut self, id: &str) -> Result<()> {
        let root = self
            .full_tree
            .node(id)
            .ok_or_else(|| anyhow!("tree node with id {id} does not exist"))?;
        self.root_id = root.id.clone();
        self.tree_parent_ids = self.full_tree.ancestor_ids(&self.root_id).into_vec();
        self.replace_selected_tree();

        // Hover only makes sense relative to a stable drill-down root
        self.hovered_node_id = None;
        self.hovered_parent_ids = None;
        Ok(())
    }

    fn select_ids(&mut self, ids: SelectedIds) -> Result<()> {
        self.selected_ids = ids;
        self.replace_selected_tree();
        Ok(())
    }

    fn hover_node(&mut self, id: Option<&str>) -> Result<()> {
        match id {
            Some(id) => {
                let node = self
                    .full_tree
                    .node(id)
                    .ok_or_else(|| anyhow!("tree node with id {id} does not exist"))?;
                let node_id = node.id.clone();
                let parents = self.full_tree.ancestor_ids(&node_id).into_vec();
                self.hovered_node_id = Some(node_id);
                self.hovered_parent_ids = Some(parents);
            }
            None => {
                self.hovered_node_id = None;
                self.hovered_parent_ids = None;
            }
        }
        Ok(())
    }

    /// Rebuild the selected tree from the year-filtered tree
    ///
    /// Locates the drill-down root inside the filtered generation, prunes by
    /// the selection sets, and corrects the aggregates. When the drill-down
    /// root did not survive the year filter the selected tree becomes `None`
    /// until a later transition restores it.
    fn replace_selected_tree(&mut self) {
        let filter = TreeFilter::Selection {
            fully: self.selected_ids.fully.clone(),
            half: self.selected_ids.half.clone(),
        };
        let root = self.filtered_tree.find(|node| node.id == self.root_id);
        if root.is_none() {
            log::warn!(
                "drill-down root {} is not present in the year-filtered tree",
                self.root_id
            );
        }
        self.selected_tree = root
            .and_then(|id| self.filtered_tree.filter_from(id, &filter))
            .map(|mut tree| {
                tree.recalculate();
                tree
            });
    }
}
