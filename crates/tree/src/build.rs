//! Builds the full deduplicated tree from flat publication records

use anyhow::{bail, Result};

use crate::node::{NodeId, NodeType, TreeNode, YearRange};
use crate::record::PublicationRecord;
use crate::tree::PublicationTree;

/// Id of the synthetic root node
pub const ROOT_ID: &str = "/";

fn root_node() -> TreeNode {
    TreeNode {
        id: ROOT_ID.to_string(),
        parent: None,
        kind: NodeType::Root,
        name: "Universities".to_string(),
        years: YearRange::EMPTY,
        value: 0,
        children: Some(Vec::new()),
    }
}

/// Extract a trailing parenthetical short code: `"Example University (EXU)"` -> `EXU`
///
/// Only word characters qualify; anything else falls back to the full name.
fn short_code(name: &str) -> Option<&str> {
    let rest = name.strip_suffix(')')?;
    let open = rest.rfind('(')?;
    let code = &rest[open + 1..];
    if !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Some(code)
    } else {
        None
    }
}

/// Group id: level-specific prefix plus the short code (or the raw name)
///
/// The prefix keeps a university and a faculty that share a short code from
/// colliding in the id index.
fn group_id(prefix: char, name: &str) -> String {
    format!("{}{}", prefix, short_code(name).unwrap_or(name))
}

impl PublicationTree {
    /// A root-only tree, the pre-load placeholder
    pub fn empty() -> Self {
        PublicationTree::with_root(root_node())
    }

    /// Build the full tree from flat records in a single scan
    ///
    /// Group nodes (university, faculty, department) are deduplicated by id:
    /// a repeat hit accumulates `value` and widens `years` on the existing
    /// node. Every record gets a fresh person leaf. After the scan each
    /// group's children are sorted by display name.
    ///
    /// # Errors
    ///
    /// Fails on a duplicate person id (`p{id}_{year}`), which indicates a
    /// data-integrity problem in the input rather than a recoverable state.
    pub fn build(records: &[PublicationRecord]) -> Result<Self> {
        let mut tree = PublicationTree::empty();

        for record in records {
            let university = tree.intern_group(
                NodeId::ROOT,
                NodeType::University,
                group_id('u', &record.university),
                &record.university,
                record,
            );
            let faculty = tree.intern_group(
                university,
                NodeType::Faculty,
                group_id('f', &record.faculty),
                &record.faculty,
                record,
            );
            let department = tree.intern_group(
                faculty,
                NodeType::Department,
                group_id('d', &record.department),
                &record.department,
                record,
            );

            let person_id = format!("p{}_{}", record.id, record.year);
            if tree.contains(&person_id) {
                bail!(
                    "duplicate person node id {person_id}; records must be unique per person and year"
                );
            }
            let parent_id = tree.get(department).map(|n| n.id.clone());
            let person = tree.push(TreeNode {
                id: person_id,
                parent: parent_id,
                kind: NodeType::Person,
                name: format!("{} ({})", record.name, record.year),
                years: YearRange::single(record.year),
                value: record.pubs,
                children: None,
            });
            tree.attach(department, person);

            // The root aggregates every record directly
            if let Some(root) = tree.get_mut(NodeId::ROOT) {
                root.value += record.pubs;
                root.years.widen(record.year);
            }
        }

        tree.sort_children_by_name();
        Ok(tree)
    }

    /// Find-or-create a group node under `parent`, accumulating on a repeat hit
    fn intern_group(
        &mut self,
        parent: NodeId,
        kind: NodeType,
        id: String,
        name: &str,
        record: &PublicationRecord,
    ) -> NodeId {
        if let Some(existing) = self.lookup(&id) {
            if let Some(node) = self.get_mut(existing) {
                node.value += record.pubs;
                node.years.widen(record.year);
            }
            return existing;
        }

        let parent_id = self.get(parent).map(|n| n.id.clone());
        let node = self.push(TreeNode {
            id,
            parent: parent_id,
            kind,
            name: name.to_string(),
            years: YearRange::single(record.year),
            value: record.pubs,
            children: Some(Vec::new()),
        });
        self.attach(parent, node);
        node
    }
}
