use pretty_assertions::assert_eq;
use publication_tree::{
    PublicationRecord, PublicationTree, TreeFilter, YearRange, ROOT_ID,
};
use std::collections::HashSet;

fn record(
    id: &str,
    name: &str,
    year: i32,
    pubs: u32,
    department: &str,
    faculty: &str,
    university: &str,
) -> PublicationRecord {
    PublicationRecord {
        id: id.to_string(),
        name: name.to_string(),
        year,
        pubs,
        department: department.to_string(),
        faculty: faculty.to_string(),
        university: university.to_string(),
    }
}

fn sample_tree() -> PublicationTree {
    PublicationTree::build(&[
        record("p1", "A", 2000, 3, "D1", "F1", "U1"),
        record("p2", "B", 2001, 5, "D1", "F1", "U1"),
    ])
    .unwrap()
}

fn ids(set: &[&str]) -> HashSet<String> {
    set.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_year_filter_scenario() {
    let tree = sample_tree();
    let filter = TreeFilter::YearRange(YearRange::single(2000));

    let mut filtered = tree.filtered(&filter).unwrap();
    // The 2001 leaf is pruned, the group spine survives
    assert!(!filtered.contains("pp2_2001"));
    assert!(filtered.contains("pp1_2000"));

    filtered.recalculate();
    assert_eq!(filtered.root_node().value, 3);
    assert_eq!(filtered.root_node().years, YearRange::single(2000));
    assert_eq!(filtered.node("dD1").unwrap().value, 3);
    assert_eq!(filtered.node("dD1").unwrap().years, YearRange::single(2000));
}

#[test]
fn test_aggregates_stale_until_recalculated() {
    let tree = sample_tree();
    let filter = TreeFilter::YearRange(YearRange::single(2000));

    let mut filtered = tree.filtered(&filter).unwrap();
    // Values were shallow-copied from the source generation
    assert_eq!(filtered.root_node().value, 8);
    assert_eq!(filtered.root_node().years, YearRange::new(2000, 2001));

    filtered.recalculate();
    assert_eq!(filtered.root_node().value, 3);
}

#[test]
fn test_filter_excluding_root_yields_none() {
    let tree = sample_tree();
    let filter = TreeFilter::YearRange(YearRange::new(1990, 1995));
    assert!(tree.filtered(&filter).is_none());
}

#[test]
fn test_selection_hard_prune() {
    let tree = sample_tree();
    // The person is selected, but its faculty is not: the whole faculty
    // subtree is cut without being visited.
    let filter = TreeFilter::Selection {
        fully: ids(&[ROOT_ID, "uU1", "pp1_2000"]),
        half: HashSet::new(),
    };

    let filtered = tree.filtered(&filter).unwrap();
    assert!(filtered.contains("uU1"));
    assert!(!filtered.contains("fF1"));
    assert!(!filtered.contains("dD1"));
    assert!(!filtered.contains("pp1_2000"));

    // A group stripped of all children is distinguishable from a leaf
    let university = filtered.node("uU1").unwrap();
    assert_eq!(university.children, Some(Vec::new()));
    assert!(!university.is_leaf());
}

#[test]
fn test_half_selection_keeps_the_spine() {
    let tree = sample_tree();
    let filter = TreeFilter::Selection {
        fully: ids(&["pp1_2000"]),
        half: ids(&[ROOT_ID, "uU1", "fF1", "dD1"]),
    };

    let mut filtered = tree.filtered(&filter).unwrap();
    filtered.recalculate();

    let person = filtered.node("pp1_2000").unwrap();
    assert_eq!(person.children, None);
    assert!(person.is_leaf());
    assert_eq!(filtered.root_node().value, 3);
    assert!(!filtered.contains("pp2_2001"));
}

#[test]
fn test_filter_from_sub_root() {
    let tree = sample_tree();
    let department = tree.lookup("dD1").unwrap();
    let filter = TreeFilter::YearRange(YearRange::new(2000, 2001));

    let mut selected = tree.filter_from(department, &filter).unwrap();
    selected.recalculate();

    assert_eq!(selected.root_node().id, "dD1");
    assert_eq!(selected.root_node().value, 8);
    assert_eq!(selected.node_count(), 3);
    // The sub-root still remembers its source parent id
    assert_eq!(selected.root_node().parent.as_deref(), Some("fF1"));
}

#[test]
fn test_filter_idempotence() {
    let tree = sample_tree();
    let filter = TreeFilter::YearRange(YearRange::single(2000));

    let mut once = tree.filtered(&filter).unwrap();
    once.recalculate();

    let mut twice = once.filtered(&filter).unwrap();
    twice.recalculate();

    assert_eq!(once.flatten(), twice.flatten());
}

#[test]
fn test_derived_generation_does_not_alias_the_source() {
    let tree = sample_tree();
    let filter = TreeFilter::YearRange(YearRange::single(2000));

    let mut filtered = tree.filtered(&filter).unwrap();
    filtered.recalculate();

    // The source generation keeps its aggregates
    assert_eq!(tree.root_node().value, 8);
    assert_eq!(tree.node("dD1").unwrap().value, 8);
    assert!(tree.contains("pp2_2001"));
    assert_eq!(filtered.root_node().value, 3);
}
