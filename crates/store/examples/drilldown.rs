//! Walks the full action cycle on a small in-memory dataset:
//! load, narrow the year range, drill down, hover.
//!
//! Run with `RUST_LOG=debug cargo run --example drilldown` to see
//! integrity warnings on the log channel.

use publication_tree::{PublicationRecord, YearRange};
use viz_store::{Action, AppState};

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

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let records = vec![
        record("p1", "Ada", 2000, 3, "Computing (CS)", "Science (SCI)", "Example University (EXU)"),
        record("p2", "Grace", 2001, 5, "Computing (CS)", "Science (SCI)", "Example University (EXU)"),
        record("p3", "Edsger", 2003, 2, "Mathematics (MATH)", "Science (SCI)", "Example University (EXU)"),
        record("p4", "Barbara", 2001, 4, "History (HIST)", "Humanities (HUM)", "Other University"),
    ];

    let mut state = AppState::default();
    state.dispatch(Action::LoadRaw(records))?;

    let root = state.full_tree().root_node();
    println!(
        "loaded {} nodes, {} publications over {}",
        state.full_tree().node_count(),
        root.value,
        root.years
    );

    state.dispatch(Action::SetYearRange(YearRange::new(2000, 2001)))?;
    println!("\nyear range {}:", state.year_range());
    for flat in state.filtered_tree().flatten() {
        let amount = flat.value.or(flat.grouped_value).unwrap_or(0);
        println!("  {:<12} {:<24} {}", flat.id, flat.name, amount);
    }

    state.dispatch(Action::SetRoot("fSCI".to_string()))?;
    println!(
        "\ndrilled down to {} (breadcrumb: {:?})",
        state.root_id(),
        state.tree_parent_ids()
    );
    if let Some(selected) = state.selected_tree() {
        for flat in selected.flatten() {
            let amount = flat.value.or(flat.grouped_value).unwrap_or(0);
            println!("  {:<12} {:<24} {}", flat.id, flat.name, amount);
        }
    }

    state.dispatch(Action::HoverNode(Some("pp1_2000".to_string())))?;
    println!(
        "\nhovering {:?}, highlighted ancestors: {:?}",
        state.hovered_node().map(|n| n.name),
        state.hovered_parent_ids()
    );

    Ok(())
}
