// Derived-state store for the publication-tree visualization
// One synchronous transition per action; no partial state is ever committed

mod action;
mod reducer;
mod state;

pub use action::{Action, SelectedIds};
pub use state::AppState;
