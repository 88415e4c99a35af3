// src/dag/state.rs

//! Derivation of [`ItemState`] for a freshly constructed graph.

use crate::dag::item::{ItemId, ItemState, WorkItemSpec};

/// State implied by an item's own flags, before looking at dependencies.
pub fn initial_state(spec: &WorkItemSpec) -> ItemState {
    if spec.done {
        ItemState::Done
    } else if spec.assigned {
        ItemState::InProgress
    } else {
        ItemState::Ready
    }
}

/// Compute the state of every item, indexed like `specs`.
///
/// Two passes: flags first, then every tentatively `Ready` item with a
/// dependency that is not `Done` becomes `Blocked`. The second pass only
/// distinguishes `Done` from not-`Done`, and a downgrade never changes that,
/// so the order in which items are visited does not matter.
pub(crate) fn derive_states(specs: &[WorkItemSpec], deps: &[Vec<ItemId>]) -> Vec<ItemState> {
    let mut states: Vec<ItemState> = specs.iter().map(initial_state).collect();

    for (idx, item_deps) in deps.iter().enumerate() {
        if states[idx] != ItemState::Ready {
            continue;
        }
        let blocked = item_deps
            .iter()
            .any(|dep| states[dep.index()] != ItemState::Done);
        if blocked {
            states[idx] = ItemState::Blocked;
        }
    }

    states
}
