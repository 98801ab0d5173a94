use crate::errors::{CanvexError, Result};
use crate::ops::Store;

use super::invariants;

/// Validate the structural invariants of the element graph
///
/// Checks, in order:
///
/// 1. Parent chains are acyclic
/// 2. Parent links point at existing elements
/// 3. Parent and children lists agree (each child listed exactly once)
/// 4. Label links are symmetric
///
/// # Errors
///
/// Returns the first violation found. Call the functions in
/// [`invariants`] directly for an exhaustive report.
pub fn validate_graph(store: &Store) -> Result<()> {
    if let Some(element_id) = invariants::find_cycles(store).into_iter().next() {
        return Err(CanvexError::CycleDetected { element_id });
    }

    if let Some((element_id, _)) = invariants::find_orphans(store).into_iter().next() {
        return Err(CanvexError::ParentChainBroken { element_id });
    }

    if let Some((parent_id, child_id)) = invariants::find_child_list_mismatches(store)
        .into_iter()
        .next()
    {
        return Err(CanvexError::ChildListInconsistent {
            parent_id,
            child_id,
        });
    }

    if let Some((element_id, label_id)) = invariants::find_broken_label_links(store)
        .into_iter()
        .next()
    {
        return Err(CanvexError::LabelInvariantBroken {
            element_id,
            label_id,
        });
    }

    Ok(())
}
