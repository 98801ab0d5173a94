use std::collections::HashSet;

use crate::ops::Store;

/// Check if the parent chain starting at `id` loops back onto itself
pub fn has_cycle(store: &Store, id: &str) -> bool {
    let mut visited = HashSet::new();
    let mut current = Some(id);

    while let Some(element_id) = current {
        if !visited.insert(element_id) {
            return true;
        }

        match store.get(element_id) {
            Ok(element) => current = element.parent.as_deref(),
            Err(_) => break,
        }
    }

    false
}

/// Find elements whose parent link points at a missing element
///
/// Returns list of (child_id, parent_id) tuples
pub fn find_orphans(store: &Store) -> Vec<(String, String)> {
    let mut orphans = Vec::new();

    for element in store.list_elements() {
        if let Some(ref parent_id) = element.parent {
            if !store.contains(parent_id) {
                orphans.push((element.id.clone(), parent_id.clone()));
            }
        }
    }

    orphans
}

/// Find parent/children disagreements
///
/// A child must list its parent, and the parent must list the child exactly
/// once. Returns list of (parent_id, child_id) tuples.
pub fn find_child_list_mismatches(store: &Store) -> Vec<(String, String)> {
    let mut mismatches = Vec::new();

    for element in store.list_elements() {
        for child_id in &element.children {
            let occurrences = element.children.iter().filter(|c| *c == child_id).count();
            let points_back = store
                .get(child_id)
                .map(|child| child.parent.as_deref() == Some(element.id.as_str()))
                .unwrap_or(false);

            if occurrences != 1 || !points_back {
                mismatches.push((element.id.clone(), child_id.clone()));
            }
        }

        if let Some(ref parent_id) = element.parent {
            let listed = store
                .get(parent_id)
                .map(|parent| parent.children.contains(&element.id))
                .unwrap_or(true); // missing parent reported by find_orphans
            if !listed {
                mismatches.push((parent_id.clone(), element.id.clone()));
            }
        }
    }

    mismatches.sort();
    mismatches.dedup();
    mismatches
}

/// Find one-sided label links
///
/// `label.label_target == element` must hold iff `element.label == label`.
/// Returns list of (element_id, label_id) tuples.
pub fn find_broken_label_links(store: &Store) -> Vec<(String, String)> {
    let mut broken = Vec::new();

    for element in store.list_elements() {
        if let Some(ref label_id) = element.label {
            let back = store
                .get(label_id)
                .ok()
                .and_then(|label| label.label_target.as_deref());
            if back != Some(element.id.as_str()) {
                broken.push((element.id.clone(), label_id.clone()));
            }
        }

        if let Some(ref target_id) = element.label_target {
            let forward = store
                .get(target_id)
                .ok()
                .and_then(|target| target.label.as_deref());
            if forward != Some(element.id.as_str()) {
                broken.push((target_id.clone(), element.id.clone()));
            }
        }
    }

    broken.sort();
    broken.dedup();
    broken
}

/// Find elements taking part in a parent cycle
pub fn find_cycles(store: &Store) -> Vec<String> {
    store
        .list_elements()
        .into_iter()
        .filter(|e| has_cycle(store, &e.id))
        .map(|e| e.id.clone())
        .collect()
}
