use std::collections::HashSet;

use crate::model::{Closure, ElementKind};
use crate::ops::Store;

use super::ancestry::ancestors;

/// Compute the closure of a move: the requested elements plus everything
/// they transitively own
///
/// Requested ids keep their order in `top_level`; children are visited
/// depth-first in drawing order. Unknown ids are skipped.
pub fn closure(store: &Store, ids: &[String]) -> Closure {
    let mut result = Closure::default();
    let mut requested: HashSet<&str> = HashSet::with_capacity(ids.len());

    for id in ids {
        if store.contains(id) && requested.insert(id.as_str()) {
            result.top_level.push(id.clone());
        }
    }

    let mut stack: Vec<String> = result.top_level.iter().rev().cloned().collect();
    while let Some(id) = stack.pop() {
        let Ok(element) = store.get(&id) else {
            continue;
        };
        if !result.enclose(&id) {
            continue;
        }

        match element.kind {
            ElementKind::Connection => result.all_connections.push(id.clone()),
            ElementKind::Shape | ElementKind::Label => result.all_shapes.push(id.clone()),
            ElementKind::Root => {}
        }

        for child in element.children.iter().rev() {
            stack.push(child.clone());
        }
    }

    result
}

/// Drop ids that have an ancestor in the same set
///
/// Moving a parent moves its children, so nested selections would otherwise
/// be displaced twice.
pub fn remove_nested(store: &Store, ids: &[String]) -> Vec<String> {
    let selected: HashSet<&str> = ids.iter().map(String::as_str).collect();

    ids.iter()
        .filter(|id| {
            ancestors(store, id)
                .map(|chain| !chain.iter().any(|a| selected.contains(a.as_str())))
                .unwrap_or(true)
        })
        .cloned()
        .collect()
}
