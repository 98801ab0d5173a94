use std::collections::HashSet;

use crate::errors::{CanvexError, Result};
use crate::ops::Store;

/// Ancestors of an element, nearest first
///
/// # Arguments
/// * `store` - Reference to the Store
/// * `id` - Element to start from (not included in the result)
///
/// # Errors
/// * `ElementNotFound` - If `id` doesn't exist
/// * `ParentChainBroken` - If a parent link points at a missing element
/// * `CycleDetected` - If the parent chain revisits an element
pub fn ancestors(store: &Store, id: &str) -> Result<Vec<String>> {
    let mut visited = HashSet::new();
    visited.insert(id.to_string());

    let mut path = Vec::new();
    let mut current = store.get(id)?.parent.as_deref();

    while let Some(parent_id) = current {
        if !visited.insert(parent_id.to_string()) {
            return Err(CanvexError::CycleDetected {
                element_id: parent_id.to_string(),
            });
        }

        let parent = store
            .get(parent_id)
            .map_err(|_| CanvexError::ParentChainBroken {
                element_id: path.last().cloned().unwrap_or_else(|| id.to_string()),
            })?;

        path.push(parent_id.to_string());
        current = parent.parent.as_deref();
    }

    Ok(path)
}

/// Top of the parent chain of `id` (the element itself if it has no parent)
///
/// # Errors
/// Same as [`ancestors`].
pub fn root_of(store: &Store, id: &str) -> Result<String> {
    let chain = ancestors(store, id)?;
    Ok(chain.last().cloned().unwrap_or_else(|| id.to_string()))
}

/// Check whether `ancestor` appears in the parent chain of `id`
pub fn is_ancestor(store: &Store, ancestor: &str, id: &str) -> bool {
    ancestors(store, id)
        .map(|chain| chain.iter().any(|a| a == ancestor))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, ElementKind};

    fn chain() -> Store {
        let mut store = Store::new();
        store.insert(Element::new("root", ElementKind::Root));
        store.insert(Element::new("a", ElementKind::Shape));
        store.insert(Element::new("b", ElementKind::Shape));
        store.attach("a", "root", None).unwrap();
        store.attach("b", "a", None).unwrap();
        store
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let store = chain();

        assert_eq!(ancestors(&store, "b").unwrap(), vec!["a", "root"]);
        assert!(ancestors(&store, "root").unwrap().is_empty());
    }

    #[test]
    fn test_root_of() {
        let store = chain();

        assert_eq!(root_of(&store, "b").unwrap(), "root");
        assert_eq!(root_of(&store, "root").unwrap(), "root");
    }

    #[test]
    fn test_root_of_missing_element() {
        let store = Store::new();

        assert!(matches!(
            root_of(&store, "ghost"),
            Err(CanvexError::ElementNotFound { .. })
        ));
    }

    #[test]
    fn test_broken_chain() {
        let mut store = chain();
        store.get_mut("a").unwrap().parent = Some("gone".to_string());

        assert_eq!(
            root_of(&store, "b"),
            Err(CanvexError::ParentChainBroken {
                element_id: "a".to_string()
            })
        );
    }

    #[test]
    fn test_cycle_is_detected() {
        let mut store = chain();
        store.get_mut("root").unwrap().parent = Some("b".to_string());

        assert!(matches!(
            root_of(&store, "b"),
            Err(CanvexError::CycleDetected { .. })
        ));
    }

    #[test]
    fn test_is_ancestor() {
        let store = chain();

        assert!(is_ancestor(&store, "root", "b"));
        assert!(!is_ancestor(&store, "b", "root"));
    }
}
