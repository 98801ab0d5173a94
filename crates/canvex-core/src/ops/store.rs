use std::collections::HashMap;

use crate::errors::{CanvexError, Result};
use crate::model::{Element, ElementId};

/// Arena of diagram elements indexed by id
///
/// Parent/child and label links are id references, so traversal never
/// follows owning pointers. Not thread-safe; one editor owns one store.
///
/// Commands run inside journal frames: the first write to an element within
/// a frame records its previous value, so a rejected or failed command
/// restores only the elements it touched.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) elements: HashMap<ElementId, Element>,
    journal: Vec<HashMap<ElementId, Option<Element>>>,
}

impl PartialEq for Store {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            journal: Vec::new(),
        }
    }

    /// Get an element by ID
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if no element has this id.
    pub fn get(&self, id: &str) -> Result<&Element> {
        self.elements
            .get(id)
            .ok_or_else(|| CanvexError::ElementNotFound {
                element_id: id.to_string(),
            })
    }

    /// Get a mutable reference to an element by ID
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if no element has this id.
    pub fn get_mut(&mut self, id: &str) -> Result<&mut Element> {
        self.touch(id);
        self.elements
            .get_mut(id)
            .ok_or_else(|| CanvexError::ElementNotFound {
                element_id: id.to_string(),
            })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All elements, sorted by id for deterministic iteration
    pub fn list_elements(&self) -> Vec<&Element> {
        let mut elements: Vec<&Element> = self.elements.values().collect();
        elements.sort_by(|a, b| a.id.cmp(&b.id));
        elements
    }

    /// Insert an element, replacing any element with the same id
    ///
    /// Links stored on the element are taken as-is; use [`Store::attach`]
    /// and [`Store::link_label`] to keep both sides of a relation in sync.
    pub fn insert(&mut self, element: Element) {
        self.touch(&element.id);
        self.elements.insert(element.id.clone(), element);
    }

    /// Remove an element, unhooking it from its parent and label peer
    ///
    /// Children are left in the store with a dangling parent link; callers
    /// removing subtrees remove children first.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.detach(id);

        self.touch(id);
        let element = self.elements.remove(id)?;
        if let Some(label) = element.label.as_deref().and_then(|l| self.entry_mut(l)) {
            label.label_target = None;
        }
        if let Some(target) = element
            .label_target
            .as_deref()
            .and_then(|t| self.entry_mut(t))
        {
            target.label = None;
        }
        Some(element)
    }

    /// Position of an element in its parent's child list
    pub fn index_in_parent(&self, id: &str) -> Option<usize> {
        let parent_id = self.elements.get(id)?.parent.as_ref()?;
        self.elements
            .get(parent_id)?
            .children
            .iter()
            .position(|c| c == id)
    }

    /// Insert `child` into `parent`'s children and set its parent link
    ///
    /// `index` is clamped to the child list length; `None` appends. The
    /// child must already be detached.
    ///
    /// # Errors
    ///
    /// * `ElementNotFound` - child does not exist
    /// * `ParentNotFound` - parent does not exist
    pub fn attach(&mut self, child: &str, parent: &str, index: Option<usize>) -> Result<usize> {
        if !self.contains(child) {
            return Err(CanvexError::ElementNotFound {
                element_id: child.to_string(),
            });
        }

        let parent_element =
            self.entry_mut(parent)
                .ok_or_else(|| CanvexError::ParentNotFound {
                    element_id: parent.to_string(),
                })?;

        let len = parent_element.children.len();
        let at = index.map_or(len, |i| i.min(len));
        parent_element.children.insert(at, child.to_string());

        self.get_mut(child)?.parent = Some(parent.to_string());
        Ok(at)
    }

    /// Remove `child` from its parent's children, returning the old index
    pub fn detach(&mut self, child: &str) -> Option<usize> {
        let parent_id = self.elements.get(child)?.parent.clone()?;
        self.entry_mut(child)?.parent = None;
        let parent = self.entry_mut(&parent_id)?;
        let index = parent.children.iter().position(|c| c == child)?;
        parent.children.remove(index);
        Some(index)
    }

    /// Link `label` to `target`, keeping both sides of the relation in sync
    ///
    /// Previous links of either side are cleared first.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if either element is missing.
    pub fn link_label(&mut self, target: &str, label: &str) -> Result<()> {
        self.get(target)?;
        self.get(label)?;

        self.unlink_label_of(target);
        if let Some(old_target) = self.get_mut(label)?.label_target.take() {
            if let Some(old) = self.entry_mut(&old_target) {
                old.label = None;
            }
        }

        self.get_mut(target)?.label = Some(label.to_string());
        self.get_mut(label)?.label_target = Some(target.to_string());
        Ok(())
    }

    fn unlink_label_of(&mut self, target: &str) {
        let previous = self
            .entry_mut(target)
            .and_then(|element| element.label.take());
        if let Some(previous) = previous {
            if let Some(label) = self.entry_mut(&previous) {
                label.label_target = None;
            }
        }
    }

    /// Open a journal frame
    pub(crate) fn begin_frame(&mut self) {
        self.journal.push(HashMap::new());
    }

    /// Close the innermost frame, keeping its writes
    ///
    /// Recorded values move to the enclosing frame unless it already holds
    /// an older value for the same element.
    pub(crate) fn commit_frame(&mut self) {
        let Some(frame) = self.journal.pop() else {
            return;
        };
        if let Some(outer) = self.journal.last_mut() {
            for (id, previous) in frame {
                outer.entry(id).or_insert(previous);
            }
        }
    }

    /// Close the innermost frame, restoring every element it touched
    pub(crate) fn rollback_frame(&mut self) {
        let Some(frame) = self.journal.pop() else {
            return;
        };
        for (id, previous) in frame {
            match previous {
                Some(element) => {
                    self.elements.insert(id, element);
                }
                None => {
                    self.elements.remove(&id);
                }
            }
        }
    }

    /// Record the current value of `id` in the innermost frame, once
    fn touch(&mut self, id: &str) {
        let Some(frame) = self.journal.last_mut() else {
            return;
        };
        if !frame.contains_key(id) {
            frame.insert(id.to_string(), self.elements.get(id).cloned());
        }
    }

    fn entry_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.touch(id);
        self.elements.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind;

    fn store_with(ids: &[(&str, ElementKind)]) -> Store {
        let mut store = Store::new();
        for (id, kind) in ids {
            store.insert(Element::new(*id, *kind));
        }
        store
    }

    #[test]
    fn test_new_store() {
        let store = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.list_elements().len(), 0);
    }

    #[test]
    fn test_get_nonexistent_element() {
        let store = Store::new();
        let result = store.get("nonexistent");
        assert!(matches!(result, Err(CanvexError::ElementNotFound { .. })));
    }

    #[test]
    fn test_attach_and_detach() {
        let mut store = store_with(&[
            ("root", ElementKind::Root),
            ("a", ElementKind::Shape),
            ("b", ElementKind::Shape),
            ("c", ElementKind::Shape),
        ]);

        assert_eq!(store.attach("a", "root", None).unwrap(), 0);
        assert_eq!(store.attach("b", "root", None).unwrap(), 1);
        assert_eq!(store.attach("c", "root", Some(1)).unwrap(), 1);
        assert_eq!(store.get("root").unwrap().children, vec!["a", "c", "b"]);
        assert_eq!(store.index_in_parent("b"), Some(2));

        assert_eq!(store.detach("c"), Some(1));
        assert_eq!(store.get("c").unwrap().parent, None);
        assert_eq!(store.get("root").unwrap().children, vec!["a", "b"]);
        assert_eq!(store.detach("c"), None);
    }

    #[test]
    fn test_attach_clamps_index() {
        let mut store = store_with(&[("root", ElementKind::Root), ("a", ElementKind::Shape)]);

        assert_eq!(store.attach("a", "root", Some(42)).unwrap(), 0);
    }

    #[test]
    fn test_attach_to_missing_parent() {
        let mut store = store_with(&[("a", ElementKind::Shape)]);

        let result = store.attach("a", "ghost", None);
        assert!(matches!(result, Err(CanvexError::ParentNotFound { .. })));
        assert_eq!(store.get("a").unwrap().parent, None);
    }

    #[test]
    fn test_link_label_relinks_both_sides() {
        let mut store = store_with(&[
            ("s1", ElementKind::Shape),
            ("s2", ElementKind::Shape),
            ("l1", ElementKind::Label),
        ]);

        store.link_label("s1", "l1").unwrap();
        assert_eq!(store.get("s1").unwrap().label.as_deref(), Some("l1"));
        assert_eq!(store.get("l1").unwrap().label_target.as_deref(), Some("s1"));

        store.link_label("s2", "l1").unwrap();
        assert_eq!(store.get("s1").unwrap().label, None);
        assert_eq!(store.get("s2").unwrap().label.as_deref(), Some("l1"));
        assert_eq!(store.get("l1").unwrap().label_target.as_deref(), Some("s2"));
    }

    #[test]
    fn test_rollback_restores_touched_elements() {
        let mut store = store_with(&[("root", ElementKind::Root), ("a", ElementKind::Shape)]);
        store.attach("a", "root", None).unwrap();
        let before = store.clone();

        store.begin_frame();
        store.detach("a");
        store.insert(Element::new("b", ElementKind::Shape));
        store.attach("b", "root", None).unwrap();
        store.rollback_frame();

        assert_eq!(store, before);
        assert!(!store.contains("b"));
        assert_eq!(store.get("a").unwrap().parent.as_deref(), Some("root"));
    }

    #[test]
    fn test_nested_commit_then_outer_rollback() {
        let mut store = store_with(&[("root", ElementKind::Root), ("a", ElementKind::Shape)]);
        let before = store.clone();

        store.begin_frame();
        store.get_mut("a").unwrap().level = Some(1);
        store.begin_frame();
        store.get_mut("a").unwrap().level = Some(2);
        store.attach("a", "root", None).unwrap();
        store.commit_frame();
        assert_eq!(store.get("a").unwrap().level, Some(2));
        store.rollback_frame();

        assert_eq!(store, before);
    }

    #[test]
    fn test_nested_rollback_keeps_outer_writes() {
        let mut store = store_with(&[("a", ElementKind::Shape)]);

        store.begin_frame();
        store.get_mut("a").unwrap().level = Some(1);
        store.begin_frame();
        store.get_mut("a").unwrap().level = Some(2);
        store.rollback_frame();
        store.commit_frame();

        assert_eq!(store.get("a").unwrap().level, Some(1));
    }

    #[test]
    fn test_remove_unhooks_relations() {
        let mut store = store_with(&[
            ("root", ElementKind::Root),
            ("s1", ElementKind::Shape),
            ("l1", ElementKind::Label),
        ]);
        store.attach("s1", "root", None).unwrap();
        store.attach("l1", "root", None).unwrap();
        store.link_label("s1", "l1").unwrap();

        let removed = store.remove("s1").unwrap();

        assert_eq!(removed.id, "s1");
        assert!(!store.contains("s1"));
        assert_eq!(store.get("root").unwrap().children, vec!["l1"]);
        assert_eq!(store.get("l1").unwrap().label_target, None);
    }
}
