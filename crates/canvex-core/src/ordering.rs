//! Ordering policies
//!
//! An `OrderingProvider` decides where an element entering a parent lands:
//! the effective parent and the index in its child list. The provider is
//! consulted by `preExecute` hooks on create and move commands, so any
//! command placing an element in a parent goes through the same policy.

use std::rc::Rc;

use tracing::debug;

use crate::bus::EventBus;
use crate::command::handlers::{LABEL_CREATE, SHAPE_CREATE, SHAPE_MOVE};
use crate::command::CommandInterceptor;
use crate::errors::Result;
use crate::model::{Element, ElementId};
use crate::ops::Store;
use crate::traversal::root_of;

/// Placement chosen by an ordering policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordering {
    /// Insertion index in the parent's children; `None` appends
    pub index: Option<usize>,
    /// Effective parent
    pub parent: ElementId,
}

/// Policy deciding parent and child index for an element entering a parent
pub trait OrderingProvider {
    /// Resolve the placement of `element` when added to `requested_parent`
    ///
    /// `element` may not be in the store yet (create commands). Returning
    /// `Ok(None)` leaves the command's own placement untouched.
    ///
    /// # Errors
    ///
    /// Lookup and traversal errors of the requested parent's chain.
    fn ordering(
        &self,
        store: &Store,
        element: &Element,
        requested_parent: &str,
    ) -> Result<Option<Ordering>>;
}

/// Orders children by their numeric `level`
///
/// * elements flagged `always_top_level` are placed under the root of the
///   requested parent's chain
/// * an element is inserted before the first child with a strictly greater
///   level, or appended if there is none
/// * a missing level never compares greater, on either side
/// * an element already among the parent's children is placed as if it had
///   been removed first, so re-resolving it is stable
///
/// # Example
/// ```
/// use canvex_core::model::{Element, ElementKind};
/// use canvex_core::ops::Store;
/// use canvex_core::ordering::{LevelOrderingProvider, OrderingProvider};
///
/// let mut store = Store::new();
/// store.insert(Element::new("root", ElementKind::Root));
/// store.insert(Element::new("a", ElementKind::Shape).with_level(1));
/// store.insert(Element::new("b", ElementKind::Shape).with_level(3));
/// store.attach("a", "root", None).unwrap();
/// store.attach("b", "root", None).unwrap();
///
/// let new = Element::new("n", ElementKind::Shape).with_level(2);
/// let ordering = LevelOrderingProvider.ordering(&store, &new, "root").unwrap().unwrap();
///
/// assert_eq!(ordering.index, Some(1));
/// assert_eq!(ordering.parent, "root");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelOrderingProvider;

impl OrderingProvider for LevelOrderingProvider {
    fn ordering(
        &self,
        store: &Store,
        element: &Element,
        requested_parent: &str,
    ) -> Result<Option<Ordering>> {
        let parent_id = if element.always_top_level {
            root_of(store, requested_parent)?
        } else {
            requested_parent.to_string()
        };
        let parent = store.get(&parent_id)?;

        let current_index = parent.children.iter().position(|c| *c == element.id);

        let mut insert_index = parent.children.iter().position(|child_id| {
            let child_level = store.get(child_id).ok().and_then(|c| c.level);
            matches!((element.level, child_level), (Some(own), Some(other)) if own < other)
        });

        if let (Some(insert), Some(current)) = (insert_index, current_index) {
            if current < insert {
                insert_index = Some(insert - 1);
            }
        }

        Ok(Some(Ordering {
            index: insert_index,
            parent: parent_id,
        }))
    }
}

/// Hook `provider` into element creation and movement
///
/// Sets `parent`/`parent_index` for `shape.create` and `label.create`, and
/// `new_parent`/`new_parent_index` for `shape.move`.
pub fn install_ordering<P>(bus: &mut EventBus, provider: P)
where
    P: OrderingProvider + 'static,
{
    let provider = Rc::new(provider);

    let create_provider = provider.clone();
    bus.before(&[SHAPE_CREATE, LABEL_CREATE], move |editor, event| {
        let context = &mut event.context;
        let (Some(element), Some(parent)) = (context.element.as_deref(), context.parent.as_deref())
        else {
            return Ok(());
        };

        if let Some(ordering) = create_provider.ordering(editor.store(), element, parent)? {
            debug!(
                element_id = %element.id,
                parent = %ordering.parent,
                index = ?ordering.index,
                "ordering resolved"
            );
            context.parent = Some(ordering.parent);
            context.parent_index = ordering.index;
        }
        Ok(())
    });

    bus.before(&[SHAPE_MOVE], move |editor, event| {
        let context = &mut event.context;
        let Some(shape) = context.shape.as_deref() else {
            return Ok(());
        };
        let element = editor.store().get(shape)?;
        let Some(requested) = context.new_parent.clone().or_else(|| element.parent.clone()) else {
            return Ok(());
        };

        if let Some(ordering) = provider.ordering(editor.store(), element, &requested)? {
            debug!(
                element_id = %element.id,
                parent = %ordering.parent,
                index = ?ordering.index,
                "ordering resolved"
            );
            context.new_parent = Some(ordering.parent);
            context.new_parent_index = ordering.index;
        }
        Ok(())
    });
}
