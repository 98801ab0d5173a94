use std::collections::HashSet;

use tracing::debug;

use crate::command::handler::CommandHandler;
use crate::editor::Editor;
use crate::errors::Result;
use crate::model::{Context, ElementId, MoveHints};
use crate::ops::Store;
use crate::traversal::{closure, is_ancestor, remove_nested};

pub const ELEMENTS_MOVE: &str = "elements.move";

/// `elements.move`: move `context.shapes` and everything they own by
/// `context.delta`
///
/// The closure is computed before the `preExecute` hooks' effects reach the
/// store and is left in `context.closure` for post-execute observers. Top
/// level elements are reparented to `context.new_parent` when set; enclosed
/// descendants keep their parent.
///
/// Dropping the elements into one of themselves or into something they own
/// is rejected.
#[derive(Debug, Default)]
pub struct MoveElementsHandler;

impl CommandHandler for MoveElementsHandler {
    fn can_execute(&self, store: &Store, context: &Context) -> bool {
        let Some(new_parent) = context.new_parent.as_deref() else {
            return true;
        };
        !context
            .shapes
            .iter()
            .any(|id| id == new_parent || is_ancestor(store, id, new_parent))
    }

    fn pre_execute(&self, editor: &mut Editor, context: &mut Context) -> Result<()> {
        context.closure = Some(closure(editor.store(), &context.shapes));
        Ok(())
    }

    fn execute(&self, _store: &mut Store, _context: &mut Context) -> Result<Vec<ElementId>> {
        // every element is moved by a nested shape.move
        Ok(Vec::new())
    }

    fn post_execute(&self, editor: &mut Editor, context: &mut Context) -> Result<()> {
        let Some(closure) = context.closure.clone() else {
            return Ok(());
        };
        let delta = context.delta_or_zero();

        let top_level: HashSet<ElementId> = remove_nested(editor.store(), &closure.top_level)
            .into_iter()
            .collect();

        for id in closure.enclosed_elements() {
            if !editor.store().contains(id) {
                debug!(element_id = %id, "enclosed element vanished, skipping move");
                continue;
            }

            let new_parent = if top_level.contains(id) {
                context.new_parent.clone()
            } else {
                None
            };

            editor.move_shape(id, delta, new_parent, MoveHints { recurse: false })?;
        }

        Ok(())
    }
}
