use crate::command::handler::{require, CommandHandler};
use crate::editor::Editor;
use crate::errors::{CanvexError, Result};
use crate::model::{Context, ElementId};
use crate::ops::Store;
use crate::traversal::is_ancestor;

pub const SHAPE_MOVE: &str = "shape.move";

/// `shape.move`: translate `context.shape` by `context.delta`
///
/// When `context.new_parent` is set the shape is reparented at
/// `context.new_parent_index`; otherwise it is re-inserted into its current
/// parent at that index (if one is given). Children follow in a nested
/// `elements.move` unless `hints.recurse` is false.
#[derive(Debug, Default)]
pub struct MoveShapeHandler;

impl CommandHandler for MoveShapeHandler {
    fn can_execute(&self, store: &Store, context: &Context) -> bool {
        context
            .shape
            .as_deref()
            .and_then(|id| store.get(id).ok())
            .is_some_and(|element| !element.is_root())
    }

    fn execute(&self, store: &mut Store, context: &mut Context) -> Result<Vec<ElementId>> {
        let id = require(SHAPE_MOVE, "shape", &context.shape)?;
        let delta = context.delta_or_zero();

        let old_parent = store.get(&id)?.parent.clone();
        let new_parent = context.new_parent.clone().or_else(|| old_parent.clone());

        let mut changed = vec![id.clone()];

        if let Some(ref parent) = new_parent {
            if *parent == id || is_ancestor(store, &id, parent) {
                return Err(CanvexError::CycleDetected { element_id: id });
            }
            if !store.contains(parent) {
                return Err(CanvexError::ParentNotFound {
                    element_id: parent.clone(),
                });
            }

            let reposition = context.new_parent.is_some() || context.new_parent_index.is_some();
            if reposition {
                store.detach(&id);
                store.attach(&id, parent, context.new_parent_index)?;
                changed.extend(old_parent.iter().cloned());
                if old_parent.as_ref() != Some(parent) {
                    changed.push(parent.clone());
                }
            }
        }

        store.get_mut(&id)?.translate(delta);
        Ok(changed)
    }

    fn post_execute(&self, editor: &mut Editor, context: &mut Context) -> Result<()> {
        if !context.hints.recurse {
            return Ok(());
        }
        let id = require(SHAPE_MOVE, "shape", &context.shape)?;
        let children = editor.store().get(&id)?.children.clone();
        if children.is_empty() {
            return Ok(());
        }

        editor.move_elements(children, context.delta_or_zero(), None, Default::default())?;
        Ok(())
    }
}
