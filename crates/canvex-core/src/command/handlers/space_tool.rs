use crate::command::handler::{require, CommandHandler};
use crate::editor::Editor;
use crate::errors::Result;
use crate::features::space_tool::resize_bounds;
use crate::model::{Context, ElementId, MoveHints};
use crate::ops::Store;

pub const SPACE_TOOL: &str = "spaceTool";

/// `spaceTool`: make or remove space in two phases
///
/// 1. resize every `context.resizing_shapes` entry (pre-execute)
/// 2. move `context.moving_shapes` by `context.delta` (post-execute)
///
/// Moves are computed against post-resize bounds, so the order of the
/// phases is fixed.
#[derive(Debug, Default)]
pub struct SpaceToolHandler;

impl CommandHandler for SpaceToolHandler {
    fn pre_execute(&self, editor: &mut Editor, context: &mut Context) -> Result<()> {
        let delta = context.delta_or_zero();
        let resizing = context.resizing_shapes.clone();
        if resizing.is_empty() {
            return Ok(());
        }
        let direction = require(SPACE_TOOL, "direction", &context.direction)?;

        for id in &resizing {
            let bounds = editor.store().get(id)?.bounds;
            editor.resize_shape(id, resize_bounds(bounds, direction, delta))?;
        }
        Ok(())
    }

    fn execute(&self, _store: &mut Store, _context: &mut Context) -> Result<Vec<ElementId>> {
        Ok(Vec::new())
    }

    fn post_execute(&self, editor: &mut Editor, context: &mut Context) -> Result<()> {
        if context.moving_shapes.is_empty() {
            return Ok(());
        }
        editor.move_elements(
            context.moving_shapes.clone(),
            context.delta_or_zero(),
            None,
            MoveHints::default(),
        )?;
        Ok(())
    }
}
