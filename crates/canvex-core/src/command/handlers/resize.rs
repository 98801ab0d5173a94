use crate::command::handler::{require, CommandHandler};
use crate::errors::{CanvexError, Result};
use crate::model::{Context, ElementId};
use crate::ops::Store;

pub const SHAPE_RESIZE: &str = "shape.resize";

/// `shape.resize`: replace the bounds of `context.shape` with
/// `context.new_bounds`
#[derive(Debug, Default)]
pub struct ResizeShapeHandler;

impl CommandHandler for ResizeShapeHandler {
    fn execute(&self, store: &mut Store, context: &mut Context) -> Result<Vec<ElementId>> {
        let id = require(SHAPE_RESIZE, "shape", &context.shape)?;
        let new_bounds = require(SHAPE_RESIZE, "new_bounds", &context.new_bounds)?;

        if new_bounds.width < 0.0 || new_bounds.height < 0.0 {
            return Err(CanvexError::InvalidBounds {
                element_id: id,
                reason: format!(
                    "negative size {}x{}",
                    new_bounds.width, new_bounds.height
                ),
            });
        }

        store.get_mut(&id)?.bounds = new_bounds;
        Ok(vec![id])
    }
}
