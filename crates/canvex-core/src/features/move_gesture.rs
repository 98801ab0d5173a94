//! Interactive move of a selection
//!
//! Runs as a drag session under the `shape.move` prefix. The requested
//! shapes are validated when the gesture starts; on `shape.move.end` the
//! validated shapes are moved in one `elements.move` command.

use tracing::debug;

use crate::bus::{EventBus, UiEvent, DEFAULT_PRIORITY};
use crate::editor::Editor;
use crate::errors::Result;
use crate::model::{Context, Delta, ElementId};
use crate::traversal::remove_nested;

/// Event prefix of the move gesture
pub const MOVE_PREFIX: &str = "shape.move";

impl Editor {
    /// Start moving `shapes`
    ///
    /// `validated_shapes` keeps the shapes that exist, are not a root and
    /// are not nested in another requested shape. Returns false without
    /// firing anything when `shapes` is empty.
    pub fn start_move(&mut self, shapes: Vec<ElementId>, original: Option<UiEvent>) -> Result<bool> {
        if shapes.is_empty() {
            debug!("move requested without shapes");
            return Ok(false);
        }

        let movable: Vec<ElementId> = shapes
            .iter()
            .filter(|id| self.store().get(id).is_ok_and(|e| !e.is_root()))
            .cloned()
            .collect();

        let context = Context {
            validated_shapes: remove_nested(self.store(), &movable),
            ..Context::for_shapes(shapes)
        };

        self.init_drag(MOVE_PREFIX, context, original)?;
        self.start_drag()
    }

    /// Update the displacement of the running move
    pub fn update_move(&mut self, delta: Delta) -> Result<bool> {
        self.update_drag(delta)
    }

    /// Drop the moved shapes onto `target` and finish the gesture
    ///
    /// `None` keeps every shape in its current parent.
    pub fn end_move(&mut self, target: Option<ElementId>, original: Option<UiEvent>) -> Result<bool> {
        match self.drag_context_mut() {
            Some(context) => context.target = target,
            None => return Ok(false),
        }
        self.end_drag(original)
    }
}

/// Register the default move gesture listeners
pub fn install_move_gesture(bus: &mut EventBus) {
    let start = format!("{MOVE_PREFIX}.start");
    let end = format!("{MOVE_PREFIX}.end");

    // preview: validated shapes are dragged visually
    bus.on(&[start.as_str()], DEFAULT_PRIORITY, |_, event| {
        let context = &mut event.context;
        for id in context.validated_shapes.clone() {
            context.make_draggable(&id);
        }
        Ok(())
    });

    bus.on(&[end.as_str()], DEFAULT_PRIORITY, |editor: &mut Editor, event| {
        let context = &event.context;
        if context.validated_shapes.is_empty() {
            debug!("no validated shapes, nothing to move");
            return Ok(());
        }

        editor.move_elements(
            context.validated_shapes.clone(),
            context.delta_or_zero(),
            context.target.clone(),
            context.hints,
        )?;
        Ok(())
    });
}
