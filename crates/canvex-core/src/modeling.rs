//! Modeling API
//!
//! Convenience entry points that build the context of a built-in command
//! and run it through the command stack, so every call is intercepted and
//! atomic.

use crate::command::handlers::{
    ELEMENTS_MOVE, LABEL_CREATE, SHAPE_CREATE, SHAPE_MOVE, SHAPE_RESIZE, SPACE_TOOL,
};
use crate::command::Execution;
use crate::editor::Editor;
use crate::errors::Result;
use crate::model::{Bounds, Context, Delta, Direction, Element, ElementId, MoveHints, Point};

impl Editor {
    /// Add `element` to `parent`, centered on `position`
    ///
    /// The ordering policy may pick a different parent and index.
    ///
    /// # Errors
    ///
    /// * `ParentNotFound` - `parent` doesn't exist
    /// * `HandlerFailed` - an element with the same id exists
    pub fn create_shape(
        &mut self,
        element: Element,
        position: Point,
        parent: &str,
    ) -> Result<Execution> {
        let context = Context {
            element: Some(Box::new(element)),
            position: Some(position),
            parent: Some(parent.to_string()),
            ..Context::default()
        };
        self.execute(SHAPE_CREATE, context)
    }

    /// Add `element` as the label of `target`, placed in the target's parent
    ///
    /// # Errors
    ///
    /// * `ElementNotFound` - `target` doesn't exist
    pub fn create_label(
        &mut self,
        target: &str,
        element: Element,
        position: Point,
    ) -> Result<Execution> {
        let target_element = self.store().get(target)?;
        let parent = target_element
            .parent
            .clone()
            .unwrap_or_else(|| target_element.id.clone());

        let context = Context {
            element: Some(Box::new(element)),
            position: Some(position),
            parent: Some(parent),
            target: Some(target.to_string()),
            ..Context::default()
        };
        self.execute(LABEL_CREATE, context)
    }

    /// Move a single element by `delta`, optionally into `new_parent`
    pub fn move_shape(
        &mut self,
        id: &str,
        delta: Delta,
        new_parent: Option<ElementId>,
        hints: MoveHints,
    ) -> Result<Execution> {
        let context = Context {
            new_parent,
            hints,
            ..Context::for_shape(id).with_delta(delta)
        };
        self.execute(SHAPE_MOVE, context)
    }

    /// Replace the bounds of an element
    ///
    /// # Errors
    ///
    /// * `InvalidBounds` - negative width or height
    pub fn resize_shape(&mut self, id: &str, new_bounds: Bounds) -> Result<Execution> {
        let context = Context {
            new_bounds: Some(new_bounds),
            ..Context::for_shape(id)
        };
        self.execute(SHAPE_RESIZE, context)
    }

    /// Move a set of elements and everything they own by `delta`
    ///
    /// Top level elements are reparented to `new_parent` when given.
    pub fn move_elements(
        &mut self,
        ids: Vec<ElementId>,
        delta: Delta,
        new_parent: Option<ElementId>,
        hints: MoveHints,
    ) -> Result<Execution> {
        let context = Context {
            new_parent,
            hints,
            ..Context::for_shapes(ids).with_delta(delta)
        };
        self.execute(ELEMENTS_MOVE, context)
    }

    /// Resize `resizing` shapes towards `direction`, then move `moving`
    /// elements, all by `delta`
    pub fn create_space(
        &mut self,
        moving: Vec<ElementId>,
        resizing: Vec<ElementId>,
        delta: Delta,
        direction: Direction,
    ) -> Result<Execution> {
        let context = Context {
            moving_shapes: moving,
            resizing_shapes: resizing,
            direction: Some(direction),
            ..Context::new().with_delta(delta)
        };
        self.execute(SPACE_TOOL, context)
    }
}
