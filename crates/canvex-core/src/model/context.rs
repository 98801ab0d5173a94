//! Typed context shared by the hooks of one command or gesture
//!
//! Hooks coordinate only through this value. Fields are well known and
//! optional; anything else goes through [`Extras`].

use std::collections::HashSet;

use super::element::{Element, ElementId};
use super::extras::Extras;
use super::geometry::{Bounds, Delta, Direction, Point};

/// Options for `shape.move` and `elements.move`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveHints {
    /// Move children along with the shape
    pub recurse: bool,
}

impl Default for MoveHints {
    fn default() -> Self {
        Self { recurse: true }
    }
}

/// All elements affected by a move
///
/// `enclosed_elements` lists every requested element and its transitive
/// children in traversal order; membership is answered by a hash set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Closure {
    pub top_level: Vec<ElementId>,
    pub all_shapes: Vec<ElementId>,
    pub all_connections: Vec<ElementId>,
    enclosed: Vec<ElementId>,
    enclosed_set: HashSet<ElementId>,
}

impl Closure {
    /// Record an enclosed element; returns false if already present
    pub fn enclose(&mut self, id: &str) -> bool {
        if !self.enclosed_set.insert(id.to_string()) {
            return false;
        }
        self.enclosed.push(id.to_string());
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.enclosed_set.contains(id)
    }

    /// Enclosed ids in traversal order
    pub fn enclosed_elements(&self) -> &[ElementId] {
        &self.enclosed
    }

    pub fn len(&self) -> usize {
        self.enclosed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enclosed.is_empty()
    }
}

/// Payload of a command or gesture, mutated by hooks in turn
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    pub shape: Option<ElementId>,
    pub shapes: Vec<ElementId>,
    pub validated_shapes: Vec<ElementId>,
    pub delta: Option<Delta>,
    pub position: Option<Point>,
    pub new_bounds: Option<Bounds>,
    pub direction: Option<Direction>,
    pub closure: Option<Closure>,
    pub parent: Option<ElementId>,
    pub parent_index: Option<usize>,
    pub new_parent: Option<ElementId>,
    pub new_parent_index: Option<usize>,
    /// Element under the pointer when a gesture ends
    pub target: Option<ElementId>,
    pub moving_shapes: Vec<ElementId>,
    pub resizing_shapes: Vec<ElementId>,
    /// Elements visually dragged along with the gesture
    pub drag_set: Vec<ElementId>,
    pub hints: MoveHints,
    /// Re-initialize an already active tool instead of toggling it off
    pub reactivate: bool,
    /// Pending element for create commands
    pub element: Option<Box<Element>>,
    pub extras: Extras,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context addressing a single shape
    pub fn for_shape(id: impl Into<ElementId>) -> Self {
        Self {
            shape: Some(id.into()),
            ..Self::default()
        }
    }

    /// Context for a multi-element gesture
    pub fn for_shapes(ids: Vec<ElementId>) -> Self {
        Self {
            shapes: ids,
            ..Self::default()
        }
    }

    pub fn with_delta(mut self, delta: Delta) -> Self {
        self.delta = Some(delta);
        self
    }

    pub fn with_reactivate(mut self, reactivate: bool) -> Self {
        self.reactivate = reactivate;
        self
    }

    /// Register an element with the visual drag tracking, once
    pub fn make_draggable(&mut self, id: &str) {
        if !self.drag_set.iter().any(|d| d == id) {
            self.drag_set.push(id.to_string());
        }
    }

    /// Delta or zero
    pub fn delta_or_zero(&self) -> Delta {
        self.delta.unwrap_or_default()
    }
}
