use serde::{Deserialize, Serialize};

use super::geometry::{Bounds, Delta, Point};

/// Stable identifier of an element
pub type ElementId = String;

/// Tag distinguishing the kinds of diagram elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Root,
    Shape,
    Connection,
    Label,
}

impl ElementKind {
    /// Prefix used for generated ids
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Root => "root",
            ElementKind::Shape => "shape",
            ElementKind::Connection => "connection",
            ElementKind::Label => "label",
        }
    }
}

/// Element - a node of the diagram graph
///
/// Relations are id references into the owning [`Store`](crate::ops::Store):
/// `parent`/`children` express ownership, `label`/`label_target` are a peer
/// link kept symmetric by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier, stable for the element's lifetime
    pub id: ElementId,

    pub kind: ElementKind,

    /// Owning element (None for roots and detached elements)
    pub parent: Option<ElementId>,

    /// Owned elements in drawing order
    pub children: Vec<ElementId>,

    /// Label annotating this element
    pub label: Option<ElementId>,

    /// Element this label annotates (labels only)
    pub label_target: Option<ElementId>,

    /// Externally assigned ordering key
    pub level: Option<i64>,

    /// Always place directly below the diagram root
    pub always_top_level: bool,

    pub hidden: bool,

    pub bounds: Bounds,

    /// Connection waypoints
    pub waypoints: Vec<Point>,
}

impl Element {
    /// Create a detached element of the given kind
    pub fn new(id: impl Into<ElementId>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            parent: None,
            children: Vec::new(),
            label: None,
            label_target: None,
            level: None,
            always_top_level: false,
            hidden: false,
            bounds: Bounds::default(),
            waypoints: Vec::new(),
        }
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_always_top_level(mut self, always_top_level: bool) -> Self {
        self.always_top_level = always_top_level;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_waypoints(mut self, waypoints: Vec<Point>) -> Self {
        self.waypoints = waypoints;
        self
    }

    pub fn is_root(&self) -> bool {
        self.kind == ElementKind::Root
    }

    pub fn is_label(&self) -> bool {
        self.kind == ElementKind::Label || self.label_target.is_some()
    }

    pub fn is_connection(&self) -> bool {
        self.kind == ElementKind::Connection
    }

    /// Shift bounds and waypoints by `delta`
    pub fn translate(&mut self, delta: Delta) {
        self.bounds = self.bounds.translate(delta);
        for waypoint in &mut self.waypoints {
            *waypoint = waypoint.translate(delta);
        }
    }
}
