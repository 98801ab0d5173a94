pub mod context;
pub mod element;
pub mod extras;
pub mod geometry;

pub use context::{Closure, Context, MoveHints};
pub use element::{Element, ElementId, ElementKind};
pub use extras::Extras;
pub use geometry::{Axis, Bounds, Delta, Direction, Point};
