//! Built-in command handlers

pub mod create;
pub mod elements_move;
pub mod move_shape;
pub mod resize;
pub mod space_tool;

pub use create::{CreateLabelHandler, CreateShapeHandler, LABEL_CREATE, SHAPE_CREATE};
pub use elements_move::{MoveElementsHandler, ELEMENTS_MOVE};
pub use move_shape::{MoveShapeHandler, SHAPE_MOVE};
pub use resize::{ResizeShapeHandler, SHAPE_RESIZE};
pub use space_tool::{SpaceToolHandler, SPACE_TOOL};
