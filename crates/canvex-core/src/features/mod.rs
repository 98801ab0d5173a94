//! Interactive features built on the bus and the command stack

pub mod dragging;
pub mod label_support;
pub mod move_gesture;
pub mod space_tool;
pub mod tool_manager;

pub use label_support::install_label_support;
pub use move_gesture::install_move_gesture;
pub use space_tool::install_space_tool;
pub use tool_manager::{GroupProbe, InteractionProbe, ToolEvents, ToolManager};
