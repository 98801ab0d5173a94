//! Canvex Core - interaction kernel of a diagram editor
//!
//! This crate coordinates spatial edits on a graph of positioned elements:
//! - Element arena with id-based parent/child and label links
//! - Event bus with prioritized listeners
//! - Command stack with interceptor phases and all-or-nothing execution
//! - Ordering policies deciding parent and child index on (re)parenting
//! - Move gesture, label support, space tool and tool activation
//!
//! All state lives in an [`Editor`]; listeners and command handlers get
//! mutable access to it while they run.

pub mod bus;
pub mod command;
pub mod config;
pub mod editor;
pub mod errors;
pub mod features;
pub mod logging_facility;
pub mod model;
pub mod modeling;
pub mod ops;
pub mod ordering;
pub mod rules;
pub mod traversal;

// Used by the logging macros
pub use canvex_core_types;

// Re-export commonly used types
pub use bus::{Event, EventBus, Outcome, UiEvent, DEFAULT_PRIORITY, HIGH_PRIORITY, LOW_PRIORITY};
pub use command::{CommandHandler, CommandInterceptor, Execution, HookPhase};
pub use config::{EditorConfig, OrderingMode};
pub use editor::Editor;
pub use errors::{CanvexError, ExError, ExErrorKind, Result};
pub use model::{Bounds, Context, Delta, Direction, Element, ElementId, ElementKind, Point};
pub use ops::Store;
pub use ordering::{LevelOrderingProvider, Ordering, OrderingProvider};
