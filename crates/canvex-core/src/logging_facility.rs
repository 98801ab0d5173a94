//! Structured logging for canvex
//!
//! Top-level commands are bracketed by `start`/`end` (or `end_error`)
//! records carrying the command name as `op` and its transaction id.
//! Everything below that boundary, such as nested commands, hook dispatch
//! and tool transitions, logs at `debug`.
//!
//! The subscriber is chosen by `EditorConfig::log_profile`:
//!
//! ```rust
//! use canvex_core::{Editor, EditorConfig};
//!
//! let config = EditorConfig::from_yaml_str("log_profile: development\n").unwrap();
//! let _editor = Editor::new(config).unwrap();
//! ```
//!
//! Tests read the records back through [`test_capture`].

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
