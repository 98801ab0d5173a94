//! Command stack, interceptor and built-in handlers

pub mod handler;
pub mod handlers;
pub mod interceptor;
pub mod stack;

pub use handler::{CommandHandler, Execution};
pub use interceptor::{CommandInterceptor, HookPhase};
pub use stack::ELEMENTS_CHANGED;

pub(crate) use stack::StackState;
