pub mod factory;
pub mod store;

pub use factory::{ElementAttrs, ElementFactory};
pub use store::Store;
