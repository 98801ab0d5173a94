pub mod ancestry;
pub mod closure;

pub use ancestry::{ancestors, is_ancestor, root_of};
pub use closure::{closure, remove_nested};
