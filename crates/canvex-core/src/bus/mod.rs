//! Event bus: named channels, prioritized listeners and the event payload

pub mod event;
pub mod event_bus;
pub mod priority_table;

pub use event::{Event, Outcome, UiEvent};
pub use event_bus::{
    EventBus, Listener, ListenerId, DEFAULT_PRIORITY, HIGH_PRIORITY, LOW_PRIORITY,
};
pub use priority_table::PriorityTable;
