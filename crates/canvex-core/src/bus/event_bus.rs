use std::rc::Rc;

use crate::editor::Editor;
use crate::errors::Result;

use super::event::Event;
use super::priority_table::PriorityTable;

/// Priority of listeners registered without an explicit one
pub const DEFAULT_PRIORITY: i32 = 1000;

/// Runs after default listeners
pub const LOW_PRIORITY: i32 = 250;

/// Runs before default listeners
pub const HIGH_PRIORITY: i32 = 1400;

/// Listener callback
///
/// Listeners get the whole editor so they can read the store, run nested
/// commands or fire further events.
pub type Listener = Rc<dyn Fn(&mut Editor, &mut Event) -> Result<()>>;

/// Handle returned by [`EventBus::on`], used to unregister a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Named event channels with prioritized listeners
///
/// The bus only stores listeners; dispatch goes through
/// [`Editor::fire`](crate::editor::Editor::fire) so listeners can borrow
/// the editor mutably.
#[derive(Clone, Default)]
pub struct EventBus {
    table: PriorityTable<Listener>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus").finish_non_exhaustive()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for each of `names` at `priority`
    ///
    /// Returns one id per name.
    pub fn on<F>(&mut self, names: &[&str], priority: i32, listener: F) -> Vec<ListenerId>
    where
        F: Fn(&mut Editor, &mut Event) -> Result<()> + 'static,
    {
        let listener: Listener = Rc::new(listener);
        names
            .iter()
            .map(|name| ListenerId(self.table.insert(name, priority, listener.clone())))
            .collect()
    }

    /// Unregister a listener; returns false if it was already gone
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.table.remove(id.0)
    }

    /// Snapshot of the listeners of `name` in firing order
    pub fn listeners(&self, name: &str) -> Vec<Listener> {
        self.table.handlers(name)
    }

    /// Priorities of the listeners of `name` in firing order
    pub fn priorities(&self, name: &str) -> Vec<i32> {
        self.table.priorities(name)
    }

    pub fn has_listeners(&self, name: &str) -> bool {
        !self.table.is_empty(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_registers_every_name() {
        let mut bus = EventBus::new();
        let ids = bus.on(&["a", "b"], DEFAULT_PRIORITY, |_, _| Ok(()));

        assert_eq!(ids.len(), 2);
        assert!(bus.has_listeners("a"));
        assert!(bus.has_listeners("b"));
    }

    #[test]
    fn test_off_removes_single_registration() {
        let mut bus = EventBus::new();
        let ids = bus.on(&["a", "b"], DEFAULT_PRIORITY, |_, _| Ok(()));

        assert!(bus.off(ids[0]));
        assert!(!bus.has_listeners("a"));
        assert!(bus.has_listeners("b"));
        assert!(!bus.off(ids[0]));
    }

    #[test]
    fn test_priority_constants_order() {
        let mut bus = EventBus::new();
        bus.on(&["e"], LOW_PRIORITY, |_, _| Ok(()));
        bus.on(&["e"], HIGH_PRIORITY, |_, _| Ok(()));
        bus.on(&["e"], DEFAULT_PRIORITY, |_, _| Ok(()));

        assert_eq!(bus.priorities("e"), vec![1400, 1000, 250]);
    }
}
