//! Priority dispatch table
//!
//! Maps a name to handlers ordered by priority (descending) and then by
//! registration sequence (ascending). Equal priorities fire in registration
//! order.

use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Entry<H> {
    priority: i32,
    sequence: u64,
    handler: H,
}

/// Name-keyed table of prioritized handlers
#[derive(Debug, Clone)]
pub struct PriorityTable<H> {
    entries: HashMap<String, Vec<Entry<H>>>,
    next_sequence: u64,
}

impl<H> Default for PriorityTable<H> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            next_sequence: 0,
        }
    }
}

impl<H: Clone> PriorityTable<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, returning its sequence number
    ///
    /// Sequence numbers are unique across all names of the table.
    pub fn insert(&mut self, name: &str, priority: i32, handler: H) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let list = self.entries.entry(name.to_string()).or_default();
        // first slot with a strictly lower priority keeps ties in registration order
        let at = list
            .iter()
            .position(|e| e.priority < priority)
            .unwrap_or(list.len());
        list.insert(
            at,
            Entry {
                priority,
                sequence,
                handler,
            },
        );

        sequence
    }

    /// Remove the entry with the given sequence number
    ///
    /// Returns false if no such entry exists.
    pub fn remove(&mut self, sequence: u64) -> bool {
        for list in self.entries.values_mut() {
            if let Some(at) = list.iter().position(|e| e.sequence == sequence) {
                list.remove(at);
                return true;
            }
        }
        false
    }

    /// Snapshot of the handlers registered for `name`, in firing order
    pub fn handlers(&self, name: &str) -> Vec<H> {
        self.entries
            .get(name)
            .map(|list| list.iter().map(|e| e.handler.clone()).collect())
            .unwrap_or_default()
    }

    /// Priorities registered for `name`, in firing order
    pub fn priorities(&self, name: &str) -> Vec<i32> {
        self.entries
            .get(name)
            .map(|list| list.iter().map(|e| e.priority).collect())
            .unwrap_or_default()
    }

    pub fn len(&self, name: &str) -> usize {
        self.entries.get(name).map_or(0, Vec::len)
    }

    pub fn is_empty(&self, name: &str) -> bool {
        self.len(name) == 0
    }
}
