use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declared side channel of a [`Context`](super::Context)
///
/// Features that need to pass data between hooks which has no dedicated
/// context field put it here, keyed by a feature-specific name. Keys are
/// kept ordered so that logging and comparisons are deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Extras {
    data: BTreeMap<String, serde_json::Value>,
}

impl Extras {
    /// Create an empty side channel
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Get a string value by key
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(|v| v.as_str())
    }

    /// Set a value by key, returning the previous one
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: serde_json::Value,
    ) -> Option<serde_json::Value> {
        self.data.insert(key.into(), value)
    }

    /// Remove a value by key
    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.data.remove(key)
    }

    /// Check if a key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the side channel is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
