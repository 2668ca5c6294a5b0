//! Insertion-ordered entity table shared by the in-memory repositories

use std::collections::HashMap;

/// Map from id to entity that remembers first-insertion order
///
/// Overwriting an existing id keeps its original position.
#[derive(Debug)]
pub(crate) struct EntityTable<T> {
    entries: HashMap<String, T>,
    order: Vec<String>,
}

impl<T: Clone> EntityTable<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub(crate) fn get(&self, id: &str) -> Option<T> {
        self.entries.get(id).cloned()
    }

    pub(crate) fn upsert(&mut self, id: &str, entity: T) {
        if self.entries.insert(id.to_string(), entity).is_none() {
            self.order.push(id.to_string());
        }
    }

    pub(crate) fn remove(&mut self, id: &str) -> bool {
        if self.entries.remove(id).is_some() {
            self.order.retain(|existing| existing != id);
            true
        } else {
            false
        }
    }

    /// Entities in insertion order, filtered by `keep`
    pub(crate) fn values_where(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id))
            .filter(|entity| keep(entity))
            .cloned()
            .collect()
    }

    pub(crate) fn values(&self) -> Vec<T> {
        self.values_where(|_| true)
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

impl<T: Clone> Default for EntityTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
