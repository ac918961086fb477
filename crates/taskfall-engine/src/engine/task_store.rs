use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::core::ShapeId;

/// External key-value store mapping shape identifiers to task text.
///
/// The engine never reads board layout from the store; it only writes a task
/// when a piece is fixed and removes it when the shape is cleared or deleted.
/// Implementations are synchronous write-through: `put` completes before the
/// fixed shape becomes visible for selection, and `remove` completes before
/// the identifier could be reused.
pub trait TaskStore: fmt::Debug {
    /// Persists `text` under `id`, replacing any previous value.
    fn put(&mut self, id: ShapeId, text: &str);

    /// Returns the stored text for `id`, or `default` if absent.
    fn get(&self, id: ShapeId, default: &str) -> String;

    /// Removes the entry for `id`. Absent identifiers are a no-op.
    fn remove(&mut self, id: ShapeId);
}

/// In-memory task store backed by a shared map.
///
/// Cloning yields another handle onto the same map, so a test can keep one
/// handle for assertions while the game field owns the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryTaskStore {
    tasks: Rc<RefCell<HashMap<ShapeId, String>>>,
}

impl MemoryTaskStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ShapeId) -> bool {
        self.tasks.borrow().contains_key(&id)
    }
}

impl TaskStore for MemoryTaskStore {
    fn put(&mut self, id: ShapeId, text: &str) {
        self.tasks.borrow_mut().insert(id, text.to_owned());
    }

    fn get(&self, id: ShapeId, default: &str) -> String {
        self.tasks
            .borrow()
            .get(&id)
            .cloned()
            .unwrap_or_else(|| default.to_owned())
    }

    fn remove(&mut self, id: ShapeId) {
        self.tasks.borrow_mut().remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_remove() {
        let mut store = MemoryTaskStore::new();
        let id = ShapeId::new(1);

        assert_eq!(store.get(id, "fallback"), "fallback");

        store.put(id, "buy milk");
        assert_eq!(store.get(id, "fallback"), "buy milk");
        assert_eq!(store.len(), 1);

        store.remove(id);
        assert_eq!(store.get(id, "fallback"), "fallback");
        assert!(store.is_empty());

        // removing again is a no-op
        store.remove(id);
        assert!(store.is_empty());
    }

    #[test]
    fn test_clone_shares_the_map() {
        let mut store = MemoryTaskStore::new();
        let handle = store.clone();

        store.put(ShapeId::new(5), "shared");
        assert!(handle.contains(ShapeId::new(5)));
        assert_eq!(handle.get(ShapeId::new(5), ""), "shared");
    }
}
