//! Key/value storage backing the session.
//!
//! The browser build stores session state in `localStorage`; native code and
//! tests use [`MemoryStore`]. The session model is single-threaded, so stores
//! use interior mutability behind `&self` rather than locks.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use staffdesk_core::Result;

use crate::error::StoreError;

/// A persistent string key/value store.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Returns the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let store = MemoryStore::new();
        store.set("token", "abc").expect("set");
        assert_eq!(store.get("token").as_deref(), Some("abc"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn set_replaces_value() {
        let store = MemoryStore::new();
        store.set("role", "ADMIN").expect("set");
        store.set("role", "MANAGER").expect("set");
        assert_eq!(store.get("role").as_deref(), Some("MANAGER"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let store = MemoryStore::new();
        store.remove("token");
        assert!(store.is_empty());
    }

    #[test]
    fn shared_handle_sees_writes() {
        let store = Rc::new(MemoryStore::new());
        let handle = Rc::clone(&store);
        handle.set("email", "ann@example.com").expect("set");
        assert_eq!(store.get("email").as_deref(), Some("ann@example.com"));

        let borrowed = &*store;
        borrowed.remove("email");
        assert!(store.is_empty());
    }
}
