//! In-process cache of raw GraphQL response bodies keyed by operation name.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Cache of raw response text keyed by query operation name.
pub trait ContentCache {
    /// Returns the cached body for `key`.
    fn get_text(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous body.
    fn put_text(&self, key: &str, value: &str);

    /// Drops the cached body for `key`.
    fn invalidate(&self, key: &str);
}

#[derive(Debug, Clone, Copy, Default)]
/// Cache that never stores anything; every query reaches the transport.
pub struct NoopContentCache;

impl ContentCache for NoopContentCache {
    fn get_text(&self, _key: &str) -> Option<String> {
        None
    }

    fn put_text(&self, _key: &str, _value: &str) {}

    fn invalidate(&self, _key: &str) {}
}

#[derive(Debug, Clone, Default)]
/// Shared in-memory cache; clones observe the same entries.
pub struct MemoryContentCache {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryContentCache {
    /// Number of cached responses.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl ContentCache for MemoryContentCache {
    fn get_text(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    fn put_text(&self, key: &str, value: &str) {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn invalidate(&self, key: &str) {
        self.inner.borrow_mut().remove(key);
    }
}
