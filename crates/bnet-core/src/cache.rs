//! Per-instance cache slots.
//!
//! Every resource accessor keeps one [`Cached`] slot per endpoint (or a
//! [`CachedMap`] for endpoints keyed by an identifier). A slot starts
//! absent, is filled by the first successful fetch and is only ever
//! replaced wholesale. A failed fetch leaves it exactly as it was.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use crate::error::Result;

/// Observable state of a cache slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Absent,
    Populated,
}

/// Cache slot holding at most one decoded document.
#[derive(Debug, Clone)]
pub struct Cached<T> {
    value: Option<T>,
}

impl<T> Default for Cached<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T> Cached<T> {
    pub const fn new() -> Self {
        Self { value: None }
    }

    pub const fn state(&self) -> SlotState {
        if self.value.is_some() {
            SlotState::Populated
        } else {
            SlotState::Absent
        }
    }

    pub const fn is_populated(&self) -> bool {
        self.value.is_some()
    }

    pub const fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Replace the slot's contents.
    pub fn store(&mut self, value: T) -> &T {
        self.value.insert(value)
    }

    /// Return the cached value, running `fetch` only when the slot is absent.
    ///
    /// If `fetch` fails the slot stays absent and the error is returned.
    pub async fn get_or_fetch<F, Fut>(&mut self, fetch: F) -> Result<&T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let value = match self.value.take() {
            Some(value) => value,
            None => fetch().await?,
        };
        Ok(self.value.insert(value))
    }
}

/// Cache slots for an endpoint family keyed by an identifier.
#[derive(Debug, Clone)]
pub struct CachedMap<K, T> {
    entries: HashMap<K, T>,
}

impl<K, T> Default for CachedMap<K, T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, T> CachedMap<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, key: &K) -> SlotState {
        if self.entries.contains_key(key) {
            SlotState::Populated
        } else {
            SlotState::Absent
        }
    }

    pub fn get(&self, key: &K) -> Option<&T> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the entry for `key`.
    pub fn store(&mut self, key: K, value: T) -> &T {
        match self.entries.entry(key) {
            Entry::Occupied(mut entry) => {
                entry.insert(value);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(value),
        }
    }

    /// Return the entry for `key`, running `fetch` only when it is absent.
    pub async fn get_or_fetch<F, Fut>(&mut self, key: K, fetch: F) -> Result<&T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let value = fetch().await?;
                Ok(entry.insert(value))
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_get_or_fetch_runs_once() {
        let calls = Cell::new(0);
        let counter = &calls;
        let mut slot = Cached::new();
        assert_eq!(slot.state(), SlotState::Absent);

        for _ in 0..3 {
            let value = slot
                .get_or_fetch(move || async move {
                    counter.set(counter.get() + 1);
                    Ok(7_u32)
                })
                .await
                .expect("Operation should succeed");
            assert_eq!(*value, 7);
        }

        assert_eq!(calls.get(), 1);
        assert_eq!(slot.state(), SlotState::Populated);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_slot_absent() {
        let mut slot: Cached<u32> = Cached::new();
        let result = slot
            .get_or_fetch(|| async { Err(ApiError::invalid_argument("boom")) })
            .await;
        assert!(result.is_err());
        assert!(!slot.is_populated());

        let value = slot
            .get_or_fetch(|| async { Ok(3) })
            .await
            .expect("Operation should succeed");
        assert_eq!(*value, 3);
    }

    #[test]
    fn test_store_replaces_value() {
        let mut slot = Cached::new();
        slot.store("first");
        assert_eq!(slot.store("second"), &"second");
        assert_eq!(slot.get(), Some(&"second"));
    }

    #[tokio::test]
    async fn test_cached_map_keys_are_independent() {
        let mut map: CachedMap<u32, String> = CachedMap::new();
        map.get_or_fetch(1, || async { Ok("one".to_string()) })
            .await
            .expect("Operation should succeed");
        let value = map
            .get_or_fetch(1, || async { Err(ApiError::invalid_argument("not called")) })
            .await
            .expect("Operation should succeed");
        assert_eq!(value, "one");

        assert_eq!(map.state(&2), SlotState::Absent);
        let result = map
            .get_or_fetch(2, || async { Err(ApiError::invalid_argument("boom")) })
            .await;
        assert!(result.is_err());
        assert_eq!(map.state(&2), SlotState::Absent);
        assert_eq!(map.len(), 1);

        map.store(1, "uno".to_string());
        assert_eq!(map.get(&1).map(String::as_str), Some("uno"));
    }
}
