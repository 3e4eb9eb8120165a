//! # Record Map — Point-Access Record Storage
//!
//! The mapping abstraction beneath both registries. Exposes exactly the
//! operations the record lifecycle needs: point lookup, unconditional
//! overwrite, and point update. There is no removal operation — records
//! are never deleted, only flipped in place.
//!
//! Backed by a `BTreeMap` so that iteration and serialization order are
//! deterministic across runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An insert/update-only mapping from keys to records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordMap<K: Ord, V> {
    records: BTreeMap<K, V>,
}

impl<K: Ord, V> RecordMap<K, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Point lookup.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.records.get(key)
    }

    /// Whether a record exists for `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.records.contains_key(key)
    }

    /// Unconditional overwrite: stores `value` under `key`, replacing any
    /// prior record without inspecting it.
    pub fn put(&mut self, key: K, value: V) {
        self.records.insert(key, value);
    }

    /// Point update: applies `apply` to the record under `key` if one
    /// exists. Returns `false` if there is no record, leaving the map
    /// unchanged.
    pub fn update<F>(&mut self, key: &K, apply: F) -> bool
    where
        F: FnOnce(&mut V),
    {
        match self.records.get_mut(key) {
            Some(record) => {
                apply(record);
                true
            }
            None => false,
        }
    }

    /// Number of records stored.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the map holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<K: Ord, V> Default for RecordMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_is_none() {
        let map: RecordMap<String, u32> = RecordMap::new();
        assert!(map.get(&"k".to_string()).is_none());
        assert!(!map.contains(&"k".to_string()));
        assert!(map.is_empty());
    }

    #[test]
    fn test_put_then_get() {
        let mut map = RecordMap::new();
        map.put("k".to_string(), 1u32);
        assert_eq!(map.get(&"k".to_string()), Some(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_put_overwrites() {
        let mut map = RecordMap::new();
        map.put("k".to_string(), 1u32);
        map.put("k".to_string(), 2u32);
        assert_eq!(map.get(&"k".to_string()), Some(&2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_update_present() {
        let mut map = RecordMap::new();
        map.put("k".to_string(), 1u32);
        assert!(map.update(&"k".to_string(), |v| *v += 1));
        assert_eq!(map.get(&"k".to_string()), Some(&2));
    }

    #[test]
    fn test_update_absent_is_noop() {
        let mut map: RecordMap<String, u32> = RecordMap::new();
        assert!(!map.update(&"k".to_string(), |v| *v += 1));
        assert!(map.is_empty());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut map = RecordMap::new();
        map.put("a".to_string(), 1u32);
        map.put("b".to_string(), 2u32);
        let json = serde_json::to_string(&map).unwrap();
        let parsed: RecordMap<String, u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.get(&"a".to_string()), Some(&1));
        assert_eq!(parsed.get(&"b".to_string()), Some(&2));
    }
}
