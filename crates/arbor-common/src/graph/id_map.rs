// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Identity mapping between caller keys and dense vertex slots.
//!
//! The graph store only knows dense indices (0..V). Callers that name their
//! vertices ("A", "B", city names, row ids) keep one of these maps alongside the
//! graph to translate in both directions.

use crate::graph::adjacency_graph::VertexId;
use fxhash::FxHashMap;
use std::hash::Hash;

/// Bidirectional mapping between keys and dense slots.
///
/// # Example
///
/// ```
/// use arbor_common::IdMap;
///
/// let mut ids = IdMap::new();
/// assert_eq!(ids.insert("A"), 0);
/// assert_eq!(ids.insert("B"), 1);
/// assert_eq!(ids.insert("A"), 0);
///
/// assert_eq!(ids.to_slot(&"B"), Some(1));
/// assert_eq!(ids.to_key(0), Some(&"A"));
/// ```
#[derive(Debug, Clone)]
pub struct IdMap<K> {
    /// Dense slot -> key
    slot_to_key: Vec<K>,
    /// Key -> dense slot
    key_to_slot: FxHashMap<K, VertexId>,
}

impl<K: Hash + Eq + Clone> IdMap<K> {
    pub fn new() -> Self {
        Self {
            slot_to_key: Vec::new(),
            key_to_slot: FxHashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slot_to_key: Vec::with_capacity(capacity),
            key_to_slot: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert a key and return its slot.
    ///
    /// If the key already exists, returns the existing slot.
    pub fn insert(&mut self, key: K) -> VertexId {
        if let Some(&slot) = self.key_to_slot.get(&key) {
            return slot;
        }

        let slot = self.slot_to_key.len() as VertexId;
        self.slot_to_key.push(key.clone());
        self.key_to_slot.insert(key, slot);
        slot
    }

    #[inline]
    pub fn to_slot(&self, key: &K) -> Option<VertexId> {
        self.key_to_slot.get(key).copied()
    }

    #[inline]
    pub fn to_key(&self, slot: VertexId) -> Option<&K> {
        self.slot_to_key.get(slot as usize)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slot_to_key.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slot_to_key.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.key_to_slot.contains_key(key)
    }

    /// Iterate over all (slot, key) pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &K)> + '_ {
        self.slot_to_key
            .iter()
            .enumerate()
            .map(|(slot, key)| (slot as VertexId, key))
    }
}

impl<K: Hash + Eq + Clone> Default for IdMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone> FromIterator<K> for IdMap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, upper) = iter.size_hint();
        let mut map = Self::with_capacity(upper.unwrap_or(lower));

        for key in iter {
            map.insert(key);
        }

        map
    }
}
