use core::hash::Hash;

use indexmap::map::{self, IndexMap};
use indexmap::Equivalent;
use rustc_hash::FxBuildHasher;

use crate::End;

/// One level of a tree: an insertion-ordered map with boundary moves.
#[derive(Clone)]
pub(crate) struct RawLevel<K, V> {
    entries: IndexMap<K, V, FxBuildHasher>,
}

impl<K, V> RawLevel<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: IndexMap::with_hasher(FxBuildHasher),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the entry sitting at the requested boundary.
    pub(crate) fn boundary(&self, end: End) -> Option<(&K, &V)> {
        match end {
            End::Front => self.entries.first(),
            End::Back => self.entries.last(),
        }
    }

    pub(crate) fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.entries.get_index(index)
    }

    pub(crate) fn pop_front(&mut self) -> Option<(K, V)> {
        self.entries.shift_remove_index(0)
    }

    pub(crate) fn pop_back(&mut self) -> Option<(K, V)> {
        self.entries.pop()
    }

    pub(crate) fn iter(&self) -> map::Iter<'_, K, V> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> map::IterMut<'_, K, V> {
        self.entries.iter_mut()
    }

    pub(crate) fn into_entries(self) -> map::IntoIter<K, V> {
        self.entries.into_iter()
    }
}

impl<K: Hash + Eq, V> RawLevel<K, V> {
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit();
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.entries.get(key)
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.entries.get_key_value(key)
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.entries.get_mut(key)
    }

    pub(crate) fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.entries.get_index_of(key)
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.entries.contains_key(key)
    }

    /// Inserts at the back, or overwrites in place if `key` is already present.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    pub(crate) fn entry(&mut self, key: K) -> map::Entry<'_, K, V> {
        self.entries.entry(key)
    }

    /// Removes an entry, shifting later entries down so order is preserved.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.entries.shift_remove_entry(key)
    }

    pub(crate) fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.entries.retain(keep);
    }

    /// Moves `key` to the requested boundary. Returns `false` if it is absent.
    pub(crate) fn move_to<Q>(&mut self, key: &Q, end: End) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let Some(from) = self.entries.get_index_of(key) else {
            return false;
        };
        let to = match end {
            End::Front => 0,
            End::Back => self.entries.len() - 1,
        };
        self.entries.move_index(from, to);
        true
    }
}

impl<K, V> Default for RawLevel<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    fn keys(level: &RawLevel<u8, u8>) -> Vec<u8> {
        level.iter().map(|(k, _)| *k).collect()
    }

    fn level_of(len: u8) -> RawLevel<u8, u8> {
        let mut level = RawLevel::new();
        for k in 0..len {
            level.insert(k, k);
        }
        level
    }

    #[test]
    fn move_absent_key_is_noop() {
        let mut level = level_of(3);
        assert!(!level.move_to(&9, End::Back));
        assert_eq!(keys(&level), [0, 1, 2]);
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut level = level_of(3);
        assert_eq!(level.insert(0, 42), Some(0));
        assert_eq!(keys(&level), [0, 1, 2]);
        assert_eq!(level.boundary(End::Front), Some((&0, &42)));
    }

    #[test]
    fn remove_preserves_order() {
        let mut level = level_of(4);
        assert_eq!(level.remove_entry(&1), Some((1, 1)));
        assert_eq!(keys(&level), [0, 2, 3]);
        assert_eq!(level.pop_front(), Some((0, 0)));
        assert_eq!(level.pop_back(), Some((3, 3)));
        assert_eq!(keys(&level), [2]);
    }

    proptest! {
        #[test]
        fn move_to_boundary_keeps_relative_order(len in 1u8..32, pick in any::<u8>(), back in any::<bool>()) {
            let mut level = level_of(len);
            let key = pick % len;
            let end = if back { End::Back } else { End::Front };
            prop_assert!(level.move_to(&key, end));

            let mut expected: Vec<u8> = (0..len).filter(|k| *k != key).collect();
            match end {
                End::Front => expected.insert(0, key),
                End::Back => expected.push(key),
            }
            prop_assert_eq!(keys(&level), expected);
            prop_assert_eq!(level.boundary(end).map(|(k, _)| *k), Some(key));
        }
    }
}
