use core::hash::Hash;

use super::OrderedTree;
use crate::raw::RawLevel;

impl<K, V> OrderedTree<K, V> {
    /// Creates an empty tree with room for at least `capacity` entries on its
    /// top level.
    ///
    /// # Examples
    ///
    /// ```
    /// use deep_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<&str, i32> = OrderedTree::with_capacity(32);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedTree {
            raw: RawLevel::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the top level can hold without
    /// reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}

impl<K: Hash + Eq, V> OrderedTree<K, V> {
    /// Reserves room for at least `additional` more entries on the top level.
    pub fn reserve(&mut self, additional: usize) {
        self.raw.reserve(additional);
    }

    /// Shrinks the top level's allocation as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.raw.shrink_to_fit();
    }
}
