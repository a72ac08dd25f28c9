use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;
use core::iter::FusedIterator;
use core::ops::Index;

use indexmap::map;

use crate::raw::RawLevel;
use crate::{End, Node};

mod capacity;
mod deep;
mod endmost;
mod extremum;

pub use deep::Target;
pub use endmost::{EndKind, Endpoint};
pub use extremum::{Extremum, Operand};

/// An insertion-ordered map whose values may themselves be ordered maps.
///
/// Every level keeps its entries in insertion order, and that order is what
/// the boundary operations act on: [`deep_move_to_end`] pulls an entry (and
/// every ancestor link leading to it) to the front or back, and
/// [`get_endmost`] descends along the first or last entries. Values are
/// [`Node`]s, so a level mixes leaves and nested trees freely and the depth of
/// the structure is whatever the data makes it.
///
/// Keys are unique within one level only. The same key may appear at several
/// depths, and the deep operations visit every occurrence they can reach.
///
/// Overwriting a key keeps its position; removing a key shifts the later
/// entries down, preserving the order of the rest.
///
/// # Examples
///
/// A production schedule keyed `arm:mount → mold → part`:
///
/// ```
/// use deep_tree::{Depth, End, Node, OrderedTree};
///
/// let mut schedule: OrderedTree<&str, u32> = OrderedTree::new();
/// schedule
///     .get_or_insert_subtree("0:0")
///     .unwrap()
///     .insert_tree("m1", OrderedTree::from_leaves([("p1", 5)]));
/// schedule
///     .get_or_insert_subtree("0:1")
///     .unwrap()
///     .insert_tree("m2", OrderedTree::from_leaves([("p2", 3)]));
///
/// // Bias the mount that last held `m2` toward the front.
/// schedule.deep_move_to_end("m2", End::Front, Depth::Unbounded).unwrap();
///
/// let mounts: Vec<_> = schedule.keys().copied().collect();
/// assert_eq!(mounts, ["0:1", "0:0"]);
///
/// // Read back the first mold on a given mount.
/// assert_eq!(schedule["0:0"].as_tree().unwrap().endmost_key(End::Front, Depth::CURRENT), Some(&"m1"));
/// assert_eq!(schedule.get_path(&["0:1", "m2", "p2"]), Some(&Node::Leaf(3)));
/// ```
///
/// [`deep_move_to_end`]: OrderedTree::deep_move_to_end
/// [`get_endmost`]: OrderedTree::get_endmost
pub struct OrderedTree<K, V> {
    raw: RawLevel<K, Node<K, V>>,
}

/// An iterator over the entries of an `OrderedTree`, in insertion order.
///
/// This `struct` is created by the [`iter`] method on [`OrderedTree`].
///
/// [`iter`]: OrderedTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    inner: map::Iter<'a, K, Node<K, V>>,
}

/// A mutable iterator over the entries of an `OrderedTree`.
///
/// This `struct` is created by the [`iter_mut`] method on [`OrderedTree`].
///
/// [`iter_mut`]: OrderedTree::iter_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterMut<'a, K, V> {
    inner: map::IterMut<'a, K, Node<K, V>>,
}

/// An owning iterator over the entries of an `OrderedTree`.
///
/// This `struct` is created by the [`into_iter`] method on [`OrderedTree`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: map::IntoIter<K, Node<K, V>>,
}

/// An iterator over the keys of an `OrderedTree`.
///
/// This `struct` is created by the [`keys`] method on [`OrderedTree`].
///
/// [`keys`]: OrderedTree::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of an `OrderedTree`.
///
/// This `struct` is created by the [`values`] method on [`OrderedTree`].
///
/// [`values`]: OrderedTree::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// A mutable iterator over the values of an `OrderedTree`.
///
/// This `struct` is created by the [`values_mut`] method on [`OrderedTree`].
///
/// [`values_mut`]: OrderedTree::values_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

/// An owning iterator over the keys of an `OrderedTree`.
///
/// This `struct` is created by the [`into_keys`] method on [`OrderedTree`].
///
/// [`into_keys`]: OrderedTree::into_keys
pub struct IntoKeys<K, V> {
    inner: IntoIter<K, V>,
}

/// An owning iterator over the values of an `OrderedTree`.
///
/// This `struct` is created by the [`into_values`] method on [`OrderedTree`].
///
/// [`into_values`]: OrderedTree::into_values
pub struct IntoValues<K, V> {
    inner: IntoIter<K, V>,
}

impl<K, V> OrderedTree<K, V> {
    /// Makes a new, empty `OrderedTree`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use deep_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert_leaf("a", 1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[must_use]
    pub fn new() -> OrderedTree<K, V> {
        OrderedTree { raw: RawLevel::new() }
    }

    /// Returns the number of entries on this level (nested entries are not
    /// counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if this level holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the level, dropping every nested tree with it.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the first entry in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use deep_tree::{Node, OrderedTree};
    ///
    /// let tree = OrderedTree::from_leaves([("b", 2), ("a", 1)]);
    /// assert_eq!(tree.first_key_value(), Some((&"b", &Node::Leaf(2))));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &Node<K, V>)> {
        self.raw.boundary(End::Front)
    }

    /// Returns the last entry in insertion order.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &Node<K, V>)> {
        self.raw.boundary(End::Back)
    }

    /// Removes and returns the first entry in insertion order.
    ///
    /// # Complexity
    ///
    /// O(n), the remaining entries shift down.
    pub fn pop_first(&mut self) -> Option<(K, Node<K, V>)> {
        self.raw.pop_front()
    }

    /// Removes and returns the last entry in insertion order.
    pub fn pop_last(&mut self) -> Option<(K, Node<K, V>)> {
        self.raw.pop_back()
    }

    /// Returns the entry at `index` in insertion order.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&K, &Node<K, V>)> {
        self.raw.get_index(index)
    }

    /// Gets an iterator over the entries of this level, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use deep_tree::{Node, OrderedTree};
    ///
    /// let tree = OrderedTree::from_leaves([("z", 1), ("a", 2)]);
    /// let mut iter = tree.iter();
    /// assert_eq!(iter.next(), Some((&"z", &Node::Leaf(1))));
    /// assert_eq!(iter.next_back(), Some((&"a", &Node::Leaf(2))));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { inner: self.raw.iter() }
    }

    /// Gets a mutable iterator over the entries of this level.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.raw.iter_mut(),
        }
    }

    /// Gets an iterator over the keys of this level, in insertion order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of this level, in insertion order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Gets a mutable iterator over the values of this level.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    /// Creates a consuming iterator over the keys, in insertion order.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys {
            inner: self.into_iter(),
        }
    }

    /// Creates a consuming iterator over the values, in insertion order.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues {
            inner: self.into_iter(),
        }
    }

    /// Iterates over the entries of this level whose values are nested trees,
    /// skipping leaves.
    ///
    /// # Examples
    ///
    /// ```
    /// use deep_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from_leaves([("leaf", 1)]);
    /// tree.insert_tree("sub", OrderedTree::new());
    /// let subtrees: Vec<_> = tree.subtrees().map(|(k, _)| *k).collect();
    /// assert_eq!(subtrees, ["sub"]);
    /// ```
    pub fn subtrees(&self) -> impl DoubleEndedIterator<Item = (&K, &OrderedTree<K, V>)> + '_ {
        self.iter().filter_map(|(key, node)| node.as_tree().map(|tree| (key, tree)))
    }

    /// Returns the number of levels along the deepest path, counting this one.
    ///
    /// A level holding only leaves (or nothing) has height 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use deep_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<&str, i32> = OrderedTree::from_leaves([("a", 1)]);
    /// assert_eq!(tree.height(), 1);
    /// tree.insert_tree("b", OrderedTree::from_leaves([("c", 2)]));
    /// assert_eq!(tree.height(), 2);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        1 + self.subtrees().map(|(_, tree)| tree.height()).max().unwrap_or(0)
    }

    /// Returns the number of leaves in this level and every nested level.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.values()
            .map(|node| match node {
                Node::Leaf(_) => 1,
                Node::Tree(tree) => tree.leaf_count(),
            })
            .sum()
    }
}

impl<K: Hash + Eq, V> OrderedTree<K, V> {
    /// Builds a single-level tree from an ordered sequence of leaf pairs.
    ///
    /// Later duplicates overwrite earlier ones in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use deep_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from_leaves([("a", 1), ("b", 2), ("a", 3)]);
    /// let keys: Vec<_> = tree.keys().copied().collect();
    /// assert_eq!(keys, ["a", "b"]);
    /// assert_eq!(tree["a"].as_leaf(), Some(&3));
    /// ```
    pub fn from_leaves<I>(leaves: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        leaves.into_iter().map(|(key, value)| (key, Node::Leaf(value))).collect()
    }

    /// Returns a reference to the node stored under `key` on this level.
    ///
    /// The key may be any borrowed form of the tree's key type, but the hash
    /// and equality on the borrowed form *must* match those for the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use deep_tree::{Node, OrderedTree};
    ///
    /// let tree = OrderedTree::from_leaves([("a", 1)]);
    /// assert_eq!(tree.get("a"), Some(&Node::Leaf(1)));
    /// assert_eq!(tree.get("b"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.get(key)
    }

    /// Returns the stored key and its node.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &Node<K, V>)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.get_key_value(key)
    }

    /// Returns a mutable reference to the node stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut Node<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.get_mut(key)
    }

    /// Returns the position of `key` in this level's insertion order.
    #[must_use]
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.index_of(key)
    }

    /// Returns `true` if this level (not any nested one) has `key`.
    ///
    /// See [`deep_contains_key`](OrderedTree::deep_contains_key) for the
    /// nested search.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.contains_key(key)
    }

    /// Follows `path` one key per level and returns the node at its end.
    ///
    /// Returns `None` if any key is missing or an intermediate node is a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use deep_tree::{Node, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert_tree("0:0", OrderedTree::from_leaves([("m1", 4)]));
    /// assert_eq!(tree.get_path(&["0:0", "m1"]), Some(&Node::Leaf(4)));
    /// assert_eq!(tree.get_path(&["0:0", "m1", "p1"]), None);
    /// assert_eq!(tree.get_path::<str>(&[]), None);
    /// ```
    pub fn get_path<Q>(&self, path: &[&Q]) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (first, rest) = path.split_first()?;
        let mut node = self.get(*first)?;
        for key in rest {
            node = node.as_tree()?.get(*key)?;
        }
        Some(node)
    }

    /// Mutable counterpart of [`get_path`](OrderedTree::get_path).
    pub fn get_path_mut<Q>(&mut self, path: &[&Q]) -> Option<&mut Node<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (first, rest) = path.split_first()?;
        let mut node = self.get_mut(*first)?;
        for key in rest {
            node = node.as_tree_mut()?.get_mut(*key)?;
        }
        Some(node)
    }

    /// Inserts a node. A new key goes to the back; an existing key is
    /// overwritten in place and its old node is returned.
    pub fn insert(&mut self, key: K, node: Node<K, V>) -> Option<Node<K, V>> {
        self.raw.insert(key, node)
    }

    /// Inserts a leaf value. See [`insert`](OrderedTree::insert).
    pub fn insert_leaf(&mut self, key: K, value: V) -> Option<Node<K, V>> {
        self.insert(key, Node::Leaf(value))
    }

    /// Inserts a nested tree. See [`insert`](OrderedTree::insert).
    pub fn insert_tree(&mut self, key: K, tree: OrderedTree<K, V>) -> Option<Node<K, V>> {
        self.insert(key, Node::Tree(tree))
    }

    /// Returns the subtree under `key`, inserting an empty one at the back if
    /// the key is vacant.
    ///
    /// Returns `None` if `key` already holds a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use deep_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<&str, i32> = OrderedTree::new();
    /// tree.get_or_insert_subtree("0:0").unwrap().insert_leaf("m1", 1);
    /// tree.get_or_insert_subtree("0:0").unwrap().insert_leaf("m2", 2);
    /// assert_eq!(tree.leaf_count(), 2);
    ///
    /// tree.insert_leaf("x", 0);
    /// assert!(tree.get_or_insert_subtree("x").is_none());
    /// ```
    pub fn get_or_insert_subtree(&mut self, key: K) -> Option<&mut OrderedTree<K, V>> {
        self.raw.entry(key).or_insert_with(|| Node::Tree(OrderedTree::new())).as_tree_mut()
    }

    /// Removes `key` from this level, returning its node. The entries after it
    /// shift down one position.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Node<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.remove_entry(key).map(|(_, node)| node)
    }

    /// Removes `key` from this level, returning the stored key and its node.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, Node<K, V>)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.remove_entry(key)
    }

    /// Retains only the entries of this level for which `keep` returns `true`,
    /// preserving their order.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&K, &mut Node<K, V>) -> bool,
    {
        self.raw.retain(keep);
    }
}

impl<K: Clone, V: Clone> Clone for OrderedTree<K, V> {
    fn clone(&self) -> Self {
        OrderedTree { raw: self.raw.clone() }
    }
}

/// Two trees are equal when they hold equal entries in the same order at
/// every level.
impl<K: PartialEq, V: PartialEq> PartialEq for OrderedTree<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for OrderedTree<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for OrderedTree<K, V> {
    fn default() -> Self {
        OrderedTree::new()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, Node<K, V>)> for OrderedTree<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, Node<K, V>)>>(iter: T) -> Self {
        let mut tree = OrderedTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Hash + Eq, V> Extend<(K, Node<K, V>)> for OrderedTree<K, V> {
    fn extend<T: IntoIterator<Item = (K, Node<K, V>)>>(&mut self, iter: T) {
        for (key, node) in iter {
            self.insert(key, node);
        }
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, Node<K, V>); N]> for OrderedTree<K, V> {
    fn from(arr: [(K, Node<K, V>); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedTree<K, V> {
    type Item = (&'a K, &'a Node<K, V>);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut OrderedTree<K, V> {
    type Item = (&'a K, &'a mut Node<K, V>);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

impl<K, V> IntoIterator for OrderedTree<K, V> {
    type Item = (K, Node<K, V>);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.into_entries(),
        }
    }
}

/// Indexes into this level by key.
///
/// # Panics
///
/// Panics if the key is not present on this level.
impl<K, Q, V> Index<&Q> for OrderedTree<K, V>
where
    K: Borrow<Q> + Hash + Eq,
    Q: ?Sized + Hash + Eq,
{
    type Output = Node<K, V>;

    fn index(&self, key: &Q) -> &Node<K, V> {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a Node<K, V>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut Node<K, V>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<K, V> fmt::Debug for IterMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("remaining", &self.inner.len()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, Node<K, V>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("remaining", &self.inner.len()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ValuesMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

impl<K, V> fmt::Debug for ValuesMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValuesMut").field("remaining", &self.inner.len()).finish()
    }
}

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoKeys<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for IntoKeys<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoKeys<K, V> {}

impl<K, V> fmt::Debug for IntoKeys<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoKeys").field("remaining", &self.inner.len()).finish()
    }
}

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoValues<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for IntoValues<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoValues<K, V> {}

impl<K, V> fmt::Debug for IntoValues<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoValues").field("remaining", &self.inner.len()).finish()
    }
}
