use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;

use tracing::{debug, trace};

use super::OrderedTree;
use crate::{Depth, End, Error, Node, Result};

/// What [`OrderedTree::deep_contains`] looks for.
#[derive(Debug)]
pub enum Target<'a, K, V> {
    /// A key on any reachable level.
    Key(&'a K),
    /// A value on any reachable level. A nested tree counts as one value and
    /// matches only an equal tree.
    Value(&'a Node<K, V>),
    /// A leaf value on any reachable level.
    Leaf(&'a V),
}

impl<K, V> Clone for Target<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Target<'_, K, V> {}

impl<K: Hash + Eq, V> OrderedTree<K, V> {
    /// Searches this level, then every nested level within `depth`, for
    /// `target`.
    ///
    /// The current level is always tested, even with [`Depth::CURRENT`].
    /// Leaves are never descended into.
    ///
    /// # Examples
    ///
    /// ```
    /// use deep_tree::{Depth, Node, OrderedTree, Target};
    ///
    /// let mut tree = OrderedTree::from_leaves([("a", 1)]);
    /// tree.insert_tree("b", OrderedTree::from_leaves([("c", 2)]));
    ///
    /// assert!(tree.deep_contains(Target::Key(&"c"), Depth::Unbounded));
    /// assert!(!tree.deep_contains(Target::Key(&"c"), Depth::CURRENT));
    /// assert!(tree.deep_contains(Target::Leaf(&2), Depth::Levels(1)));
    /// assert!(!tree.deep_contains(Target::Value(&Node::Leaf(3)), Depth::Unbounded));
    /// ```
    pub fn deep_contains(&self, target: Target<'_, K, V>, depth: Depth) -> bool
    where
        V: PartialEq,
    {
        match target {
            Target::Key(key) => self.deep_contains_key(key, depth),
            Target::Value(node) => self.deep_contains_value(node, depth),
            Target::Leaf(value) => self.deep_contains_leaf(value, depth),
        }
    }

    /// Returns `true` if `key` is a key of this level or of any nested level
    /// within `depth`.
    ///
    /// # Complexity
    ///
    /// O(size of the explored subtree)
    pub fn deep_contains_key<Q>(&self, key: &Q, depth: Depth) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.probe(depth, &|level: &Self| level.contains_key(key))
    }

    /// Returns `true` if `value` is one of the values of this level or of any
    /// nested level within `depth`. Whole subtrees compare as values.
    pub fn deep_contains_value(&self, value: &Node<K, V>, depth: Depth) -> bool
    where
        V: PartialEq,
    {
        self.probe(depth, &|level: &Self| level.values().any(|node| node == value))
    }

    /// Returns `true` if `value` is a leaf of this level or of any nested
    /// level within `depth`.
    pub fn deep_contains_leaf(&self, value: &V, depth: Depth) -> bool
    where
        V: PartialEq,
    {
        self.probe(depth, &|level: &Self| level.values().any(|node| node.as_leaf() == Some(value)))
    }

    fn probe<F>(&self, depth: Depth, hit: &F) -> bool
    where
        F: Fn(&Self) -> bool,
    {
        if hit(self) {
            return true;
        }
        let Some(next) = depth.descend() else {
            return false;
        };
        self.subtrees().any(|(_, child)| child.probe(next, hit))
    }

    /// Moves `key` to the `end` of its level, and pulls every ancestor link
    /// leading to it to the same end of its own level.
    ///
    /// The move is attempted on this level first. Then, if `depth` allows,
    /// every entry whose subtree contains `key` anywhere below it is visited
    /// in the order the entries had before the call: the move is applied
    /// inside that subtree with one level less, and if it lands, the entry
    /// itself is moved to `end` here. A key present in several branches pulls
    /// each of them; their final relative order is the order in which they
    /// were visited, not any notion of depth or priority.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `key` occurs nowhere within `depth`. The
    /// tree is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use deep_tree::{Depth, End, OrderedTree};
    ///
    /// let mut root = OrderedTree::new();
    /// root.insert_tree("0:0", OrderedTree::from_leaves([("m1", 5)]));
    /// root.insert_tree("0:1", OrderedTree::from_leaves([("m2", 3), ("m3", 1)]));
    ///
    /// root.deep_move_to_end("m3", End::Front, Depth::Unbounded).unwrap();
    ///
    /// let mounts: Vec<_> = root.keys().copied().collect();
    /// assert_eq!(mounts, ["0:1", "0:0"]);
    /// let molds: Vec<_> = root["0:1"].as_tree().unwrap().keys().copied().collect();
    /// assert_eq!(molds, ["m3", "m2"]);
    ///
    /// assert!(root.deep_move_to_end("m3", End::Back, Depth::CURRENT).is_err());
    /// ```
    pub fn deep_move_to_end<Q>(&mut self, key: &Q, end: End, depth: Depth) -> Result<()>
    where
        K: Borrow<Q> + Clone,
        Q: ?Sized + Hash + Eq + fmt::Debug,
    {
        if self.cascade(key, end, depth) {
            Ok(())
        } else {
            debug!(?key, ?end, ?depth, "deep move found no occurrence");
            Err(Error::not_found(key))
        }
    }

    // Returns whether anything moved; when it returns `false` nothing did.
    fn cascade<Q>(&mut self, key: &Q, end: End, depth: Depth) -> bool
    where
        K: Borrow<Q> + Clone,
        Q: ?Sized + Hash + Eq + fmt::Debug,
    {
        let mut moved = self.raw.move_to(key, end);
        if moved {
            trace!(?key, ?end, "moved entry within its level");
        }
        let Some(next) = depth.descend() else {
            return moved;
        };

        // Moves below reorder this level, so walk a snapshot.
        let links: Vec<K> = self.keys().cloned().collect();
        for link in &links {
            let relocated = match self.raw.get_mut(link) {
                Some(Node::Tree(child)) if child.deep_contains_key(key, Depth::Unbounded) => {
                    child.cascade(key, end, next)
                }
                _ => false,
            };
            if relocated {
                self.raw.move_to(link, end);
                trace!(?key, ?end, "pulled ancestor link to boundary");
                moved = true;
            }
        }
        moved
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn keys(tree: &OrderedTree<&'static str, i32>) -> Vec<&'static str> {
        tree.keys().copied().collect()
    }

    #[test]
    fn direct_test_runs_at_depth_zero() {
        let tree = OrderedTree::from_leaves([("a", 1)]);
        assert!(tree.deep_contains_key("a", Depth::CURRENT));
        assert!(tree.deep_contains_leaf(&1, Depth::CURRENT));
        assert!(!tree.deep_contains_key("b", Depth::Unbounded));
    }

    #[test]
    fn subtree_counts_as_one_value() {
        let child = OrderedTree::from_leaves([("x", 1)]);
        let mut tree = OrderedTree::new();
        tree.insert_tree("c", child.clone());
        assert!(tree.deep_contains_value(&Node::Tree(child), Depth::CURRENT));
        assert!(!tree.deep_contains_leaf(&1, Depth::CURRENT));
        assert!(tree.deep_contains_leaf(&1, Depth::Levels(1)));
    }

    #[test]
    fn depth_bound_limits_search() {
        let mut leaf_level = OrderedTree::new();
        leaf_level.insert_leaf("deep", 0);
        let mut mid = OrderedTree::new();
        mid.insert_tree("l2", leaf_level);
        let mut root = OrderedTree::new();
        root.insert_tree("l1", mid);

        assert!(!root.deep_contains_key("deep", Depth::Levels(1)));
        assert!(root.deep_contains_key("deep", Depth::Levels(2)));
        assert!(root.deep_contains_key("deep", Depth::Unbounded));
    }

    #[test]
    fn current_level_move_does_not_cascade() {
        let mut root = OrderedTree::from_leaves([("a", 1), ("b", 2)]);
        root.insert_tree("c", OrderedTree::from_leaves([("a", 3), ("z", 4)]));

        root.deep_move_to_end("a", End::Back, Depth::CURRENT).unwrap();
        assert_eq!(keys(&root), ["b", "c", "a"]);
        assert_eq!(keys(root["c"].as_tree().unwrap()), ["a", "z"]);
    }

    #[test]
    fn occurrence_beyond_bound_is_not_found() {
        let mut inner = OrderedTree::new();
        inner.insert_tree("m", OrderedTree::from_leaves([("p", 1)]));
        let mut root = OrderedTree::from_leaves([("x", 0)]);
        root.insert_tree("arm", inner);
        let before = root.clone();

        let err = root.deep_move_to_end("p", End::Front, Depth::Levels(1)).unwrap_err();
        assert_eq!(err, Error::NotFound { key: "\"p\"".into() });
        assert_eq!(root, before);

        root.deep_move_to_end("p", End::Front, Depth::Levels(2)).unwrap();
        assert_eq!(keys(&root), ["arm", "x"]);
    }
}
