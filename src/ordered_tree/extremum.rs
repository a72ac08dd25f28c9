use core::cmp::Ordering;

use super::OrderedTree;
use crate::{Error, Node, Result};

/// Which extreme element of a level to compare with.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Extremum {
    /// The smallest element.
    Min,
    /// The largest element.
    Max,
}

/// The external value an extremum is compared against. The variant also
/// selects which element set of the level is used.
#[derive(Debug)]
pub enum Operand<'a, K, V> {
    /// Compare against the extreme key of the level.
    Key(&'a K),
    /// Compare against the extreme leaf value of the level.
    Value(&'a V),
}

impl<K, V> Clone for Operand<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Operand<'_, K, V> {}

impl<K, V> OrderedTree<K, V> {
    /// Returns the smallest or largest key of this level.
    ///
    /// Ties resolve to the earliest entry in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the level is empty.
    pub fn key_extremum(&self, extremum: Extremum) -> Result<&K>
    where
        K: Ord,
    {
        let mut keys = self.keys();
        let mut best = keys.next().ok_or_else(empty_level)?;
        for key in keys {
            if beats(key.cmp(best), extremum) {
                best = key;
            }
        }
        Ok(best)
    }

    /// Returns the smallest or largest value of this level. Nested levels are
    /// not looked into.
    ///
    /// Ties resolve to the earliest entry in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the level is empty, holds a
    /// subtree, or holds values that do not compare (such as `NaN`).
    pub fn leaf_extremum(&self, extremum: Extremum) -> Result<&V>
    where
        V: PartialOrd,
    {
        let mut leaves = self.values().map(|node| match node {
            Node::Leaf(value) => Ok(value),
            Node::Tree(_) => Err(Error::invalid_argument("a subtree is not comparable with leaf values")),
        });
        let mut best = leaves.next().ok_or_else(empty_level)??;
        for value in leaves {
            let value = value?;
            let ordering = value
                .partial_cmp(best)
                .ok_or_else(|| Error::invalid_argument("level values are not mutually comparable"))?;
            if beats(ordering, extremum) {
                best = value;
            }
        }
        Ok(best)
    }

    /// Compares the minimum or maximum of this level with `other`.
    ///
    /// [`Operand::Key`] uses the level's keys and [`Operand::Value`] its leaf
    /// values. The result is the ordering of the extremum relative to `other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the selected set has no extremum
    /// (see [`key_extremum`] and [`leaf_extremum`]) or the extremum does not
    /// compare with `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use deep_tree::{Extremum, Operand, OrderedTree};
    ///
    /// let mold = OrderedTree::from_leaves([("p1", 5), ("p2", 3)]);
    /// assert_eq!(mold.compare_extremum(Operand::Value(&4), Extremum::Min), Ok(Ordering::Less));
    /// assert_eq!(mold.compare_extremum(Operand::Value(&4), Extremum::Max), Ok(Ordering::Greater));
    /// assert_eq!(mold.compare_extremum(Operand::Key(&"p2"), Extremum::Max), Ok(Ordering::Equal));
    /// ```
    ///
    /// [`key_extremum`]: OrderedTree::key_extremum
    /// [`leaf_extremum`]: OrderedTree::leaf_extremum
    pub fn compare_extremum(&self, other: Operand<'_, K, V>, extremum: Extremum) -> Result<Ordering>
    where
        K: Ord,
        V: PartialOrd,
    {
        match other {
            Operand::Key(key) => self.compare_key_extremum(key, extremum),
            Operand::Value(value) => self.compare_leaf_extremum(value, extremum),
        }
    }

    /// Compares the smallest or largest key of this level with `key`.
    ///
    /// Unlike [`compare_extremum`](OrderedTree::compare_extremum) this places
    /// no bound on the leaf type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the level is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use deep_tree::{Extremum, OrderedTree};
    ///
    /// struct Mold(&'static str);
    ///
    /// let slots = OrderedTree::from_leaves([(3, Mold("m7")), (1, Mold("m2"))]);
    /// assert_eq!(slots.compare_key_extremum(&2, Extremum::Min), Ok(Ordering::Less));
    /// ```
    pub fn compare_key_extremum(&self, key: &K, extremum: Extremum) -> Result<Ordering>
    where
        K: Ord,
    {
        Ok(self.key_extremum(extremum)?.cmp(key))
    }

    /// Compares the smallest or largest leaf value of this level with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the level has no extremum (see
    /// [`leaf_extremum`](OrderedTree::leaf_extremum)) or it does not compare
    /// with `value`.
    pub fn compare_leaf_extremum(&self, value: &V, extremum: Extremum) -> Result<Ordering>
    where
        V: PartialOrd,
    {
        self.leaf_extremum(extremum)?
            .partial_cmp(value)
            .ok_or_else(|| Error::invalid_argument("extremum is not comparable with the operand"))
    }

    /// Returns `true` if the selected extremum is less than `other`.
    ///
    /// # Errors
    ///
    /// See [`compare_extremum`](OrderedTree::compare_extremum).
    pub fn extremum_lt(&self, other: Operand<'_, K, V>, extremum: Extremum) -> Result<bool>
    where
        K: Ord,
        V: PartialOrd,
    {
        self.compare_extremum(other, extremum).map(Ordering::is_lt)
    }

    /// Returns `true` if the selected extremum is greater than `other`.
    ///
    /// # Errors
    ///
    /// See [`compare_extremum`](OrderedTree::compare_extremum).
    pub fn extremum_gt(&self, other: Operand<'_, K, V>, extremum: Extremum) -> Result<bool>
    where
        K: Ord,
        V: PartialOrd,
    {
        self.compare_extremum(other, extremum).map(Ordering::is_gt)
    }
}

fn beats(candidate: Ordering, extremum: Extremum) -> bool {
    match extremum {
        Extremum::Min => candidate.is_lt(),
        Extremum::Max => candidate.is_gt(),
    }
}

fn empty_level() -> Error {
    Error::invalid_argument("an empty level has no extremum")
}
