use alloc::format;
use core::str::FromStr;

use super::OrderedTree;
use crate::{Depth, End, Error, Node};

/// Which part of the boundary entry [`OrderedTree::get_endmost`] returns.
///
/// Parses from `"key"`, `"value"`, `"pair"` or `"item"`, ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use deep_tree::EndKind;
///
/// assert_eq!("Item".parse::<EndKind>(), Ok(EndKind::Pair));
/// assert!("row".parse::<EndKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EndKind {
    /// The key only.
    Key,
    /// The node only.
    Value,
    /// The key and its node.
    Pair,
}

impl FromStr for EndKind {
    type Err = Error;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        if kind.eq_ignore_ascii_case("key") {
            Ok(EndKind::Key)
        } else if kind.eq_ignore_ascii_case("value") {
            Ok(EndKind::Value)
        } else if kind.eq_ignore_ascii_case("pair") || kind.eq_ignore_ascii_case("item") {
            Ok(EndKind::Pair)
        } else {
            Err(Error::invalid_argument(format!(
                "{kind:?} is not an endpoint kind, expected one of \"key\", \"value\" or \"pair\""
            )))
        }
    }
}

/// The boundary entry found by [`OrderedTree::get_endmost`], shaped by the
/// requested [`EndKind`].
#[derive(Debug, PartialEq)]
pub enum Endpoint<'a, K, V> {
    /// See [`EndKind::Key`].
    Key(&'a K),
    /// See [`EndKind::Value`].
    Value(&'a Node<K, V>),
    /// See [`EndKind::Pair`].
    Pair(&'a K, &'a Node<K, V>),
}

impl<'a, K, V> Endpoint<'a, K, V> {
    fn shape(kind: EndKind, key: &'a K, node: &'a Node<K, V>) -> Self {
        match kind {
            EndKind::Key => Endpoint::Key(key),
            EndKind::Value => Endpoint::Value(node),
            EndKind::Pair => Endpoint::Pair(key, node),
        }
    }

    /// Returns the key, unless this is a [`Endpoint::Value`].
    #[must_use]
    pub const fn key(&self) -> Option<&'a K> {
        match *self {
            Endpoint::Key(key) | Endpoint::Pair(key, _) => Some(key),
            Endpoint::Value(_) => None,
        }
    }

    /// Returns the node, unless this is a [`Endpoint::Key`].
    #[must_use]
    pub const fn node(&self) -> Option<&'a Node<K, V>> {
        match *self {
            Endpoint::Value(node) | Endpoint::Pair(_, node) => Some(node),
            Endpoint::Key(_) => None,
        }
    }
}

impl<K, V> Clone for Endpoint<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Endpoint<'_, K, V> {}

impl<K, V> OrderedTree<K, V> {
    /// Descends along the first (or last) entries and returns the boundary
    /// entry of the deepest level reached within `depth`.
    ///
    /// At each level the entry at `end` is taken. If `depth` allows and its
    /// node is a non-empty tree, the search continues inside it; otherwise
    /// that entry is the answer. Returns `None` only if this level is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use deep_tree::{Depth, End, EndKind, Endpoint, Node, OrderedTree};
    ///
    /// let mut tree = OrderedTree::from_leaves([("a", 1), ("b", 2)]);
    /// tree.insert_tree("c", OrderedTree::from_leaves([("x", 9)]));
    ///
    /// assert_eq!(tree.get_endmost(EndKind::Key, End::Back, Depth::CURRENT), Some(Endpoint::Key(&"c")));
    /// assert_eq!(
    ///     tree.get_endmost(EndKind::Pair, End::Back, Depth::Unbounded),
    ///     Some(Endpoint::Pair(&"x", &Node::Leaf(9)))
    /// );
    /// assert_eq!(tree.get_endmost(EndKind::Key, End::Front, Depth::Unbounded), Some(Endpoint::Key(&"a")));
    /// ```
    #[must_use]
    pub fn get_endmost(&self, kind: EndKind, end: End, depth: Depth) -> Option<Endpoint<'_, K, V>> {
        let (key, node) = self.raw.boundary(end)?;
        if let (Some(next), Node::Tree(child)) = (depth.descend(), node)
            && let Some(found) = child.get_endmost(kind, end, next)
        {
            return Some(found);
        }
        Some(Endpoint::shape(kind, key, node))
    }

    /// Shorthand for [`get_endmost`](OrderedTree::get_endmost) with
    /// [`EndKind::Key`].
    #[must_use]
    pub fn endmost_key(&self, end: End, depth: Depth) -> Option<&K> {
        self.get_endmost(EndKind::Key, end, depth).and_then(|found| found.key())
    }

    /// Shorthand for [`get_endmost`](OrderedTree::get_endmost) with
    /// [`EndKind::Value`].
    #[must_use]
    pub fn endmost_value(&self, end: End, depth: Depth) -> Option<&Node<K, V>> {
        self.get_endmost(EndKind::Value, end, depth).and_then(|found| found.node())
    }

    /// Shorthand for [`get_endmost`](OrderedTree::get_endmost) with
    /// [`EndKind::Pair`].
    #[must_use]
    pub fn endmost_pair(&self, end: End, depth: Depth) -> Option<(&K, &Node<K, V>)> {
        match self.get_endmost(EndKind::Pair, end, depth)? {
            Endpoint::Pair(key, node) => Some((key, node)),
            Endpoint::Key(_) | Endpoint::Value(_) => None,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn empty_level_has_no_endpoint() {
        let tree: OrderedTree<&str, i32> = OrderedTree::new();
        assert_eq!(tree.get_endmost(EndKind::Key, End::Back, Depth::Unbounded), None);
    }

    #[test]
    fn empty_subtree_falls_back_to_its_link() {
        let mut tree = OrderedTree::from_leaves([("a", 1)]);
        tree.insert_tree("hollow", OrderedTree::new());
        assert_eq!(tree.endmost_key(End::Back, Depth::Unbounded), Some(&"hollow"));
        assert_eq!(tree.endmost_value(End::Back, Depth::Unbounded), Some(&Node::Tree(OrderedTree::new())));
    }

    #[test]
    fn depth_bound_stops_descent() {
        let mut tree = OrderedTree::new();
        tree.insert_tree("l1", OrderedTree::from_leaves([("l2", 0)]));
        assert_eq!(tree.endmost_key(End::Front, Depth::CURRENT), Some(&"l1"));
        assert_eq!(tree.endmost_key(End::Front, Depth::Levels(1)), Some(&"l2"));
        assert_eq!(tree.endmost_pair(End::Front, Depth::Levels(1)), Some((&"l2", &Node::Leaf(0))));
    }

    #[test]
    fn kind_names() {
        assert_eq!("KEY".parse::<EndKind>(), Ok(EndKind::Key));
        assert_eq!("value".parse::<EndKind>(), Ok(EndKind::Value));
        assert_eq!("pair".parse::<EndKind>(), Ok(EndKind::Pair));
        assert!(matches!("keys".parse::<EndKind>(), Err(Error::InvalidArgument(_))));
    }
}
