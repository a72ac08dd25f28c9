use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;
use core::ops::Index;

use crate::OrderedTree;

/// A value stored in an [`OrderedTree`]: either a leaf or a nested tree.
///
/// Deep operations only recurse into [`Node::Tree`]; a [`Node::Leaf`] ends
/// the branch. Because every level owns its children, a tree can never be
/// inserted into itself.
///
/// # Examples
///
/// ```
/// use deep_tree::{Node, OrderedTree};
///
/// let mold = OrderedTree::from_leaves([("p1", 5), ("p2", 3)]);
/// let node: Node<&str, i32> = Node::Tree(mold);
///
/// assert!(node.is_tree());
/// assert_eq!(node["p2"], Node::Leaf(3));
/// assert_eq!(node.as_tree().map(OrderedTree::len), Some(2));
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        untagged,
        bound(
            serialize = "K: serde::Serialize, V: serde::Serialize",
            deserialize = "K: serde::Deserialize<'de> + Hash + Eq, V: serde::Deserialize<'de>"
        )
    )
)]
pub enum Node<K, V> {
    /// A nested level.
    Tree(OrderedTree<K, V>),
    /// A terminal value.
    Leaf(V),
}

impl<K, V> Node<K, V> {
    /// Returns `true` if this node is a nested tree.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        matches!(self, Node::Tree(_))
    }

    /// Returns `true` if this node is a leaf value.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Returns the nested tree, or `None` for a leaf.
    #[must_use]
    pub const fn as_tree(&self) -> Option<&OrderedTree<K, V>> {
        match self {
            Node::Tree(tree) => Some(tree),
            Node::Leaf(_) => None,
        }
    }

    /// Returns the nested tree mutably, or `None` for a leaf.
    #[must_use]
    pub fn as_tree_mut(&mut self) -> Option<&mut OrderedTree<K, V>> {
        match self {
            Node::Tree(tree) => Some(tree),
            Node::Leaf(_) => None,
        }
    }

    /// Returns the leaf value, or `None` for a tree.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&V> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Tree(_) => None,
        }
    }

    /// Returns the leaf value mutably, or `None` for a tree.
    #[must_use]
    pub fn as_leaf_mut(&mut self) -> Option<&mut V> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Tree(_) => None,
        }
    }

    /// Consumes the node, returning the nested tree if it is one.
    #[must_use]
    pub fn into_tree(self) -> Option<OrderedTree<K, V>> {
        match self {
            Node::Tree(tree) => Some(tree),
            Node::Leaf(_) => None,
        }
    }

    /// Consumes the node, returning the leaf value if it is one.
    #[must_use]
    pub fn into_leaf(self) -> Option<V> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Tree(_) => None,
        }
    }
}

impl<K, V> From<OrderedTree<K, V>> for Node<K, V> {
    fn from(tree: OrderedTree<K, V>) -> Self {
        Node::Tree(tree)
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Node<K, V> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Tree(a), Node::Tree(b)) => a == b,
            (Node::Leaf(a), Node::Leaf(b)) => a == b,
            _ => false,
        }
    }
}

impl<K: Eq, V: Eq> Eq for Node<K, V> {}

// Leaves print bare so nested trees read like nested maps.
impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Node<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Tree(tree) => fmt::Debug::fmt(tree, f),
            Node::Leaf(value) => fmt::Debug::fmt(value, f),
        }
    }
}

/// Indexes into a nested tree.
///
/// # Panics
///
/// Panics if the node is a leaf or the key is not present in the tree.
impl<K, Q, V> Index<&Q> for Node<K, V>
where
    K: Borrow<Q> + Hash + Eq,
    Q: ?Sized + Hash + Eq,
{
    type Output = Node<K, V>;

    fn index(&self, key: &Q) -> &Node<K, V> {
        match self {
            Node::Tree(tree) => &tree[key],
            Node::Leaf(_) => panic!("cannot index into a leaf node"),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn capability_tests() {
        let leaf: Node<&str, i32> = Node::Leaf(7);
        assert!(leaf.is_leaf());
        assert!(leaf.as_tree().is_none());
        assert_eq!(leaf.clone().into_leaf(), Some(7));

        let tree: Node<&str, i32> = OrderedTree::from_leaves([("a", 1)]).into();
        assert!(tree.is_tree());
        assert!(tree.as_leaf().is_none());
        assert_eq!(tree.into_tree().map(|t| t.len()), Some(1));
    }

    #[test]
    fn leaf_never_equals_tree() {
        let leaf: Node<&str, i32> = Node::Leaf(1);
        let tree: Node<&str, i32> = Node::Tree(OrderedTree::new());
        assert_ne!(leaf, tree);
    }

    #[test]
    fn debug_reads_like_nested_map() {
        let node: Node<&str, i32> = OrderedTree::from_leaves([("a", 1), ("b", 2)]).into();
        assert_eq!(format!("{node:?}"), r#"{"a": 1, "b": 2}"#);
    }

    #[test]
    #[should_panic(expected = "cannot index into a leaf node")]
    fn index_into_leaf_panics() {
        let leaf: Node<&str, i32> = Node::Leaf(1);
        let _ = &leaf["a"];
    }
}
