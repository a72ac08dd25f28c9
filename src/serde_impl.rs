use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::{Node, OrderedTree};

// Caps the preallocation a hostile size hint can trigger.
const MAX_PREALLOCATED: usize = 4096;

impl<K: Serialize, V: Serialize> Serialize for OrderedTree<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

struct TreeVisitor<K, V> {
    marker: PhantomData<fn() -> OrderedTree<K, V>>,
}

impl<'de, K, V> Visitor<'de> for TreeVisitor<K, V>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
{
    type Value = OrderedTree<K, V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of leaves and nested maps")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut tree = OrderedTree::with_capacity(access.size_hint().unwrap_or(0).min(MAX_PREALLOCATED));
        while let Some((key, node)) = access.next_entry::<K, Node<K, V>>()? {
            tree.insert(key, node);
        }
        Ok(tree)
    }
}

impl<'de, K, V> Deserialize<'de> for OrderedTree<K, V>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TreeVisitor { marker: PhantomData })
    }
}
