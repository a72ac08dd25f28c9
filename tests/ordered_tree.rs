use deep_tree::{Node, OrderedTree};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

fn key_strategy() -> impl Strategy<Value = i64> {
    // Small range so inserts collide with existing keys.
    -200i64..200i64
}

fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

/// Reference model: an association list in insertion order.
#[derive(Debug, Default)]
struct Model {
    entries: Vec<(i64, i64)>,
}

impl Model {
    fn position(&self, key: i64) -> Option<usize> {
        self.entries.iter().position(|(k, _)| *k == key)
    }

    fn insert(&mut self, key: i64, value: i64) -> Option<i64> {
        match self.position(key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    fn remove(&mut self, key: i64) -> Option<i64> {
        self.position(key).map(|i| self.entries.remove(i).1)
    }

    fn pop_first(&mut self) -> Option<(i64, i64)> {
        (!self.entries.is_empty()).then(|| self.entries.remove(0))
    }
}

fn leaf(node: Option<&Node<i64, i64>>) -> Option<i64> {
    node.and_then(Node::as_leaf).copied()
}

fn pair((k, node): (&i64, &Node<i64, i64>)) -> Option<(i64, i64)> {
    node.as_leaf().map(|v| (*k, *v))
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum TreeOp {
    Insert(i64, i64),
    Remove(i64),
    Get(i64),
    ContainsKey(i64),
    IndexOf(i64),
    FirstKeyValue,
    LastKeyValue,
    PopFirst,
    PopLast,
}

fn tree_op_strategy() -> impl Strategy<Value = TreeOp> {
    prop_oneof![
        5 => (key_strategy(), value_strategy()).prop_map(|(k, v)| TreeOp::Insert(k, v)),
        3 => key_strategy().prop_map(TreeOp::Remove),
        2 => key_strategy().prop_map(TreeOp::Get),
        1 => key_strategy().prop_map(TreeOp::ContainsKey),
        1 => key_strategy().prop_map(TreeOp::IndexOf),
        1 => Just(TreeOp::FirstKeyValue),
        1 => Just(TreeOp::LastKeyValue),
        1 => Just(TreeOp::PopFirst),
        1 => Just(TreeOp::PopLast),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays random operations on a single level and on the model, comparing
    /// every result and the final order.
    #[test]
    fn level_ops_match_model(ops in proptest::collection::vec(tree_op_strategy(), TEST_SIZE)) {
        let mut tree: OrderedTree<i64, i64> = OrderedTree::new();
        let mut model = Model::default();

        for op in &ops {
            match op {
                TreeOp::Insert(k, v) => {
                    let got = tree.insert_leaf(*k, *v).and_then(Node::into_leaf);
                    prop_assert_eq!(got, model.insert(*k, *v), "insert({}, {})", k, v);
                }
                TreeOp::Remove(k) => {
                    let got = tree.remove(k).and_then(Node::into_leaf);
                    prop_assert_eq!(got, model.remove(*k), "remove({})", k);
                }
                TreeOp::Get(k) => {
                    let expected = model.position(*k).map(|i| model.entries[i].1);
                    prop_assert_eq!(leaf(tree.get(k)), expected, "get({})", k);
                }
                TreeOp::ContainsKey(k) => {
                    prop_assert_eq!(tree.contains_key(k), model.position(*k).is_some(), "contains_key({})", k);
                }
                TreeOp::IndexOf(k) => {
                    prop_assert_eq!(tree.index_of(k), model.position(*k), "index_of({})", k);
                }
                TreeOp::FirstKeyValue => {
                    prop_assert_eq!(tree.first_key_value().and_then(pair), model.entries.first().copied());
                }
                TreeOp::LastKeyValue => {
                    prop_assert_eq!(tree.last_key_value().and_then(pair), model.entries.last().copied());
                }
                TreeOp::PopFirst => {
                    let got = tree.pop_first().and_then(|(k, n)| n.into_leaf().map(|v| (k, v)));
                    prop_assert_eq!(got, model.pop_first());
                }
                TreeOp::PopLast => {
                    let got = tree.pop_last().and_then(|(k, n)| n.into_leaf().map(|v| (k, v)));
                    prop_assert_eq!(got, model.entries.pop());
                }
            }
            prop_assert_eq!(tree.len(), model.entries.len(), "len mismatch after {:?}", op);
        }

        let items: Vec<_> = tree.iter().filter_map(pair).collect();
        prop_assert_eq!(items, model.entries);
    }

    /// Tests that every iterator flavour yields insertion order.
    #[test]
    fn iterators_agree(entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..TEST_SIZE)) {
        let tree = OrderedTree::from_leaves(entries.iter().copied());
        let mut model = Model::default();
        for (k, v) in &entries {
            model.insert(*k, *v);
        }
        let keys: Vec<_> = model.entries.iter().map(|(k, _)| *k).collect();

        prop_assert_eq!(tree.iter().len(), keys.len());
        prop_assert_eq!(tree.keys().copied().collect::<Vec<_>>(), keys.clone());
        prop_assert_eq!(tree.keys().rev().copied().collect::<Vec<_>>(), keys.iter().rev().copied().collect::<Vec<_>>());
        prop_assert_eq!(tree.clone().into_keys().collect::<Vec<_>>(), keys);

        let values: Vec<_> = model.entries.iter().map(|(_, v)| *v).collect();
        prop_assert_eq!(tree.values().filter_map(Node::as_leaf).copied().collect::<Vec<_>>(), values.clone());
        prop_assert_eq!(tree.into_values().filter_map(Node::into_leaf).collect::<Vec<_>>(), values);
    }

    /// Tests that retain keeps the survivors in their prior order.
    #[test]
    fn retain_preserves_order(entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..TEST_SIZE)) {
        let mut tree = OrderedTree::from_leaves(entries.iter().copied());
        let expected: Vec<_> = tree.keys().copied().filter(|k| k % 3 == 0).collect();

        tree.retain(|k, _| k % 3 == 0);
        prop_assert_eq!(tree.keys().copied().collect::<Vec<_>>(), expected);
    }

    /// Tests that a clone compares equal and that reordering breaks equality.
    #[test]
    fn clone_is_equal_and_order_matters(entries in proptest::collection::vec((key_strategy(), value_strategy()), 2..TEST_SIZE)) {
        let tree = OrderedTree::from_leaves(entries.iter().copied());
        prop_assert_eq!(&tree.clone(), &tree);

        if tree.len() > 1 {
            let mut rotated = tree.clone();
            let (k, node) = rotated.pop_first().unwrap();
            rotated.insert(k, node);
            prop_assert_ne!(&rotated, &tree);
        }
    }
}

#[test]
fn schedule_is_built_level_by_level() {
    let mut schedule: OrderedTree<String, u32> = OrderedTree::with_capacity(4);
    for arm in 0..2 {
        for mount in 0..2 {
            let molds = schedule.get_or_insert_subtree(format!("{arm}:{mount}")).unwrap();
            molds.insert_tree(format!("mold{mount}"), OrderedTree::from_leaves([(format!("part{arm}"), 2)]));
        }
    }

    let mounts: Vec<_> = schedule.keys().cloned().collect();
    assert_eq!(mounts, ["0:0", "0:1", "1:0", "1:1"]);
    assert_eq!(schedule.height(), 3);
    assert_eq!(schedule.leaf_count(), 4);
    assert_eq!(schedule.get_path(&["1:0", "mold0", "part1"]), Some(&Node::Leaf(2)));
    assert_eq!(schedule["1:1"]["mold1"]["part1"].as_leaf(), Some(&2));
}

#[test]
fn pretty_debug_output_nests() {
    let mut tree = OrderedTree::from_leaves([("a", 1)]);
    tree.insert_tree("b", OrderedTree::from_leaves([("c", 2)]));

    let expected = "{\n    \"a\": 1,\n    \"b\": {\n        \"c\": 2,\n    },\n}";
    assert_eq!(format!("{tree:#?}"), expected);
}
