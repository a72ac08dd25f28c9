//! Recursively nested, insertion-ordered tree maps for Rust.
//!
//! This crate provides [`OrderedTree`], an ordered map whose values are
//! [`Node`]s: either a leaf value or another `OrderedTree`. Every level keeps
//! its entries in insertion order, and a set of *deep* operations works across
//! as many nested levels as a [`Depth`] bound allows:
//!
//! - [`deep_contains`](OrderedTree::deep_contains) - Search keys or values on every reachable level
//! - [`deep_move_to_end`](OrderedTree::deep_move_to_end) - Move an entry to the front or back, pulling
//!   every ancestor link with it
//! - [`get_endmost`](OrderedTree::get_endmost) - Descend along the first or last entries
//! - [`compare_extremum`](OrderedTree::compare_extremum) - Compare a level's minimum or maximum
//!   against an outside value
//!
//! # Example
//!
//! ```
//! use deep_tree::{Depth, End, OrderedTree};
//!
//! // arm:mount -> mold -> part -> hours
//! let mut schedule: OrderedTree<&str, u32> = OrderedTree::new();
//! schedule.insert_tree("0:0", OrderedTree::new());
//! schedule.insert_tree("0:1", OrderedTree::new());
//! if let Some(mount) = schedule.get_mut("0:1").and_then(|n| n.as_tree_mut()) {
//!     mount.insert_tree("m7", OrderedTree::from_leaves([("p3", 2)]));
//!     mount.insert_tree("m2", OrderedTree::from_leaves([("p9", 4)]));
//! }
//!
//! // The last mold used on a mount goes first.
//! schedule.deep_move_to_end("m2", End::Front, Depth::Unbounded).unwrap();
//! assert_eq!(schedule.endmost_key(End::Front, Depth::CURRENT), Some(&"0:1"));
//! assert_eq!(schedule.endmost_key(End::Front, Depth::Levels(1)), Some(&"m2"));
//! assert_eq!(schedule.endmost_key(End::Front, Depth::Unbounded), Some(&"p9"));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **`serde`** - Serialize trees as nested maps in insertion order
//!
//! # Concurrency
//!
//! A deep move touches an unbounded chain of levels, one at a time. Share a
//! tree between threads behind a single lock for the whole root, e.g. a
//! `Mutex<OrderedTree<K, V>>`, never one lock per level.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod node;
mod raw;
#[cfg(feature = "serde")]
mod serde_impl;
mod traversal;

pub mod ordered_tree;

pub use error::{Error, Result};
pub use node::Node;
pub use ordered_tree::{EndKind, Endpoint, Extremum, Operand, OrderedTree, Target};
pub use traversal::{Depth, End};
