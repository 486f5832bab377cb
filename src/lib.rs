//! An ordered binary search tree (BST) with duplicate support and four
//! traversal orders, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of this BST
//! are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    comparing less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    comparing greater than *or equal to* its own value. Inserting a value
//!    already in the tree stores a second copy rather than overwriting, and
//!    that copy always lands in the right subtree.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`). This tree does **not**
//! rebalance itself: its shape is a direct function of insertion order, so
//! inserting already-sorted input degrades the height to `O(N)`. BSTs also
//! naturally support sorted iteration by visiting the left subtree, then
//! the subtree root, then the right subtree; [`OrderedTree`] exposes that
//! in-order walk plus pre-order, post-order, and level-order variants, all
//! driven by explicit stacks/queues rather than call-stack recursion so a
//! degenerate tree cannot overflow the stack mid-iteration.
//!
//! All structural decisions go through a [`Comparator`], injected at
//! construction. [`OrderedTree::new`] uses the value type's `Ord`
//! implementation; [`OrderedTree::with_comparator`] accepts any strategy,
//! including plain closures via [`FnComparator`].
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, TraversalOrder};
//!
//! let mut tree = OrderedTree::new();
//! for value in [10, 5, 7, 4, 15, 12, 17] {
//!     tree.insert(value);
//! }
//!
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.min(), Ok(&4));
//! assert_eq!(tree.max(), Ok(&17));
//!
//! // Default iteration is in-order: ascending under the comparator.
//! let sorted: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(sorted, [4, 5, 7, 10, 12, 15, 17]);
//!
//! // Level-order visits by distance from the root.
//! let by_level: Vec<_> = tree.traverse(TraversalOrder::LevelOrder).copied().collect();
//! assert_eq!(by_level, [10, 5, 15, 4, 7, 12, 17]);
//!
//! assert!(tree.remove(&15));
//! assert!(!tree.remove(&99));
//! assert_eq!(tree.len(), 6);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod compare;
mod iter;
mod tree;


pub use compare::{Comparator, FnComparator, NaturalOrder};
pub use iter::{IntoIter, Traverse, TraversalOrder};
pub use tree::{EmptyTreeError, OrderedTree};
