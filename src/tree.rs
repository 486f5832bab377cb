//! The ordered tree itself: a mutable graph of exclusively-owned nodes.
//!
//! Every node is owned by its parent's child link (or by the tree, for the
//! root), so the structure is a strict tree with no cycles and no parent
//! back-pointers. Operations that need to know a node's parent (deletion)
//! track the *owning link* during a single top-down walk instead, which
//! keeps ownership reasoning trivial and makes the root a non-special case.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use thiserror::Error;

use crate::compare::{Comparator, NaturalOrder};
use crate::iter::{Traverse, TraversalOrder};

/// Error returned by [`OrderedTree::min`] and [`OrderedTree::max`] when the
/// tree has no elements. No other operation fails: `contains` and `remove`
/// report absence through their boolean results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("tree is empty")]
pub struct EmptyTreeError;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// A binary search tree ordered by an injected [`Comparator`].
///
/// Values comparing equal are kept (no overwrite) and always routed into
/// the right subtree. The tree never rebalances, so its shape (and the
/// cost of every `O(height)` operation) is a direct function of insertion
/// order.
///
/// # Examples
///
/// ```
/// use ordered_tree::OrderedTree;
///
/// let mut tree = OrderedTree::new();
///
/// // Nothing in here yet.
/// assert!(tree.is_empty());
/// assert!(!tree.contains(&1));
///
/// tree.insert(1);
/// assert!(tree.contains(&1));
///
/// // Inserting an equal value stores a second copy.
/// tree.insert(1);
/// assert_eq!(tree.len(), 2);
///
/// // Removing deletes one copy at a time.
/// assert!(tree.remove(&1));
/// assert_eq!(tree.len(), 1);
/// ```
pub struct OrderedTree<T, C = NaturalOrder> {
    root: Option<Box<Node<T>>>,
    len: usize,
    comparator: C,
}

impl<T: Ord> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Generates a new, empty tree ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> OrderedTree<T, C> {
    /// Generates a new, empty tree ordered by the given comparator.
    ///
    /// The comparator must be a total, consistent three-way ordering and
    /// must keep answering the same way for the tree's whole lifetime.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{FnComparator, OrderedTree};
    ///
    /// let mut tree = OrderedTree::with_comparator(FnComparator(|a: &u32, b: &u32| b.cmp(a)));
    /// tree.extend([2, 9, 4]);
    ///
    /// // Largest first under the reversed order.
    /// assert_eq!(tree.min(), Ok(&9));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            len: 0,
            comparator,
        }
    }

    /// The number of values stored in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the smallest value under the comparator, or
    /// an error if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{EmptyTreeError, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.min(), Err(EmptyTreeError));
    ///
    /// tree.extend([5, 3, 7]);
    /// assert_eq!(tree.min(), Ok(&3));
    /// ```
    pub fn min(&self) -> Result<&T, EmptyTreeError> {
        let mut node = self.root.as_deref().ok_or(EmptyTreeError)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// Returns a reference to the largest value under the comparator, or
    /// an error if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{EmptyTreeError, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.max(), Err(EmptyTreeError));
    ///
    /// tree.extend([5, 3, 7]);
    /// assert_eq!(tree.max(), Ok(&7));
    /// ```
    pub fn max(&self) -> Result<&T, EmptyTreeError> {
        let mut node = self.root.as_deref().ok_or(EmptyTreeError)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    /// The height of the tree: the number of edges on the longest path
    /// from the root to a leaf. An empty tree has height `-1`, a single
    /// node height `0`.
    ///
    /// There is no cached height field, so this re-walks the whole tree in
    /// `O(len)` on every call. The recursion depth is bounded by the
    /// height itself, not by `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        subtree_height(self.root.as_deref())
    }

    /// Removes every value, resetting the tree to the empty state.
    ///
    /// The root is detached in `O(1)`; the detached subtree is then torn
    /// down with an explicit stack (see [`drop_subtree`]).
    pub fn clear(&mut self) {
        drop_subtree(self.root.take());
        self.len = 0;
    }

    /// Returns a lazy iterator over the tree's values in the given order.
    ///
    /// The iterator borrows the tree, so the borrow checker rules out
    /// structural mutation while a traversal is in flight. Callers only
    /// ever see values, never nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, TraversalOrder};
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.extend([2, 1, 3]);
    ///
    /// let pre: Vec<_> = tree.traverse(TraversalOrder::PreOrder).copied().collect();
    /// assert_eq!(pre, [2, 1, 3]);
    ///
    /// let post: Vec<_> = tree.traverse(TraversalOrder::PostOrder).copied().collect();
    /// assert_eq!(post, [1, 3, 2]);
    /// ```
    pub fn traverse(&self, order: TraversalOrder) -> Traverse<'_, T> {
        Traverse::new(self.root.as_deref(), self.len, order)
    }

    /// Returns an in-order iterator: ascending under the comparator.
    ///
    /// Shorthand for [`traverse`][Self::traverse] with
    /// [`TraversalOrder::InOrder`], which is also what iterating `&tree`
    /// yields.
    pub fn iter(&self) -> Traverse<'_, T> {
        self.traverse(TraversalOrder::InOrder)
    }

    pub(crate) fn take_root(&mut self) -> Option<Box<Node<T>>> {
        self.len = 0;
        self.root.take()
    }
}

impl<T, C> OrderedTree<T, C>
where
    C: Comparator<T>,
{
    /// Inserts a value, descending from the root and attaching a new leaf
    /// at the first absent child slot. Increments the length by exactly
    /// one; values comparing equal to an existing value are *not*
    /// rejected, they land in the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(4);
    /// tree.insert(4);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) {
        let cmp = &self.comparator;
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            cur = match cmp.compare(&value, &node.value) {
                // Equal values go right, so duplicates sit in the right
                // subtree in insertion order.
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
        }
        *cur = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Whether some stored value compares equal to `value`. `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match self.comparator.compare(value, &node.value) {
                Ordering::Equal => return true,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Removes the first value found by descent that compares equal to
    /// `value`. Returns `false`, leaving the tree untouched, if there is
    /// no match.
    ///
    /// A matched node with two children is not unlinked itself: its
    /// in-order successor (the left-most node of its right subtree) is
    /// spliced out instead, and the successor's value moves up into the
    /// matched node. The successor has no left child by construction, so
    /// splicing it out is the plain at-most-one-child case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.extend([10, 5, 15, 12, 17]);
    ///
    /// // 15 has two children; its successor 17 takes its place.
    /// assert!(tree.remove(&15));
    /// assert!(!tree.remove(&15));
    ///
    /// let values: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(values, [5, 10, 12, 17]);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let cmp = &self.comparator;

        // Walk down to the link that owns the first match. The link plays
        // the role of a tracked parent pointer: repointing it is how the
        // parent forgets the removed node.
        let mut cur = &mut self.root;
        loop {
            let ordering = match &*cur {
                Some(node) => cmp.compare(value, &node.value),
                None => return false,
            };
            if ordering == Ordering::Equal {
                break;
            }
            match cur {
                Some(node) => {
                    cur = if ordering == Ordering::Less {
                        &mut node.left
                    } else {
                        &mut node.right
                    };
                }
                None => unreachable!("probed above"),
            }
        }

        let has_two_children =
            matches!(&*cur, Some(node) if node.left.is_some() && node.right.is_some());

        if has_two_children {
            let node = cur.as_mut().expect("probed above");

            // Track the successor's owning link: right once, then left
            // until there is no left child.
            let mut succ_link = &mut node.right;
            while succ_link.as_ref().map_or(false, |n| n.left.is_some()) {
                match succ_link {
                    Some(succ) => succ_link = &mut succ.left,
                    None => unreachable!("probed above"),
                }
            }

            let mut succ = succ_link.take().expect("two children implies a right subtree");
            *succ_link = succ.right.take();
            // The successor's value moves up; the matched node's value
            // moves into `succ`, which owns it until it drops here.
            mem::swap(&mut node.value, &mut succ.value);
        } else {
            let node = *cur.take().expect("descent stopped on a match");
            *cur = node.left.or(node.right);
        }

        self.len -= 1;
        true
    }
}

/// Height of the subtree rooted at `node`, in edges. `None` is -1.
fn subtree_height<T>(node: Option<&Node<T>>) -> isize {
    match node {
        None => -1,
        Some(node) => {
            1 + subtree_height(node.left.as_deref()).max(subtree_height(node.right.as_deref()))
        }
    }
}

/// Builds a degenerate right-leaning chain of `len` nodes directly, so
/// stack-safety tests don't pay the `O(len^2)` cost of inserting sorted
/// input one value at a time.
#[cfg(test)]
pub(crate) fn right_chain(len: i32) -> OrderedTree<i32> {
    let mut root = None;
    for value in (0..len).rev() {
        let mut node = Node::new(value);
        node.right = root;
        root = Some(Box::new(node));
    }
    OrderedTree {
        root,
        len: len as usize,
        comparator: NaturalOrder,
    }
}

/// Tears down a detached subtree with an explicit stack. `Box`'s own drop
/// glue recurses per level, which would overflow the call stack on a
/// degenerate (sorted-input) tree.
pub(crate) fn drop_subtree<T>(root: Option<Box<Node<T>>>) {
    let mut stack = Vec::new();
    stack.extend(root);
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

impl<T, C> Drop for OrderedTree<T, C> {
    fn drop(&mut self) {
        drop_subtree(self.root.take());
    }
}

impl<T, C> Clone for OrderedTree<T, C>
where
    T: Clone,
    C: Clone,
{
    /// Shape-preserving clone, driven by an explicit stack of
    /// (source node, destination link) pairs.
    fn clone(&self) -> Self {
        let mut root = None;
        if let Some(src_root) = self.root.as_deref() {
            let mut pending: Vec<(&Node<T>, &mut Option<Box<Node<T>>>)> =
                vec![(src_root, &mut root)];
            while let Some((src, dst)) = pending.pop() {
                let node = dst.insert(Box::new(Node::new(src.value.clone())));
                let Node { left, right, .. } = &mut **node;
                if let Some(src_left) = src.left.as_deref() {
                    pending.push((src_left, left));
                }
                if let Some(src_right) = src.right.as_deref() {
                    pending.push((src_right, right));
                }
            }
        }
        Self {
            root,
            len: self.len,
            comparator: self.comparator.clone(),
        }
    }
}

impl<T, C> fmt::Debug for OrderedTree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, C> Extend<T> for OrderedTree<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
