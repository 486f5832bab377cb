//! Traversal iterators over the tree.
//!
//! Depth-first orders run on an explicit `Vec` stack and level-order on a
//! `VecDeque`, never on call-stack recursion: traversal depth equals the
//! tree height, which in the degenerate case equals the element count.
//! Each call to [`OrderedTree::traverse`] builds a fresh iterator, so
//! traversals are restartable and no traversal state lives on the tree.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::tree::{drop_subtree, Node};
use crate::OrderedTree;

/// The order in which a traversal visits the tree's values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Left subtree, node, right subtree: ascending under the comparator.
    /// The default order, and what plain iteration over `&OrderedTree`
    /// uses.
    #[default]
    InOrder,
    /// Node, left subtree, right subtree: the root precedes its
    /// descendants, suited to structural reconstruction.
    PreOrder,
    /// Left subtree, right subtree, node: children precede their parent,
    /// suited to bottom-up teardown.
    PostOrder,
    /// Breadth-first by depth, left before right within a depth.
    LevelOrder,
}

/// A lazy iterator over `&T` in one of the four [`TraversalOrder`]s.
///
/// Created by [`OrderedTree::traverse`] and [`OrderedTree::iter`]. The
/// iterator borrows the tree for its whole lifetime, so the tree cannot be
/// mutated while a traversal is in flight.
pub struct Traverse<'a, T> {
    state: State<'a, T>,
    remaining: usize,
}

enum State<'a, T> {
    /// Stack of nodes whose left spine has been descended but whose value
    /// and right subtree are still pending, plus the next subtree root to
    /// descend into.
    InOrder {
        stack: Vec<&'a Node<T>>,
        next_subtree: Option<&'a Node<T>>,
    },
    /// Pending nodes; children are pushed right-then-left so the left
    /// child pops first.
    PreOrder { stack: Vec<&'a Node<T>> },
    /// Visit stack yielded by popping, built from `root` by
    /// [`postorder_visits`] on the first advance so an unused iterator
    /// costs nothing.
    PostOrder {
        root: Option<&'a Node<T>>,
        visits: Option<Vec<&'a Node<T>>>,
    },
    /// FIFO of discovered nodes.
    LevelOrder { queue: VecDeque<&'a Node<T>> },
}

impl<'a, T> Traverse<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize, order: TraversalOrder) -> Self {
        let state = match order {
            TraversalOrder::InOrder => State::InOrder {
                stack: Vec::new(),
                next_subtree: root,
            },
            TraversalOrder::PreOrder => State::PreOrder {
                stack: root.into_iter().collect(),
            },
            TraversalOrder::PostOrder => State::PostOrder {
                root,
                visits: None,
            },
            TraversalOrder::LevelOrder => State::LevelOrder {
                queue: root.into_iter().collect(),
            },
        };
        Self {
            state,
            remaining: len,
        }
    }
}

/// Two-stack post-order: drain a reversed pre-order (node, right, left)
/// discovery stack into a visit stack, which then pops in left, right,
/// node order.
fn postorder_visits<T>(root: Option<&Node<T>>) -> Vec<&Node<T>> {
    let mut discover: Vec<&Node<T>> = root.into_iter().collect();
    let mut visits = Vec::new();
    while let Some(node) = discover.pop() {
        if let Some(left) = node.left.as_deref() {
            discover.push(left);
        }
        if let Some(right) = node.right.as_deref() {
            discover.push(right);
        }
        visits.push(node);
    }
    visits
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = match &mut self.state {
            State::InOrder {
                stack,
                next_subtree,
            } => {
                while let Some(node) = next_subtree.take() {
                    stack.push(node);
                    *next_subtree = node.left.as_deref();
                }
                let node = stack.pop()?;
                *next_subtree = node.right.as_deref();
                node
            }
            State::PreOrder { stack } => {
                let node = stack.pop()?;
                if let Some(right) = node.right.as_deref() {
                    stack.push(right);
                }
                if let Some(left) = node.left.as_deref() {
                    stack.push(left);
                }
                node
            }
            State::PostOrder { root, visits } => visits
                .get_or_insert_with(|| postorder_visits(root.take()))
                .pop()?,
            State::LevelOrder { queue } => {
                let node = queue.pop_front()?;
                if let Some(left) = node.left.as_deref() {
                    queue.push_back(left);
                }
                if let Some(right) = node.right.as_deref() {
                    queue.push_back(right);
                }
                node
            }
        };
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Traverse<'_, T> {}
impl<T> FusedIterator for Traverse<'_, T> {}

/// An owning in-order iterator, created by consuming an [`OrderedTree`].
///
/// # Examples
///
/// ```
/// use ordered_tree::OrderedTree;
///
/// let tree: OrderedTree<i32> = [2, 1, 3].into_iter().collect();
/// let values: Vec<i32> = tree.into_iter().collect();
/// assert_eq!(values, [1, 2, 3]);
/// ```
pub struct IntoIter<T> {
    /// Left spine of the subtree being consumed; each stacked node has had
    /// its left child taken already.
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Option<Box<Node<T>>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut subtree: Option<Box<Node<T>>>) {
        while let Some(mut node) = subtree {
            subtree = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = *self.stack.pop()?;
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    /// Unvisited nodes still own their right subtrees; tear them down
    /// without recursing.
    fn drop(&mut self) {
        for node in self.stack.drain(..) {
            drop_subtree(Some(node));
        }
    }
}

impl<T, C> IntoIterator for OrderedTree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let len = self.len();
        IntoIter::new(self.take_root(), len)
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedTree<T, C> {
    type Item = &'a T;
    type IntoIter = Traverse<'a, T>;

    fn into_iter(self) -> Traverse<'a, T> {
        self.iter()
    }
}
