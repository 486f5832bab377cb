//! The comparison strategy driving every structural decision in the tree.
//!
//! The comparator is a plain capability object: a total, consistent
//! three-way comparison over two values. It is injected once at
//! construction and must not change behavior over the tree's lifetime:
//! the tree only stays ordered if every descent sees the same answers.
//! That precondition is not (and cannot cheaply be) checked at runtime; an
//! inconsistent comparator produces a logically scrambled tree, never
//! memory unsafety.

use std::cmp::Ordering;

/// A total three-way ordering over values of type `T`.
///
/// Implementors must be consistent: `compare(a, b)` must return the same
/// answer every time it is asked for the same pair, and the order must be
/// total (every pair is `Less`, `Equal`, or `Greater`).
pub trait Comparator<T> {
    /// Compares `a` to `b`, returning `Less`/`Equal`/`Greater` in the
    /// usual `a.cmp(b)` sense.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The default comparator: `T`'s own [`Ord`] implementation.
///
/// # Examples
///
/// ```
/// use ordered_tree::{Comparator, NaturalOrder};
///
/// assert_eq!(NaturalOrder.compare(&1, &2), std::cmp::Ordering::Less);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Adapter letting any `Fn(&T, &T) -> Ordering` closure act as a
/// [`Comparator`].
///
/// A blanket `impl<F: Fn(..)> Comparator for F` would conflict with the
/// [`NaturalOrder`] impl under coherence, so closures go through this
/// newtype instead.
///
/// # Examples
///
/// ```
/// use ordered_tree::{FnComparator, OrderedTree};
///
/// // A tree sorted in descending order.
/// let mut tree = OrderedTree::with_comparator(FnComparator(|a: &i32, b: &i32| b.cmp(a)));
/// tree.extend([1, 3, 2]);
///
/// let values: Vec<_> = tree.iter().copied().collect();
/// assert_eq!(values, [3, 2, 1]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnComparator<F>(
    /// The three-way comparison closure.
    pub F,
);

impl<T, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_order_matches_ord() {
        assert_eq!(NaturalOrder.compare(&3, &5), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&5, &5), Ordering::Equal);
        assert_eq!(NaturalOrder.compare(&7, &5), Ordering::Greater);
    }

    #[test]
    fn fn_comparator_delegates_to_closure() {
        let reversed = FnComparator(|a: &i32, b: &i32| b.cmp(a));
        assert_eq!(reversed.compare(&3, &5), Ordering::Greater);
        assert_eq!(reversed.compare(&5, &5), Ordering::Equal);
    }
}
