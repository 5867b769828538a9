//! Lexicographic comparators over optional values.
//!
//! A [`Comparator`] orders two possibly-absent values. Absence (`None`) sorts
//! before every present value and two absent values are equal; present
//! values are compared component by component, and the first component that
//! differs decides the result.
//!
//! | Comparator             | Orders                    | Components compared            |
//! |------------------------|---------------------------|--------------------------------|
//! | [`PairComparator`]     | [`Pair<A, B>`]            | `first`, then `second`         |
//! | [`TripletComparator`]  | [`Triplet<A, B, C>`]      | `first`, `second`, `third`     |
//! | [`KeyValueComparator`] | [`Pair<K, V>`]            | `first` only (the key)         |
//! | [`ListComparator`]     | [`ImmutableList<E>`], `[E]` | length, then element by element |
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use idealist::Pair;
//! use idealist::comparator::{Comparator, PairComparator};
//!
//! let comparator = PairComparator;
//! let a = Pair::new(1, "a");
//! let b = Pair::new(1, "b");
//!
//! assert_eq!(comparator.compare(Some(&a), Some(&b)), Ordering::Less);
//! assert_eq!(comparator.compare(None, Some(&a)), Ordering::Less);
//! assert_eq!(comparator.compare(None::<&Pair<i32, &str>>, None), Ordering::Equal);
//! ```

use std::cmp::Ordering;

use crate::list::ImmutableList;
use crate::tuple::{Pair, Triplet};

/// A total order over possibly-absent values of `T`.
///
/// Implementors only describe how two present values compare; use
/// [`compare_nullable`] to get the absent-first rule.
pub trait Comparator<T: ?Sized> {
    /// Compares two possibly-absent values.
    fn compare(&self, left: Option<&T>, right: Option<&T>) -> Ordering;

    /// Compares two present values.
    #[inline]
    fn compare_present(&self, left: &T, right: &T) -> Ordering {
        self.compare(Some(left), Some(right))
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(Option<&T>, Option<&T>) -> Ordering,
{
    #[inline]
    fn compare(&self, left: Option<&T>, right: Option<&T>) -> Ordering {
        self(left, right)
    }
}

/// Applies the absent-first rule, delegating to `present` when both values exist.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use idealist::comparator::compare_nullable;
///
/// let order = compare_nullable(Some(&1), None, |left: &i32, right| left.cmp(right));
/// assert_eq!(order, Ordering::Greater);
/// ```
pub fn compare_nullable<T: ?Sized, F>(left: Option<&T>, right: Option<&T>, present: F) -> Ordering
where
    F: FnOnce(&T, &T) -> Ordering,
{
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => present(left, right),
    }
}

/// Orders pairs by `first`, then by `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PairComparator;

impl<A: Ord, B: Ord> Comparator<Pair<A, B>> for PairComparator {
    fn compare(&self, left: Option<&Pair<A, B>>, right: Option<&Pair<A, B>>) -> Ordering {
        compare_nullable(left, right, |left, right| {
            left.first
                .cmp(&right.first)
                .then_with(|| left.second.cmp(&right.second))
        })
    }
}

/// Orders triplets by `first`, then `second`, then `third`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TripletComparator;

impl<A: Ord, B: Ord, C: Ord> Comparator<Triplet<A, B, C>> for TripletComparator {
    fn compare(
        &self,
        left: Option<&Triplet<A, B, C>>,
        right: Option<&Triplet<A, B, C>>,
    ) -> Ordering {
        compare_nullable(left, right, |left, right| {
            left.first
                .cmp(&right.first)
                .then_with(|| left.second.cmp(&right.second))
                .then_with(|| left.third.cmp(&right.third))
        })
    }
}

/// Orders key-value pairs by key only.
///
/// Values never take part in the comparison, so a stable sort with this
/// comparator keeps equal-keyed entries in their original order. The value
/// type needs no ordering at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyValueComparator;

impl<K: Ord, V> Comparator<Pair<K, V>> for KeyValueComparator {
    fn compare(&self, left: Option<&Pair<K, V>>, right: Option<&Pair<K, V>>) -> Ordering {
        compare_nullable(left, right, |left, right| left.first.cmp(&right.first))
    }
}

/// Orders lists by length first, then element by element.
///
/// This is shortlex order: `[9]` sorts before `[1, 1]`. It is also the
/// `Ord` of [`ImmutableList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ListComparator;

impl<E: Ord> Comparator<[E]> for ListComparator {
    fn compare(&self, left: Option<&[E]>, right: Option<&[E]>) -> Ordering {
        compare_nullable(left, right, shortlex)
    }
}

impl<E: Ord> Comparator<ImmutableList<E>> for ListComparator {
    fn compare(
        &self,
        left: Option<&ImmutableList<E>>,
        right: Option<&ImmutableList<E>>,
    ) -> Ordering {
        compare_nullable(left, right, |left, right| {
            shortlex(left.as_slice(), right.as_slice())
        })
    }
}

pub(crate) fn shortlex<E: Ord>(left: &[E], right: &[E]) -> Ordering {
    left.len().cmp(&right.len()).then_with(|| {
        left.iter()
            .zip(right)
            .map(|(left, right)| left.cmp(right))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}
