//! The indexed fold primitive and the queries derived from it.
//!
//! [`IndexedFold`] has a single required method,
//! [`try_reduce_indexed`](IndexedFold::try_reduce_indexed): a left fold in
//! index order that threads an accumulator through
//! `operation(accumulator, element, index)` and may stop early by returning
//! [`ControlFlow::Break`]. Every other method is provided in terms of it:
//!
//! - plain folds: `reduce_indexed`, `reduce`, and the seedless
//!   `reduce_first_indexed` / `reduce_first`
//! - short-circuiting queries: `all`, `any`, `none`, `find`,
//!   `index_of_first`, `index_of`, `contains`
//! - statistics: `count`, `sum_of`, `sum_of_f64`, `max_by`, `min_by`
//! - rendering: `join_with`, `join`
//!
//! The list-valued operations (`map`, `filter`, `zip`, ...) live on
//! [`ImmutableList`](crate::ImmutableList) and are built on the same
//! primitive.
//!
//! # Laws
//!
//! ## Fold order
//!
//! ```text
//! fa.reduce_indexed(init, f) == f(..f(f(init, fa[0], 0), fa[1], 1).., fa[n-1], n-1)
//! ```
//!
//! ## Seedless consistency
//!
//! For a non-empty `fa`:
//!
//! ```text
//! fa.reduce_first(f) == fa.drop(1).reduce(fa[0].clone(), f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use idealist::IndexedFold;
//!
//! let numbers = [3, 1, 4, 1, 5];
//! assert_eq!(numbers.sum_of(|element| i64::from(*element)), 14);
//! assert_eq!(numbers.max_by(|element| *element), Ok(&5));
//! assert_eq!(numbers.index_of_first(|element| *element == 1), Some(1));
//! assert_eq!(numbers.join_with("", "-", ""), Ok("3-1-4-1-5".to_string()));
//! ```

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::ControlFlow;

use crate::error::{ListError, Result};

/// Sequences that can be folded in index order.
pub trait IndexedFold {
    /// The element type of the sequence.
    type Element;

    /// Folds the elements in index order, stopping early on [`ControlFlow::Break`].
    ///
    /// The value carried by `Break` becomes the result. If the operation
    /// never breaks, the final accumulator is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::ops::ControlFlow;
    /// use idealist::IndexedFold;
    ///
    /// // Sum until the first negative element.
    /// let total = [1, 2, -1, 4].try_reduce_indexed(0, |accumulator, element, _| {
    ///     if *element < 0 {
    ///         ControlFlow::Break(accumulator)
    ///     } else {
    ///         ControlFlow::Continue(accumulator + element)
    ///     }
    /// });
    /// assert_eq!(total, 3);
    /// ```
    fn try_reduce_indexed<'a, A, F>(&'a self, initial: A, operation: F) -> A
    where
        F: FnMut(A, &'a Self::Element, usize) -> ControlFlow<A, A>;

    /// Folds every element in index order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::IndexedFold;
    ///
    /// let weighted = [10, 20, 30].reduce_indexed(0, |accumulator, element, index| {
    ///     accumulator + element * index
    /// });
    /// assert_eq!(weighted, 80);
    /// ```
    fn reduce_indexed<'a, A, F>(&'a self, initial: A, mut operation: F) -> A
    where
        F: FnMut(A, &'a Self::Element, usize) -> A,
    {
        self.try_reduce_indexed(initial, |accumulator, element, index| {
            ControlFlow::Continue(operation(accumulator, element, index))
        })
    }

    /// Folds every element in order, ignoring indices.
    fn reduce<'a, A, F>(&'a self, initial: A, mut operation: F) -> A
    where
        F: FnMut(A, &'a Self::Element) -> A,
    {
        self.reduce_indexed(initial, |accumulator, element, _| {
            operation(accumulator, element)
        })
    }

    /// Folds using a clone of the first element as the seed, starting at index 1.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if there is no first element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::{IndexedFold, ListError};
    ///
    /// let result = [1, 2, 3].reduce_first_indexed(|accumulator, element, index| {
    ///     accumulator * 10 + element + index as i32
    /// });
    /// assert_eq!(result, Ok(1 * 100 + (2 + 1) * 10 + (3 + 2)));
    ///
    /// let empty: [i32; 0] = [];
    /// assert!(matches!(
    ///     empty.reduce_first_indexed(|accumulator, _, _| accumulator),
    ///     Err(ListError::EmptyList { .. })
    /// ));
    /// ```
    fn reduce_first_indexed<F>(&self, mut operation: F) -> Result<Self::Element>
    where
        Self::Element: Clone,
        F: FnMut(Self::Element, &Self::Element, usize) -> Self::Element,
    {
        self.reduce_indexed(None, |accumulator, element, index| match accumulator {
            None => Some(element.clone()),
            Some(accumulator) => Some(operation(accumulator, element, index)),
        })
        .ok_or_else(|| ListError::empty_list("reduce_first"))
    }

    /// Seedless fold ignoring indices.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the sequence is empty.
    fn reduce_first<F>(&self, mut operation: F) -> Result<Self::Element>
    where
        Self::Element: Clone,
        F: FnMut(Self::Element, &Self::Element) -> Self::Element,
    {
        self.reduce_first_indexed(|accumulator, element, _| operation(accumulator, element))
    }

    /// Calls `action` with every element and its index.
    fn for_each_indexed<'a, F>(&'a self, mut action: F)
    where
        F: FnMut(&'a Self::Element, usize),
    {
        self.reduce_indexed((), |(), element, index| action(element, index));
    }

    /// Returns the first element matching `predicate`, or `None`.
    fn find<'a, P>(&'a self, mut predicate: P) -> Option<&'a Self::Element>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.try_reduce_indexed(None, |_, element, _| {
            if predicate(element) {
                ControlFlow::Break(Some(element))
            } else {
                ControlFlow::Continue(None)
            }
        })
    }

    /// Returns the index of the first element matching `predicate`.
    fn index_of_first<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.try_reduce_indexed(None, |_, element, index| {
            if predicate(element) {
                ControlFlow::Break(Some(index))
            } else {
                ControlFlow::Continue(None)
            }
        })
    }

    /// Returns the index of the first element equal to `target`.
    fn index_of(&self, target: &Self::Element) -> Option<usize>
    where
        Self::Element: PartialEq,
    {
        self.index_of_first(|element| element == target)
    }

    /// Returns `true` if some element equals `target`.
    fn contains(&self, target: &Self::Element) -> bool
    where
        Self::Element: PartialEq,
    {
        self.index_of(target).is_some()
    }

    /// Returns `true` if every element matches; stops at the first failure.
    fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.index_of_first(|element| !predicate(element)).is_none()
    }

    /// Returns `true` if some element matches; stops at the first success.
    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.index_of_first(predicate).is_some()
    }

    /// Returns `true` if no element matches.
    fn none<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Element) -> bool,
    {
        !self.any(predicate)
    }

    /// Counts the elements matching `predicate`.
    fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.reduce(0, |accumulator, element| {
            if predicate(element) {
                accumulator + 1
            } else {
                accumulator
            }
        })
    }

    /// Sums an integer key over all elements.
    ///
    /// The sum wraps around on overflow instead of panicking.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::IndexedFold;
    ///
    /// assert_eq!([i64::MAX, 1].sum_of(|element| *element), i64::MIN);
    /// ```
    fn sum_of<F>(&self, mut selector: F) -> i64
    where
        F: FnMut(&Self::Element) -> i64,
    {
        self.reduce(0_i64, |accumulator, element| {
            accumulator.wrapping_add(selector(element))
        })
    }

    /// Sums a floating-point key over all elements.
    fn sum_of_f64<F>(&self, mut selector: F) -> f64
    where
        F: FnMut(&Self::Element) -> f64,
    {
        self.reduce(0.0, |accumulator, element| accumulator + selector(element))
    }

    /// Returns the element with the greatest key.
    ///
    /// When several elements share the greatest key, the first one wins.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::IndexedFold;
    ///
    /// let words = ["kiwi", "banana", "cherry", "fig"];
    /// assert_eq!(words.max_by(|word| word.len()), Ok(&"banana"));
    /// ```
    fn max_by<'a, K, F>(&'a self, selector: F) -> Result<&'a Self::Element>
    where
        K: Ord,
        F: FnMut(&Self::Element) -> K,
    {
        extreme_by(self, selector, Ordering::Greater, "max_by")
    }

    /// Returns the element with the smallest key.
    ///
    /// When several elements share the smallest key, the first one wins.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the sequence is empty.
    fn min_by<'a, K, F>(&'a self, selector: F) -> Result<&'a Self::Element>
    where
        K: Ord,
        F: FnMut(&Self::Element) -> K,
    {
        extreme_by(self, selector, Ordering::Less, "min_by")
    }

    /// Renders every element, joined by `separator` and wrapped in `prefix`/`postfix`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the sequence is empty, even when
    /// `prefix` and `postfix` are given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::IndexedFold;
    ///
    /// assert_eq!([1, 2, 3].join_with("<", ", ", ">"), Ok("<1, 2, 3>".to_string()));
    /// ```
    fn join_with(&self, prefix: &str, separator: &str, postfix: &str) -> Result<String>
    where
        Self::Element: Display,
    {
        let joined = self.reduce(None, |accumulator: Option<String>, element| {
            Some(match accumulator {
                None => element.to_string(),
                Some(mut joined) => {
                    joined.push_str(separator);
                    joined.push_str(&element.to_string());
                    joined
                }
            })
        });
        joined
            .map(|joined| format!("{prefix}{joined}{postfix}"))
            .ok_or_else(|| ListError::empty_list("join_with"))
    }

    /// Shorthand for [`join_with`](IndexedFold::join_with) without prefix or postfix.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the sequence is empty.
    fn join(&self, separator: &str) -> Result<String>
    where
        Self::Element: Display,
    {
        self.join_with("", separator, "")
    }
}

/// A candidate replaces the current extreme only when its key compares as
/// `replace_when` against the current key.
fn extreme_by<'a, S, K, F>(
    sequence: &'a S,
    mut selector: F,
    replace_when: Ordering,
    operation: &'static str,
) -> Result<&'a S::Element>
where
    S: IndexedFold + ?Sized,
    K: Ord,
    F: FnMut(&S::Element) -> K,
{
    sequence
        .reduce(None, |accumulator: Option<(K, &'a S::Element)>, element| {
            let key = selector(element);
            match accumulator {
                Some((best_key, best)) if key.cmp(&best_key) != replace_when => {
                    Some((best_key, best))
                }
                _ => Some((key, element)),
            }
        })
        .map(|(_, element)| element)
        .ok_or_else(|| ListError::empty_list(operation))
}

impl<T> IndexedFold for [T] {
    type Element = T;

    fn try_reduce_indexed<'a, A, F>(&'a self, initial: A, mut operation: F) -> A
    where
        F: FnMut(A, &'a T, usize) -> ControlFlow<A, A>,
    {
        let mut accumulator = initial;
        for (index, element) in self.iter().enumerate() {
            match operation(accumulator, element, index) {
                ControlFlow::Continue(next) => accumulator = next,
                ControlFlow::Break(result) => return result,
            }
        }
        accumulator
    }
}
