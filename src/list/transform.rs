//! List-valued operations.
//!
//! Each operation here is a fold over the receiver that accumulates into a
//! fresh `Vec`, which is then frozen into a new [`ImmutableList`]. The
//! receiver is only read.

use std::ops::ControlFlow;

use super::ImmutableList;
use crate::comparator::{Comparator, KeyValueComparator};
use crate::error::{ListError, Result};
use crate::fold::IndexedFold;
use crate::tuple::{Pair, Triplet};

impl<E> ImmutableList<E> {
    /// Transforms every element together with its index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::ImmutableList;
    ///
    /// let labels = ImmutableList::of(["a", "b"]).map_indexed(|element, index| format!("{index}:{element}"));
    /// assert_eq!(labels, ImmutableList::of(["0:a".to_string(), "1:b".to_string()]));
    /// ```
    #[must_use]
    pub fn map_indexed<R, F>(&self, mut transform: F) -> ImmutableList<R>
    where
        F: FnMut(&E, usize) -> R,
    {
        let mapped = self.reduce_indexed(
            Vec::with_capacity(self.len()),
            |mut accumulator, element, index| {
                accumulator.push(transform(element, index));
                accumulator
            },
        );
        ImmutableList::from_vec(mapped)
    }

    /// Transforms every element, preserving order and length.
    #[must_use]
    pub fn map<R, F>(&self, mut transform: F) -> ImmutableList<R>
    where
        F: FnMut(&E) -> R,
    {
        self.map_indexed(|element, _| transform(element))
    }
}

impl<E: Clone> ImmutableList<E> {
    /// Keeps the elements for which `predicate(element, index)` holds.
    #[must_use]
    pub fn filter_indexed<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&E, usize) -> bool,
    {
        let kept = self.reduce_indexed(Vec::new(), |mut accumulator, element, index| {
            if predicate(element, index) {
                accumulator.push(element.clone());
            }
            accumulator
        });
        Self::from_vec(kept)
    }

    /// Keeps the elements matching `predicate`, in their original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::ImmutableList;
    ///
    /// let evens = ImmutableList::of(1..=6).filter(|element| element % 2 == 0);
    /// assert_eq!(evens, ImmutableList::of([2, 4, 6]));
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&E) -> bool,
    {
        self.filter_indexed(|element, _| predicate(element))
    }

    /// Inserts `elements` starting at `index`, shifting the tail right.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfBounds`] if `index > len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::ImmutableList;
    ///
    /// let list = ImmutableList::of([1, 4]);
    /// assert_eq!(list.insert(1, [2, 3]), Ok(ImmutableList::of([1, 2, 3, 4])));
    /// assert!(list.insert(3, [9]).is_err());
    /// ```
    pub fn insert<I>(&self, index: usize, elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
    {
        if index > self.len() {
            return Err(ListError::index_out_of_bounds(index, self.len()));
        }
        Ok(self.splice_at(index, elements))
    }

    /// Appends all of `elements`.
    #[must_use]
    pub fn concat<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        self.splice_at(self.len(), elements)
    }

    /// Appends a single element.
    #[must_use]
    pub fn add(&self, element: E) -> Self {
        self.concat([element])
    }

    fn splice_at<I>(&self, index: usize, elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut pending = Some(elements);
        let mut result = self.reduce_indexed(
            Vec::with_capacity(self.len()),
            |mut accumulator, element, position| {
                if position == index {
                    accumulator.extend(pending.take().into_iter().flatten());
                }
                accumulator.push(element.clone());
                accumulator
            },
        );
        result.extend(pending.into_iter().flatten());
        Self::from_vec(result)
    }

    /// Drops every element equal to `element`.
    #[must_use]
    pub fn remove(&self, element: &E) -> Self
    where
        E: PartialEq,
    {
        self.filter(|candidate| candidate != element)
    }

    /// Drops the element at `index`; an index past the end changes nothing.
    #[must_use]
    pub fn remove_at(&self, index: usize) -> Self {
        self.filter_indexed(|_, position| position != index)
    }

    /// Returns the elements in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut elements = self.reduce(Vec::with_capacity(self.len()), |mut accumulator, element| {
            accumulator.push(element.clone());
            accumulator
        });
        elements.reverse();
        Self::from_vec(elements)
    }

    /// Removes duplicates, keeping the first occurrence of every value.
    ///
    /// An element survives when no equal element appears at a smaller
    /// index. Only `PartialEq` is needed, so the scan is quadratic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::ImmutableList;
    ///
    /// let list = ImmutableList::of([1, 2, 2, 3, 1]);
    /// assert_eq!(list.unique(), ImmutableList::of([1, 2, 3]));
    /// ```
    #[must_use]
    pub fn unique(&self) -> Self
    where
        E: PartialEq,
    {
        let elements = self.as_slice();
        self.filter_indexed(|element, index| !elements[..index].contains(element))
    }

    /// Sorts ascending by a derived key. The sort is stable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::ImmutableList;
    ///
    /// let words = ImmutableList::of(["ccc", "a", "bb", "d"]);
    /// assert_eq!(words.sort_by(|word| word.len()), ImmutableList::of(["a", "d", "bb", "ccc"]));
    /// ```
    #[must_use]
    pub fn sort_by<K, F>(&self, mut selector: F) -> Self
    where
        K: Ord,
        F: FnMut(&E) -> K,
    {
        let mut keyed = self.reduce(Vec::with_capacity(self.len()), |mut accumulator, element| {
            accumulator.push(Pair::new(selector(element), element.clone()));
            accumulator
        });
        keyed.sort_by(|left, right| KeyValueComparator.compare_present(left, right));
        keyed.into_iter().map(|pair| pair.second).collect()
    }

    /// Sorts ascending by the elements' own order. The sort is stable.
    #[must_use]
    pub fn sorted(&self) -> Self
    where
        E: Ord,
    {
        let mut elements = self.to_vec();
        elements.sort();
        Self::from_vec(elements)
    }

    /// Sorts with an explicit comparator. The sort is stable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::{ImmutableList, Pair};
    /// use idealist::comparator::PairComparator;
    ///
    /// let pairs = ImmutableList::of([Pair::new(2, 'a'), Pair::new(1, 'z'), Pair::new(1, 'b')]);
    /// assert_eq!(
    ///     pairs.sorted_with(&PairComparator),
    ///     ImmutableList::of([Pair::new(1, 'b'), Pair::new(1, 'z'), Pair::new(2, 'a')])
    /// );
    /// ```
    #[must_use]
    pub fn sorted_with<C>(&self, comparator: &C) -> Self
    where
        C: Comparator<E> + ?Sized,
    {
        let mut elements = self.to_vec();
        elements.sort_by(|left, right| comparator.compare_present(left, right));
        Self::from_vec(elements)
    }

    /// Pairs elements by index with any sequence, truncated to the shorter one.
    ///
    /// `other` is consumed lazily and never read past this list's length.
    /// Pass `&list` to pair with references, or `list.iter().cloned()` to
    /// pair with owned values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::{ImmutableList, Pair};
    ///
    /// let zipped = ImmutableList::of([1, 2, 3]).zip(['a', 'b']);
    /// assert_eq!(zipped, ImmutableList::of([Pair::new(1, 'a'), Pair::new(2, 'b')]));
    ///
    /// let names = ImmutableList::of(["x", "y"]);
    /// let borrowed = ImmutableList::of([7, 8]).zip(&names);
    /// assert_eq!(borrowed.get(1), Ok(&Pair::new(8, &"y")));
    /// ```
    #[must_use]
    pub fn zip<B, I>(&self, other: I) -> ImmutableList<Pair<E, B>>
    where
        I: IntoIterator<Item = B>,
    {
        let mut others = other.into_iter();
        let zipped = self.try_reduce_indexed(
            Vec::with_capacity(self.len()),
            |mut accumulator, element, _| match others.next() {
                Some(second) => {
                    accumulator.push(Pair::new(element.clone(), second));
                    ControlFlow::Continue(accumulator)
                }
                None => ControlFlow::Break(accumulator),
            },
        );
        ImmutableList::from_vec(zipped)
    }

    /// Groups elements by index with two other sequences, truncated to the shortest.
    #[must_use]
    pub fn zip3<B, C, I, J>(&self, second: I, third: J) -> ImmutableList<Triplet<E, B, C>>
    where
        I: IntoIterator<Item = B>,
        J: IntoIterator<Item = C>,
    {
        let mut seconds = second.into_iter();
        let mut thirds = third.into_iter();
        let zipped = self.try_reduce_indexed(
            Vec::with_capacity(self.len()),
            |mut accumulator, element, _| match (seconds.next(), thirds.next()) {
                (Some(middle), Some(last)) => {
                    accumulator.push(Triplet::new(element.clone(), middle, last));
                    ControlFlow::Continue(accumulator)
                }
                _ => ControlFlow::Break(accumulator),
            },
        );
        ImmutableList::from_vec(zipped)
    }
}

// =============================================================================
// Specialized Methods for Nested Lists
// =============================================================================

impl<E: Clone> ImmutableList<ImmutableList<E>> {
    /// Concatenates the inner lists in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::{ImmutableList, immutable_list};
    ///
    /// let nested = immutable_list![immutable_list![1, 2], immutable_list![3], immutable_list![4, 5]];
    /// assert_eq!(nested.flatten(), immutable_list![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn flatten(&self) -> ImmutableList<E> {
        let flattened = self.reduce(Vec::new(), |mut accumulator, inner| {
            accumulator.extend(inner.iter().cloned());
            accumulator
        });
        ImmutableList::from_vec(flattened)
    }
}

// =============================================================================
// Tests
// =============================================================================
