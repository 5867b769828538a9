//! Integer ranges and index-range sub-lists.
//!
//! Sub-list helpers take signed arguments and are defined as index filters:
//! they keep the elements whose index falls inside the computed range. An
//! argument that is negative or larger than the list is therefore never an
//! error; the range is simply clamped to the indices that exist.
//!
//! ```rust
//! use idealist::ImmutableList;
//!
//! let list = ImmutableList::of([1, 2, 3]);
//! assert_eq!(list.take(10), list);
//! assert_eq!(list.drop(-4), list);
//! assert!(list.take_last(0).is_empty());
//! ```

use super::ImmutableList;
use super::immutable_list::signed;

impl ImmutableList<i64> {
    /// Creates `[from, from + 1, ..., to]`; empty when `to < from`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::ImmutableList;
    ///
    /// assert_eq!(ImmutableList::range_inclusive(2, 5), ImmutableList::of([2, 3, 4, 5]));
    /// assert!(ImmutableList::range_inclusive(5, 2).is_empty());
    /// ```
    #[must_use]
    pub fn range_inclusive(from: i64, to: i64) -> Self {
        (from..=to).collect()
    }

    /// Creates `[from, ..., up_to - 1]`; empty when `up_to <= from`.
    #[must_use]
    pub fn range_exclusive(from: i64, up_to: i64) -> Self {
        (from..up_to).collect()
    }

    /// Creates `length` consecutive integers starting at `from`.
    #[must_use]
    pub fn range_length(from: i64, length: i64) -> Self {
        Self::range_exclusive(from, from.saturating_add(length))
    }
}

impl<E: Clone> ImmutableList<E> {
    /// Keeps the elements at indices `from_index..=to_index`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::ImmutableList;
    ///
    /// let list = ImmutableList::of(['a', 'b', 'c', 'd']);
    /// assert_eq!(list.sub_list_inclusive(1, 2), ImmutableList::of(['b', 'c']));
    /// assert_eq!(list.sub_list_inclusive(-5, 1), ImmutableList::of(['a', 'b']));
    /// ```
    #[must_use]
    pub fn sub_list_inclusive(&self, from_index: isize, to_index: isize) -> Self {
        self.filter_indexed(|_, index| {
            let index = signed(index);
            index >= from_index && index <= to_index
        })
    }

    /// Keeps the elements at indices `from_index..up_to_index`.
    #[must_use]
    pub fn sub_list_exclusive(&self, from_index: isize, up_to_index: isize) -> Self {
        self.sub_list_inclusive(from_index, up_to_index.saturating_sub(1))
    }

    /// Keeps `length` elements starting at `from_index`.
    #[must_use]
    pub fn sub_list_length(&self, from_index: isize, length: isize) -> Self {
        self.sub_list_exclusive(from_index, from_index.saturating_add(length))
    }

    /// Keeps the first `count` elements.
    #[must_use]
    pub fn take(&self, count: isize) -> Self {
        self.sub_list_exclusive(0, count)
    }

    /// Keeps the last `count` elements.
    #[must_use]
    pub fn take_last(&self, count: isize) -> Self {
        let last_index = self.last_index();
        self.sub_list_inclusive(last_index.saturating_sub(count).saturating_add(1), last_index)
    }

    /// Drops the first `count` elements.
    #[must_use]
    pub fn drop(&self, count: isize) -> Self {
        self.sub_list_inclusive(count, self.last_index())
    }

    /// Drops the last `count` elements.
    #[must_use]
    pub fn drop_last(&self, count: isize) -> Self {
        self.sub_list_inclusive(0, self.last_index().saturating_sub(count))
    }
}
