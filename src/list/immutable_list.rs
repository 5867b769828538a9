use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::ControlFlow;

use super::ReferenceCounter;
use crate::comparator::shortlex;
use crate::error::{ListError, Result};
use crate::fold::IndexedFold;

/// An immutable, fixed-length, 0-indexed list.
///
/// Every operation that looks like a mutation returns a new list; the
/// receiver is never changed. Equality, hashing and ordering are
/// structural. Ordering is shortlex (length first), matching
/// [`ListComparator`](crate::comparator::ListComparator).
///
/// Scalar queries (`count`, `sum_of`, `find`, `join_with`, ...) come from
/// [`IndexedFold`], which must be in scope to call them.
///
/// # Time Complexity
///
/// | Operation                  | Complexity |
/// |----------------------------|------------|
/// | `get`/`first`/`last`       | O(1)       |
/// | `len`/`is_empty`           | O(1)       |
/// | `clone`                    | O(1)       |
/// | `map`/`filter`/`insert`    | O(n)       |
/// | `sort_by`/`sorted`         | O(n log n) |
/// | `unique`                   | O(n²)      |
///
/// # Examples
///
/// ```rust
/// use idealist::ImmutableList;
///
/// let list = ImmutableList::of(["a", "b", "c"]);
/// assert_eq!(list.get(1), Ok(&"b"));
/// assert_eq!(list.last_index(), 2);
///
/// let extended = list.add("d");
/// assert_eq!(list.len(), 3);     // Original unchanged
/// assert_eq!(extended.len(), 4); // New list
/// ```
pub struct ImmutableList<E> {
    elements: ReferenceCounter<[E]>,
}

impl<E> ImmutableList<E> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::ImmutableList;
    ///
    /// let list: ImmutableList<i32> = ImmutableList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Creates a new empty list. Alias of [`new`](Self::new).
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::new()
    }

    /// Creates a list from any sequence of elements, in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::ImmutableList;
    ///
    /// let list = ImmutableList::of(1..=3);
    /// assert_eq!(list.as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn of<I: IntoIterator<Item = E>>(elements: I) -> Self {
        elements.into_iter().collect()
    }

    /// Freezes a `Vec` into a list without copying element by element.
    #[inline]
    #[must_use]
    pub fn from_vec(elements: Vec<E>) -> Self {
        Self {
            elements: ReferenceCounter::from(elements),
        }
    }

    /// Creates a list containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: E) -> Self {
        Self::from_vec(vec![element])
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfBounds`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::{ImmutableList, ListError};
    ///
    /// let list = ImmutableList::of([10, 20]);
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert_eq!(list.get(2), Err(ListError::IndexOutOfBounds { index: 2, length: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&E> {
        self.elements
            .get(index)
            .ok_or_else(|| ListError::index_out_of_bounds(index, self.len()))
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfBounds`] if the list is empty.
    pub fn first(&self) -> Result<&E> {
        self.get(0)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfBounds`] if the list is empty.
    pub fn last(&self) -> Result<&E> {
        self.get(self.len().saturating_sub(1))
    }

    /// Returns the only element of a one-element list.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NotSingle`] unless the list has exactly one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::{ImmutableList, ListError};
    ///
    /// assert_eq!(ImmutableList::singleton(7).single(), Ok(&7));
    /// assert_eq!(
    ///     ImmutableList::of([1, 2]).single(),
    ///     Err(ListError::NotSingle { length: 2 })
    /// );
    /// ```
    pub fn single(&self) -> Result<&E> {
        if self.len() != 1 {
            return Err(ListError::not_single(self.len()));
        }
        self.first()
    }

    /// Returns a uniformly chosen element using the thread-local generator.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    #[cfg(feature = "random")]
    pub fn random(&self) -> Result<&E> {
        self.random_with(&mut rand::rng())
    }

    /// Returns a uniformly chosen element using the given generator.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::ImmutableList;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let list = ImmutableList::of([1, 2, 3]);
    /// let mut generator = StdRng::seed_from_u64(7);
    /// let picked = list.random_with(&mut generator).unwrap();
    /// assert!(list.as_slice().contains(picked));
    /// ```
    #[cfg(feature = "random")]
    pub fn random_with<R: rand::Rng + ?Sized>(&self, generator: &mut R) -> Result<&E> {
        if self.is_empty() {
            return Err(ListError::empty_list("random"));
        }
        self.get(generator.random_range(0..self.len()))
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if the list contains at least one element.
    #[inline]
    #[must_use]
    pub fn has_any(&self) -> bool {
        !self.is_empty()
    }

    /// Returns `true` if the list contains no elements. Alias of [`is_empty`](Self::is_empty).
    #[inline]
    #[must_use]
    pub fn has_none(&self) -> bool {
        self.is_empty()
    }

    /// Returns the index of the last element, `-1` for an empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::ImmutableList;
    ///
    /// assert_eq!(ImmutableList::of([1, 2, 3]).last_index(), 2);
    /// assert_eq!(ImmutableList::<i32>::new().last_index(), -1);
    /// ```
    #[inline]
    #[must_use]
    pub fn last_index(&self) -> isize {
        signed(self.len()) - 1
    }

    /// Returns the valid indices, `0..=last_index()`.
    #[must_use]
    pub fn indices(&self) -> ImmutableList<usize> {
        (0..self.len()).collect()
    }

    /// Returns `true` if every element of `elements` is contained in this list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use idealist::ImmutableList;
    ///
    /// let list = ImmutableList::of([1, 2, 3]);
    /// assert!(list.contains_all(&[3, 1]));
    /// assert!(!list.contains_all(&[1, 4]));
    /// ```
    pub fn contains_all<'b, I>(&self, elements: I) -> bool
    where
        E: PartialEq + 'b,
        I: IntoIterator<Item = &'b E>,
    {
        elements
            .into_iter()
            .all(|element| IndexedFold::contains(self, element))
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }

    /// Views the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }

    /// Returns `true` if both lists share the same storage.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.elements, &other.elements)
    }
}

impl<E: Clone> ImmutableList<E> {
    /// Copies the elements into a new `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<E> {
        self.elements.to_vec()
    }
}

#[allow(clippy::cast_possible_wrap)]
#[inline]
pub(super) const fn signed(index: usize) -> isize {
    // Allocations never exceed isize::MAX bytes, so neither does a length.
    index as isize
}

// =============================================================================
// Fold Primitive
// =============================================================================

impl<E> IndexedFold for ImmutableList<E> {
    type Element = E;

    #[inline]
    fn try_reduce_indexed<'a, A, F>(&'a self, initial: A, operation: F) -> A
    where
        F: FnMut(A, &'a E, usize) -> ControlFlow<A, A>,
    {
        self.as_slice().try_reduce_indexed(initial, operation)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<E> Clone for ImmutableList<E> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
        }
    }
}

impl<E> Default for ImmutableList<E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<E> FromIterator<E> for ImmutableList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<E> From<Vec<E>> for ImmutableList<E> {
    #[inline]
    fn from(elements: Vec<E>) -> Self {
        Self::from_vec(elements)
    }
}

impl<E: Clone> From<&[E]> for ImmutableList<E> {
    fn from(elements: &[E]) -> Self {
        Self {
            elements: ReferenceCounter::from(elements),
        }
    }
}

impl<E, const N: usize> From<[E; N]> for ImmutableList<E> {
    fn from(elements: [E; N]) -> Self {
        Self::of(elements)
    }
}

impl<E> AsRef<[E]> for ImmutableList<E> {
    #[inline]
    fn as_ref(&self) -> &[E] {
        self.as_slice()
    }
}

impl<E: Clone> IntoIterator for ImmutableList<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}

impl<'a, E> IntoIterator for &'a ImmutableList<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: PartialEq> PartialEq for ImmutableList<E> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<E: Eq> Eq for ImmutableList<E> {}

impl<E: Ord> PartialOrd for ImmutableList<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: Ord> Ord for ImmutableList<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        shortlex(self.as_slice(), other.as_slice())
    }
}

impl<E: Hash> Hash for ImmutableList<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<E: fmt::Debug> fmt::Debug for ImmutableList<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<E: fmt::Display> fmt::Display for ImmutableList<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for ImmutableList<E> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, E: serde::Deserialize<'de>> serde::Deserialize<'de> for ImmutableList<E> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<E> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from_vec)
    }
}

// =============================================================================
// Tests
// =============================================================================
