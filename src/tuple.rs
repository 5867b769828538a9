//! Named fixed-arity tuples.
//!
//! [`Pair`] and [`Triplet`] are what [`ImmutableList::zip`] and
//! [`ImmutableList::zip3`] produce, and what [`ImmutableList::sort_by`] uses
//! internally to carry a key alongside its element. They are plain values
//! with public fields; the derived `Ord` compares fields in declaration
//! order, which is the same order the comparators in
//! [`comparator`](crate::comparator) use.
//!
//! [`ImmutableList::zip`]: crate::ImmutableList::zip
//! [`ImmutableList::zip3`]: crate::ImmutableList::zip3
//! [`ImmutableList::sort_by`]: crate::ImmutableList::sort_by

use std::fmt;

/// A pair of two values.
///
/// # Examples
///
/// ```rust
/// use idealist::Pair;
///
/// let pair = Pair::new(1, "one");
/// assert_eq!(pair.first, 1);
/// assert_eq!(pair.second, "one");
/// assert_eq!(pair.to_string(), "(1, one)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B> {
    /// The first component.
    pub first: A,
    /// The second component.
    pub second: B,
}

impl<A, B> Pair<A, B> {
    /// Creates a new pair.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Converts into a native tuple.
    #[inline]
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }

    /// Returns a pair with the components swapped.
    #[inline]
    pub fn swap(self) -> Pair<B, A> {
        Pair::new(self.second, self.first)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_tuple()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.first, self.second)
    }
}

/// A triplet of three values.
///
/// # Examples
///
/// ```rust
/// use idealist::Triplet;
///
/// let triplet = Triplet::new(1, 'b', "c");
/// assert_eq!(triplet.third, "c");
/// assert_eq!(triplet.to_string(), "(1, b, c)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triplet<A, B, C> {
    /// The first component.
    pub first: A,
    /// The second component.
    pub second: B,
    /// The third component.
    pub third: C,
}

impl<A, B, C> Triplet<A, B, C> {
    /// Creates a new triplet.
    #[inline]
    pub const fn new(first: A, second: B, third: C) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    /// Converts into a native tuple.
    #[inline]
    pub fn into_tuple(self) -> (A, B, C) {
        (self.first, self.second, self.third)
    }
}

impl<A, B, C> From<(A, B, C)> for Triplet<A, B, C> {
    fn from((first, second, third): (A, B, C)) -> Self {
        Self::new(first, second, third)
    }
}

impl<A, B, C> From<Triplet<A, B, C>> for (A, B, C) {
    fn from(triplet: Triplet<A, B, C>) -> Self {
        triplet.into_tuple()
    }
}

impl<A: fmt::Display, B: fmt::Display, C: fmt::Display> fmt::Display for Triplet<A, B, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "({}, {}, {})",
            self.first, self.second, self.third
        )
    }
}
