//! Lists that may or may not be nested, decided when they are built.
//!
//! Whether a list is nested is part of its type: a list of lists is an
//! `ImmutableList<ImmutableList<E>>` and has [`ImmutableList::flatten`]. When
//! code has to handle both shapes behind one value, [`NestedList`] carries
//! the shape as a tag, so [`NestedList::is_nested`] never needs to inspect
//! an element and works on empty lists too.
//!
//! # Examples
//!
//! ```rust
//! use idealist::{NestedList, immutable_list};
//!
//! let nested = NestedList::Nested(immutable_list![immutable_list![1, 2], immutable_list![3]]);
//! let flat = NestedList::Flat(immutable_list![1, 2, 3]);
//!
//! assert!(nested.is_nested());
//! assert!(!flat.is_nested());
//! assert_eq!(nested.flatten(), flat.flatten());
//! ```
//!
//! [`ImmutableList::flatten`]: crate::ImmutableList::flatten

use crate::list::ImmutableList;

/// A list tagged with its nesting depth.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NestedList<E> {
    /// A list of plain elements.
    Flat(ImmutableList<E>),
    /// A list of lists.
    Nested(ImmutableList<ImmutableList<E>>),
}

impl<E> NestedList<E> {
    /// Returns `true` for the [`Nested`](NestedList::Nested) variant.
    #[inline]
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        matches!(self, Self::Nested(_))
    }

    /// Returns the number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(list) => list.len(),
            Self::Nested(lists) => lists.len(),
        }
    }

    /// Returns `true` if there are no top-level entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: Clone> NestedList<E> {
    /// Flattens one level; a flat list is returned unchanged.
    #[must_use]
    pub fn flatten(&self) -> ImmutableList<E> {
        match self {
            Self::Flat(list) => list.clone(),
            Self::Nested(lists) => lists.flatten(),
        }
    }
}
