//! Error types for list operations.
//!
//! Every failure in this crate is a contract violation by the caller:
//! indexing outside the list, asking an empty list for something that needs
//! at least one element, or asking for the single element of a list that
//! does not hold exactly one. Nothing here is transient, so there is no
//! retry or recovery story; errors are returned to the caller immediately.

use thiserror::Error;

/// Represents errors that can occur when querying an [`ImmutableList`].
///
/// # Examples
///
/// ```rust
/// use idealist::{ImmutableList, IndexedFold, ListError};
///
/// let list = ImmutableList::of([1, 2, 3]);
/// assert_eq!(
///     list.get(5),
///     Err(ListError::IndexOutOfBounds { index: 5, length: 3 })
/// );
///
/// let empty: ImmutableList<i32> = ImmutableList::empty();
/// assert_eq!(
///     empty.join(","),
///     Err(ListError::EmptyList { operation: "join_with" })
/// );
/// ```
///
/// [`ImmutableList`]: crate::ImmutableList
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// An index fell outside `[0, length)`.
    #[error("index {index} is out of bounds for a list of length {length}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The length of the list that was indexed.
        length: usize,
    },

    /// `single` was called on a list that does not hold exactly one element.
    #[error("list must contain exactly one element, but it contains {length}")]
    NotSingle {
        /// The actual length of the list.
        length: usize,
    },

    /// An operation without an identity element was called on an empty list.
    #[error("{operation} requires a non-empty list")]
    EmptyList {
        /// The name of the operation that was attempted.
        operation: &'static str,
    },
}

impl ListError {
    pub(crate) fn index_out_of_bounds(index: usize, length: usize) -> Self {
        tracing::debug!(index, length, "list index out of bounds");
        Self::IndexOutOfBounds { index, length }
    }

    pub(crate) fn not_single(length: usize) -> Self {
        tracing::debug!(length, "single element requested from a list of another size");
        Self::NotSingle { length }
    }

    pub(crate) fn empty_list(operation: &'static str) -> Self {
        tracing::debug!(operation, "operation requires a non-empty list");
        Self::EmptyList { operation }
    }
}

/// A specialized `Result` type for list operations.
pub type Result<T> = std::result::Result<T, ListError>;
