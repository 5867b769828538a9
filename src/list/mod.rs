//! The immutable list and its derived operations.
//!
//! - [`ImmutableList`]: fixed-length list over frozen, shared storage
//! - `transform`: list-valued operations built on the fold primitive
//!   (map, filter, insert, zip, sort, unique, flatten)
//! - `range`: integer ranges and index-range sub-lists
//!
//! # Storage
//!
//! A list owns a reference-counted slice that is never written after
//! construction. Cloning a list shares that slice; every transformation
//! allocates a new one. Snapshots are therefore independent: nothing done to
//! one list can be observed through another.
//!
//! # Examples
//!
//! ```rust
//! use idealist::{ImmutableList, IndexedFold, immutable_list};
//!
//! let list = immutable_list![5, 3, 8, 3, 1];
//! let result = list
//!     .filter(|element| *element > 1)
//!     .unique()
//!     .sort_by(|element| *element)
//!     .map(|element| element * 10);
//!
//! assert_eq!(result, immutable_list![30, 50, 80]);
//! assert_eq!(list.len(), 5); // Original unchanged
//! assert_eq!(result.sum_of(|element| i64::from(*element)), 160);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type used for list storage.
///
/// When the `arc` feature is enabled (default), this is `std::sync::Arc`,
/// so lists of `Send + Sync` elements can be shared across threads.
///
/// When the `arc` feature is disabled, this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod immutable_list;
mod range;
mod transform;

pub use immutable_list::ImmutableList;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(ImmutableList<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(ImmutableList<String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(ImmutableList<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
