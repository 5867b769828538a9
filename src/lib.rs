//! # idealist
//!
//! An immutable list with a fluent, functional API built on a single fold
//! primitive, plus a family of lexicographic comparators.
//!
//! ## Overview
//!
//! - **[`ImmutableList`]**: fixed-length list over frozen shared storage;
//!   every transformation returns a new list
//! - **[`IndexedFold`]**: the fold primitive and the scalar queries derived
//!   from it (`count`, `sum_of`, `max_by`, `find`, `join_with`, ...)
//! - **[`comparator`]**: absent-first lexicographic comparators for pairs,
//!   triplets, key-value pairs and lists
//! - **[`Pair`] / [`Triplet`]**: named tuples produced by `zip`/`zip3`
//! - **[`NestedList`]**: a list tagged as flat or nested
//!
//! ## Feature Flags
//!
//! - `arc` (default): thread-shareable storage (`Arc` instead of `Rc`)
//! - `serde`: `Serialize`/`Deserialize` for lists and tuples
//! - `random`: `ImmutableList::random` backed by `rand`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use idealist::prelude::*;
//!
//! let scores = immutable_list![("ann", 7), ("bob", 9), ("cid", 7)];
//!
//! let best = scores.max_by(|(_, score)| *score).unwrap();
//! assert_eq!(best.0, "bob");
//!
//! let names = scores
//!     .sort_by(|(_, score)| *score)
//!     .map(|(name, _)| *name)
//!     .join(", ")
//!     .unwrap();
//! assert_eq!(names, "ann, cid, bob");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the list, the fold trait, the tuples and the comparators.
///
/// # Usage
///
/// ```rust
/// use idealist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparator::*;
    pub use crate::error::ListError;
    pub use crate::fold::IndexedFold;
    pub use crate::immutable_list;
    pub use crate::list::ImmutableList;
    pub use crate::nested::NestedList;
    pub use crate::tuple::{Pair, Triplet};
}

mod macros;

pub mod comparator;
pub mod error;
pub mod fold;
pub mod list;
pub mod nested;
pub mod tuple;

pub use error::{ListError, Result};
pub use fold::IndexedFold;
pub use list::ImmutableList;
pub use nested::NestedList;
pub use tuple::{Pair, Triplet};
