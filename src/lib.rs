//! # enumerable
//!
//! An eager, in-memory sequence query library in the style of
//! language-integrated query.
//!
//! ## Overview
//!
//! The centre of the library is [`Sequence`](sequence::Sequence), an owned,
//! ordered collection with a fluent set of query operations:
//!
//! - **Terminal operations**: `aggregate`, `all`, `any`, `average`, `count`,
//!   `first`, `last`, `max`, `min`, `single`, `sum`, ...
//! - **Transformation**: `select`, `filter`, `cast`, `reverse`, `distinct`
//! - **Set algebra**: `union`, `intersect`, `except`
//! - **Partitioning**: `skip`, `take` and their `_last` / `_while` variants
//! - **Pairing and grouping**: `zip`, `group_by`
//! - **Factories**: `empty`, `range`, `repeat`
//! - **Type classes**: `Functor`, `Foldable`, `Semigroup`, `Monoid`
//!
//! Every operation evaluates eagerly and returns a new sequence; nothing
//! is shared between a sequence and the sequences derived from it.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Foldable, Monoid, ...)
//! - `sequence`: The `Sequence` type and its operations
//! - `serde`: Serialization of sequences as plain arrays
//! - `tracing`: Debug events for every failed operation
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! let numbers = Sequence::from([1, 2, 3, 4]);
//!
//! let large_doubles = numbers.select(|number| number * 2).filter(|number| *number > 5);
//! assert_eq!(large_doubles, Sequence::from([6, 8]));
//!
//! assert_eq!(Sequence::range(1, 5), Ok(Sequence::from([1, 2, 3, 4, 5])));
//! assert_eq!(numbers.except(&Sequence::from([1, 3])), Sequence::from([2, 4]));
//! assert_eq!(
//!     Sequence::<i32>::empty().single(),
//!     Err(SequenceError::EmptySequence { operation: "single" })
//! );
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
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use enumerable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{RangeViolation, SequenceError, SequenceResult};
    pub use crate::numeric::{CastFrom, Numeric};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

pub mod error;
pub mod numeric;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "sequence")]
pub mod sequence;

pub use error::{RangeViolation, SequenceError, SequenceResult};
