//! Type class traits for functional programming abstractions.
//!
//! This module provides the small set of type classes that
//! [`Sequence`](crate::sequence::Sequence) participates in:
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation
//! - [`Functor`]: Mapping over container values
//! - [`Foldable`]: Folding over structures to produce summary values
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Foundation Types
//!
//! - [`Sum`]: Numeric wrapper selecting addition as the monoid operation
//!
//! # Examples
//!
//! ```rust
//! use enumerable::typeclass::{Monoid, Semigroup, Sum};
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum::new(6));
//! ```

mod foldable;
mod functor;
mod higher;
mod monoid;
mod semigroup;
mod wrappers;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::Sum;
