//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over a type constructor such as `Sequence<_>`
//! directly. [`TypeConstructor`] names the element type a container is
//! currently applied to and the same container applied to another type,
//! which is all that type-changing operations like `fmap` need.
//!
//! # Example
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! fn empty_like<F: TypeConstructor>(_: &F) -> F::WithType<String>
//! where
//!     F::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers = Sequence::from(vec![1, 2, 3]);
//! let labels: Sequence<String> = empty_like(&numbers);
//! assert_eq!(labels.count(), 0);
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter this constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The element type this constructor is applied to.
    type Inner;

    /// The same constructor applied to a different element type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
