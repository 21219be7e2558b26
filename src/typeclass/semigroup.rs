//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! let left = Sequence::from(vec![1, 2]);
//! let right = Sequence::from(vec![3]);
//! assert_eq!(left.combine(right), Sequence::from(vec![1, 2, 3]));
//! ```

use super::wrappers::Sum;
use crate::numeric::Numeric;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all values of an iterator with `combine`.
    ///
    /// Returns `None` for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let parts = vec![Sum(1), Sum(2), Sum(3)];
    /// assert_eq!(Sum::reduce_all(parts), Some(Sum(6)));
    /// assert_eq!(Sum::<i32>::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

/// Integral sums wrap around on overflow; see [`Numeric::wrapping_add`].
impl<A: Numeric> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.wrapping_add(other.0))
    }
}
