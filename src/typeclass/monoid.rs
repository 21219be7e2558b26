//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Monoid::empty().combine(a) == a
//! a.combine(Monoid::empty()) == a
//! ```

use crate::numeric::Numeric;

use super::semigroup::Semigroup;
use super::wrappers::Sum;

/// A `Semigroup` with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines all values of an iterator, starting from the identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// assert_eq!(Sum::combine_all(vec![Sum(1.5), Sum(2.5)]), Sum(4.0));
    /// assert_eq!(Sum::<u8>::combine_all(Vec::new()), Sum(0));
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl<A: Numeric> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::zero())
    }
}
