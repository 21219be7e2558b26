//! Newtype wrappers that select an algebraic operation.
//!
//! - [`Sum`]: Addition-based semigroup/monoid (identity: 0)

/// A newtype wrapper that represents the additive semigroup/monoid.
///
/// `Sum(a).combine(Sum(b))` equals `Sum(a + b)`, and the identity element
/// is `Sum(0)` for every [`Numeric`](crate::numeric::Numeric) type.
/// Integral sums wrap around on overflow instead of panicking.
///
/// # Examples
///
/// ```rust
/// use enumerable::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}
