//! Set algebra over sequences.
//!
//! These operations only require equality of the element type. Membership
//! is tested by linear scan, so they are quadratic in the worst case.

use super::Sequence;
use super::transform::push_unique;

impl<T: Clone + PartialEq> Sequence<T> {
    /// Returns the distinct elements of `self` followed by the elements of
    /// `other` that have not been emitted yet.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let first = Sequence::from([1, 2, 1]);
    /// let second = Sequence::from([2, 3, 1, 4]);
    /// assert_eq!(first.union(&second), Sequence::from([1, 2, 3, 4]));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut unique = Vec::new();
        self.for_each(|element| push_unique(&mut unique, element));
        other.for_each(|element| push_unique(&mut unique, element));
        Self::from_vec(unique)
    }

    /// Returns the elements of `self` that also occur in `other`.
    ///
    /// Order and duplicates of `self` are preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([1, 2, 3, 4]);
    /// assert_eq!(numbers.intersect(&Sequence::from([1, 3, 999])), Sequence::from([1, 3]));
    /// ```
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        self.filter(|element| other.contains(element))
    }

    /// Returns the distinct elements of `self` that do not occur in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([1, 2, 3, 4]);
    /// assert_eq!(numbers.except(&Sequence::from([1, 3])), Sequence::from([2, 4]));
    /// ```
    #[must_use]
    pub fn except(&self, other: &Self) -> Self {
        self.distinct().filter(|element| !other.contains(element))
    }
}
