//! Foldable type class - folding over data structures.
//!
//! A `Foldable` reduces its elements into a single summary value. The
//! sequence aggregates (`aggregate_with_seed`, `sum`) are folds, and this
//! trait exposes the same machinery generically.
//!
//! # Laws
//!
//! For an associative `f`:
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! let numbers = Sequence::from(vec![1, 2, 3, 4]);
//! let total = numbers.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(total, 10);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// # Provided Methods
///
/// - `fold_map`: Map each element to a `Monoid` and combine results
/// - `length`: Count the number of elements
/// - `is_empty`: Check if the structure has no elements
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let letters = Sequence::from(vec!['a', 'b', 'c']);
    /// let word = letters.fold_right(String::new(), |element, mut accumulator| {
    ///     accumulator.push(element);
    ///     accumulator
    /// });
    /// assert_eq!(word, "cba");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a `Monoid` and combines all results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from(vec![1, 2, 3, 4]);
    /// let total: Sum<i32> = numbers.fold_map(Sum);
    /// assert_eq!(total.into_inner(), 10);
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.length() == 0
    }
}
