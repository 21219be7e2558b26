//! Functor type class - mapping over container values.
//!
//! A `Functor` applies a function to every element of a container while
//! preserving its shape. For [`Sequence`](crate::sequence::Sequence) the
//! shape is the number and order of elements, so `fmap` is `select`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! let numbers = Sequence::from(vec![1, 2, 3]);
//! let labels = numbers.fmap(|number| format!("#{number}"));
//! assert_eq!(labels, Sequence::from(vec!["#1".to_string(), "#2".into(), "#3".into()]));
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// The function may be called once per element, so it is `FnMut`.
pub trait Functor: TypeConstructor {
    /// Consumes the container and applies `function` to every element.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies `function` to a reference to every element.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Replaces every element with a clone of `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let replaced = Sequence::from(vec![1, 2, 3]).replace('x');
    /// assert_eq!(replaced, Sequence::from(vec!['x', 'x', 'x']));
    /// ```
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(move |_| value.clone())
    }
}
