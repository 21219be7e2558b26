//! Eager, in-memory query sequences.
//!
//! This module provides [`Sequence`], an owned, ordered collection of
//! elements with a fluent query surface in the style of
//! language-integrated query libraries.
//!
//! # Overview
//!
//! Operations fall into these groups, each in its own submodule:
//!
//! - Construction: from slices, arrays, vectors and ordered maps
//! - Traversal: [`Cursor`] and [`Sequence::for_each`]
//! - Terminal operations: `aggregate`, `all`, `first`, `max`, `single`, `sum`, ...
//! - Transformation: `select`, `filter`, `cast`, `reverse`, `distinct`, ...
//! - Set algebra: `union`, `intersect`, `except`
//! - Partitioning: `skip`, `take` and their `_last` / `_while` variants
//! - Pairing and grouping: `zip`, `group_by`
//! - Factories: `empty`, `range`, `repeat`
//!
//! # Evaluation
//!
//! Every operation is eager. A transform never mutates or shares its
//! receiver's storage: it allocates a fresh backing store and returns a
//! new `Sequence`. Selectors and predicates are expected to be pure; the
//! number of times they are called is not part of the contract.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! let numbers = Sequence::from([1, 2, 3, 4]);
//! let doubled_large = numbers.select(|number| number * 2).filter(|number| *number > 5);
//!
//! assert_eq!(doubled_large, Sequence::from([6, 8]));
//! assert_eq!(numbers.aggregate_with_seed(0, |total, number| total + number), 10);
//! ```

mod construction;
mod cursor;
mod factory;
mod pairing;
mod partition;
mod set_algebra;
mod terminal;
mod transform;

use std::fmt;

pub use cursor::Cursor;

use crate::typeclass::{Foldable, Functor, Monoid, Semigroup, TypeConstructor};

// =============================================================================
// Sequence Definition
// =============================================================================

/// An owned, ordered collection of elements with query operations.
///
/// `Sequence` exclusively owns its backing store. Cloning a sequence
/// clones the store; moving it transfers the store. Traversal state lives
/// in [`Cursor`]s borrowed from the sequence, never in the sequence itself.
///
/// # Time Complexity
///
/// | Operation                           | Complexity      |
/// |-------------------------------------|-----------------|
/// | `count`, `element_at`               | O(1)            |
/// | `select`, `filter`, `skip`, `take`  | O(N)            |
/// | `contains`, `max`, `min`, `sum`     | O(N)            |
/// | `distinct`, `union`, `except`       | O(N²)           |
/// | `intersect`, `group_by`             | O(N × M)        |
///
/// # Examples
///
/// ```rust
/// use enumerable::prelude::*;
///
/// let words = Sequence::from(vec!["the", "quick", "brown", "fox"]);
/// assert_eq!(words.count(), 4);
/// assert_eq!(words.first(), Ok(&"the"));
/// assert_eq!(words.filter(|word| word.len() > 3).count(), 2);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    elements: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates a new empty sequence.
    ///
    /// This is the same as [`Sequence::empty`].
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Wraps an existing vector without copying it.
    #[inline]
    pub(crate) const fn from_vec(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Returns the number of elements in the sequence.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the sequence and returns its backing store.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns a cursor positioned before the first element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([1, 2, 3]);
    /// let mut cursor = numbers.cursor();
    /// assert!(cursor.move_next());
    /// assert_eq!(*cursor.current(), 1);
    /// ```
    #[inline]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&self.elements)
    }

    /// Returns an iterator over references to the elements.
    ///
    /// The iterator is a fresh [`Cursor`].
    #[inline]
    pub fn iter(&self) -> Cursor<'_, T> {
        self.cursor()
    }

    /// Visits every element in order.
    ///
    /// A fresh cursor is reset and advanced until exhausted, and `visitor`
    /// is invoked once per element. Every transform in this module is
    /// built on this traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let mut visited = Vec::new();
    /// Sequence::from([3, 1, 2]).for_each(|element| visited.push(*element));
    /// assert_eq!(visited, vec![3, 1, 2]);
    /// ```
    pub fn for_each<'a, F>(&'a self, mut visitor: F)
    where
        F: FnMut(&'a T),
    {
        let mut cursor = self.cursor();
        cursor.reset();
        while cursor.move_next() {
            visitor(cursor.current());
        }
    }

    /// Visits every element in order together with its index.
    pub(crate) fn for_each_indexed<'a, F>(&'a self, mut visitor: F)
    where
        F: FnMut(&'a T, usize),
    {
        let mut index = 0;
        self.for_each(|element| {
            visitor(element, index);
            index += 1;
        });
    }

    /// Returns the element count as a signed integer, for comparison with
    /// signed count arguments.
    #[inline]
    pub(crate) fn signed_len(&self) -> isize {
        isize::try_from(self.elements.len()).unwrap_or(isize::MAX)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Sequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Sequence<T> {
    type Inner = T;
    type WithType<B> = Sequence<B>;
}

impl<T> Functor for Sequence<T> {
    fn fmap<B, F>(self, function: F) -> Sequence<B>
    where
        F: FnMut(T) -> B,
    {
        self.elements.into_iter().map(function).collect()
    }

    fn fmap_ref<B, F>(&self, function: F) -> Sequence<B>
    where
        F: FnMut(&T) -> B,
    {
        self.select(function)
    }
}

impl<T> Foldable for Sequence<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.elements.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.len()
    }

    #[inline]
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.elements.is_empty()
    }
}

impl<T> Semigroup for Sequence<T> {
    fn combine(mut self, other: Self) -> Self {
        self.elements.extend(other.elements);
        self
    }
}

impl<T> Monoid for Sequence<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SequenceVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SequenceVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SequenceVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Sequence<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(Sequence::from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Sequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SequenceVisitor::new())
    }
}

static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(Sequence<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
