//! Restartable traversal over a sequence's backing store.
//!
//! A [`Cursor`] is the traversal primitive every sequence operation is
//! built on. It starts at a "before-first" sentinel; `move_next` advances
//! it and reports whether it now rests on an element; `current` reads
//! that element. `reset` returns it to the sentinel so the same cursor can
//! traverse again.
//!
//! Cursors borrow the backing store, so the store cannot be resized while
//! a traversal is in progress. Cloning a cursor copies its position.

use std::fmt;
use std::iter::FusedIterator;

/// A restartable, finite cursor over the elements of a
/// [`Sequence`](super::Sequence).
///
/// `Cursor` also implements [`Iterator`], yielding each remaining element
/// by reference.
///
/// # Examples
///
/// ```rust
/// use enumerable::prelude::*;
///
/// let numbers = Sequence::from([10, 20]);
/// let mut cursor = numbers.cursor();
///
/// assert!(cursor.move_next());
/// assert_eq!(cursor.current(), &10);
/// assert!(cursor.move_next());
/// assert_eq!(cursor.current(), &20);
/// assert!(!cursor.move_next());
///
/// cursor.reset();
/// assert_eq!(cursor.copied().collect::<Vec<_>>(), vec![10, 20]);
/// ```
pub struct Cursor<'a, T> {
    elements: &'a [T],
    /// `None` is the before-first sentinel. Never exceeds `elements.len()`.
    position: Option<usize>,
}

impl<'a, T> Cursor<'a, T> {
    /// Creates a cursor positioned before the first element.
    #[inline]
    pub(crate) const fn new(elements: &'a [T]) -> Self {
        Self {
            elements,
            position: None,
        }
    }

    /// Returns the cursor to the before-first sentinel.
    #[inline]
    pub fn reset(&mut self) {
        self.position = None;
    }

    /// Advances the cursor by one element.
    ///
    /// Returns `true` if the cursor now rests on an element, and `false`
    /// once the end of the sequence has been reached. Further calls keep
    /// returning `false` until the cursor is reset.
    #[inline]
    pub fn move_next(&mut self) -> bool {
        let next = self
            .position
            .map_or(0, |position| position + 1)
            .min(self.elements.len());
        self.position = Some(next);
        next < self.elements.len()
    }

    /// Returns the element under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the most recent `move_next` since the last `reset` did not
    /// return `true`. Reading the cursor in that state is a programming
    /// error.
    #[inline]
    pub fn current(&self) -> &'a T {
        match self.position {
            Some(position) if position < self.elements.len() => &self.elements[position],
            _ => panic!("Cursor::current called without a successful move_next"),
        }
    }

    /// Returns the index of the element under the cursor, if any.
    #[inline]
    pub fn position(&self) -> Option<usize> {
        self.position
            .filter(|&position| position < self.elements.len())
    }

    fn remaining(&self) -> usize {
        let consumed = self.position.map_or(0, |position| position + 1);
        self.elements.len().saturating_sub(consumed)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            position: self.position,
        }
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Cursor")
            .field("length", &self.elements.len())
            .field("position", &self.position)
            .finish()
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() {
            Some(self.current())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {
    fn len(&self) -> usize {
        self.remaining()
    }
}

impl<T> FusedIterator for Cursor<'_, T> {}
