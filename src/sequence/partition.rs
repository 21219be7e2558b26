//! Partitioning operations.
//!
//! Counts are signed so that the boundary rules are total: a non-positive
//! count passed to `skip` is the identity, a non-positive count passed to
//! `take` yields an empty sequence, and counts beyond the length saturate.
//!
//! The `_while` variants split at the first element for which the
//! predicate is false and never resume, so for any predicate `p`:
//!
//! ```text
//! s.take_while(p).concat(&s.skip_while(p)) == s
//! ```

use super::Sequence;

impl<T: Clone> Sequence<T> {
    /// Drops the first `count` elements.
    ///
    /// Returns a copy of the sequence if `count <= 0`, and an empty
    /// sequence if `count` is at least the number of elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([1, 2, 3, 4]);
    /// assert_eq!(numbers.skip(1), Sequence::from([2, 3, 4]));
    /// assert_eq!(numbers.skip(-3), numbers);
    /// assert!(numbers.skip(10).is_empty());
    /// ```
    #[must_use]
    pub fn skip(&self, count: isize) -> Self {
        if count <= 0 {
            return self.clone();
        }
        self.filter_indexed(|_, index| index >= count.unsigned_abs())
    }

    /// Drops the last `count` elements.
    ///
    /// This is `take(len - count)`. Returns a copy of the sequence if
    /// `count < 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(numbers.skip_last(2), Sequence::from([1, 2, 3, 4]));
    /// ```
    #[must_use]
    pub fn skip_last(&self, count: isize) -> Self {
        if count < 0 {
            return self.clone();
        }
        self.take(self.signed_len().saturating_sub(count))
    }

    /// Drops the longest prefix whose elements satisfy `predicate`.
    ///
    /// Once the predicate first returns `false`, every remaining element
    /// is kept without consulting it again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([-1, 0, 1, 2, -3]);
    /// assert_eq!(numbers.skip_while(|number| *number < 1), Sequence::from([1, 2, -3]));
    /// ```
    #[must_use]
    pub fn skip_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.skip_while_indexed(|element, _| predicate(element))
    }

    /// Drops the longest prefix whose elements satisfy `predicate`, which
    /// also receives the element's index.
    #[must_use]
    pub fn skip_while_indexed<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T, usize) -> bool,
    {
        let mut skipping = true;
        let mut kept = Vec::new();
        self.for_each_indexed(|element, index| {
            if skipping {
                skipping = predicate(element, index);
            }
            if !skipping {
                kept.push(element.clone());
            }
        });
        Self::from_vec(kept)
    }

    /// Keeps the first `count` elements.
    ///
    /// Returns an empty sequence if `count <= 0`, and a copy of the
    /// sequence if `count` is at least the number of elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([1, 2, 3, 4]);
    /// assert_eq!(numbers.take(3), Sequence::from([1, 2, 3]));
    /// assert!(numbers.take(0).is_empty());
    /// ```
    #[must_use]
    pub fn take(&self, count: isize) -> Self {
        if count <= 0 {
            return Self::new();
        }
        self.filter_indexed(|_, index| index < count.unsigned_abs())
    }

    /// Keeps the last `count` elements.
    ///
    /// Returns an empty sequence if `count < 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([1, 2, 3, 4]);
    /// assert_eq!(numbers.take_last(3), Sequence::from([2, 3, 4]));
    /// assert_eq!(numbers.take_last(9), numbers);
    /// ```
    #[must_use]
    pub fn take_last(&self, count: isize) -> Self {
        if count < 0 {
            return Self::new();
        }
        self.skip(self.signed_len().saturating_sub(count))
    }

    /// Keeps the longest prefix whose elements satisfy `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([1, 2, 3, 4, 5, 1]);
    /// assert_eq!(numbers.take_while(|number| *number < 5), Sequence::from([1, 2, 3, 4]));
    /// ```
    #[must_use]
    pub fn take_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.take_while_indexed(|element, _| predicate(element))
    }

    /// Keeps the longest prefix whose elements satisfy `predicate`, which
    /// also receives the element's index.
    #[must_use]
    pub fn take_while_indexed<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T, usize) -> bool,
    {
        let mut taking = true;
        let mut kept = Vec::new();
        self.for_each_indexed(|element, index| {
            if taking {
                taking = predicate(element, index);
            }
            if taking {
                kept.push(element.clone());
            }
        });
        Self::from_vec(kept)
    }
}
