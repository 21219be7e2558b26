//! Static factories.

use crate::error::{RangeViolation, SequenceError, SequenceResult};

use super::Sequence;

impl<T> Sequence<T> {
    /// Returns an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let empty: Sequence<String> = Sequence::empty();
    /// assert_eq!(empty.count(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns a sequence holding `count` copies of `element`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`] if `count` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// assert_eq!(Sequence::repeat(0, 3), Ok(Sequence::from([0, 0, 0])));
    /// assert!(Sequence::repeat('x', -1).is_err());
    /// ```
    pub fn repeat(element: T, count: isize) -> SequenceResult<Self> {
        if count < 0 {
            return Err(SequenceError::OutOfRange {
                operation: "repeat",
                parameter: "count",
                reason: RangeViolation::Negative,
            }
            .logged());
        }
        Ok(Self::from_vec(vec![element; count.unsigned_abs()]))
    }
}

impl Sequence<i32> {
    /// Returns exactly `count` consecutive integers starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`] if `count` is negative, or if
    /// the last value `start + count - 1` would exceed `i32::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// assert_eq!(Sequence::range(1, 5), Ok(Sequence::from([1, 2, 3, 4, 5])));
    /// assert_eq!(Sequence::range(-2, 3), Ok(Sequence::from([-2, -1, 0])));
    /// assert!(Sequence::range(i32::MAX, 2).is_err());
    /// ```
    pub fn range(start: i32, count: i32) -> SequenceResult<Self> {
        let out_of_range = |reason| {
            SequenceError::OutOfRange {
                operation: "range",
                parameter: "count",
                reason,
            }
            .logged()
        };
        if count < 0 {
            return Err(out_of_range(RangeViolation::Negative));
        }
        if i64::from(start) + i64::from(count) - 1 > i64::from(i32::MAX) {
            return Err(out_of_range(RangeViolation::Overflow));
        }
        Ok((0..count).map(|offset| start + offset).collect())
    }
}
