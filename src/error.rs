//! Error types for sequence operations.
//!
//! Every fallible operation on [`Sequence`](crate::sequence::Sequence)
//! reports its failure synchronously through [`SequenceError`]. The
//! taxonomy is deliberately small:
//!
//! - [`SequenceError::EmptySequence`]: the operation needs at least one element
//! - [`SequenceError::OutOfRange`]: an index or count argument is invalid
//! - [`SequenceError::MultipleMatch`]: exactly one element was required, several qualified
//! - [`SequenceError::NoMatch`]: exactly one element was required, none qualified
//!
//! Calling `sum` on a non-numeric element type is not represented here:
//! it is rejected at compile time by the [`Numeric`](crate::numeric::Numeric) bound.

use std::fmt;

/// The reason an argument was rejected with [`SequenceError::OutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeViolation {
    /// The argument was less than zero.
    Negative,
    /// The argument was greater than or equal to the number of elements.
    TooLarge,
    /// The produced values would exceed the representable integer range.
    Overflow,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => write!(formatter, "is less than 0"),
            Self::TooLarge => {
                write!(
                    formatter,
                    "is greater than or equal to the number of elements"
                )
            }
            Self::Overflow => write!(formatter, "exceeds the representable integer range"),
        }
    }
}

/// Represents a failed sequence operation.
///
/// Each variant records the name of the operation that failed, so the
/// rendered message points at the call site that triggered it.
///
/// # Examples
///
/// ```rust
/// use enumerable::prelude::*;
///
/// let empty: Sequence<i32> = Sequence::empty();
/// let error = empty.first().unwrap_err();
///
/// assert_eq!(error, SequenceError::EmptySequence { operation: "first" });
/// assert_eq!(
///     format!("{error}"),
///     "Sequence::first: the source sequence is empty"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SequenceError {
    /// The operation requires at least one element and the source had none.
    EmptySequence {
        /// The name of the operation that failed.
        operation: &'static str,
    },
    /// An index or count argument lies outside its valid range.
    OutOfRange {
        /// The name of the operation that failed.
        operation: &'static str,
        /// The name of the rejected argument.
        parameter: &'static str,
        /// Why the argument was rejected.
        reason: RangeViolation,
    },
    /// More than one element qualified where exactly one was required.
    MultipleMatch {
        /// The name of the operation that failed.
        operation: &'static str,
    },
    /// No element satisfied the predicate where exactly one was required.
    NoMatch {
        /// The name of the operation that failed.
        operation: &'static str,
    },
}

impl SequenceError {
    /// Returns the name of the operation that produced this error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::SequenceError;
    ///
    /// let error = SequenceError::NoMatch { operation: "single_by" };
    /// assert_eq!(error.operation(), "single_by");
    /// ```
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::EmptySequence { operation }
            | Self::OutOfRange { operation, .. }
            | Self::MultipleMatch { operation }
            | Self::NoMatch { operation } => operation,
        }
    }

    /// Emits a debug event describing this error and returns it unchanged.
    ///
    /// Without the `tracing` feature this is the identity function.
    #[inline]
    #[must_use]
    pub(crate) fn logged(self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "enumerable::sequence",
            operation = self.operation(),
            error = %self,
            "sequence operation failed"
        );
        self
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySequence { operation } => {
                write!(formatter, "Sequence::{operation}: the source sequence is empty")
            }
            Self::OutOfRange {
                operation,
                parameter,
                reason,
            } => write!(formatter, "Sequence::{operation}: '{parameter}' {reason}"),
            Self::MultipleMatch { operation } => write!(
                formatter,
                "Sequence::{operation}: more than one element satisfies the condition"
            ),
            Self::NoMatch { operation } => write!(
                formatter,
                "Sequence::{operation}: no element satisfies the condition"
            ),
        }
    }
}

impl std::error::Error for SequenceError {}

/// A specialized `Result` for sequence operations.
pub type SequenceResult<T> = Result<T, SequenceError>;
