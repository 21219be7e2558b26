//! Terminal and aggregate operations.
//!
//! These operations reduce a sequence to a single value. Those that need
//! at least one element return a [`SequenceResult`] and fail with
//! [`SequenceError::EmptySequence`] on an empty source.

use crate::error::{RangeViolation, SequenceError, SequenceResult};
use crate::numeric::Numeric;
use crate::typeclass::{Monoid, Semigroup, Sum};

use super::Sequence;

impl<T> Sequence<T> {
    /// Folds the sequence from left to right, starting from `seed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([1, 2, 3, 4]);
    /// assert_eq!(numbers.aggregate_with_seed(0, |total, number| total + number), 10);
    ///
    /// let sentence = Sequence::from(["quick", "brown", "fox"])
    ///     .aggregate_with_seed(String::from("the"), |sentence, word| format!("{sentence} {word}"));
    /// assert_eq!(sentence, "the quick brown fox");
    /// ```
    pub fn aggregate_with_seed<A, F>(&self, seed: A, mut combiner: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.cursor()
            .fold(seed, |accumulator, element| combiner(accumulator, element))
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// An empty sequence satisfies any predicate.
    pub fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.cursor().all(|element| predicate(element))
    }

    /// Returns `true` if the sequence contains any element.
    #[inline]
    pub fn any(&self) -> bool {
        !self.is_empty()
    }

    /// Returns `true` if some element satisfies `predicate`.
    ///
    /// An empty sequence never does.
    pub fn any_by<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.cursor().any(|element| predicate(element))
    }

    /// Returns the number of elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::OutOfRange`] if `index` is negative or not
    /// less than the number of elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([1, 2, 3, 4]);
    /// assert_eq!(numbers.element_at(0), Ok(&1));
    /// assert!(numbers.element_at(-1).is_err());
    /// assert!(numbers.element_at(4).is_err());
    /// ```
    pub fn element_at(&self, index: isize) -> SequenceResult<&T> {
        let out_of_range = |reason| {
            SequenceError::OutOfRange {
                operation: "element_at",
                parameter: "index",
                reason,
            }
            .logged()
        };
        if index < 0 {
            return Err(out_of_range(RangeViolation::Negative));
        }
        self.as_slice()
            .get(index.unsigned_abs())
            .ok_or_else(|| out_of_range(RangeViolation::TooLarge))
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if the sequence is empty.
    pub fn first(&self) -> SequenceResult<&T> {
        self.as_slice()
            .first()
            .ok_or_else(|| empty_sequence("first"))
    }

    /// Returns the first element satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if no element satisfies it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([1, 2, 3, 4]);
    /// assert_eq!(numbers.first_by(|number| *number > 2), Ok(&3));
    /// assert!(numbers.first_by(|number| *number > 9).is_err());
    /// ```
    pub fn first_by<P>(&self, mut predicate: P) -> SequenceResult<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.cursor()
            .find(|element| predicate(element))
            .ok_or_else(|| empty_sequence("first_by"))
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if the sequence is empty.
    pub fn last(&self) -> SequenceResult<&T> {
        self.as_slice()
            .last()
            .ok_or_else(|| empty_sequence("last"))
    }

    /// Returns the last element satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if no element satisfies it.
    pub fn last_by<P>(&self, mut predicate: P) -> SequenceResult<&T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut found = None;
        self.for_each(|element| {
            if predicate(element) {
                found = Some(element);
            }
        });
        found.ok_or_else(|| empty_sequence("last_by"))
    }

    /// Returns the only element of the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if the sequence is empty and
    /// [`SequenceError::MultipleMatch`] if it has more than one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// assert_eq!(Sequence::from([1]).single(), Ok(&1));
    /// assert_eq!(
    ///     Sequence::<i32>::empty().single(),
    ///     Err(SequenceError::EmptySequence { operation: "single" })
    /// );
    /// assert_eq!(
    ///     Sequence::from([1, 2]).single(),
    ///     Err(SequenceError::MultipleMatch { operation: "single" })
    /// );
    /// ```
    pub fn single(&self) -> SequenceResult<&T> {
        match self.as_slice() {
            [] => Err(empty_sequence("single")),
            [only] => Ok(only),
            _ => Err(SequenceError::MultipleMatch {
                operation: "single",
            }
            .logged()),
        }
    }

    /// Returns the only element satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if the sequence itself is
    /// empty, [`SequenceError::NoMatch`] if no element satisfies the
    /// predicate, and [`SequenceError::MultipleMatch`] if more than one does.
    pub fn single_by<P>(&self, mut predicate: P) -> SequenceResult<&T>
    where
        P: FnMut(&T) -> bool,
    {
        if self.is_empty() {
            return Err(empty_sequence("single_by"));
        }
        let mut matches = self.cursor().filter(|element| predicate(element));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Ok(only),
            (None, _) => Err(SequenceError::NoMatch {
                operation: "single_by",
            }
            .logged()),
            (Some(_), Some(_)) => Err(SequenceError::MultipleMatch {
                operation: "single_by",
            }
            .logged()),
        }
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Returns `true` if some element equals `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.cursor().any(|element| element == item)
    }

    /// Returns `true` if both sequences have the same length and equal
    /// elements at every position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([1, 2, 3, 4]);
    /// assert!(numbers.sequence_equal(&Sequence::from([1, 2, 3, 4])));
    /// assert!(!numbers.sequence_equal(&Sequence::from([1, 2, 3])));
    /// ```
    pub fn sequence_equal(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.cursor()
            .zip(other.cursor())
            .all(|(left, right)| left == right)
    }
}

impl<T: PartialOrd> Sequence<T> {
    /// Returns the greatest element.
    ///
    /// When several elements are equally great, the first one is returned.
    /// Elements that are unordered with respect to themselves (such as
    /// `NaN`) are only returned when every element is unordered.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if the sequence is empty.
    pub fn max(&self) -> SequenceResult<&T> {
        self.extremum("max", |candidate, current| candidate > current)
    }

    /// Returns the least element.
    ///
    /// When several elements are equally small, the first one is returned.
    /// Self-unordered elements are treated as for [`Sequence::max`].
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if the sequence is empty.
    pub fn min(&self) -> SequenceResult<&T> {
        self.extremum("min", |candidate, current| candidate < current)
    }

    fn extremum<F>(&self, operation: &'static str, mut replaces: F) -> SequenceResult<&T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut best: Option<&T> = None;
        self.for_each(|element| match best {
            Some(current) if is_ordered(current) && !replaces(element, current) => {}
            Some(current) if !is_ordered(current) && !is_ordered(element) => {}
            _ => best = Some(element),
        });
        best.ok_or_else(|| empty_sequence(operation))
    }
}

impl<T: Clone> Sequence<T> {
    /// Folds the sequence from left to right, using the first element as
    /// the seed.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([1, 2, 3, 4]);
    /// assert_eq!(numbers.aggregate(|left, right| left + right), Ok(10));
    /// assert!(Sequence::<i32>::empty().aggregate(|left, right| left + right).is_err());
    /// ```
    pub fn aggregate<F>(&self, mut combiner: F) -> SequenceResult<T>
    where
        F: FnMut(T, &T) -> T,
    {
        let (seed, rest) = self
            .as_slice()
            .split_first()
            .ok_or_else(|| empty_sequence("aggregate"))?;
        Ok(rest
            .iter()
            .fold(seed.clone(), |accumulator, element| combiner(accumulator, element)))
    }
}

impl<T: Numeric> Sequence<T> {
    /// Returns the sum of all elements, or zero for an empty sequence.
    ///
    /// Only available for numeric element types. Integral totals that do
    /// not fit in `T` wrap around, in debug and release builds alike.
    /// Floating-point totals overflow to infinity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// assert_eq!(Sequence::from([1, 2, 3, 4]).sum(), 10);
    /// assert_eq!(Sequence::from([0.5, 0.25]).sum(), 0.75);
    /// assert_eq!(Sequence::<u8>::empty().sum(), 0);
    /// assert_eq!(Sequence::from([i32::MAX, 1]).sum(), i32::MIN);
    /// ```
    pub fn sum(&self) -> T {
        self.aggregate_with_seed(Sum::empty(), |total, element| total.combine(Sum(*element)))
            .into_inner()
    }

    /// Returns the arithmetic mean of the elements, or `0.0` for an empty
    /// sequence.
    ///
    /// Elements are accumulated as `f64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// assert_eq!(Sequence::from([1, 2, 3, 4]).average(), 2.5);
    /// assert_eq!(Sequence::<i32>::empty().average(), 0.0);
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let total = self.aggregate_with_seed(0.0, |total, element| total + element.to_f64());
        total / self.len() as f64
    }
}

/// Returns `false` for values such as `NaN` that do not compare with themselves.
fn is_ordered<T: PartialOrd>(value: &T) -> bool {
    value.partial_cmp(value).is_some()
}

fn empty_sequence(operation: &'static str) -> SequenceError {
    SequenceError::EmptySequence { operation }.logged()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn numbers() -> Sequence<i32> {
        Sequence::from([1, 2, 3, 4])
    }

    #[fixture]
    fn empty() -> Sequence<i32> {
        Sequence::empty()
    }

    // =========================================================================
    // aggregate
    // =========================================================================

    #[rstest]
    fn test_aggregate_with_seed_folds_left(numbers: Sequence<i32>) {
        let digits = numbers.aggregate_with_seed(String::new(), |digits, number| {
            format!("{digits}{number}")
        });
        assert_eq!(digits, "1234");
    }

    #[rstest]
    fn test_aggregate_with_seed_on_empty_returns_seed(empty: Sequence<i32>) {
        assert_eq!(empty.aggregate_with_seed(42, |total, number| total + number), 42);
    }

    #[rstest]
    fn test_aggregate_uses_first_element_as_seed() {
        let numbers = Sequence::from([10, 3, 2]);
        assert_eq!(numbers.aggregate(|left, right| left - right), Ok(5));
    }

    #[rstest]
    fn test_aggregate_single_element_returns_it() {
        assert_eq!(Sequence::from([7]).aggregate(|_, _| 0), Ok(7));
    }

    #[rstest]
    fn test_aggregate_on_empty_fails(empty: Sequence<i32>) {
        assert_eq!(
            empty.aggregate(|left, right| left + right),
            Err(SequenceError::EmptySequence {
                operation: "aggregate"
            })
        );
    }

    // =========================================================================
    // all / any
    // =========================================================================

    #[rstest]
    #[case(|number: &i32| *number > 5, false)]
    #[case(|number: &i32| *number < 100, true)]
    fn test_all(numbers: Sequence<i32>, #[case] predicate: fn(&i32) -> bool, #[case] expected: bool) {
        assert_eq!(numbers.all(predicate), expected);
    }

    #[rstest]
    fn test_all_on_empty_is_true(empty: Sequence<i32>) {
        assert!(empty.all(|_| false));
    }

    #[rstest]
    fn test_any(numbers: Sequence<i32>, empty: Sequence<i32>) {
        assert!(numbers.any());
        assert!(!empty.any());
    }

    #[rstest]
    fn test_any_by(numbers: Sequence<i32>, empty: Sequence<i32>) {
        assert!(numbers.any_by(|number| *number > 3));
        assert!(!numbers.any_by(|number| *number > 100));
        assert!(!empty.any_by(|_| true));
    }

    // =========================================================================
    // count / contains / element_at
    // =========================================================================

    #[rstest]
    fn test_count(numbers: Sequence<i32>, empty: Sequence<i32>) {
        assert_eq!(numbers.count(), 4);
        assert_eq!(empty.count(), 0);
    }

    #[rstest]
    fn test_contains(numbers: Sequence<i32>, empty: Sequence<i32>) {
        assert!(numbers.contains(&2));
        assert!(!numbers.contains(&999));
        assert!(!empty.contains(&999));
    }

    #[rstest]
    #[case(0, 1)]
    #[case(3, 4)]
    fn test_element_at_in_range(numbers: Sequence<i32>, #[case] index: isize, #[case] expected: i32) {
        assert_eq!(numbers.element_at(index), Ok(&expected));
    }

    #[rstest]
    #[case(-1, RangeViolation::Negative)]
    #[case(4, RangeViolation::TooLarge)]
    #[case(isize::MAX, RangeViolation::TooLarge)]
    fn test_element_at_out_of_range(
        numbers: Sequence<i32>,
        #[case] index: isize,
        #[case] reason: RangeViolation,
    ) {
        assert_eq!(
            numbers.element_at(index),
            Err(SequenceError::OutOfRange {
                operation: "element_at",
                parameter: "index",
                reason,
            })
        );
    }

    // =========================================================================
    // first / last
    // =========================================================================

    #[rstest]
    fn test_first_and_last(numbers: Sequence<i32>) {
        assert_eq!(numbers.first(), Ok(&1));
        assert_eq!(numbers.last(), Ok(&4));
    }

    #[rstest]
    fn test_first_by_and_last_by(numbers: Sequence<i32>) {
        assert_eq!(numbers.first_by(|number| *number > 2), Ok(&3));
        assert_eq!(numbers.last_by(|number| *number < 4), Ok(&3));
    }

    #[rstest]
    fn test_last_and_extrema_borrow_from_source() {
        let words = Sequence::from(["pear".to_string(), "fig".to_string(), "plum".to_string()]);
        let last_short = words.last_by(|word| word.len() < 4).unwrap();
        let greatest = words.max().unwrap();
        let least = words.min().unwrap();
        assert!(std::ptr::eq(last_short, &words.as_slice()[1]));
        assert!(std::ptr::eq(greatest, &words.as_slice()[2]));
        assert!(std::ptr::eq(least, &words.as_slice()[1]));
    }

    #[rstest]
    fn test_first_and_last_on_empty_fail(empty: Sequence<i32>) {
        assert_eq!(
            empty.first(),
            Err(SequenceError::EmptySequence { operation: "first" })
        );
        assert_eq!(
            empty.last(),
            Err(SequenceError::EmptySequence { operation: "last" })
        );
    }

    #[rstest]
    fn test_first_by_without_match_fails_as_empty(numbers: Sequence<i32>) {
        assert_eq!(
            numbers.first_by(|number| *number > 10),
            Err(SequenceError::EmptySequence {
                operation: "first_by"
            })
        );
        assert_eq!(
            numbers.last_by(|number| *number > 10),
            Err(SequenceError::EmptySequence {
                operation: "last_by"
            })
        );
    }

    // =========================================================================
    // max / min
    // =========================================================================

    #[rstest]
    fn test_max_and_min(numbers: Sequence<i32>) {
        assert_eq!(numbers.max(), Ok(&4));
        assert_eq!(numbers.min(), Ok(&1));
    }

    #[rstest]
    fn test_max_and_min_on_empty_fail(empty: Sequence<i32>) {
        assert_eq!(
            empty.max(),
            Err(SequenceError::EmptySequence { operation: "max" })
        );
        assert_eq!(
            empty.min(),
            Err(SequenceError::EmptySequence { operation: "min" })
        );
    }

    #[rstest]
    fn test_max_returns_first_of_equal_elements() {
        let pairs = Sequence::from([(2, 'a'), (1, 'b'), (2, 'c')])
            .select(|&(rank, label)| Ranked { rank, label });
        assert_eq!(pairs.max().map(|ranked| ranked.label), Ok('a'));
        assert_eq!(pairs.min().map(|ranked| ranked.label), Ok('b'));
    }

    #[rstest]
    fn test_max_on_floats() {
        let values = Sequence::from([1.5, -2.0, 8.25]);
        assert_eq!(values.max(), Ok(&8.25));
        assert_eq!(values.min(), Ok(&-2.0));
    }

    #[rstest]
    #[case(vec![f64::NAN, 1.0, 5.0], 5.0, 1.0)]
    #[case(vec![1.0, f64::NAN, 5.0], 5.0, 1.0)]
    #[case(vec![3.0, f64::NAN], 3.0, 3.0)]
    fn test_max_and_min_skip_nan(
        #[case] values: Vec<f64>,
        #[case] maximum: f64,
        #[case] minimum: f64,
    ) {
        let values = Sequence::from(values);
        assert_eq!(values.max(), Ok(&maximum));
        assert_eq!(values.min(), Ok(&minimum));
    }

    #[rstest]
    fn test_max_of_only_nan_is_nan() {
        let values = Sequence::from([f64::NAN, f64::NAN]);
        assert!(values.max().is_ok_and(|value| value.is_nan()));
        assert!(values.min().is_ok_and(|value| value.is_nan()));
    }

    #[derive(Debug)]
    struct Ranked {
        rank: i32,
        label: char,
    }

    impl PartialEq for Ranked {
        fn eq(&self, other: &Self) -> bool {
            self.rank == other.rank
        }
    }

    impl PartialOrd for Ranked {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.rank.partial_cmp(&other.rank)
        }
    }

    // =========================================================================
    // single
    // =========================================================================

    #[rstest]
    fn test_single() {
        assert_eq!(Sequence::from([1]).single(), Ok(&1));
    }

    #[rstest]
    fn test_single_on_empty_fails(empty: Sequence<i32>) {
        assert_eq!(
            empty.single(),
            Err(SequenceError::EmptySequence { operation: "single" })
        );
    }

    #[rstest]
    fn test_single_with_many_fails(numbers: Sequence<i32>) {
        assert_eq!(
            numbers.single(),
            Err(SequenceError::MultipleMatch { operation: "single" })
        );
    }

    #[rstest]
    fn test_single_by(numbers: Sequence<i32>) {
        assert_eq!(numbers.single_by(|number| *number < 2), Ok(&1));
    }

    #[rstest]
    fn test_single_by_without_match(numbers: Sequence<i32>) {
        assert_eq!(
            numbers.single_by(|number| *number > 10),
            Err(SequenceError::NoMatch {
                operation: "single_by"
            })
        );
    }

    #[rstest]
    fn test_single_by_with_many_matches(numbers: Sequence<i32>) {
        assert_eq!(
            numbers.single_by(|number| number % 2 == 0),
            Err(SequenceError::MultipleMatch {
                operation: "single_by"
            })
        );
    }

    #[rstest]
    fn test_single_by_on_empty_fails_as_empty(empty: Sequence<i32>) {
        assert_eq!(
            empty.single_by(|_| true),
            Err(SequenceError::EmptySequence {
                operation: "single_by"
            })
        );
    }

    // =========================================================================
    // sequence_equal
    // =========================================================================

    #[rstest]
    fn test_sequence_equal(numbers: Sequence<i32>, empty: Sequence<i32>) {
        assert!(numbers.sequence_equal(&numbers.clone()));
        assert!(!numbers.sequence_equal(&Sequence::from([1, 2, 3])));
        assert!(!numbers.sequence_equal(&Sequence::from([1, 2, 3, 5])));
        assert!(empty.sequence_equal(&Sequence::empty()));
    }

    // =========================================================================
    // sum / average
    // =========================================================================

    #[rstest]
    fn test_sum(numbers: Sequence<i32>, empty: Sequence<i32>) {
        assert_eq!(numbers.sum(), 10);
        assert_eq!(empty.sum(), 0);
    }

    #[rstest]
    #[case(vec![i32::MAX, 1], i32::MIN)]
    #[case(vec![i32::MIN, -1], i32::MAX)]
    #[case(vec![i32::MAX, 1, -1], i32::MAX)]
    fn test_sum_wraps_on_overflow(#[case] values: Vec<i32>, #[case] expected: i32) {
        assert_eq!(Sequence::from(values).sum(), expected);
    }

    #[rstest]
    fn test_sum_of_unsigned_wraps() {
        assert_eq!(Sequence::from([u8::MAX, 2]).sum(), 1);
    }

    #[rstest]
    fn test_sum_of_floats() {
        let values = Sequence::from([0.5_f32, 1.5, 2.0]);
        assert!((values.sum() - 4.0).abs() < f32::EPSILON);
    }

    #[rstest]
    fn test_average(numbers: Sequence<i32>, empty: Sequence<i32>) {
        assert!((numbers.average() - 2.5).abs() < f64::EPSILON);
        assert!(empty.average().abs() < f64::EPSILON);
    }

    #[rstest]
    fn test_average_does_not_overflow_narrow_types() {
        let values = Sequence::from([200_u8, 200, 200]);
        assert!((values.average() - 200.0).abs() < f64::EPSILON);
    }
}
