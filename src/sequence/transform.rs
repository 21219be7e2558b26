//! Filtering, projection and composition.
//!
//! Every operation here returns a new sequence with a freshly allocated
//! backing store and leaves the receiver untouched.

use crate::numeric::CastFrom;

use super::Sequence;

impl<T> Sequence<T> {
    /// Projects every element through `selector`.
    ///
    /// The result type may differ from the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let words = Sequence::from(["fox", "jumps"]);
    /// assert_eq!(words.select(|word| word.len()), Sequence::from([3, 5]));
    /// ```
    pub fn select<U, F>(&self, mut selector: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        let mut projected = Vec::with_capacity(self.len());
        self.for_each(|element| projected.push(selector(element)));
        Sequence::from_vec(projected)
    }

    /// Projects every element through `selector`, which also receives the
    /// element's index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let letters = Sequence::from(['a', 'b']);
    /// let labelled = letters.select_indexed(|letter, index| format!("{index}:{letter}"));
    /// assert_eq!(labelled, Sequence::from(["0:a".to_string(), "1:b".to_string()]));
    /// ```
    pub fn select_indexed<U, F>(&self, mut selector: F) -> Sequence<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        let mut projected = Vec::with_capacity(self.len());
        self.for_each_indexed(|element, index| projected.push(selector(element, index)));
        Sequence::from_vec(projected)
    }
}

impl<T: Clone> Sequence<T> {
    /// Keeps the elements satisfying `predicate`, in their original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([1, 2, 3, 4]);
    /// assert_eq!(numbers.filter(|number| number % 2 == 0), Sequence::from([2, 4]));
    /// ```
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut kept = Vec::new();
        self.for_each(|element| {
            if predicate(element) {
                kept.push(element.clone());
            }
        });
        Self::from_vec(kept)
    }

    /// Keeps the elements satisfying `predicate`, which also receives the
    /// element's index.
    pub fn filter_indexed<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T, usize) -> bool,
    {
        let mut kept = Vec::new();
        self.for_each_indexed(|element, index| {
            if predicate(element, index) {
                kept.push(element.clone());
            }
        });
        Self::from_vec(kept)
    }

    /// Returns the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut reversed = Vec::with_capacity(self.len());
        self.for_each(|element| reversed.push(element.clone()));
        reversed.reverse();
        Self::from_vec(reversed)
    }

    /// Returns the elements of `self` followed by the elements of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let head = Sequence::from([1, 2, 3, 4]);
    /// let tail = Sequence::from([5, 6, 7]);
    /// assert_eq!(head.concat(&tail), Sequence::from([1, 2, 3, 4, 5, 6, 7]));
    /// ```
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut combined = Vec::with_capacity(self.len() + other.len());
        self.for_each(|element| combined.push(element.clone()));
        other.for_each(|element| combined.push(element.clone()));
        Self::from_vec(combined)
    }

    /// Returns a new sequence with `element` added at the end.
    #[must_use]
    pub fn append(&self, element: T) -> Self {
        let mut extended = self.as_slice().to_vec();
        extended.push(element);
        Self::from_vec(extended)
    }

    /// Returns a new sequence with `element` added at the start.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([1, 2]);
    /// assert_eq!(numbers.prepend(0), Sequence::from([0, 1, 2]));
    /// assert_eq!(numbers.append(3), Sequence::from([1, 2, 3]));
    /// assert_eq!(numbers.count(), 2);
    /// ```
    #[must_use]
    pub fn prepend(&self, element: T) -> Self {
        let mut extended = Vec::with_capacity(self.len() + 1);
        extended.push(element);
        self.for_each(|existing| extended.push(existing.clone()));
        Self::from_vec(extended)
    }
}

impl<T: Clone + PartialEq> Sequence<T> {
    /// Keeps the first occurrence of every distinct element, in original
    /// order.
    ///
    /// Only equality is required of the element type, so this compares
    /// each element against everything kept so far.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([1, 1, 2, 3, 3, 4]);
    /// assert_eq!(numbers.distinct(), Sequence::from([1, 2, 3, 4]));
    /// ```
    #[must_use]
    pub fn distinct(&self) -> Self {
        let mut unique = Vec::new();
        self.for_each(|element| push_unique(&mut unique, element));
        Self::from_vec(unique)
    }
}

impl<T: Copy> Sequence<T> {
    /// Converts every element to `U` using primitive cast rules.
    ///
    /// Conversions may lose precision or range; see
    /// [`CastFrom`](crate::numeric::CastFrom).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([1, 2, 3, 4]);
    /// assert_eq!(numbers.cast::<f32>(), Sequence::from([1.0_f32, 2.0, 3.0, 4.0]));
    /// assert_eq!(Sequence::from([2.7_f64, -1.2]).cast::<i32>(), Sequence::from([2, -1]));
    /// ```
    pub fn cast<U>(&self) -> Sequence<U>
    where
        U: CastFrom<T>,
    {
        self.select(|element| U::cast_from(*element))
    }
}

/// Pushes a clone of `element` unless an equal element is already present.
pub(super) fn push_unique<T: Clone + PartialEq>(unique: &mut Vec<T>, element: &T) {
    if !unique.contains(element) {
        unique.push(element.clone());
    }
}
