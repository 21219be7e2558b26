//! Pairing and grouping.

use super::Sequence;

/// A key and the members collected for it during one `group_by` call.
struct Grouping<K, E> {
    key: K,
    members: Vec<E>,
}

impl<T> Sequence<T> {
    /// Pairs elements positionally and combines each pair with `combiner`.
    ///
    /// The result is as long as the shorter of the two sequences.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([1, 2, 3]);
    /// let names = Sequence::from(["One", "Two", "Three"]);
    /// let labelled = numbers.zip(&names, |number, name| format!("{number} {name}"));
    ///
    /// assert_eq!(
    ///     labelled,
    ///     Sequence::from(["1 One".to_string(), "2 Two".to_string(), "3 Three".to_string()])
    /// );
    /// ```
    pub fn zip<U, R, F>(&self, other: &Sequence<U>, mut combiner: F) -> Sequence<R>
    where
        F: FnMut(&T, &U) -> R,
    {
        let mut partners = other.cursor();
        let mut paired = Vec::with_capacity(self.len().min(other.len()));
        self.for_each(|element| {
            if let Some(partner) = partners.next() {
                paired.push(combiner(element, partner));
            }
        });
        Sequence::from_vec(paired)
    }

    /// Groups elements by a computed key and projects each group.
    ///
    /// `key_selector` computes a key for every element and
    /// `element_selector` the member stored for it. Members sharing an
    /// equal key are collected, in source order, into one sequence.
    /// `result_selector` is then called once per distinct key, in order of
    /// each key's first appearance.
    ///
    /// Keys only need equality, so grouping is quadratic in the number of
    /// distinct keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let words = Sequence::from(["apple", "avocado", "banana", "blueberry", "cherry"]);
    /// let summary = words.group_by(
    ///     |word| word.chars().next(),
    ///     |word| word.len(),
    ///     |initial, lengths| (initial, lengths.sum()),
    /// );
    ///
    /// assert_eq!(
    ///     summary,
    ///     Sequence::from([(Some('a'), 12), (Some('b'), 15), (Some('c'), 6)])
    /// );
    /// ```
    pub fn group_by<K, E, R, KeySelector, ElementSelector, ResultSelector>(
        &self,
        mut key_selector: KeySelector,
        mut element_selector: ElementSelector,
        mut result_selector: ResultSelector,
    ) -> Sequence<R>
    where
        K: PartialEq,
        KeySelector: FnMut(&T) -> K,
        ElementSelector: FnMut(&T) -> E,
        ResultSelector: FnMut(K, Sequence<E>) -> R,
    {
        let mut groupings: Vec<Grouping<K, E>> = Vec::new();
        self.for_each(|element| {
            let key = key_selector(element);
            let member = element_selector(element);
            match groupings.iter_mut().find(|grouping| grouping.key == key) {
                Some(grouping) => grouping.members.push(member),
                None => groupings.push(Grouping {
                    key,
                    members: vec![member],
                }),
            }
        });
        groupings
            .into_iter()
            .map(|Grouping { key, members }| result_selector(key, Sequence::from_vec(members)))
            .collect()
    }
}

impl<T: Clone> Sequence<T> {
    /// Groups elements by a computed key, keeping the elements themselves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let numbers = Sequence::from([1, 2, 3, 4, 5]);
    /// let by_parity = numbers.group_by_key(|number| number % 2 == 0);
    ///
    /// assert_eq!(
    ///     by_parity,
    ///     Sequence::from([
    ///         (false, Sequence::from([1, 3, 5])),
    ///         (true, Sequence::from([2, 4])),
    ///     ])
    /// );
    /// ```
    pub fn group_by_key<K, KeySelector>(&self, key_selector: KeySelector) -> Sequence<(K, Self)>
    where
        K: PartialEq,
        KeySelector: FnMut(&T) -> K,
    {
        self.group_by(key_selector, T::clone, |key, members| (key, members))
    }
}
