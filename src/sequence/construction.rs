//! Construction and conversion adapters.
//!
//! Sequences are built from the collections upstream code already holds:
//! slices (the pointer-and-length form), fixed-size arrays, vectors and
//! ordered maps. Every adapter copies or takes ownership of the elements,
//! so no sequence ever aliases another collection's storage.
//!
//! Map construction keeps only the values, in key order. Use
//! [`Sequence::from_map_entries`] to keep the keys.

use std::collections::BTreeMap;

use super::Sequence;

impl<T: Clone> Sequence<T> {
    /// Creates a sequence by copying the elements of a slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::prelude::*;
    ///
    /// let buffer = [4, 5, 6, 7];
    /// let sequence = Sequence::from_slice(&buffer[1..3]);
    /// assert_eq!(sequence.into_vec(), vec![5, 6]);
    /// ```
    pub fn from_slice(elements: &[T]) -> Self {
        Self::from_vec(elements.to_vec())
    }

    /// Creates a sequence from the values of an ordered map, in key order.
    ///
    /// Keys are discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use enumerable::prelude::*;
    ///
    /// let mut scores = BTreeMap::new();
    /// scores.insert("carol", 7);
    /// scores.insert("alice", 9);
    ///
    /// assert_eq!(Sequence::from_map(&scores), Sequence::from([9, 7]));
    /// ```
    pub fn from_map<K>(map: &BTreeMap<K, T>) -> Self {
        map.values().cloned().collect()
    }
}

impl<K: Clone, V: Clone> Sequence<(K, V)> {
    /// Creates a sequence of key-value pairs from an ordered map, in key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use enumerable::prelude::*;
    ///
    /// let map = BTreeMap::from([(2, 'b'), (1, 'a')]);
    /// let entries = Sequence::from_map_entries(&map);
    /// assert_eq!(entries, Sequence::from([(1, 'a'), (2, 'b')]));
    /// ```
    pub fn from_map_entries(map: &BTreeMap<K, V>) -> Self {
        map.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        Self::from_vec(Vec::from(elements))
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    #[inline]
    fn from(elements: &[T]) -> Self {
        Self::from_slice(elements)
    }
}

impl<K, T> From<BTreeMap<K, T>> for Sequence<T> {
    fn from(map: BTreeMap<K, T>) -> Self {
        map.into_values().collect()
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    #[inline]
    fn from(sequence: Sequence<T>) -> Self {
        sequence.into_vec()
    }
}
