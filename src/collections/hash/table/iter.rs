use std::iter::FusedIterator;
use std::slice::Iter as SliceIter;

use super::{HashTable, Slot};

impl<'a> IntoIterator for &'a HashTable {
    type Item = (&'a str, &'a str);

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            len: self.len(),
            inner: self.slots.iter(),
        }
    }
}

/// A type for borrowed iteration over the live entries of a [`HashTable`], in bucket order.
/// Produces values of type `(&str, &str)`.
///
/// See [`HashTable::iter`].
pub struct Iter<'a> {
    pub(crate) inner: SliceIter<'a, Slot>,
    pub(crate) len: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        // Skip over empty buckets and tombstones.
        let entry = self.inner.by_ref().find_map(Slot::entry)?;
        self.len -= 1;
        Some((entry.key.as_str(), entry.value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}

/// A type for borrowed iteration over the live keys of a [`HashTable`].
///
/// See [`HashTable::keys`].
pub struct Keys<'a>(pub(crate) Iter<'a>);

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> ExactSizeIterator for Keys<'a> {}

impl<'a> FusedIterator for Keys<'a> {}

/// A type for borrowed iteration over the live values of a [`HashTable`].
///
/// See [`HashTable::values`].
pub struct Values<'a>(pub(crate) Iter<'a>);

impl<'a> Iterator for Values<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> ExactSizeIterator for Values<'a> {}

impl<'a> FusedIterator for Values<'a> {}

/// A type for iterating over every bucket of a [`HashTable`], whatever its state.
///
/// See [`HashTable::slots`].
pub struct Slots<'a>(pub(crate) SliceIter<'a, Slot>);

impl<'a> Iterator for Slots<'a> {
    type Item = &'a Slot;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> ExactSizeIterator for Slots<'a> {}

impl<'a> FusedIterator for Slots<'a> {}
