use std::fmt::{self, Debug, Formatter};
use std::mem;

/// A stored key-value association. The key can't be changed once the entry is in a table, and the
/// value can only be replaced by deleting and reinserting the key.
#[derive(Clone, PartialEq, Eq)]
pub struct Entry {
    pub(crate) key: String,
    pub(crate) value: String,
}

impl Entry {
    pub(crate) const fn new(key: String, value: String) -> Entry {
        Entry { key, value }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl Debug for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}: {:?})", self.key, self.value)
    }
}

/// The state of a single bucket in a [`HashTable`](super::HashTable).
///
/// A Tombstone is left behind when an entry is deleted. It differs from Empty because another key
/// may have been pushed further along its probe sequence by the deleted entry: searches have to
/// keep going past a Tombstone, but must stop at an Empty bucket.
#[derive(Default, Clone, PartialEq, Eq)]
pub enum Slot {
    #[default]
    Empty,
    Tombstone,
    Live(Entry),
}

impl Slot {
    /// Returns true if an insertion may place a new entry in this bucket.
    pub const fn is_vacant(&self) -> bool {
        !self.is_live()
    }

    pub const fn is_live(&self) -> bool {
        matches!(self, Slot::Live(_))
    }

    pub const fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub const fn entry(&self) -> Option<&Entry> {
        match self {
            Slot::Live(entry) => Some(entry),
            _ => None,
        }
    }

    /// Replaces a live entry with a Tombstone, returning the entry. Any other state is left as is.
    pub(crate) fn bury(&mut self) -> Option<Entry> {
        match mem::replace(self, Slot::Tombstone) {
            Slot::Live(entry) => Some(entry),
            other => {
                *self = other;
                None
            },
        }
    }

    /// Returns true if this bucket holds a live entry for `key`.
    pub(crate) fn holds(&self, key: &str) -> bool {
        match self {
            Slot::Live(entry) => entry.key == key,
            _ => false,
        }
    }
}

impl Debug for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Empty => write!(f, "-"),
            Slot::Tombstone => write!(f, "x"),
            Slot::Live(entry) => Debug::fmt(entry, f),
        }
    }
}
