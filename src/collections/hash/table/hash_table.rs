use std::fmt::{self, Debug, Display, Formatter};

use super::{
    AllocationFailure, CreateError, DoubleHash, Entry, Iter, Keys, NotFound, ProbeSeq, Slot, Slots,
    TableFull, Values, ZeroCapacity, is_prime,
};

/// The capacity used by [`HashTable::new`].
pub const DEFAULT_CAP: usize = 53;

/// A fixed-capacity map of string keys to string values, using open addressing with double hashing
/// to resolve collisions.
///
/// The table never grows: it holds at most [`cap`](HashTable::cap) entries, and
/// [`insert`](HashTable::insert) reports [`TableFull`] rather than reallocating. Deleted entries
/// leave a tombstone behind which keeps the probe sequences of other keys intact, and which can be
/// reused by later insertions.
///
/// For every bucket to be reachable from every key, the capacity should be prime.
///
/// Keys aren't deduplicated. Inserting a key that is already present stores a second entry
/// further along the key's probe sequence, which stays hidden behind the first until the first is
/// deleted.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The capacity of the HashTable.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n)` |
/// | `search` | `O(1)`*, `O(n)` |
/// | `delete` | `O(1)`*, `O(n)` |
/// | `contains` | `O(1)`*, `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* Each collision costs one more probe. No operation probes more than `n` buckets, so even a
/// table that is full of entries and tombstones answers in `O(n)`.
#[derive(Clone)]
pub struct HashTable {
    pub(crate) slots: Box<[Slot]>,
    pub(crate) len: usize,
    pub(crate) tombstones: usize,
    pub(crate) hasher: DoubleHash,
}

impl HashTable {
    /// Creates a new HashTable with [`DEFAULT_CAP`] buckets and the default multipliers.
    pub fn new() -> HashTable {
        HashTable::with_cap(DEFAULT_CAP)
    }

    /// Creates a new HashTable with the provided `cap`acity and the default multipliers.
    ///
    /// # Panics
    /// Panics if `cap` is 0 or the buckets can't be allocated. See
    /// [`try_with_cap`](HashTable::try_with_cap) for a non-panicking version.
    pub fn with_cap(cap: usize) -> HashTable {
        HashTable::with_cap_and_hasher(cap, DoubleHash::default())
    }

    /// Creates a new HashTable with the provided `cap`acity and `hasher`.
    ///
    /// # Panics
    /// Panics if `cap` is 0 or the buckets can't be allocated. See
    /// [`try_with_cap_and_hasher`](HashTable::try_with_cap_and_hasher) for a non-panicking
    /// version.
    pub fn with_cap_and_hasher(cap: usize, hasher: DoubleHash) -> HashTable {
        match HashTable::try_with_cap_and_hasher(cap, hasher) {
            Ok(table) => table,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates a new HashTable with the provided `cap`acity and the default multipliers.
    ///
    /// # Errors
    /// Returns [`ZeroCapacity`] if `cap` is 0 and [`AllocationFailure`] if the buckets can't be
    /// allocated.
    pub fn try_with_cap(cap: usize) -> Result<HashTable, CreateError> {
        HashTable::try_with_cap_and_hasher(cap, DoubleHash::default())
    }

    /// Creates a new HashTable with the provided `cap`acity and `hasher`.
    ///
    /// # Errors
    /// Returns [`ZeroCapacity`] if `cap` is 0 and [`AllocationFailure`] if the buckets can't be
    /// allocated.
    pub fn try_with_cap_and_hasher(
        cap: usize,
        hasher: DoubleHash,
    ) -> Result<HashTable, CreateError> {
        if cap == 0 {
            return Err(ZeroCapacity.into());
        }
        if !is_prime(cap as u64) {
            log::warn!("HashTable capacity {cap} isn't prime, some buckets may be unreachable");
        }

        let mut slots = Vec::new();
        slots.try_reserve_exact(cap).map_err(|_| AllocationFailure)?;
        slots.resize_with(cap, Slot::default);

        log::trace!("Allocated HashTable with {cap} buckets, using {hasher:?}");

        Ok(HashTable {
            slots: slots.into_boxed_slice(),
            len: 0,
            tombstones: 0,
            hasher,
        })
    }

    /// Returns the number of live entries in the HashTable.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashTable contains no live entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets in the HashTable, which is fixed at creation.
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of buckets currently holding a tombstone.
    pub const fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Returns the multipliers used to calculate probe sequences.
    pub const fn hasher(&self) -> &DoubleHash {
        &self.hasher
    }

    /// Returns an iterator over the bucket indices that `key` would probe, in order.
    pub fn probe_seq(&self, key: &str) -> ProbeSeq {
        self.hasher.probe_seq(key, self.cap())
    }

    /// Inserts the provided `key`-`value` pair into the first empty or deleted bucket along the
    /// key's probe sequence.
    ///
    /// No check is made for an existing entry with the same key; the new entry is stored alongside
    /// it and shadowed by it.
    ///
    /// # Errors
    /// Returns [`TableFull`] if none of the buckets along the probe sequence are free. The
    /// HashTable is left unchanged.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), TableFull> {
        let key = key.into();
        let Some(index) = self.find_vacant(&key) else {
            log::debug!("Unable to insert {key:?}, no free bucket along its probe sequence");
            return Err(TableFull);
        };

        if self.slots[index].is_tombstone() {
            log::trace!("Reusing tombstone at {index} for {key:?}");
            self.tombstones -= 1;
        }

        self.slots[index] = Slot::Live(Entry::new(key, value.into()));
        self.len += 1;
        Ok(())
    }

    /// Returns the value associated with `key`, or None if the HashTable doesn't contain it. If the
    /// key was inserted more than once, the value of the entry met first along its probe sequence
    /// is returned.
    pub fn search(&self, key: &str) -> Option<&str> {
        self.get_entry(key).map(Entry::value)
    }

    /// Returns the entry for `key`, or None if there is no entry.
    pub fn get_entry(&self, key: &str) -> Option<&Entry> {
        let index = self.find_live(key)?;
        self.slots[index].entry()
    }

    /// Returns true if there is a value associated with `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.find_live(key).is_some()
    }

    /// Deletes the first entry for `key` along its probe sequence, returning its value. The bucket
    /// is marked with a tombstone, so that keys probing past it can still be found.
    ///
    /// # Errors
    /// Returns [`NotFound`] if the HashTable contains no entry for `key`, in which case it is left
    /// unchanged.
    pub fn delete(&mut self, key: &str) -> Result<String, NotFound> {
        let index = self.find_live(key).ok_or(NotFound)?;
        let entry = self.slots[index].bury().ok_or(NotFound)?;

        self.len -= 1;
        self.tombstones += 1;
        log::trace!("Left tombstone at {index} for {key:?}");

        Ok(entry.value)
    }

    /// Removes all entries and tombstones, keeping the allocated buckets.
    pub fn clear(&mut self) {
        self.slots.fill_with(Slot::default);
        self.len = 0;
        self.tombstones = 0;
    }

    /// Returns an iterator over all live key-value pairs, in bucket order.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Returns an iterator over all live keys, in bucket order.
    pub fn keys(&self) -> Keys<'_> {
        Keys(self.iter())
    }

    /// Returns an iterator over all live values, in bucket order.
    pub fn values(&self) -> Values<'_> {
        Values(self.iter())
    }

    /// Returns an iterator over the state of every bucket, including empty ones and tombstones.
    pub fn slots(&self) -> Slots<'_> {
        Slots(self.slots.iter())
    }
}

impl HashTable {
    /// Finds the index of the first live entry for `key`. Tombstones are skipped, while an empty
    /// bucket ends the search because no entry for `key` could have been placed past it.
    pub(crate) fn find_live(&self, key: &str) -> Option<usize> {
        for index in self.probe_seq(key) {
            match &self.slots[index] {
                Slot::Empty => return None,
                slot if slot.holds(key) => return Some(index),
                _ => log::trace!("Probed past bucket {index} looking for {key:?}"),
            }
        }

        None
    }

    /// Finds the index of the first empty bucket or tombstone along the probe sequence of `key`.
    pub(crate) fn find_vacant(&self, key: &str) -> Option<usize> {
        self.probe_seq(key).find(|&index| self.slots[index].is_vacant())
    }
}

impl Default for HashTable {
    fn default() -> Self {
        HashTable::new()
    }
}

impl Debug for HashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("buckets", &self.slots)
            .field("len", &self.len)
            .field("tombstones", &self.tombstones)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl Display for HashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
