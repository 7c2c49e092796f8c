use std::iter::FusedIterator;

use super::InvalidMultiplier;

/// The number of character codes in the ASCII alphabet. Multipliers must exceed this so that
/// distinct characters can't cancel each other out within one term.
pub const ALPHABET_SIZE: u64 = 128;

/// The multiplier used for the primary hash of a key, which picks the first bucket to examine.
pub const PRIMARY_MULTIPLIER: u64 = 151;

/// The multiplier used for the secondary hash of a key, which picks the step between buckets.
pub const SECONDARY_MULTIPLIER: u64 = 163;

/// Computes a polynomial rolling hash of `key`, treating its bytes as the coefficients `c[0..n]`:
///
/// `(c[0] * a^(n-1) + c[1] * a^(n-2) + ... + c[n-1]) mod m`
///
/// where `a` is the `multiplier` and `m` the `modulus`. The sum is accumulated with Horner's rule,
/// reducing after every term so that no intermediate value overflows. Returns None if `modulus` is
/// 0.
pub const fn hash(key: &str, multiplier: u64, modulus: u64) -> Option<u64> {
    if modulus == 0 {
        return None;
    }

    let bytes = key.as_bytes();
    let a = (multiplier % modulus) as u128;
    let m = modulus as u128;
    let mut acc = 0_u128;

    // Iterators aren't available in const fns.
    let mut i = 0;
    while i < bytes.len() {
        acc = (acc * a + bytes[i] as u128) % m;
        i += 1;
    }

    Some(acc as u64)
}

/// Returns true if `n` is prime. Trial division is plenty for the multipliers and capacities this
/// is used to check.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut d = 5;
    while d <= n / d {
        if n % d == 0 || n % (d + 2) == 0 {
            return false;
        }
        d += 6;
    }
    true
}

/// The pair of multipliers that determine the probe sequence of every key in a
/// [`HashTable`](super::HashTable).
///
/// The primary multiplier chooses the starting bucket and the secondary multiplier chooses the
/// distance between consecutive buckets. Because the two differ, keys which collide on their
/// starting bucket will usually take different paths from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoubleHash {
    primary: u64,
    secondary: u64,
}

impl DoubleHash {
    /// Creates a new DoubleHash from the provided multipliers.
    ///
    /// # Errors
    /// Returns [`InvalidMultiplier`] if either multiplier isn't a prime larger than
    /// [`ALPHABET_SIZE`], or if the multipliers are equal (in which case `secondary` is reported).
    pub const fn new(primary: u64, secondary: u64) -> Result<DoubleHash, InvalidMultiplier> {
        if !Self::valid_multiplier(primary) {
            return Err(InvalidMultiplier { multiplier: primary });
        }
        // Two identical hashes would tie the step to the starting bucket.
        if !Self::valid_multiplier(secondary) || primary == secondary {
            return Err(InvalidMultiplier { multiplier: secondary });
        }

        Ok(DoubleHash { primary, secondary })
    }

    /// Returns the primary multiplier.
    pub const fn primary(&self) -> u64 {
        self.primary
    }

    /// Returns the secondary multiplier.
    pub const fn secondary(&self) -> u64 {
        self.secondary
    }

    /// Calculates the bucket index to examine for `key` on the provided `attempt`, given a table
    /// with `cap` buckets:
    ///
    /// `(h_a + attempt * (h_b + 1)) mod cap`
    ///
    /// `h_a` is the primary hash modulo `cap`. `h_b` is the secondary hash modulo `cap - 1`, so the
    /// step `h_b + 1` lies in `1..cap` and is never a multiple of `cap`. When `cap` is prime, the
    /// first `cap` attempts visit every bucket exactly once.
    ///
    /// Returns None if `cap` is 0.
    pub const fn probe(&self, key: &str, cap: usize, attempt: usize) -> Option<usize> {
        let Some(start) = hash(key, self.primary, cap as u64) else {
            return None;
        };
        let step = self.step(key, cap);

        let cap = cap as u128;
        let index = (start as u128 + (attempt as u128 % cap) * step as u128) % cap;
        Some(index as usize)
    }

    /// Returns an iterator over the first `cap` indices in the probe sequence of `key`.
    pub const fn probe_seq(&self, key: &str, cap: usize) -> ProbeSeq {
        let start = match hash(key, self.primary, cap as u64) {
            Some(start) => start as usize,
            None => 0,
        };

        ProbeSeq {
            next: start,
            step: self.step(key, cap) as usize,
            cap,
            attempt: 0,
        }
    }

    /// The distance between consecutive buckets in the probe sequence of `key`.
    const fn step(&self, key: &str, cap: usize) -> u64 {
        match hash(key, self.secondary, cap.saturating_sub(1) as u64) {
            Some(h) => h + 1,
            // With one bucket there is nowhere else to go.
            None => 1,
        }
    }

    const fn valid_multiplier(multiplier: u64) -> bool {
        multiplier > ALPHABET_SIZE && is_prime(multiplier)
    }
}

impl Default for DoubleHash {
    fn default() -> Self {
        DoubleHash {
            primary: PRIMARY_MULTIPLIER,
            secondary: SECONDARY_MULTIPLIER,
        }
    }
}

/// An iterator over the probe sequence of a key: the bucket indices examined on attempts
/// `0..cap`, in order.
///
/// See [`DoubleHash::probe_seq`] and [`HashTable::probe_seq`](super::HashTable::probe_seq).
#[derive(Debug, Clone)]
pub struct ProbeSeq {
    pub(crate) next: usize,
    pub(crate) step: usize,
    pub(crate) cap: usize,
    pub(crate) attempt: usize,
}

impl ProbeSeq {
    /// Returns the attempt number of the index that will be yielded next.
    pub const fn attempt(&self) -> usize {
        self.attempt
    }
}

impl Iterator for ProbeSeq {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.attempt >= self.cap {
            return None;
        }

        let index = self.next;
        self.next = ((index as u128 + self.step as u128) % self.cap as u128) as usize;
        self.attempt += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cap - self.attempt;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbeSeq {}

impl FusedIterator for ProbeSeq {}
