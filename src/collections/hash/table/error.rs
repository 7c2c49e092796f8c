use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("unable to allocate storage for hash table buckets")]
pub struct AllocationFailure;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("unable to index hash table with capacity 0")]
pub struct ZeroCapacity;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("no empty or deleted bucket reachable for key within capacity probes")]
pub struct TableFull;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("key not present in hash table")]
pub struct NotFound;

/// Returned when a multiplier can't be used for double hashing. A multiplier needs to be a prime
/// larger than the ASCII alphabet, and the two multipliers of a [`DoubleHash`](super::DoubleHash)
/// need to differ.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("{multiplier} is not a valid hash multiplier")]
pub struct InvalidMultiplier {
    pub multiplier: u64,
}

#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum CreateError {
    AllocationFailure(AllocationFailure),
    ZeroCapacity(ZeroCapacity),
}
