//! A module containing [`HashTable`] and associated types.
//!
//! Alongside the table itself, this module exposes the hashing functions that determine where
//! entries are placed, the state of individual buckets and borrowed iteration over entries, keys
//! or values.
//!
//! [`HashTable`] is also re-exported under the parent module.

mod error;
mod hash_table;
mod iter;
mod probe;
mod slot;


pub use error::*;
pub use hash_table::*;
pub use iter::*;
pub use probe::*;
pub use slot::*;
