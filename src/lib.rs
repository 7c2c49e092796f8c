//! This crate is an implementation of a fixed-capacity hash table, resolving collisions with open
//! addressing and double hashing.
//!
//! # Purpose
//! This crate is written as a learning experience, with no expectation for it to be used in
//! production. A hash table with open addressing looks simple until entries start to collide and
//! get deleted, which is exactly the part this crate is interested in.
//!
//! # Method
//! The table stores string keys and string values in a fixed array of buckets. Each key has a probe
//! sequence: the order in which it examines buckets. The sequence combines two polynomial hashes of
//! the key, one picking the starting bucket and the other the distance between buckets. See
//! [`DoubleHash`](collections::hash::table::DoubleHash).
//!
//! Deleting an entry leaves a tombstone in its bucket rather than emptying it, otherwise keys that
//! were pushed past that bucket during insertion would become unreachable.
//!
//! Production use isn't the goal, but production quality is. Every operation is bounded by the
//! capacity of the table, so that even a table with no empty buckets left can't send a search into
//! an infinite loop.
//!
//! # Error Handling
//! Errors are strongly typed: each failure is a struct (usually a ZST) that implements
//! [`Error`](std::error::Error), and operations which can fail in more than one way return an enum
//! over those structs. The derive macros of `derive_more` take care of the repetitive parts.
//!
//! A missing key isn't an error when searching, so [`search`](HashTable::search) returns an
//! [`Option`]. Deleting a missing key is reported as
//! [`NotFound`](collections::hash::table::NotFound).
//!
//! # Logging
//! The crate logs through the [`log`] facade. Probing past occupied buckets is logged at `trace`,
//! failed insertions at `debug` and suspicious configurations, such as a capacity that isn't prime,
//! at `warn`. Nothing is printed unless the application installs a logger.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use collections::hash::HashTable;
