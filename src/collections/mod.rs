//! Collection types.
//!
//! # Purpose
//! These types are written to explore how the data structures themselves work, with a focus on
//! correctness at their edges: full tables, deleted entries and hash collisions.

pub mod hash;
