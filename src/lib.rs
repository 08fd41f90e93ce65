//! chained-hashset: a single-threaded, fixed-capacity hash set with
//! separate chaining and bucket distribution statistics.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a deliberately simple chaining table whose internal
//!   distribution is observable, so callers can see how a given
//!   capacity and hasher behave on real data.
//! - Shape: a `Vec<Vec<E>>` bucket array sized once at construction.
//!   An element lives in bucket `hash(e) mod capacity`; within a
//!   bucket, elements keep insertion order and are deduplicated by
//!   `Eq`.
//! - Statistics: `load_factor`, `collisions`, `biggest_bucket`,
//!   `empty_buckets`, plus a one-pass `distribution()` snapshot. All
//!   are read-only scans of the bucket array.
//!
//! Constraints
//! - Single-threaded: all mutation goes through `&mut self`; there is
//!   no interior mutability and no synchronization.
//! - Fixed capacity: the table never resizes or rehashes. Chain length
//!   is the caller's problem to size for; the statistics exist to make
//!   that visible.
//! - Hashing is caller-supplied via `S: BuildHasher` (default
//!   `RandomState`). Bucket selection reduces the signed
//!   interpretation of the 64-bit hash with `rem_euclid` in a wider
//!   type, so codes near the signed minimum index correctly.
//! - Absent elements are unrepresentable: `add` consumes an `E` by
//!   value.
//!
//! Notes and non-goals
//! - No `remove_all`/`retain_all`/`to_vec`: these fail with
//!   `SetError::Unsupported` rather than silently no-op-ing.
//! - No growth policy, no persistence, no concurrent access.
//! - Iteration is lazy, buckets in index order and insertion order
//!   within a bucket; the borrow checker rules out mutation while an
//!   iterator is live.

mod chained_hash_set;
mod chained_hash_set_proptest;
mod stats;

// Public surface
pub use chained_hash_set::{ChainedHashSet, Iter, SetError, UnsupportedOp};
pub use stats::TableStats;
