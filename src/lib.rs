//! # Linear Hash Map
//!
//! A Rust implementation of an in-memory hash map that grows by Linear Hashing.
//!
//! Keys are stored in buckets of [`SLOTS`] pairs, each with a chain of overflow buckets. Rather
//! than doubling the whole table when it fills up, the map splits a single home bucket whenever
//! an insert pushes the load factor above one half. A split pointer walks the table round by
//! round; every key resolves to exactly one of two candidate buckets depending on whether its
//! coarse address has already been split.
//!
//! `put` has insert-if-absent semantics: a key that is already present keeps its first value.
//!
//! ## Basic Usage
//!
//! ```rust
//! use linhash::LinHashMap;
//!
//! // Create a new hash map
//! let mut map = LinHashMap::new();
//!
//! // Insert values
//! map.put("apple".to_string(), 1);
//! map.put("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Duplicate keys keep their first value
//! map.put("apple".to_string(), 10);
//! assert_eq!(map.get("apple"), Some(&1));
//! assert_eq!(map.get("cherry"), None);
//! ```
//!
//! ## Growth
//!
//! ```rust
//! use linhash::LinHashMap;
//!
//! let mut map = LinHashMap::new();
//! assert_eq!(map.size(), 16);
//!
//! for key in (1..=29).step_by(2) {
//!     map.put(key, key * key);
//! }
//!
//! // four splits closed the first round: eight home buckets of four slots
//! assert_eq!(map.splits(), 4);
//! assert_eq!(map.size(), 32);
//! assert_eq!(map.growth().split_pointer(), 0);
//! assert!(map.verify().is_ok());
//! ```

/// Fixed-capacity buckets and overflow chains
mod bucket;
/// Errors reported by structural verification
mod error;
/// Growth state of a linear hash table
mod growth;
/// Two-resolution address functions
mod hasher;
/// The map itself
mod map;
/// Incremental bucket splitting
mod split;
/// Occupancy snapshot
mod stats;
/// The physical table of bucket chains
mod store;
/// Utility functions and traits for the hash map
mod utils;
/// Structural verification
mod verify;

pub use bucket::SLOTS;
pub use error::{Error, Result};
pub use growth::{GrowthState, INITIAL_HOME_BUCKETS};
pub use map::{Iter, LinHashMap};
pub use stats::TableStats;
pub use utils::{HashMapExtensions, from_iter};
