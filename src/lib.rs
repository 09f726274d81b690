//! # Chaintable
//!
//! A hash table with string keys that resolves collisions by separate chaining.
//!
//! Keys are hashed with the XOR variant of DJB2 and each bucket holds a singly linked chain
//! of entries. The table grows when an insertion pushes the load factor above 0.7 and shrinks
//! when a removal drops it below 0.2, rehashing every entry each time. It never shrinks below
//! the capacity it was created with. Thresholds and factors can be changed through a
//! [`ResizePolicy`].
//!
//! ## Basic Usage
//!
//! ```rust
//! use chaintable::HashTable;
//!
//! // Two buckets are enough: collisions are chained and the table grows as it fills up
//! let mut table = HashTable::new(2);
//!
//! table.insert("line_1", "Tiny hash table");
//! table.insert("line_2", "Filled beyond capacity");
//! table.insert("line_3", "Linked list saves the day!");
//!
//! assert_eq!(table.retrieve("line_3"), Some(&"Linked list saves the day!"));
//! assert!(table.capacity() > 2);
//!
//! // Update values
//! table.insert("line_1", "Still tiny");
//! assert_eq!(table.retrieve("line_1"), Some(&"Still tiny"));
//! assert_eq!(table.len(), 3);
//!
//! // Remove values; a missing key is logged and leaves the table alone
//! assert_eq!(table.remove("line_2"), Some("Filled beyond capacity"));
//! assert_eq!(table.remove("line_2"), None);
//! ```
//!
//! ## Custom Resize Policy
//!
//! ```rust
//! use chaintable::{HashTable, ResizePolicy};
//!
//! let policy = ResizePolicy::new().with_grow_threshold(2.0).with_grow_factor(4.0);
//! let mut table = HashTable::with_policy(4, policy)?;
//!
//! for i in 0..8 {
//!     table.insert(format!("key-{i}"), i);
//! }
//! // 8 entries in 4 buckets is a load factor of exactly 2.0, not above it
//! assert_eq!(table.capacity(), 4);
//!
//! table.insert("key-8", 8);
//! assert_eq!(table.capacity(), 16);
//! # Ok::<(), chaintable::PolicyError>(())
//! ```

/// Module implementing the bucket chains
mod chain;
/// Module implementing the DJB2 hash
mod djb2;
/// Module implementing the chained hash table
mod hash_table;
/// Module implementing the resize policy
mod policy;
/// Utility functions and traits for the hash table
mod utils;

pub use djb2::{bucket_index, djb2};
pub use hash_table::{DEFAULT_CAPACITY, HashTable};
pub use policy::{
    DEFAULT_GROW_FACTOR, DEFAULT_GROW_THRESHOLD, DEFAULT_SHRINK_FACTOR, DEFAULT_SHRINK_THRESHOLD,
    PolicyError, ResizePolicy,
};
pub use utils::{HashTableExtensions, from_pairs};
