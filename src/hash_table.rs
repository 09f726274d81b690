use std::{collections::TryReserveError, iter, mem};

use log::{debug, error, trace, warn};

use crate::{
    chain::Chain,
    djb2::bucket_index,
    policy::{PolicyError, ResizePolicy},
};

/// Number of buckets used by [`HashTable::default`] and [`FromIterator`]
pub const DEFAULT_CAPACITY: usize = 8;

/// Allocates `capacity` empty chains
fn empty_buckets<V>(capacity: usize) -> Vec<Chain<V>> {
    iter::repeat_with(Chain::default).take(capacity).collect()
}

/// Allocates `capacity` empty chains, reporting allocation failure instead of aborting
fn try_empty_buckets<V>(capacity: usize) -> Result<Vec<Chain<V>>, TryReserveError> {
    let mut buckets = Vec::new();
    buckets.try_reserve_exact(capacity)?;
    buckets.resize_with(capacity, Chain::default);
    Ok(buckets)
}

/// A hash table with string keys, separate chaining and load-factor driven resizing.
///
/// Keys are hashed with DJB2 and each bucket holds a singly linked chain of entries in
/// insertion order. An insertion that adds a key grows the table once the load factor exceeds
/// the policy's grow threshold; a removal shrinks it once the load factor falls below the
/// shrink threshold. The table never shrinks below the capacity it was created with.
///
/// Note: This implementation is not thread-safe. Mutation needs `&mut self`, so sharing a
/// table across threads requires external synchronization such as a `Mutex`.
#[derive(Debug, Clone)]
pub struct HashTable<V> {
    /// The bucket chains; its length is the current capacity
    buckets: Vec<Chain<V>>,
    /// The initial capacity, below which the table never shrinks
    min_capacity: usize,
    /// Current number of entries in the hash table
    count: usize,
    /// Thresholds and factors driving resizes
    policy: ResizePolicy,
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<K, V> Extend<(K, V)> for HashTable<V>
where
    K: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for HashTable<V>
where
    K: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::default();
        table.extend(iter);
        table
    }
}

impl<V> HashTable<V> {
    /// Creates a table with `capacity` buckets and the default [`ResizePolicy`].
    ///
    /// The capacity also becomes the minimum capacity. A capacity of 0 is treated as 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::build(capacity, ResizePolicy::new())
    }

    /// Creates a table with `capacity` buckets and a custom resize policy.
    ///
    /// # Errors
    ///
    /// Returns a [`PolicyError`] if the policy does not validate.
    pub fn with_policy(capacity: usize, policy: ResizePolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self::build(capacity, policy))
    }

    /// Builds the table from an already validated policy
    fn build(capacity: usize, policy: ResizePolicy) -> Self {
        let capacity = capacity.max(1);
        Self { buckets: empty_buckets(capacity), min_capacity: capacity, count: 0, policy }
    }

    /// Inserts a key-value pair, returning the previous value if the key was present.
    ///
    /// A new key is appended to the tail of its bucket's chain. An existing key has its value
    /// overwritten in place and the entry count is unchanged. Only an insertion that adds a
    /// key can grow the table.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let capacity = self.capacity();
        let index = bucket_index(&key, capacity);
        debug_assert!(index < capacity, "bucket index {index} out of range");
        let Some(chain) = self.buckets.get_mut(index) else {
            error!("dropping insert of {key:?}: bucket index {index} out of range for {capacity}");
            return None;
        };

        let previous = chain.upsert(key, value);
        if previous.is_none() {
            self.count = self.count.saturating_add(1);
            if self.load_factor() > self.policy.grow_threshold() {
                self.grow();
            }
        }
        previous
    }

    /// Retrieves the value stored under `key`
    #[must_use]
    pub fn retrieve(&self, key: &str) -> Option<&V> {
        self.buckets.get(bucket_index(key, self.capacity()))?.get(key)
    }

    /// Retrieves a mutable reference to the value stored under `key`
    pub fn retrieve_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = bucket_index(key, self.capacity());
        self.buckets.get_mut(index)?.get_mut(key)
    }

    /// Returns true if the table holds an entry for `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.retrieve(key).is_some()
    }

    /// Removes the entry for `key` and returns its value.
    ///
    /// A missing key is logged as a warning and leaves the table untouched. A successful
    /// removal may shrink the table, but never below its minimum capacity.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = bucket_index(key, self.capacity());
        let Some(value) = self.buckets.get_mut(index).and_then(|chain| chain.remove(key)) else {
            warn!("cannot remove {key:?}: key not found");
            return None;
        };

        self.count = self.count.saturating_sub(1);
        if self.load_factor() < self.policy.shrink_threshold() {
            self.resize(self.policy.shrink_factor());
        }
        Some(value)
    }

    /// Grows the table by the policy's grow factor (2x by default)
    pub fn grow(&mut self) -> bool {
        self.resize(self.policy.grow_factor())
    }

    /// Rebuilds the table with `floor(capacity * factor)` buckets and rehashes every entry.
    ///
    /// Entries are re-inserted bucket by bucket in chain order through [`HashTable::insert`],
    /// so a dense table shrunk by hand may grow again while rehashing. When a factor above 1
    /// would not add a bucket after flooring, the table grows by one bucket instead.
    ///
    /// Returns false without touching the table if the factor is not finite and positive, if
    /// the new capacity would fall below the minimum capacity, or if the new bucket array
    /// cannot be allocated.
    #[allow(
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn resize(&mut self, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            warn!("refusing to resize by invalid factor {factor}");
            return false;
        }

        let old_capacity = self.capacity();
        let mut new_capacity = (old_capacity as f64 * factor).floor() as usize;
        if factor > 1.0 {
            new_capacity = new_capacity.max(old_capacity.saturating_add(1));
        }
        if new_capacity < self.min_capacity {
            trace!(
                "not resizing from {old_capacity} to {new_capacity} buckets: below minimum {}",
                self.min_capacity
            );
            return false;
        }

        let new_buckets = match try_empty_buckets(new_capacity) {
            Ok(buckets) => buckets,
            Err(err) => {
                warn!("refusing to resize from {old_capacity} to {new_capacity} buckets: {err}");
                return false;
            }
        };

        let old_buckets = mem::replace(&mut self.buckets, new_buckets);
        self.count = 0;
        for (key, value) in old_buckets.into_iter().flat_map(Chain::into_entries) {
            self.insert(key, value);
        }

        debug!(
            "resized hash table from {old_capacity} to {} buckets ({} entries)",
            self.capacity(),
            self.count
        );
        true
    }

    /// Clears the hash table, removing all entries but keeping the current capacity
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            *chain = Chain::default();
        }
        self.count = 0;
    }

    /// Returns the number of entries in the hash table
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the hash table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of buckets in the hash table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the capacity the table was created with
    #[must_use]
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Returns the current load factor of the hash table
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity() as f64
    }

    /// Returns the resize policy in force
    #[must_use]
    pub fn policy(&self) -> &ResizePolicy {
        &self.policy
    }

    /// Returns the number of buckets holding at least one entry
    #[must_use]
    pub fn occupied_buckets(&self) -> usize {
        self.buckets.iter().filter(|chain| !chain.is_empty()).count()
    }

    /// Returns the length of the longest chain
    #[must_use]
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Chain::len).max().unwrap_or(0)
    }
}
