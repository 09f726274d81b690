//! Utility functions and traits for `HashTable`

use crate::HashTable;

/// Extension trait for tables that provides additional convenience methods
pub trait HashTableExtensions<V> {
    /// Returns a clone of the value stored under `key`
    #[must_use]
    fn retrieve_cloned(&self, key: &str) -> Option<V>
    where
        V: Clone;

    /// Returns a clone of the value stored under `key`, or `V::default()` if it is absent
    #[must_use]
    fn retrieve_or_default(&self, key: &str) -> V
    where
        V: Clone + Default;

    /// Inserts the pair only if `key` is absent. Returns true if it was inserted.
    fn insert_if_absent(&mut self, key: impl Into<String>, value: V) -> bool;
}

impl<V> HashTableExtensions<V> for HashTable<V> {
    fn retrieve_cloned(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.retrieve(key).cloned()
    }

    fn retrieve_or_default(&self, key: &str) -> V
    where
        V: Clone + Default,
    {
        self.retrieve_cloned(key).unwrap_or_default()
    }

    fn insert_if_absent(&mut self, key: impl Into<String>, value: V) -> bool {
        let key = key.into();
        if self.contains_key(&key) {
            return false;
        }
        self.insert(key, value);
        true
    }
}

/// Creates a `HashTable` with `capacity` buckets from an iterator of key-value pairs.
///
/// Later pairs overwrite earlier ones with the same key.
#[must_use]
pub fn from_pairs<K, V, I>(capacity: usize, iter: I) -> HashTable<V>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut table = HashTable::new(capacity);
    table.extend(iter);
    table
}
