use std::mem;

/// A node of a bucket chain holding one key-value pair
#[derive(Debug, Clone)]
struct Node<V> {
    /// The key of the entry
    key: String,
    /// The value associated with the key
    value: V,
    /// The next node in the same bucket, owned by this node
    next: Option<Box<Node<V>>>,
}

/// A singly linked list of entries sharing one bucket.
///
/// Every node is exclusively owned by its predecessor (or by the chain for the head), and new
/// entries are appended at the tail so a chain keeps insertion order.
#[derive(Debug, Clone)]
pub(crate) struct Chain<V> {
    /// The first node of the chain, if any
    head: Option<Box<Node<V>>>,
}

impl<V> Default for Chain<V> {
    fn default() -> Self {
        Self { head: None }
    }
}

impl<V> Chain<V> {
    /// Returns true if the chain holds no entries
    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of entries in the chain
    pub(crate) fn len(&self) -> usize {
        let mut len: usize = 0;
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            len = len.saturating_add(1);
            cursor = node.next.as_deref();
        }
        len
    }

    /// Finds the value stored under `key`
    pub(crate) fn get(&self, key: &str) -> Option<&V> {
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            if node.key == key {
                return Some(&node.value);
            }
            cursor = node.next.as_deref();
        }
        None
    }

    /// Finds a mutable reference to the value stored under `key`
    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.key == key {
                return Some(&mut node.value);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    /// Overwrites the value under `key`, or appends a new node at the tail when the key is
    /// absent. Returns the previous value on overwrite.
    pub(crate) fn upsert(&mut self, key: String, value: V) -> Option<V> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            if node.key == key {
                return Some(mem::replace(&mut node.value, value));
            }
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { key, value, next: None }));
        None
    }

    /// Unlinks the node holding `key` and returns its value.
    ///
    /// The link that pointed at the removed node (the head slot or the predecessor's `next`) is
    /// redirected to the removed node's successor, so removing the last node empties the chain.
    pub(crate) fn remove(&mut self, key: &str) -> Option<V> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.key != key) {
            link = &mut link.as_mut()?.next;
        }
        let removed = *link.take()?;
        *link = removed.next;
        Some(removed.value)
    }

    /// Returns the keys of the chain, head to tail
    #[cfg(test)]
    pub(crate) fn keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            keys.push(node.key.as_str());
            cursor = node.next.as_deref();
        }
        keys
    }

    /// Consumes the chain, yielding its entries head to tail
    pub(crate) fn into_entries(self) -> IntoEntries<V> {
        IntoEntries { head: self.head }
    }
}

/// Draining iterator over the entries of a chain, in chain order
#[derive(Debug)]
pub(crate) struct IntoEntries<V> {
    /// The remaining part of the chain
    head: Option<Box<Node<V>>>,
}

impl<V> Iterator for IntoEntries<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = *self.head.take()?;
        self.head = node.next;
        Some((node.key, node.value))
    }
}
