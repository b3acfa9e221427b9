//! A single chain of the table.

use std::mem;

/// A bucket of the hash table.
///
/// Holds the entries whose hashes map onto the same index, in insertion order. Lookups scan the
/// entries linearly comparing keys with [`Eq`], hashes are never compared here.
#[derive(Debug, Clone)]
pub struct Bucket<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for Bucket<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K, V> Bucket<K, V> {
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, (K, V)> {
        self.entries.iter()
    }

    /// Append an entry without looking for an equal key.
    ///
    /// Only valid when the caller knows the key is not in the bucket yet, as during a rehash.
    #[inline]
    pub(crate) fn push(&mut self, key: K, value: V) {
        self.entries.push((key, value));
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Keep only the entries `f` returns `true` for. Returns the number of removed entries.
    pub(crate) fn retain<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(&K, &V) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|(k, v)| f(k, v));
        before - self.entries.len()
    }

    pub(crate) fn into_entries(self) -> std::vec::IntoIter<(K, V)> {
        self.entries.into_iter()
    }
}

impl<K: Eq, V> Bucket<K, V> {
    /// Find the position of the entry whose key equals `key`.
    #[inline]
    pub fn find(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    #[inline]
    pub fn get(&self, key: &K) -> Option<(&K, &V)> {
        self.find(key).map(|pos| {
            let (k, v) = &self.entries[pos];
            (k, v)
        })
    }

    /// Replace the value of an existing entry or append a new one.
    ///
    /// The stored key is left untouched on replacement, so the first inserted representation of a
    /// key survives. Returns the replaced value, `None` means a new key was added.
    pub fn insert_or_replace(&mut self, key: K, value: V) -> Option<V> {
        match self.find(&key) {
            Some(pos) => Some(mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Remove the entry whose key equals `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let pos = self.find(key)?;
        Some(self.entries.remove(pos))
    }
}
