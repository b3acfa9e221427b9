//! Lookup and mutation operations of [`ChainedMap`].
use super::table::handle_error;
use super::ChainedMap;
use crate::hashing::common::bucket_index;
use bucketed_core::error::BucketedError;
use bucketed_core::Hasher;

impl<K: Eq, V, H: Hasher<K>> ChainedMap<K, V, H> {
    #[inline]
    pub(crate) fn bucket_index(&self, key: &K) -> usize {
        bucket_index(self.hasher.hash(key), self.table.num_buckets())
    }

    /// Get the value associated with the given `key`.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Get the stored key and the value associated with the given `key`.
    ///
    /// The stored key is the first inserted representation, which may differ from `key` for
    /// types with a relaxed equality.
    #[inline]
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.table.get(self.bucket_index(key), key)
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get_key_value(key).is_some()
    }

    /// Associate `value` with `key`, returning the previous value if the key was present.
    ///
    /// When a new key would push the load factor above the maximum the table is rehashed first.
    ///
    /// # Panics
    ///
    /// - If the grown table doesn't fit into the address space.
    /// - Aborts through [`std::alloc::handle_alloc_error`] if the allocator fails, use
    ///   [`ChainedMap::try_insert`] to handle that instead.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.try_insert(key, value).unwrap_or_else(|err| handle_error(err))
    }

    /// Fallible version of [`ChainedMap::insert`].
    ///
    /// # Errors
    ///
    /// - [`BucketedError::CapacityOverflow`] and [`BucketedError::AllocationFailed`] if the map
    ///   had to grow and the new table couldn't be allocated. The map is left unchanged and
    ///   `key` and `value` are dropped.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>, BucketedError> {
        let mut idx = self.bucket_index(&key);

        if self.table.find(idx, &key).is_none() && self.exceeds_max_load_factor(self.len + 1) {
            self.grow(self.len + 1)?;
            idx = self.bucket_index(&key);
        }

        let replaced = self.table.insert_or_replace(idx, key, value);
        if replaced.is_none() {
            self.len += 1;
        }
        Ok(replaced)
    }

    /// Remove the entry for `key`, returning its value if it was present.
    ///
    /// Never shrinks the table.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Remove the entry for `key`, returning the stored key and its value.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let idx = self.bucket_index(key);
        let entry = self.table.remove(idx, key)?;
        self.len -= 1;
        Some(entry)
    }

    /// Remove all the entries, keeping the current number of buckets.
    pub fn clear(&mut self) {
        self.table.clear();
        self.len = 0;
    }

    /// Keep only the entries for which `f` returns `true`. Never shrinks the table.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.len -= self.table.retain(f);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn num_buckets(&self) -> usize {
        self.table.num_buckets()
    }

    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.table.num_buckets() as f64
    }

    #[inline]
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Number of entries stored behind the first entry of their bucket.
    pub fn num_collisions(&self) -> usize {
        self.table
            .buckets()
            .iter()
            .map(|b| b.len().saturating_sub(1))
            .sum()
    }

    #[inline]
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    #[inline]
    pub(crate) fn exceeds_max_load_factor(&self, len: usize) -> bool {
        len as f64 / self.table.num_buckets() as f64 > self.max_load_factor
    }
}
