//! Fixed-size sequence of buckets.

use super::bucket::Bucket;
use bucketed_core::error::BucketedError;
use log::trace;
use std::alloc::{handle_alloc_error, Layout};

/// The bucket table of a [`ChainedMap`](super::ChainedMap).
///
/// The number of buckets is fixed for the lifetime of a table and is always at least 1. Growing
/// means building a new table.
#[derive(Debug, Clone)]
pub struct Table<K, V> {
    buckets: Vec<Bucket<K, V>>,
}

impl<K, V> Table<K, V> {
    /// Allocate a table of `num_buckets` empty buckets without aborting on allocation failure.
    pub fn try_with_num_buckets(num_buckets: usize) -> Result<Self, BucketedError> {
        if num_buckets == 0 {
            return Err(BucketedError::InvalidNumBuckets(num_buckets));
        }
        let layout = Layout::array::<Bucket<K, V>>(num_buckets)
            .map_err(|_| BucketedError::CapacityOverflow { num_buckets })?;

        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(num_buckets)
            .map_err(|_| BucketedError::AllocationFailed {
                num_buckets,
                layout,
            })?;
        buckets.resize_with(num_buckets, Bucket::default);

        trace!(
            "Allocated a table of {num_buckets} buckets ({} bytes)",
            layout.size()
        );

        Ok(Self { buckets })
    }

    /// Allocate a table of `num_buckets` empty buckets.
    ///
    /// # Panics
    ///
    /// - If `num_buckets` is 0 or the table doesn't fit into the address space.
    /// - Aborts through [`handle_alloc_error`] if the allocator fails.
    pub fn with_num_buckets(num_buckets: usize) -> Self {
        Self::try_with_num_buckets(num_buckets).unwrap_or_else(|err| handle_error(err))
    }

    #[inline]
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn buckets(&self) -> &[Bucket<K, V>] {
        &self.buckets
    }

    #[inline]
    pub(crate) fn push(&mut self, idx: usize, key: K, value: V) {
        self.buckets[idx].push(key, value);
    }

    pub(crate) fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Bucket::clear);
    }

    /// Returns the number of removed entries.
    pub(crate) fn retain<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.buckets
            .iter_mut()
            .map(|bucket| bucket.retain(&mut f))
            .sum()
    }

    pub(crate) fn into_buckets(self) -> Vec<Bucket<K, V>> {
        self.buckets
    }

    /// Move all the entries out, bucket by bucket.
    pub(crate) fn into_entries(self) -> impl Iterator<Item = (K, V)> {
        self.buckets.into_iter().flat_map(Bucket::into_entries)
    }
}

impl<K: Eq, V> Table<K, V> {
    #[inline]
    pub fn find(&self, idx: usize, key: &K) -> Option<usize> {
        self.buckets[idx].find(key)
    }

    #[inline]
    pub fn get(&self, idx: usize, key: &K) -> Option<(&K, &V)> {
        self.buckets[idx].get(key)
    }

    #[inline]
    pub fn insert_or_replace(&mut self, idx: usize, key: K, value: V) -> Option<V> {
        self.buckets[idx].insert_or_replace(key, value)
    }

    #[inline]
    pub fn remove(&mut self, idx: usize, key: &K) -> Option<(K, V)> {
        self.buckets[idx].remove(key)
    }
}

/// Turn an error of a fallible allocation into a panic or an abort, the way standard
/// collections treat allocation failures.
pub(crate) fn handle_error(err: BucketedError) -> ! {
    match err {
        BucketedError::AllocationFailed { layout, .. } => handle_alloc_error(layout),
        err => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocates_requested_buckets() {
        let table = Table::<u32, u32>::try_with_num_buckets(10).unwrap();
        assert_eq!(table.num_buckets(), 10);
        assert!(table.buckets().iter().all(Bucket::is_empty));
    }

    #[test]
    fn test_rejects_zero_buckets() {
        assert_eq!(
            Table::<u32, u32>::try_with_num_buckets(0).unwrap_err(),
            BucketedError::InvalidNumBuckets(0)
        );
    }

    #[test]
    fn test_reports_capacity_overflow() {
        assert_eq!(
            Table::<u64, u64>::try_with_num_buckets(usize::MAX).unwrap_err(),
            BucketedError::CapacityOverflow {
                num_buckets: usize::MAX
            }
        );
    }

    #[test]
    fn test_reports_allocation_failure() {
        // Fits the layout limit but no allocator will provide it.
        let num_buckets = isize::MAX as usize / std::mem::size_of::<Bucket<u8, u8>>();
        let err = Table::<u8, u8>::try_with_num_buckets(num_buckets).unwrap_err();
        assert!(
            matches!(err, BucketedError::AllocationFailed { num_buckets: n, .. } if n == num_buckets),
            "{err:?}"
        );
    }

    #[test]
    #[should_panic(expected = "Number of buckets must be at least 1")]
    fn test_with_zero_buckets_panics() {
        Table::<u8, u8>::with_num_buckets(0);
    }

    #[test]
    fn test_operations_address_single_bucket() {
        let mut table = Table::with_num_buckets(4);
        assert_eq!(table.insert_or_replace(1, "one", 1), None);
        assert_eq!(table.insert_or_replace(1, "one", 11), Some(1));
        assert_eq!(table.get(1, &"one"), Some((&"one", &11)));
        assert_eq!(table.get(2, &"one"), None);
        assert_eq!(table.find(1, &"one"), Some(0));
        assert_eq!(table.remove(2, &"one"), None);
        assert_eq!(table.remove(1, &"one"), Some(("one", 11)));
    }

    #[test]
    fn test_into_entries_walks_buckets_in_order() {
        let mut table = Table::with_num_buckets(3);
        table.push(2, 'c', 3);
        table.push(0, 'a', 1);
        table.push(2, 'd', 4);
        table.push(1, 'b', 2);
        let entries: Vec<_> = table.into_entries().collect();
        assert_eq!(entries, [('a', 1), ('b', 2), ('c', 3), ('d', 4)]);
    }
}
