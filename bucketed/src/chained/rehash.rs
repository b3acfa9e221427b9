//! Growth policy and rehashing of [`ChainedMap`].
use super::table::Table;
use super::ChainedMap;
use crate::hashing::common::bucket_index;
use bucketed_core::error::BucketedError;
use bucketed_core::Hasher;
use log::debug;
use std::mem;

/// The smallest number of buckets that holds `len` entries within `max_load_factor`.
///
/// Fails with [`BucketedError::CapacityOverflow`] when that number doesn't fit into `usize`.
fn min_num_buckets(len: usize, max_load_factor: f64) -> Result<usize, BucketedError> {
    let overflow = BucketedError::CapacityOverflow {
        num_buckets: usize::MAX,
    };

    let estimate = (len as f64 / max_load_factor).ceil();
    if estimate >= usize::MAX as f64 {
        return Err(overflow);
    }

    let mut num_buckets = (estimate as usize).max(1);
    while len as f64 / num_buckets as f64 > max_load_factor {
        num_buckets = num_buckets.checked_add(1).ok_or_else(|| overflow.clone())?;
    }
    Ok(num_buckets)
}

impl<K: Eq, V, H: Hasher<K>> ChainedMap<K, V, H> {
    /// Rebuild the table with `num_buckets` buckets.
    ///
    /// The request is raised to the smallest number of buckets that keeps the current entries
    /// within the maximum load factor, so this can shrink the table but never overload it.
    /// Iteration order is not preserved.
    ///
    /// # Errors
    ///
    /// - [`BucketedError::CapacityOverflow`] and [`BucketedError::AllocationFailed`] if the new
    ///   table can't be allocated, in which case the map is left unchanged.
    pub fn rehash(&mut self, num_buckets: usize) -> Result<(), BucketedError> {
        let num_buckets = num_buckets.max(min_num_buckets(self.len, self.max_load_factor)?);
        self.rehash_exact(num_buckets)
    }

    /// Grow the table so that it can hold `len` entries: at least double it, more if doubling
    /// isn't enough.
    pub(crate) fn grow(&mut self, len: usize) -> Result<(), BucketedError> {
        let doubled = self
            .table
            .num_buckets()
            .checked_mul(2)
            .ok_or(BucketedError::CapacityOverflow {
                num_buckets: usize::MAX,
            })?;
        self.rehash_exact(doubled.max(min_num_buckets(len, self.max_load_factor)?))
    }

    fn rehash_exact(&mut self, num_buckets: usize) -> Result<(), BucketedError> {
        // Allocating first leaves the map untouched on failure.
        let table = Table::try_with_num_buckets(num_buckets)?;
        let old_table = mem::replace(&mut self.table, table);
        let old_num_buckets = old_table.num_buckets();

        for (key, value) in old_table.into_entries() {
            let idx = bucket_index(self.hasher.hash(&key), num_buckets);
            self.table.push(idx, key, value);
        }

        debug!(
            "Rehashed {} entries from {} to {} buckets",
            self.len, old_num_buckets, num_buckets
        );
        self.debug_assert_invariants();

        Ok(())
    }

    /// Check the structural invariants of the map in debug builds.
    ///
    /// Detects non-deterministic hashers and, when equal keys meet in one bucket after a rehash,
    /// hashers that disagree with the key's equality.
    pub(crate) fn debug_assert_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }

        let num_buckets = self.table.num_buckets();
        let mut total = 0;

        for (idx, bucket) in self.table.buckets().iter().enumerate() {
            total += bucket.len();
            for (pos, (key, _)) in bucket.iter().enumerate() {
                debug_assert_eq!(
                    bucket_index(self.hasher.hash(key), num_buckets),
                    idx,
                    "An entry is stored in a bucket its hash doesn't select."
                );
                debug_assert!(
                    bucket.iter().skip(pos + 1).all(|(other, _)| other != key),
                    "A bucket holds two equal keys, the hasher disagrees with key equality."
                );
            }
        }

        debug_assert_eq!(total, self.len, "Entry count is out of sync with the table.");
        debug_assert!(
            self.len == 0 || !self.exceeds_max_load_factor(self.len),
            "Load factor {} exceeds {}.",
            self.load_factor(),
            self.max_load_factor
        );
    }
}
