//! Iterators over [`ChainedMap`].
//!
//! Entries are visited bucket by bucket in index order and, within a bucket, in insertion order.
//! The order changes whenever the map is rehashed.
use super::bucket::Bucket;
use super::ChainedMap;
use bucketed_core::Hasher;
use std::iter::FusedIterator;
use std::{slice, vec};

/// Iterator over `(&K, &V)` pairs of a [`ChainedMap`].
pub struct Iter<'a, K, V> {
    buckets: slice::Iter<'a, Bucket<K, V>>,
    entries: slice::Iter<'a, (K, V)>,
    remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            entries: self.entries.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, value)) = self.entries.next() {
                self.remaining -= 1;
                return Some((key, value));
            }
            self.entries = self.buckets.next()?.iter();
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over the keys of a [`ChainedMap`].
#[derive(Clone)]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over the values of a [`ChainedMap`].
#[derive(Clone)]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// Owning iterator over the entries of a [`ChainedMap`].
pub struct IntoIter<K, V> {
    buckets: vec::IntoIter<Bucket<K, V>>,
    entries: vec::IntoIter<(K, V)>,
    remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entries.next() {
                self.remaining -= 1;
                return Some(entry);
            }
            self.entries = self.buckets.next()?.into_entries();
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: Eq, V, H: Hasher<K>> ChainedMap<K, V, H> {
    /// Iterate over the entries in bucket order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.table.buckets().iter(),
            entries: (&[]).iter(),
            remaining: self.len,
        }
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: Eq, V, H: Hasher<K>> IntoIterator for ChainedMap<K, V, H> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.len,
            buckets: self.table.into_buckets().into_iter(),
            entries: Vec::new().into_iter(),
        }
    }
}

impl<'a, K: Eq, V, H: Hasher<K>> IntoIterator for &'a ChainedMap<K, V, H> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::flawed::ConstantHasher;
    use std::collections::HashSet;

    #[test]
    fn test_iter_visits_every_entry_once() {
        let mut map: ChainedMap<u32, u32> = ChainedMap::new();
        map.extend((0..200).map(|i| (i, i + 1)));

        let iter = map.iter();
        assert_eq!(iter.len(), 200);

        let seen: HashSet<_> = iter.map(|(k, v)| (*k, *v)).collect();
        assert_eq!(seen, (0..200).map(|i| (i, i + 1)).collect());
    }

    #[test]
    fn test_iter_follows_bucket_order() {
        let mut map: ChainedMap<u64, ()> = ChainedMap::new();
        map.extend((0..100).map(|i| (i, ())));

        let indices: Vec<usize> = map.keys().map(|k| map.bucket_index(k)).collect();
        assert!(indices.windows(2).all(|w| w[0] <= w[1]), "{indices:?}");
    }

    #[test]
    fn test_iter_within_bucket_follows_insertion_order() {
        let mut map: ChainedMap<u32, (), ConstantHasher<u32>> = ChainedMap::new();
        for i in [5, 3, 9, 1] {
            map.insert(i, ());
        }
        map.remove(&3);
        map.insert(3, ());
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![5, 9, 1, 3]);
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let mut map: ChainedMap<u8, u8> = ChainedMap::new();
        map.extend([(1, 1), (2, 2), (3, 3)]);

        let mut iter = map.values();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        iter.next();
        assert_eq!(iter.len(), 2);
        iter.next();
        iter.next();
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_into_iter_yields_owned_entries() {
        let mut map: ChainedMap<String, usize> = ChainedMap::new();
        map.extend((0..30).map(|i| (i.to_string(), i)));

        let mut entries: Vec<_> = map.into_iter().collect();
        entries.sort_by_key(|(_, v)| *v);
        assert_eq!(entries.len(), 30);
        assert!(entries.iter().all(|(k, v)| *k == v.to_string()));
    }

    #[test]
    fn test_empty_map_iterates_nothing() {
        let map: ChainedMap<u8, u8> = ChainedMap::new();
        assert_eq!(map.iter().next(), None);
        assert_eq!((&map).into_iter().len(), 0);
        assert_eq!(map.into_iter().next(), None);
    }
}
