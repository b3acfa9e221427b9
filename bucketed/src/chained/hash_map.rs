//! Implements [`HashMap`] for [`ChainedMap`].
use super::ChainedMap;
use bucketed_core::{HashMap, Hasher};

impl<K: Eq, V, H: Hasher<K>> HashMap<K, V, H> for ChainedMap<K, V, H> {
    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        ChainedMap::get(self, key)
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        ChainedMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        ChainedMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        ChainedMap::remove(self, key)
    }

    fn len(&self) -> usize {
        ChainedMap::len(self)
    }

    fn is_empty(&self) -> bool {
        ChainedMap::is_empty(self)
    }

    fn num_buckets(&self) -> usize {
        ChainedMap::num_buckets(self)
    }

    fn load_factor(&self) -> f64 {
        ChainedMap::load_factor(self)
    }

    fn num_collisions(&self) -> usize {
        ChainedMap::num_collisions(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;
    use crate::hashing::hashers::{MSPHasher, StdHasher};
    use bucketed_testing::{bucket_uniformity, generate_map_tests, Generate, StringParams};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn factory<K: Eq, V, H: Hasher<K>>() -> ChainedMap<K, V, H> {
        ChainedMap::new()
    }

    generate_map_tests!(ChainedMap, MSPHasher, factory);

    /// Fills a map whose table never grows with `keys` under 32 different seeds and counts the
    /// seeds for which the bucket sizes pass a chi-square uniformity test.
    fn count_uniform_seeds<K: Eq + Clone, H: Hasher<K>>(keys: &[K]) -> usize {
        const NUM_BUCKETS: usize = 1024;

        (0..32)
            .filter(|&seed| {
                let config = MapConfig::default()
                    .with_initial_num_buckets(NUM_BUCKETS)
                    .with_max_load_factor(keys.len() as f64)
                    .with_seed(seed);
                let mut map: ChainedMap<K, (), H> = ChainedMap::with_config(config).unwrap();
                map.extend(keys.iter().cloned().map(|k| (k, ())));
                assert_eq!(map.num_buckets(), NUM_BUCKETS);

                let statistic = bucket_uniformity(map.table.buckets().iter().map(|b| b.len()));
                statistic.p_value > 0.01
            })
            .count()
    }

    #[test]
    #[cfg_attr(not(feature = "_slow-tests"), ignore)]
    fn test_sequential_keys_spread_uniformly() {
        let keys: Vec<u64> = (0..1 << 15).collect();
        assert!(count_uniform_seeds::<_, MSPHasher<u64>>(&keys) >= 28);
        assert!(count_uniform_seeds::<_, StdHasher<u64>>(&keys) >= 28);
    }

    #[test]
    #[cfg_attr(not(feature = "_slow-tests"), ignore)]
    fn test_string_keys_spread_uniformly() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let keys = String::generate_many(&mut rng, &StringParams::new(1, 16), 1 << 15);
        assert!(count_uniform_seeds::<_, MSPHasher<String>>(&keys) >= 28);
        assert!(count_uniform_seeds::<_, StdHasher<String>>(&keys) >= 28);
    }

    mod std_hasher {
        use super::factory;
        use crate::chained::ChainedMap;
        use crate::hashing::hashers::StdHasher;
        use bucketed_testing::generate_map_tests;

        generate_map_tests!(ChainedMap, StdHasher, factory);
    }

    #[cfg(feature = "xxh3")]
    mod xxh3_hasher {
        use super::factory;
        use crate::chained::ChainedMap;
        use crate::hashing::hashers::XXH3Hasher;
        use bucketed_testing::generate_map_tests;

        generate_map_tests!(ChainedMap, XXH3Hasher, factory);
    }
}
