//! Utilities for testing map implementations.
use crate::Generate;
use bucketed_core::{HashMap, Hasher};
use rand::Rng;
use std::collections::HashMap as StdHashMap;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Generates entries with unique keys suitable for filling a map.
pub fn generate_map_data<R, K, V>(
    rng: &mut R,
    size: usize,
    key_params: &K::GenerateParams,
    val_params: &V::GenerateParams,
) -> Vec<(K, V)>
where
    R: Rng,
    K: Eq + Hash + Clone + Generate<R>,
    V: Generate<R>,
{
    K::generate_many(rng, key_params, size)
        .into_iter()
        .map(|key| (key, V::generate(rng, val_params)))
        .collect()
}

/// Builds a map with `factory` and inserts `data` into it through [`HashMap::insert`].
pub fn test_build<K, V, H, M, F>(factory: F, data: &[(K, V)]) -> M
where
    K: Eq + Clone + Debug,
    V: Clone + Debug,
    H: Hasher<K>,
    M: HashMap<K, V, H>,
    F: Fn() -> M,
{
    let mut map = factory();
    assert!(map.is_empty());

    for (i, (key, val)) in data.iter().enumerate() {
        assert!(
            map.insert(key.clone(), val.clone()).is_none(),
            "Key {key:?} was reported as present"
        );
        assert_eq!(map.len(), i + 1);
    }
    map
}

/// Tests key retrieval for a given map holding exactly `data`.
pub fn test_get<R, K, V, H, M>(rng: &mut R, map: &M, data: &[(K, V)])
where
    R: Rng,
    K: Eq + Hash + Generate<R> + Debug,
    V: PartialEq + Debug,
    H: Hasher<K>,
    M: HashMap<K, V, H>,
{
    let keys: HashSet<&K> = data.iter().map(|(k, _)| k).collect();

    assert_eq!(map.len(), data.len());
    for (key, val) in data {
        assert_eq!(map.get(key), Some(val), "Key: {key:?}");
        assert!(map.contains_key(key), "Key: {key:?}");
    }

    let mut non_existent_keys = Vec::new();
    for _ in 0..data.len().div_ceil(3) {
        loop {
            let key = K::generate(rng, &<K as Generate<R>>::GenerateParams::default());
            if !keys.contains(&key) {
                non_existent_keys.push(key);
                break;
            }
        }
    }
    for key in non_existent_keys {
        assert_eq!(map.get(&key), None, "Key: {key:?}");
        assert!(!map.contains_key(&key), "Key: {key:?}");
    }
}

/// Tests removal of every entry of `data` from a map holding exactly `data`.
///
/// Also checks that removals never shrink the table.
pub fn test_remove<K, V, H, M>(map: &mut M, data: &[(K, V)])
where
    K: Eq + Debug,
    V: PartialEq + Debug,
    H: Hasher<K>,
    M: HashMap<K, V, H>,
{
    let num_buckets = map.num_buckets();

    for (i, (key, val)) in data.iter().enumerate() {
        assert_eq!(map.remove(key).as_ref(), Some(val), "Key: {key:?}");
        assert_eq!(map.remove(key), None, "Key: {key:?}");
        assert_eq!(map.get(key), None, "Key: {key:?}");
        assert_eq!(map.len(), data.len() - i - 1);
    }

    assert!(map.is_empty());
    assert_eq!(map.num_collisions(), 0);
    assert_eq!(map.num_buckets(), num_buckets);
}

/// A single step of a randomized map workload.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation<K, V> {
    Insert(K, V),
    Remove(K),
    Get(K),
}

/// Generates a random workload over a fixed pool of `keys`.
///
/// A small pool makes replacements and removals of present keys frequent.
pub fn generate_operations<R, K, V>(
    rng: &mut R,
    keys: &[K],
    val_params: &V::GenerateParams,
    num_ops: usize,
) -> Vec<Operation<K, V>>
where
    R: Rng,
    K: Clone,
    V: Generate<R>,
{
    assert!(!keys.is_empty(), "Key pool must not be empty");

    (0..num_ops)
        .map(|_| {
            let key = keys[rng.random_range(0..keys.len())].clone();
            match rng.random_range(0..10) {
                0..=4 => Operation::Insert(key, V::generate(rng, val_params)),
                5..=7 => Operation::Remove(key),
                _ => Operation::Get(key),
            }
        })
        .collect()
}

/// Replays `ops` against both `map` and [`std::collections::HashMap`] and compares every
/// observable result.
///
/// After each insertion the load factor must stay within `max_load_factor`.
pub fn test_against_model<K, V, H, M>(map: &mut M, ops: &[Operation<K, V>], max_load_factor: f64)
where
    K: Eq + Hash + Clone + Debug,
    V: Clone + PartialEq + Debug,
    H: Hasher<K>,
    M: HashMap<K, V, H>,
{
    let mut model: StdHashMap<K, V> = StdHashMap::new();

    for (step, op) in ops.iter().enumerate() {
        match op {
            Operation::Insert(key, val) => {
                assert_eq!(
                    map.insert(key.clone(), val.clone()),
                    model.insert(key.clone(), val.clone()),
                    "Step {step}: {op:?}"
                );
                assert!(
                    map.load_factor() <= max_load_factor,
                    "Step {step}: load factor {} exceeds {max_load_factor}",
                    map.load_factor()
                );
            }
            Operation::Remove(key) => {
                assert_eq!(map.remove(key), model.remove(key), "Step {step}: {op:?}");
            }
            Operation::Get(key) => {
                assert_eq!(map.get(key), model.get(key), "Step {step}: {op:?}");
            }
        }
        assert_eq!(map.len(), model.len(), "Step {step}: {op:?}");
        assert_eq!(map.is_empty(), model.is_empty(), "Step {step}: {op:?}");
    }

    for (key, val) in &model {
        assert_eq!(map.get(key), Some(val), "Key: {key:?}");
    }
}

/// Generates tests for a map type for integer keys.
#[macro_export]
macro_rules! generate_map_int_tests {
    ($Map:tt, $Hasher:tt, $factory:expr, $type:ty) => {
        compose_idents!(test_fn = [test_build_get_remove_map_, $type]; {
            #[test]
            fn test_fn() {
                use $crate::*;
                use rand::SeedableRng;
                use rand_chacha::ChaCha20Rng;

                let mut rng = ChaCha20Rng::seed_from_u64(42);

                let map_size: usize = if <$type>::BITS >= u16::BITS {
                    4999
                } else {
                    1_usize << (<$type>::BITS - 1)
                };

                let data = generate_map_data::<_, $type, u128>(
                    &mut rng,
                    map_size,
                    &<$type as Generate<ChaCha20Rng>>::GenerateParams::default(),
                    &<u128 as Generate<ChaCha20Rng>>::GenerateParams::default(),
                );
                let mut map = test_build::<
                    $type,
                    u128,
                    $Hasher<$type>,
                    $Map<$type, u128, $Hasher<$type>>,
                    _,
                >($factory, &data);
                test_get(&mut rng, &map, &data);
                test_remove(&mut map, &data);
            }
        });

        compose_idents!(test_fn = [test_against_model_, $type]; {
            #[test]
            fn test_fn() {
                use $crate::*;
                use rand::SeedableRng;
                use rand_chacha::ChaCha20Rng;

                let mut rng = ChaCha20Rng::seed_from_u64(42);

                let keys = <$type>::generate_many(
                    &mut rng,
                    &<$type as Generate<ChaCha20Rng>>::GenerateParams::default(),
                    64,
                );
                let ops = generate_operations::<_, $type, u128>(
                    &mut rng,
                    &keys,
                    &<u128 as Generate<ChaCha20Rng>>::GenerateParams::default(),
                    9999,
                );
                let factory = $factory;
                let mut map: $Map<$type, u128, $Hasher<$type>> = factory();
                test_against_model(&mut map, &ops, 0.75);
            }
        });
    };
}

/// Generates tests for a map type for string keys.
#[macro_export]
macro_rules! generate_map_str_tests {
    ($Map:tt, $Hasher:tt, $factory:expr) => {
        #[test]
        fn test_build_get_remove_map_str() {
            use $crate::*;
            use rand::SeedableRng;
            use rand_chacha::ChaCha20Rng;

            let mut rng = ChaCha20Rng::seed_from_u64(42);
            let data = generate_map_data::<_, String, u128>(
                &mut rng,
                4999,
                &StringParams::default(),
                &<u128 as Generate<ChaCha20Rng>>::GenerateParams::default(),
            );
            let mut map = test_build::<
                String,
                u128,
                $Hasher<String>,
                $Map<String, u128, $Hasher<String>>,
                _,
            >($factory, &data);
            test_get(&mut rng, &map, &data);
            assert_eq!(map.get(&String::new()), None);
            test_remove(&mut map, &data);
        }

        #[test]
        fn test_against_model_str() {
            use $crate::*;
            use rand::SeedableRng;
            use rand_chacha::ChaCha20Rng;

            let mut rng = ChaCha20Rng::seed_from_u64(42);
            let keys = String::generate_many(&mut rng, &StringParams::new(0, 8), 64);
            let ops = generate_operations::<_, String, u128>(
                &mut rng,
                &keys,
                &<u128 as Generate<ChaCha20Rng>>::GenerateParams::default(),
                9999,
            );
            let factory = $factory;
            let mut map: $Map<String, u128, $Hasher<String>> = factory();
            test_against_model(&mut map, &ops, 0.75);
        }
    };
}

/// Generates the full set of map tests for the given map and hasher types.
///
/// `$factory` must build an empty map with the default maximum load factor and be generic over
/// the key type.
#[macro_export]
macro_rules! generate_map_tests {
    ($Map:tt, $Hasher:tt, $factory:expr) => {
        use $crate::generate_map_int_tests;
        use $crate::generate_map_str_tests;
        use compose_idents::compose_idents;

        generate_map_int_tests!($Map, $Hasher, $factory, u8);
        generate_map_int_tests!($Map, $Hasher, $factory, i8);
        generate_map_int_tests!($Map, $Hasher, $factory, u16);
        generate_map_int_tests!($Map, $Hasher, $factory, i16);
        generate_map_int_tests!($Map, $Hasher, $factory, u32);
        generate_map_int_tests!($Map, $Hasher, $factory, i32);
        generate_map_int_tests!($Map, $Hasher, $factory, u64);
        generate_map_int_tests!($Map, $Hasher, $factory, i64);
        generate_map_int_tests!($Map, $Hasher, $factory, u128);
        generate_map_int_tests!($Map, $Hasher, $factory, i128);
        generate_map_str_tests!($Map, $Hasher, $factory);
    };
}
