//! Standard trait implementations for [`ChainedMap`].
use super::ChainedMap;
use bucketed_core::Hasher;

impl<K, V, H> PartialEq for ChainedMap<K, V, H>
where
    K: Eq,
    V: PartialEq,
    H: Hasher<K>,
{
    /// Maps are equal when they hold the same keys with equal values, regardless of their
    /// hashers and bucket layouts.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|v| v == value))
    }
}

impl<K, V, H> Eq for ChainedMap<K, V, H>
where
    K: Eq,
    V: Eq,
    H: Hasher<K>,
{
}

impl<K: Eq, V, H: Hasher<K>> FromIterator<(K, V)> for ChainedMap<K, V, H> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Eq, V, H: Hasher<K>> Extend<(K, V)> for ChainedMap<K, V, H> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;

    #[test]
    fn test_equality_ignores_layout() {
        let a: ChainedMap<u32, u32> = (0..100).map(|i| (i, i)).collect();

        let config = MapConfig::default()
            .with_initial_num_buckets(1000)
            .with_seed(42);
        let mut b: ChainedMap<u32, u32> = ChainedMap::with_config(config).unwrap();
        b.extend((0..100).rev().map(|i| (i, i)));

        assert_ne!(a.num_buckets(), b.num_buckets());
        assert_eq!(a, b);

        b.insert(0, 1);
        assert_ne!(a, b);
        b.remove(&0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_iter_keeps_last_value() {
        let map: ChainedMap<&str, i32> = [("x", 1), ("y", 2), ("x", 3)].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&"x"), Some(&3));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a: ChainedMap<String, u8> = ChainedMap::new();
        a.insert("a".to_string(), 1);
        let b = a.clone();
        a.insert("b".to_string(), 2);
        assert_eq!(b.len(), 1);
        assert_eq!(b.get(&"a".to_string()), Some(&1));
    }

    #[test]
    fn test_debug_formats_as_map() {
        let mut map: ChainedMap<u8, &str> = ChainedMap::new();
        map.insert(1, "one");
        assert_eq!(format!("{map:?}"), r#"{1: "one"}"#);
    }
}
