//! Utility functions and traits for `LinHashMap`

use crate::LinHashMap;
use std::hash::Hash;

/// Extension trait for map implementations that provides additional utility methods
pub trait HashMapExtensions<K, V> {
    /// Returns the keys of the hash map as a Vec
    fn keys(&self) -> Vec<K>;

    /// Returns the values of the hash map as a Vec
    fn values(&self) -> Vec<V>;

    /// Returns the keys that are not stored in the map, in the order given
    fn missing<'k, I>(&self, keys: I) -> Vec<&'k K>
    where
        I: IntoIterator<Item = &'k K>,
        K: 'k;
}

impl<K, V> HashMapExtensions<K, V> for LinHashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn missing<'k, I>(&self, keys: I) -> Vec<&'k K>
    where
        I: IntoIterator<Item = &'k K>,
        K: 'k,
    {
        keys.into_iter().filter(|key| !self.contains_key(*key)).collect()
    }
}

/// Creates a `LinHashMap` from an iterator of key-value pairs.
///
/// Later pairs with an already seen key are dropped.
pub fn from_iter<K, V, I>(iter: I) -> LinHashMap<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    let mut map = LinHashMap::new();

    for (key, value) in iter {
        map.put(key, value);
    }

    map
}
