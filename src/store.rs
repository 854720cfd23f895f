//! The physical table of bucket chains

use std::{mem, slice};

use crate::bucket::Bucket;

/// An indexable, append-only sequence of bucket chains.
///
/// Slot `i` owns the chain whose home bucket is `i`. The store only grows, by one slot per
/// split. Indices outside `0..len()` are a programming error and panic.
#[derive(Debug, Clone)]
pub(crate) struct BucketStore<K, V> {
    /// Chain heads, one per home bucket
    chains: Vec<Bucket<K, V>>,
}

impl<K, V> BucketStore<K, V> {
    /// Creates a store with `home_buckets` empty chains
    pub(crate) fn new(home_buckets: usize) -> Self {
        Self { chains: (0..home_buckets).map(|_| Bucket::new()).collect() }
    }

    /// Number of home buckets
    pub(crate) fn len(&self) -> usize {
        self.chains.len()
    }

    /// Returns the chain head at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[allow(clippy::indexing_slicing)]
    pub(crate) fn get(&self, index: usize) -> &Bucket<K, V> {
        &self.chains[index]
    }

    /// Returns the chain head at `index` for modification
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[allow(clippy::indexing_slicing)]
    pub(crate) fn get_mut(&mut self, index: usize) -> &mut Bucket<K, V> {
        &mut self.chains[index]
    }

    /// Appends a chain, growing the store by one slot
    pub(crate) fn append(&mut self, bucket: Bucket<K, V>) {
        self.chains.push(bucket);
    }

    /// Swaps the chain at `index` for `bucket` and returns the previous chain
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub(crate) fn replace(&mut self, index: usize, bucket: Bucket<K, V>) -> Bucket<K, V> {
        mem::replace(self.get_mut(index), bucket)
    }

    /// Iterates over the chain heads in index order
    pub(crate) fn iter(&self) -> slice::Iter<'_, Bucket<K, V>> {
        self.chains.iter()
    }
}
