use std::{
    borrow::Borrow,
    collections::HashMap,
    fmt,
    hash::Hash,
    slice,
};

use crate::{
    bucket::Bucket,
    growth::{GrowthState, INITIAL_HOME_BUCKETS},
    hasher::hash_key,
    split::SplitController,
    stats::TableStats,
    store::BucketStore,
};

/// A hash map that grows by Linear Hashing.
///
/// Keys live in fixed-size buckets with overflow chains. Instead of doubling all at once, the
/// table splits one home bucket whenever an insert pushes the load factor above one half, so no
/// single insert rehashes more than one chain.
///
/// `put` is insert-if-absent: putting a key that is already stored keeps the old value.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct LinHashMap<K, V> {
    /// The bucket chains, one per home bucket
    store: BucketStore<K, V>,
    /// Growth state and split procedure
    controller: SplitController,
    /// Number of distinct keys stored
    key_count: usize,
    /// Number of `put` calls, for instrumentation
    accesses: usize,
}

impl<K, V> Default for LinHashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for LinHashMap<K, V>
where
    K: Eq + Hash,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for LinHashMap<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> LinHashMap<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty map with four home buckets
    #[must_use]
    pub fn new() -> Self {
        Self::with_home_buckets(INITIAL_HOME_BUCKETS)
    }

    /// Creates an empty map with the given number of home buckets (at least one)
    #[must_use]
    pub fn with_home_buckets(home_buckets: usize) -> Self {
        let controller = SplitController::new(home_buckets);
        let store = BucketStore::new(controller.state().logical_buckets());

        Self { store, controller, key_count: 0, accesses: 0 }
    }

    /// Resolves the home bucket of a key
    fn home_index<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        self.controller.resolve(hash_key(key))
    }

    /// Retrieve the value stored for a key
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store.get(self.home_index(key)).find(key)
    }

    /// Returns true if the map holds the key
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Inserts a key-value pair unless the key is already present.
    ///
    /// A duplicate key is rejected and the stored value is left untouched. Either way `None` is
    /// returned; use [`Self::contains_key`] to tell the cases apart. A successful insert that
    /// pushes the load factor above one half splits exactly one home bucket.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.accesses = self.accesses.saturating_add(1);

        let index = self.home_index(&key);
        let chain = self.store.get_mut(index);
        if chain.find(&key).is_some() {
            log::trace!("Rejected duplicate key in bucket {index}");
            return None;
        }

        if chain.insert(key, value) {
            log::debug!("Allocated overflow bucket for bucket {index}");
        }
        self.key_count = self.key_count.saturating_add(1);

        self.controller.maybe_split(&mut self.store, self.key_count);
        None
    }
}

impl<K, V> LinHashMap<K, V> {
    /// Slot capacity of the home buckets, `SLOTS * (mod1 + split_pointer)`.
    ///
    /// This is the denominator of the load factor, not the number of stored keys; see
    /// [`Self::len`] for that.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.controller.state().capacity()
    }

    /// Returns the number of stored keys
    #[must_use]
    pub const fn len(&self) -> usize {
        self.key_count
    }

    /// Returns true if no key is stored
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.key_count == 0
    }

    /// Returns the current load factor, stored keys over [`Self::size`]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.key_count as f64 / self.size() as f64
    }

    /// Number of `put` calls so far
    #[must_use]
    pub const fn accesses(&self) -> usize {
        self.accesses
    }

    /// Number of bucket splits so far
    #[must_use]
    pub const fn splits(&self) -> usize {
        self.controller.splits()
    }

    /// The current growth state
    #[must_use]
    pub const fn growth(&self) -> GrowthState {
        *self.controller.state()
    }

    /// Returns an iterator over the key-value pairs, in bucket order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { chains: self.store.iter(), bucket: None, slot: 0 }
    }

    /// Returns every stored pair, keyed by the stored key
    #[must_use]
    pub fn entries(&self) -> HashMap<&K, &V>
    where
        K: Eq + Hash,
    {
        self.iter().collect()
    }

    /// Collects occupancy figures by walking every chain
    #[must_use]
    pub fn stats(&self) -> TableStats {
        let (overflow_buckets, longest_chain) = self
            .store
            .iter()
            .map(Bucket::chain_len)
            .fold((0, 0), |(overflow, longest): (usize, usize), len| {
                (overflow.saturating_add(len.saturating_sub(1)), longest.max(len))
            });

        TableStats {
            home_buckets: self.store.len(),
            overflow_buckets,
            longest_chain,
            keys: self.key_count,
            capacity: self.size(),
            splits: self.splits(),
            accesses: self.accesses,
        }
    }

    /// The bucket chains
    pub(crate) const fn store(&self) -> &BucketStore<K, V> {
        &self.store
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for LinHashMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hash Table (Linear Hashing)")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(f, "The hash table has {} home buckets", self.store.len())?;
        for (index, chain) in self.store.iter().enumerate() {
            for (key, value) in chain.chain().flat_map(Bucket::iter) {
                writeln!(f, "At hash index {index} the bucket holds {key} , {value}")?;
            }
        }
        write!(f, "-------------------------------------------")
    }
}

impl<'a, K, V> IntoIterator for &'a LinHashMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the key-value pairs of a [`LinHashMap`]
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Remaining chain heads
    chains: slice::Iter<'a, Bucket<K, V>>,
    /// Bucket currently being walked
    bucket: Option<&'a Bucket<K, V>>,
    /// Next slot of the current bucket
    slot: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(bucket) = self.bucket {
                if let Some(entry) = bucket.entry(self.slot) {
                    self.slot = self.slot.saturating_add(1);
                    return Some(entry);
                }
                self.bucket = bucket.next();
            } else {
                self.bucket = Some(self.chains.next()?);
            }
            self.slot = 0;
        }
    }
}
