//! Incremental bucket splitting

use std::hash::Hash;

use crate::{
    bucket::Bucket,
    growth::GrowthState,
    hasher::{hash_key, resolve_index},
    store::BucketStore,
};

/// Owns the growth state and splits one home bucket at a time.
#[derive(Debug, Clone, Default)]
pub(crate) struct SplitController {
    /// Moduli and split pointer of the current round
    state: GrowthState,
    /// Total number of splits performed
    splits: usize,
}

impl SplitController {
    /// Creates a controller for a table of `home_buckets` buckets
    pub(crate) fn new(home_buckets: usize) -> Self {
        Self { state: GrowthState::new(home_buckets), splits: 0 }
    }

    /// The current growth state
    pub(crate) const fn state(&self) -> &GrowthState {
        &self.state
    }

    /// Total number of splits performed
    pub(crate) const fn splits(&self) -> usize {
        self.splits
    }

    /// Resolves the home bucket for a key hash under the current state
    pub(crate) fn resolve(&self, hash: u64) -> usize {
        resolve_index(hash, &self.state)
    }

    /// Splits the bucket under the split pointer if `keys` overload the table.
    ///
    /// At most one split happens per call, however far the load factor is past the threshold.
    /// Returns true if a split was performed.
    pub(crate) fn maybe_split<K: Hash, V>(
        &mut self,
        store: &mut BucketStore<K, V>,
        keys: usize,
    ) -> bool {
        if !self.state.is_overloaded(keys) {
            return false;
        }

        self.split(store);
        true
    }

    /// Splits the home bucket under the split pointer.
    ///
    /// A fresh bucket is appended, the target chain is swapped for an empty bucket and its
    /// entries are redistributed with the advanced split pointer, so each lands either back in
    /// the target or in the new bucket.
    fn split<K: Hash, V>(&mut self, store: &mut BucketStore<K, V>) {
        let target = self.state.split_pointer();
        debug_assert_eq!(store.len(), self.state.logical_buckets());

        store.append(Bucket::new());
        let drained = store.replace(target, Bucket::new()).into_entries();
        self.state.advance();

        let moved = drained.len();
        for (key, value) in drained {
            let index = self.resolve(hash_key(&key));
            store.get_mut(index).insert(key, value);
        }

        self.splits = self.splits.saturating_add(1);
        log::trace!(
            "Split bucket {target} into {target} and {}, redistributed {moved} entries",
            store.len().saturating_sub(1)
        );

        if self.state.close_round() {
            log::debug!(
                "Closed growth round {}, now {} home buckets",
                self.state.rounds(),
                self.state.mod1()
            );
        }
    }
}
