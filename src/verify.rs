//! Structural verification of a table

use std::hash::Hash;

use crate::{
    LinHashMap,
    bucket::Bucket,
    error::{Error, Result},
    hasher::{hash_key, resolve_index},
};

impl<K, V> LinHashMap<K, V>
where
    K: Eq + Hash,
{
    /// Walks every chain and checks the table's invariants.
    ///
    /// Checked are the home bucket count against the growth state, that every key resolves to
    /// the chain holding it, that no key is stored twice, and the key counter.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn verify(&self) -> Result<()> {
        let growth = self.growth();
        if growth.mod2() != growth.mod1().saturating_mul(2) ||
            growth.split_pointer() >= growth.mod1()
        {
            return Err(Error::GrowthState {
                mod1: growth.mod1(),
                mod2: growth.mod2(),
                split_pointer: growth.split_pointer(),
            });
        }

        let store = self.store();
        if store.len() != growth.logical_buckets() {
            return Err(Error::BucketCountMismatch {
                expected: growth.logical_buckets(),
                actual: store.len(),
            });
        }

        let mut counted: usize = 0;
        for (bucket, chain) in store.iter().enumerate() {
            let keys: Vec<&K> = chain.chain().flat_map(Bucket::iter).map(|(k, _)| k).collect();

            for (position, key) in keys.iter().enumerate() {
                let expected = resolve_index(hash_key(*key), &growth);
                if expected != bucket {
                    return Err(Error::MisplacedKey { bucket, expected });
                }
                if keys.iter().skip(position.saturating_add(1)).any(|other| other == key) {
                    return Err(Error::DuplicateKey { bucket });
                }
            }

            counted = counted.saturating_add(keys.len());
        }

        if counted != self.len() {
            return Err(Error::KeyCountMismatch { counted, recorded: self.len() });
        }

        log::trace!("Verified {counted} keys in {} home buckets", store.len());
        Ok(())
    }
}
