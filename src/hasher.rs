//! Two-resolution address functions

use std::hash::{DefaultHasher, Hash, Hasher};

use crate::growth::GrowthState;

/// Computes the fixed hash of a key
pub(crate) fn hash_key<Q: Hash + ?Sized>(key: &Q) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Reduces a hash into `0..modulus`
#[allow(clippy::cast_possible_truncation)]
fn reduce(hash: u64, modulus: usize) -> usize {
    // the remainder is below `modulus`, so it always fits back into a usize
    hash.checked_rem(modulus as u64).map_or(0, |index| index as usize)
}

/// Coarse address, `hash mod mod1`
pub(crate) fn low(hash: u64, state: &GrowthState) -> usize {
    reduce(hash, state.mod1())
}

/// Fine address, `hash mod mod2`
pub(crate) fn high(hash: u64, state: &GrowthState) -> usize {
    reduce(hash, state.mod2())
}

/// Resolves the home bucket of a hash.
///
/// Buckets below the split pointer have already split this round, so keys landing there are
/// readdressed with the fine function, which picks either the old bucket or its new sibling.
pub(crate) fn resolve_index(hash: u64, state: &GrowthState) -> usize {
    let index = low(hash, state);
    if index < state.split_pointer() { high(hash, state) } else { index }
}
