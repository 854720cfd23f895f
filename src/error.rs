//! Errors reported by structural verification

/// A violated structural invariant of a [`crate::LinHashMap`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The physical bucket count differs from `mod1 + split_pointer`
    #[error("table holds {actual} home buckets, growth state expects {expected}")]
    BucketCountMismatch {
        /// Home buckets according to the growth state
        expected: usize,
        /// Home buckets actually allocated
        actual: usize,
    },

    /// A key is stored in a chain it does not address to
    #[error("key stored in bucket {bucket} resolves to bucket {expected}")]
    MisplacedKey {
        /// Bucket holding the key
        bucket: usize,
        /// Bucket the key resolves to
        expected: usize,
    },

    /// A key occurs more than once in a chain
    #[error("bucket {bucket} holds a duplicate key")]
    DuplicateKey {
        /// Bucket holding the duplicate
        bucket: usize,
    },

    /// The number of stored pairs differs from the key counter
    #[error("found {counted} stored keys, the key counter says {recorded}")]
    KeyCountMismatch {
        /// Pairs found by walking every chain
        counted: usize,
        /// Value of the key counter
        recorded: usize,
    },

    /// The growth state is inconsistent with itself
    #[error("inconsistent growth state: mod1 = {mod1}, mod2 = {mod2}, split pointer = {split_pointer}")]
    GrowthState {
        /// Coarse modulus
        mod1: usize,
        /// Fine modulus
        mod2: usize,
        /// Split pointer
        split_pointer: usize,
    },
}

/// Result type of verification
pub type Result<T> = std::result::Result<T, Error>;
