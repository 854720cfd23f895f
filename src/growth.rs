//! Growth state of a linear hash table

use crate::bucket::SLOTS;

/// Number of home buckets a table starts with
pub const INITIAL_HOME_BUCKETS: usize = 4;

/// Progress of the table through its growth rounds.
///
/// During a round the split pointer walks from `0` to `mod1`, splitting one home bucket per
/// step. Once it reaches `mod1` the round is closed: the pointer resets and both moduli double.
/// In aggregate a round is a full doubling of the table, spread over `mod1` splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrowthState {
    /// Number of home buckets at the start of the current round
    mod1: usize,
    /// Address space size at the end of the current round, always `2 * mod1`
    mod2: usize,
    /// Next home bucket scheduled to split
    split_pointer: usize,
    /// Number of closed rounds
    rounds: usize,
}

impl Default for GrowthState {
    fn default() -> Self {
        Self::new(INITIAL_HOME_BUCKETS)
    }
}

impl GrowthState {
    /// Creates the state of a fresh table with `home_buckets` buckets (at least one)
    #[must_use]
    pub fn new(home_buckets: usize) -> Self {
        let mod1 = home_buckets.max(1);
        Self { mod1, mod2: mod1.saturating_mul(2), split_pointer: 0, rounds: 0 }
    }

    /// Modulus of the coarse address function
    #[must_use]
    pub const fn mod1(&self) -> usize {
        self.mod1
    }

    /// Modulus of the fine address function
    #[must_use]
    pub const fn mod2(&self) -> usize {
        self.mod2
    }

    /// Index of the next home bucket to split
    #[must_use]
    pub const fn split_pointer(&self) -> usize {
        self.split_pointer
    }

    /// Number of growth rounds closed so far
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Number of home buckets, `mod1 + split_pointer`
    #[must_use]
    pub const fn logical_buckets(&self) -> usize {
        self.mod1.saturating_add(self.split_pointer)
    }

    /// Slot capacity of the home buckets, the denominator of the load factor
    #[must_use]
    pub const fn capacity(&self) -> usize {
        SLOTS.saturating_mul(self.logical_buckets())
    }

    /// Returns true if `keys` stored keys put the load factor above one half
    #[must_use]
    pub const fn is_overloaded(&self, keys: usize) -> bool {
        keys.saturating_mul(2) > self.capacity()
    }

    /// Moves the split pointer past the bucket that was just split
    pub(crate) const fn advance(&mut self) {
        self.split_pointer = self.split_pointer.saturating_add(1);
    }

    /// Starts the next round if every home bucket of this one has split.
    ///
    /// Returns true when a new round was started.
    pub(crate) const fn close_round(&mut self) -> bool {
        if self.split_pointer < self.mod1 {
            return false;
        }

        self.split_pointer = 0;
        self.mod1 = self.mod2;
        self.mod2 = self.mod1.saturating_mul(2);
        self.rounds = self.rounds.saturating_add(1);
        true
    }
}
