//! Occupancy snapshot of a table

use std::fmt;

/// Occupancy figures of a [`crate::LinHashMap`] at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableStats {
    /// Number of home buckets
    pub home_buckets: usize,
    /// Number of overflow buckets across all chains
    pub overflow_buckets: usize,
    /// Longest chain, in buckets
    pub longest_chain: usize,
    /// Number of stored keys
    pub keys: usize,
    /// Slot capacity of the home buckets, as reported by `size()`
    pub capacity: usize,
    /// Splits performed so far
    pub splits: usize,
    /// Number of `put` calls so far
    pub accesses: usize,
}

impl TableStats {
    /// Stored keys over home bucket capacity
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.keys as f64 / self.capacity as f64
    }

    /// Average number of `put` calls per key in `total`
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_accesses(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.accesses as f64 / total as f64
    }
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} keys in {} home buckets (+{} overflow, longest chain {}), capacity {}, load {:.2}, {} splits",
            self.keys,
            self.home_buckets,
            self.overflow_buckets,
            self.longest_chain,
            self.capacity,
            self.load_factor(),
            self.splits
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_load_factor() {
        let stats = TableStats { keys: 8, capacity: 16, ..TableStats::default() };
        assert!((stats.load_factor() - 0.5).abs() < f64::EPSILON);

        assert!(TableStats::default().load_factor().abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_accesses() {
        let stats = TableStats { accesses: 15, ..TableStats::default() };

        assert!((stats.average_accesses(30) - 0.5).abs() < f64::EPSILON);
        assert!(stats.average_accesses(0).abs() < f64::EPSILON);
    }
}
