//! Fixed-capacity buckets and their overflow chains

use std::{borrow::Borrow, fmt, mem};

/// Number of key-value slots in a single bucket
pub const SLOTS: usize = 4;

/// A bucket holding up to [`SLOTS`] key-value pairs.
///
/// Slots fill from the front, so `slots[..len]` are always occupied. Once a bucket is full,
/// further entries go to an overflow bucket owned through `next`; the home bucket together with
/// its overflow buckets forms a chain.
pub(crate) struct Bucket<K, V> {
    /// The key-value pairs in insertion order
    slots: [Option<(K, V)>; SLOTS],
    /// Number of occupied slots
    len: usize,
    /// The next overflow bucket of the chain, if any
    next: Option<Box<Bucket<K, V>>>,
}

impl<K, V> Bucket<K, V> {
    /// Creates an empty bucket without an overflow link
    pub(crate) const fn new() -> Self {
        Self { slots: [const { None }; SLOTS], len: 0, next: None }
    }

    /// The next overflow bucket, if any
    pub(crate) fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }

    /// Number of occupied slots in this bucket alone
    #[cfg(test)]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns the pair stored in `slot`
    pub(crate) fn entry(&self, slot: usize) -> Option<(&K, &V)> {
        self.slots.get(slot)?.as_ref().map(|(k, v)| (k, v))
    }

    /// Stores a pair in the first free slot of this bucket, handing it back if the bucket is full
    fn try_push(&mut self, entry: (K, V)) -> Result<(), (K, V)> {
        match self.slots.get_mut(self.len) {
            Some(slot) => {
                *slot = Some(entry);
                self.len = self.len.saturating_add(1);
                Ok(())
            }
            None => Err(entry),
        }
    }

    /// Iterates over the pairs of this bucket alone, in slot order
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.slots.iter().flatten().map(|(k, v)| (k, v))
    }

    /// Iterates over this bucket and all of its overflow buckets
    pub(crate) fn chain(&self) -> Chain<'_, K, V> {
        Chain { next: Some(self) }
    }

    /// Number of buckets in the chain, including this one
    pub(crate) fn chain_len(&self) -> usize {
        self.chain().count()
    }

    /// Walks the chain and returns the value paired with `key`
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.chain()
            .flat_map(|bucket| bucket.slots.iter().flatten())
            .find(|(k, _)| <K as Borrow<Q>>::borrow(k) == key)
            .map(|(_, v)| v)
    }

    /// Stores a pair in the first bucket of the chain with a free slot.
    ///
    /// If every bucket is full, a new overflow bucket is linked to the tail. Returns true when
    /// that happened. No duplicate check is done here.
    pub(crate) fn insert(&mut self, key: K, value: V) -> bool {
        let mut bucket = self;
        let mut entry = (key, value);
        let mut allocated = false;

        loop {
            match bucket.try_push(entry) {
                Ok(()) => return allocated,
                Err(rejected) => {
                    entry = rejected;
                    allocated = bucket.next.is_none();
                    bucket = &mut **bucket.next.get_or_insert_with(|| Box::new(Self::new()));
                }
            }
        }
    }

    /// Consumes the chain and returns every stored pair
    pub(crate) fn into_entries(mut self) -> Vec<(K, V)> {
        let mut entries = Vec::with_capacity(SLOTS);
        let mut next = self.take_entries(&mut entries);

        while let Some(mut bucket) = next {
            next = bucket.take_entries(&mut entries);
        }

        entries
    }

    /// Moves this bucket's pairs into `out` and detaches the overflow link
    fn take_entries(&mut self, out: &mut Vec<(K, V)>) -> Option<Box<Self>> {
        out.extend(self.slots.iter_mut().filter_map(Option::take));
        self.len = 0;
        self.next.take()
    }
}

impl<K: Clone, V: Clone> Clone for Bucket<K, V> {
    // Copies the chain bucket by bucket, appending each copy to the tail
    fn clone(&self) -> Self {
        let mut head = Self { slots: self.slots.clone(), len: self.len, next: None };
        let mut tail = &mut head;

        for bucket in self.chain().skip(1) {
            let copy = Self { slots: bucket.slots.clone(), len: bucket.len, next: None };
            tail = &mut **tail.next.insert(Box::new(copy));
        }

        head
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Bucket<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.chain().map(|bucket| &bucket.slots)).finish()
    }
}

impl<K, V> Drop for Bucket<K, V> {
    // Unlink iteratively so that long overflow chains don't recurse on drop
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut bucket) = next {
            next = mem::take(&mut bucket.next);
        }
    }
}

/// Iterator over the buckets of a chain
#[derive(Debug, Clone)]
pub(crate) struct Chain<'a, K, V> {
    /// The bucket to yield next
    next: Option<&'a Bucket<K, V>>,
}

impl<'a, K, V> Iterator for Chain<'a, K, V> {
    type Item = &'a Bucket<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let bucket = self.next?;
        self.next = bucket.next();
        Some(bucket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_insert_fills_home_bucket_first() {
        let mut bucket = Bucket::new();
        for i in 0..SLOTS {
            assert!(!bucket.insert(i, i * 10));
        }

        assert_eq!(bucket.iter().count(), SLOTS);
        assert_eq!(bucket.chain_len(), 1);
        assert_eq!(bucket.entry(0), Some((&0, &0)));
        assert_eq!(bucket.entry(SLOTS), None);
    }

    #[test]
    fn test_insert_links_overflow_bucket() {
        let mut bucket = Bucket::new();
        for i in 0..SLOTS {
            bucket.insert(i, i);
        }

        assert!(bucket.insert(100, 100));
        assert_eq!(bucket.chain_len(), 2);
        assert_eq!(bucket.next().map(|overflow| overflow.iter().count()), Some(1));

        // the overflow bucket still has room, so no new link
        assert!(!bucket.insert(101, 101));
        assert_eq!(bucket.chain_len(), 2);
    }

    #[test]
    fn test_find_walks_chain() {
        let mut bucket = Bucket::new();
        for i in 0..3 * SLOTS {
            bucket.insert(i.to_string(), i);
        }

        assert_eq!(bucket.chain_len(), 3);
        assert_eq!(bucket.find("0"), Some(&0));
        assert_eq!(bucket.find("11"), Some(&11));
        assert_eq!(bucket.find("12"), None);
    }

    #[test]
    fn test_find_returns_first_match_in_chain_order() {
        let mut bucket = Bucket::new();
        bucket.insert("a", 1);
        bucket.insert("a", 2);

        assert_eq!(bucket.find("a"), Some(&1));
    }

    #[test]
    fn test_into_entries_drains_whole_chain() {
        let mut bucket = Bucket::new();
        for i in 0..10 {
            bucket.insert(i, i * i);
        }

        let mut entries = bucket.into_entries();
        entries.sort_unstable();

        assert_eq!(entries, (0..10).map(|i| (i, i * i)).collect::<Vec<_>>());
    }

    /// Builds a chain of `buckets` overflow buckets behind an empty head, one key each
    fn long_chain(buckets: u32) -> Bucket<u32, ()> {
        let mut head = Bucket::new();
        for key in 0..buckets {
            let mut bucket = Bucket::new();
            bucket.insert(key, ());
            bucket.next = Some(Box::new(head));
            head = bucket;
        }
        head
    }

    #[test]
    fn test_long_chain_drops() {
        let head = long_chain(100_000);

        assert_eq!(head.chain_len(), 100_001);
        drop(head);
    }

    #[test]
    fn test_long_chain_clones() {
        let head = long_chain(100_000);
        let copy = head.clone();

        assert_eq!(copy.chain_len(), 100_001);
        assert_eq!(copy.find(&0), Some(&()));
        assert_eq!(copy.find(&99_999), Some(&()));
        assert_eq!(copy.find(&100_000), None);
    }

    #[test]
    fn test_long_chain_formats() {
        let head = long_chain(100_000);
        let printed = format!("{head:?}");

        assert!(printed.starts_with("[[Some((99999, ())), None, None, None], "));
        assert!(printed.ends_with("[None, None, None, None]]"));
        assert_eq!(printed.matches("Some(").count(), 100_000);
    }
}
