use std::collections::HashMap;

use linhash::{HashMapExtensions, LinHashMap, SLOTS};
use rand::{Rng, SeedableRng, rngs::StdRng};
use test_log::test;

const SEED: u64 = 42;

#[test]
fn odd_keys_scenario() {
    let mut map = LinHashMap::new();
    for key in (1..=29_u32).step_by(2) {
        assert_eq!(map.put(key, key * key), None);
    }

    for key in (1..=29_u32).step_by(2) {
        assert_eq!(map.get(&key), Some(&(key * key)), "key {key}");
    }
    for key in (0..=30_u32).step_by(2) {
        assert_eq!(map.get(&key), None, "key {key}");
    }

    assert!(map.splits() >= 1);
    assert_eq!(map.len(), 15);
    assert_eq!(map.accesses(), 15);
    assert_eq!(map.verify(), Ok(()));
}

#[test]
fn size_progression_closes_rounds() {
    let mut map = LinHashMap::new();
    let mut sizes = vec![map.size()];
    let mut key = 0_u64;

    // run until the second round is closed
    while map.growth().rounds() < 2 {
        let splits = map.splits();
        map.put(key, ());
        key += 1;
        if map.splits() > splits {
            sizes.push(map.size());
        }
    }

    // every split adds one bucket of SLOTS slots; 4 splits, then 8
    let expected: Vec<usize> = (4..=16).map(|buckets| SLOTS * buckets).collect();
    assert_eq!(sizes, expected);
    assert_eq!(map.growth().mod1(), 16);
    assert_eq!(map.growth().mod2(), 32);
    assert_eq!(map.growth().split_pointer(), 0);
}

#[test]
fn split_happens_exactly_at_threshold_crossing() {
    let mut map = LinHashMap::new();

    for key in 0..1_000_u32 {
        let size = map.size();
        let splits = map.splits();
        map.put(key, key);

        let crossed = map.len() * 2 > size;
        assert_eq!(map.splits() - splits, usize::from(crossed), "put #{key}");
    }
}

#[test]
fn values_survive_splits() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut reference = HashMap::new();
    let mut map = LinHashMap::new();
    let mut checked_at = 0;

    for _ in 0..5_000 {
        let key: u32 = rng.random_range(0..20_000);
        let value: u64 = rng.random();
        reference.entry(key).or_insert(value);
        map.put(key, value);

        // full sweep after every 64th split
        if map.splits() != checked_at && map.splits() % 64 == 0 {
            checked_at = map.splits();
            for (key, value) in &reference {
                assert_eq!(map.get(key), Some(value), "after {checked_at} splits");
            }
        }
    }

    assert!(checked_at >= 64);

    assert_eq!(map.len(), reference.len());
    assert_eq!(map.entries(), reference.iter().collect::<HashMap<_, _>>());
    assert_eq!(map.verify(), Ok(()));
}

#[test]
fn string_keys_lookup_by_str() {
    let map: LinHashMap<String, usize> = (0..200).map(|i| (format!("key-{i}"), i)).collect();

    assert_eq!(map.get("key-0"), Some(&0));
    assert_eq!(map.get("key-199"), Some(&199));
    assert_eq!(map.get("key-200"), None);
    assert!(map.contains_key("key-42"));
    assert_eq!(map.keys().len(), 200);
}
