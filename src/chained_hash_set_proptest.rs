#![cfg(test)]

// Property tests for ChainedHashSet kept inside the crate so they sit
// next to the structure they model-check.

use crate::ChainedHashSet;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::BTreeSet;
use std::collections::HashSet;

// Pool-indexed operations to improve shrinking: indices shrink to
// earlier words, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Add(usize),
    AddAll(Vec<usize>),
    Remove(usize),
    Contains(usize),
    ContainsMiss(String),
    Clear,
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, usize, Vec<OpI>)> {
    (proptest::collection::vec("[a-z]{0,5}", 1..=8), 1usize..=16).prop_flat_map(
        |(pool, capacity)| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let op = prop_oneof![
                idx.clone().prop_map(OpI::Add),
                proptest::collection::vec(idx.clone(), 0..6).prop_map(OpI::AddAll),
                idx.clone().prop_map(OpI::Remove),
                idx.clone().prop_map(OpI::Contains),
                "[0-9]{1,4}".prop_map(OpI::ContainsMiss),
                Just(OpI::Clear),
                Just(OpI::Iterate),
            ];
            proptest::collection::vec(op, 1..60)
                .prop_map(move |ops| (pool.clone(), capacity, ops))
        },
    )
}

// Checks the distribution identities that must hold after every
// operation, whatever the hasher did:
// - occupied + empty buckets cover the table;
// - collisions equal len minus occupied buckets;
// - the longest chain is 0 exactly when the set is empty and never
//   exceeds len;
// - load factor is exactly len / capacity.
fn check_distribution<E, S>(sut: &ChainedHashSet<E, S>) -> Result<(), TestCaseError> {
    let stats = sut.distribution();
    prop_assert_eq!(stats.len, sut.len());
    prop_assert_eq!(stats.capacity, sut.capacity());
    let occupied = stats.capacity - stats.empty_buckets;
    prop_assert_eq!(stats.collisions + occupied, stats.len);
    prop_assert_eq!(stats.biggest_bucket == 0, sut.is_empty());
    prop_assert!(stats.biggest_bucket <= stats.len);
    prop_assert_eq!(stats.load_factor, stats.len as f64 / stats.capacity as f64);
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashSet.
// Invariants exercised across random operation sequences:
// - `add` reports a change exactly when the model did not hold the word;
//   `add_all` reports a change iff at least one add did.
// - `remove` reports a change exactly when the model held the word.
// - `contains` parity for pool words and for never-added probe words.
// - `len`/`is_empty` parity with the model after each op.
// - Iteration yields each stored element exactly once, every yielded
//   element satisfies `contains`, and the element set equals the model.
// - The distribution identities hold after every op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, capacity, ops) in arb_scenario()) {
        let mut sut: ChainedHashSet<String> = ChainedHashSet::with_capacity(capacity).unwrap();
        let mut model: HashSet<String> = HashSet::new();

        for op in ops {
            match op {
                OpI::Add(i) => {
                    let word = pool[i].clone();
                    let expect = model.insert(word.clone());
                    prop_assert_eq!(sut.add(word), expect);
                }
                OpI::AddAll(is) => {
                    let words: Vec<String> = is.iter().map(|&i| pool[i].clone()).collect();
                    let mut expect = false;
                    for w in &words {
                        expect |= model.insert(w.clone());
                    }
                    prop_assert_eq!(sut.add_all(words), expect);
                }
                OpI::Remove(i) => {
                    let word = &pool[i];
                    let expect = model.remove(word);
                    prop_assert_eq!(sut.remove(word.as_str()), expect);
                }
                OpI::Contains(i) => {
                    let word = &pool[i];
                    prop_assert_eq!(sut.contains(word.as_str()), model.contains(word));
                }
                OpI::ContainsMiss(probe) => {
                    // Digit-only probes can never collide with the
                    // alphabetic pool.
                    prop_assert_eq!(sut.contains(probe.as_str()), model.contains(&probe));
                }
                OpI::Clear => {
                    sut.clear();
                    model.clear();
                    prop_assert!(sut.is_empty());
                }
                OpI::Iterate => {
                    let seen: Vec<&String> = sut.iter().collect();
                    prop_assert_eq!(seen.len(), model.len());
                    for e in &seen {
                        prop_assert!(sut.contains(e.as_str()));
                    }
                    let distinct: BTreeSet<&String> = seen.iter().copied().collect();
                    prop_assert_eq!(distinct.len(), seen.len());
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            check_distribution(&sut)?;
        }

        // Final parity: the stored element set equals the model, and
        // contains_all agrees with per-word contains over the pool.
        prop_assert_eq!(
            sut.contains_all(pool.iter().map(String::as_str)),
            pool.iter().all(|w| model.contains(w))
        );
        let stored: BTreeSet<String> = sut.iter().cloned().collect();
        let expected: BTreeSet<String> = model.into_iter().collect();
        prop_assert_eq!(stored, expected);
    }
}
