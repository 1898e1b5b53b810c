//! Property tests for relation invariants
//!
//! Random add/remove sequences checked against a plain set of pairs.

use morefunc::relation::RelationStore;
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug)]
enum Op {
    Add(u8, u8),
    Remove(u8, u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..8, 0u8..8).prop_map(|(a, b)| Op::Add(a, b)),
        (0u8..8, 0u8..8).prop_map(|(a, b)| Op::Remove(a, b)),
    ]
}

proptest! {
    #[test]
    fn store_matches_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut store = RelationStore::new("a", "b");
        let mut model: HashSet<(u8, u8)> = HashSet::new();

        for op in ops {
            let before = store.len();
            match op {
                Op::Add(a, b) => {
                    let fresh = model.insert((a, b));
                    prop_assert_eq!(store.add_pair(a, b), fresh);
                    if !fresh {
                        prop_assert_eq!(store.len(), before);
                    }
                }
                Op::Remove(a, b) => {
                    let present = model.remove(&(a, b));
                    prop_assert_eq!(store.remove_pair(&a, &b), present);
                    if !present {
                        prop_assert_eq!(store.len(), before);
                    }
                }
            }

            prop_assert!(store.is_consistent());
            prop_assert_eq!(store.len(), model.len());
            prop_assert_eq!(store.index_a().pair_count(), store.index_b().pair_count());
        }

        for a in 0u8..8 {
            for b in 0u8..8 {
                let in_a = store.index_a().contains(&a, &b);
                let in_b = store.index_b().contains(&b, &a);
                prop_assert_eq!(in_a, in_b);
                prop_assert_eq!(store.contains(&a, &b), model.contains(&(a, b)));
            }
            // No key survives with an empty counterpart set.
            if let Some(set) = store.index_a().get(&a) {
                prop_assert!(!set.is_empty());
            }
        }
    }
}
