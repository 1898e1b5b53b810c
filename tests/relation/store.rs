//! Integration tests for relation storage
//!
//! Tests adding, removing, querying, and traversing pairs.

use morefunc::foundation::ErrorKind;
use morefunc::relation::{RelationStore, Side};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

// =============================================================================
// Basic Add / Remove
// =============================================================================

#[test]
fn add_then_remove_single_pair() {
    let mut store = RelationStore::new("foo", "bar");

    store.add([(1, 10)]);
    assert_eq!(store.len(), 1);
    assert!(store.contains(&1, &10));
    let expected: HashSet<i32> = [10].into_iter().collect();
    assert_eq!(store.index_a().get(&1), Some(&expected));

    store.remove([(1, 10)]);
    assert_eq!(store.len(), 0);
    assert!(!store.contains(&1, &10));
    assert!(!store.index_a().contains_key(&1));
    assert!(!store.index_b().contains_key(&10));
}

#[test]
fn initial_pairs() {
    let store = RelationStore::with_pairs("author", "book", [("ann", 1), ("ann", 2), ("bob", 2)]);

    assert_eq!(store.len(), 3);
    assert_eq!(store.index_a().key_count(), 2);
    assert_eq!(store.index_b().key_count(), 2);
}

#[test]
fn batch_add_reports_new_pairs() {
    let mut store = RelationStore::new("a", "b");
    assert_eq!(store.add([(1, 1), (1, 2), (1, 1)]), 2);
    assert_eq!(store.add([(1, 2), (2, 2)]), 1);
    assert_eq!(store.len(), 3);
}

#[test]
fn batch_remove_reports_removed_pairs() {
    let mut store = RelationStore::with_pairs("a", "b", [(1, 1), (1, 2), (2, 2)]);
    assert_eq!(store.remove([(1, 1), (9, 9), (1, 1)]), 1);
    assert_eq!(store.len(), 2);
}

#[test]
fn extend_adds_pairs() {
    let mut store = RelationStore::new("a", "b");
    store.extend((0..5).map(|i| (i, i * 2)));
    assert_eq!(store.len(), 5);
    assert!(store.contains(&4, &8));
}

#[test]
fn clear_empties_both_sides() {
    let mut store = RelationStore::with_pairs("a", "b", [(1, 1), (2, 2)]);
    store.clear();

    assert!(store.is_empty());
    assert!(store.index_a().is_empty());
    assert!(store.index_b().is_empty());
}

// =============================================================================
// Silent No-ops
// =============================================================================

#[test]
fn readding_is_idempotent() {
    let mut store = RelationStore::with_pairs("a", "b", [(1, 10)]);
    assert!(!store.add_pair(1, 10));
    assert_eq!(store.len(), 1);
}

#[test]
fn removing_absent_is_silent() {
    let mut store = RelationStore::with_pairs("a", "b", [(1, 10)]);
    assert!(!store.remove_pair(&1, &11));
    assert!(!store.remove_pair(&2, &10));
    assert_eq!(store.len(), 1);
}

#[test]
fn absent_keys_have_no_counterparts() {
    let store: RelationStore<i32, i32> = RelationStore::new("a", "b");
    assert!(!store.contains(&1, &1));
    assert_eq!(store.counterparts_of_a(&1).count(), 0);
    assert_eq!(store.counterparts_of_b(&1).count(), 0);
    assert_eq!(store.iter().count(), 0);
}

// =============================================================================
// Traversal
// =============================================================================

#[test]
fn iteration_yields_every_pair() {
    let pairs = [(1, 'x'), (1, 'y'), (2, 'x'), (3, 'z')];
    let store = RelationStore::with_pairs("n", "c", pairs);

    let seen: HashSet<(i32, char)> = store.iter().map(|(a, b)| (*a, *b)).collect();
    assert_eq!(seen, pairs.into_iter().collect());
}

#[test]
fn iteration_is_restartable() {
    let store = RelationStore::with_pairs("a", "b", [(1, 1), (2, 2)]);
    assert_eq!(store.iter().count(), 2);
    assert_eq!((&store).into_iter().count(), 2);
}

#[test]
fn counterparts_from_both_sides() {
    let store = RelationStore::with_pairs("student", "course", [("s1", "math"), ("s1", "art"), ("s2", "math")]);

    let courses: HashSet<_> = store.counterparts_of_a(&"s1").copied().collect();
    assert_eq!(courses, ["math", "art"].into_iter().collect());

    let students: HashSet<_> = store.counterparts_of_b(&"math").copied().collect();
    assert_eq!(students, ["s1", "s2"].into_iter().collect());
}

// =============================================================================
// Roles
// =============================================================================

#[test]
fn roles_resolve_to_sides() {
    let store: RelationStore<u8, u8> = RelationStore::new("foo", "bar");

    assert_eq!(store.side_of("foo").unwrap(), Side::A);
    assert_eq!(store.side_of("bar").unwrap(), Side::B);
    assert_eq!(store.roles().label(Side::B), "bar");
    assert_eq!(store.roles().to_string(), "foo<->bar");
}

#[test]
fn unknown_role_is_an_error() {
    let store: RelationStore<u8, u8> = RelationStore::new("foo", "bar");
    let err = store.side_of("baz").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownRole(_)));
}

// =============================================================================
// Sharing
// =============================================================================

#[test]
fn shared_behind_a_mutex() {
    let store = Arc::new(Mutex::new(RelationStore::new("a", "b")));

    let handles: Vec<_> = (0..4u32)
        .map(|t| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for i in 0..25 {
                    store.lock().unwrap().add_pair(t, i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let store = store.lock().unwrap();
    assert_eq!(store.len(), 100);
    assert!(store.is_consistent());
}
