//! Integration tests for persistent collections
//!
//! Tests PVec, PSet, PMap with structural sharing and immutability.

use morefunc::foundation::{PMap, PSet, PVec, Value};

// =============================================================================
// PVec
// =============================================================================

#[test]
fn vector_push_back_is_persistent() {
    let v1 = PVec::new().push_back(Value::Int(1));
    let v2 = v1.push_back(Value::Int(2));

    assert_eq!(v1.len(), 1);
    assert_eq!(v2.len(), 2);
    assert_eq!(v2.get(1), Some(&Value::Int(2)));
    assert_eq!(v2.first(), Some(&Value::Int(1)));
    assert_eq!(v2.last(), Some(&Value::Int(2)));
}

#[test]
fn vector_update() {
    let v: PVec<i64> = [1, 2, 3].into_iter().collect();
    let updated = v.update(1, 20).unwrap();

    assert_eq!(updated.get(1), Some(&20));
    assert_eq!(v.get(1), Some(&2));
    assert!(v.update(10, 0).is_none());
}

// =============================================================================
// PSet
// =============================================================================

#[test]
fn set_insert_remove() {
    let s1: PSet<i64> = PSet::new().insert(1).insert(2);
    let s2 = s1.remove(&1);

    assert!(s1.contains(&1));
    assert!(!s2.contains(&1));
    assert_eq!(s2.len(), 1);
}

#[test]
fn set_algebra() {
    let a: PSet<i64> = [1, 2, 3].into_iter().collect();
    let b: PSet<i64> = [3, 4].into_iter().collect();

    assert_eq!(a.union(&b), [1, 2, 3, 4].into_iter().collect());
    assert_eq!(a.intersection(&b), [3].into_iter().collect());
    assert_eq!(a.difference(&b), [1, 2].into_iter().collect());
    assert_eq!(b.difference(&a), [4].into_iter().collect());
}

// =============================================================================
// PMap
// =============================================================================

#[test]
fn map_insert_is_persistent() {
    let m1: PMap<Value, Value> = PMap::new().insert(Value::from("a"), Value::Int(1));
    let m2 = m1.insert(Value::from("a"), Value::Int(2));

    assert_eq!(m1.get(&Value::from("a")), Some(&Value::Int(1)));
    assert_eq!(m2.get(&Value::from("a")), Some(&Value::Int(2)));
}

#[test]
fn map_union_prefers_other() {
    let a: PMap<i64, &str> = [(1, "a"), (2, "a")].into_iter().collect();
    let b: PMap<i64, &str> = [(2, "b"), (3, "b")].into_iter().collect();

    let merged = a.union(&b);
    assert_eq!(merged.get(&1), Some(&"a"));
    assert_eq!(merged.get(&2), Some(&"b"));
    assert_eq!(merged.get(&3), Some(&"b"));
}

#[test]
fn map_union_prefers_other_when_self_is_larger() {
    let a: PMap<i64, &str> = [(1, "a"), (2, "a"), (3, "a")].into_iter().collect();
    let b: PMap<i64, &str> = [(2, "b")].into_iter().collect();

    let merged = a.union(&b);
    assert_eq!(merged.len(), 3);
    assert_eq!(merged.get(&1), Some(&"a"));
    assert_eq!(merged.get(&2), Some(&"b"));
    assert_eq!(merged.get(&3), Some(&"a"));
}

#[test]
fn map_keys_and_values() {
    let m: PMap<i64, i64> = (0..5).map(|i| (i, i * 10)).collect();

    let mut keys: Vec<_> = m.keys().copied().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec![0, 1, 2, 3, 4]);
    assert_eq!(m.values().sum::<i64>(), 100);
    assert!(m.remove(&0).get(&0).is_none());
}
