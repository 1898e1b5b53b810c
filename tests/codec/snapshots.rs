//! Integration tests for snapshots
//!
//! Tests bundling both halves and, with the `serde` feature, byte round-trips.

use morefunc::codec::{Codec, CodecConfig, Snapshot};
use morefunc::foundation::{PMap, Value};

fn config_map() -> PMap<Value, Value> {
    Value::map([
        ("name", Value::from("svc")),
        ("ports", Value::list([80, 443])),
        ("tags", Value::set(["a", "b"])),
        (
            "limits",
            Value::map([("cpu", Value::Float(0.5)), ("mem", Value::Int(512))]),
        ),
    ])
    .as_map()
    .cloned()
    .unwrap()
}

#[test]
fn snapshot_restores() {
    let map = config_map();
    let snapshot = Snapshot::capture(&map);

    assert_eq!(snapshot.restore().unwrap(), map);
    assert_eq!(
        snapshot
            .restore_with(&Codec::new(CodecConfig::strict().with_max_depth(1)))
            .unwrap(),
        map
    );
}

#[test]
fn depth_limit_applies_to_snapshots() {
    let snapshot = Snapshot::capture(&config_map());
    let codec = Codec::new(CodecConfig::default().with_max_depth(0));
    assert!(snapshot.restore_with(&codec).is_err());
}

#[test]
fn changed_maps_give_different_snapshots() {
    let before = config_map();
    let after = before.insert(Value::from("ports"), Value::list([443, 80]));

    assert_ne!(Snapshot::capture(&before), Snapshot::capture(&after));
}

#[cfg(feature = "serde")]
#[test]
fn snapshot_bytes_round_trip() {
    let snapshot = Snapshot::capture(&config_map());
    let bytes = snapshot.to_bytes().unwrap();
    let loaded = Snapshot::from_bytes(&bytes).unwrap();

    assert_eq!(loaded, snapshot);
    assert_eq!(loaded.restore().unwrap(), config_map());
}
