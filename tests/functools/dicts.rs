//! Integration tests for nested map helpers

use morefunc::codec::{capture_structure, decode, encode};
use morefunc::foundation::{PMap, Value};
use morefunc::functools::{PathKey, dmap, merge, replace};

fn as_map(value: Value) -> PMap<Value, Value> {
    match value {
        Value::Map(map) => map,
        other => panic!("expected a map, got {other}"),
    }
}

fn defaults() -> PMap<Value, Value> {
    as_map(Value::map([
        ("debug", Value::Bool(false)),
        ("db", Value::map([("host", "localhost"), ("port", "5432")])),
    ]))
}

#[test]
fn merge_overrides_into_defaults() {
    let overrides = as_map(Value::map([
        ("db", Value::map([("host", Value::from("db.internal"))])),
        ("debug", Value::Nil),
    ]));

    let merged = merge(&defaults(), &overrides);
    assert_eq!(
        merged,
        as_map(Value::map([
            ("debug", Value::Bool(false)),
            ("db", Value::map([("host", "db.internal"), ("port", "5432")])),
        ]))
    );
}

#[test]
fn merge_with_empty_is_identity() {
    assert_eq!(merge(&defaults(), &PMap::new()), defaults());
    assert_eq!(merge(&PMap::new(), &defaults()), defaults());
}

#[test]
fn dmap_then_replace() {
    let upper = |v: &Value| Value::from(v.as_str().unwrap_or_default().to_uppercase());
    let shouted = dmap(upper, &defaults(), &[PathKey::key("db"), PathKey::Any]).unwrap();
    let shouted = replace(&shouted, Value::from("debug"), Value::Bool(true));

    assert_eq!(
        shouted,
        as_map(Value::map([
            ("debug", Value::Bool(true)),
            ("db", Value::map([("host", "LOCALHOST"), ("port", "5432")])),
        ]))
    );
}

#[test]
fn helpers_compose_with_codec() {
    let merged = merge(
        &defaults(),
        &as_map(Value::map([("tags", Value::set(["x", "y"]))])),
    );
    let decoded = decode(&encode(&merged), &capture_structure(&merged)).unwrap();
    assert_eq!(decoded, merged);
}
