//! Encoding nested mappings into hashable sets of pairs.

use morefunc_foundation::{PMap, PSet, Value};

/// Encodes a mapping as a set of `(key, value)` pairs.
///
/// Each element is a two-element [`Value::Tuple`]. Values are frozen on the
/// way in:
/// - nested mappings become [`Value::FrozenSet`]s of pairs, recursively
/// - lists become [`Value::Tuple`]s
/// - sets become [`Value::FrozenSet`]s
/// - anything else is kept as-is
///
/// The result does not depend on how `map` was built, and it no longer
/// says which values were lists, sets, or mappings. Keep the
/// [`Structure`](crate::Structure) alongside it to decode.
#[must_use]
pub fn encode(map: &PMap<Value, Value>) -> PSet<Value> {
    map.iter()
        .map(|(key, value)| Value::pair(key.clone(), encode_value(value)))
        .collect()
}

fn encode_value(value: &Value) -> Value {
    match value {
        Value::Map(map) => Value::FrozenSet(encode(map)),
        Value::List(items) => Value::Tuple(items.clone()),
        Value::Set(items) => Value::FrozenSet(items.clone()),
        other => other.clone(),
    }
}
