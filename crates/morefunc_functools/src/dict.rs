//! Helpers for nested mappings of [`Value`]s.

use std::hash::Hash;

use morefunc_foundation::{Error, Kind, PMap, Result, Value};

/// One step of a [`dmap`] path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathKey {
    /// Matches every key at this level.
    Any,
    /// Matches one key.
    Key(Value),
}

impl PathKey {
    /// Creates a step matching one key.
    #[must_use]
    pub fn key(key: impl Into<Value>) -> Self {
        Self::Key(key.into())
    }

    fn matches(&self, key: &Value) -> bool {
        match self {
            Self::Any => true,
            Self::Key(k) => k == key,
        }
    }
}

/// Returns a copy of `map` with `key` set to `value`.
#[must_use]
pub fn replace<K, V>(map: &PMap<K, V>, key: K, value: V) -> PMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    map.insert(key, value)
}

/// Applies `f` to the values a key path selects.
///
/// Every step but the last descends into the values of matching keys; the
/// last step picks which values `f` rewrites. An empty path rewrites every
/// top-level value. Values under keys the path does not match are kept.
///
/// ```
/// use morefunc_foundation::Value;
/// use morefunc_functools::{PathKey, dmap};
///
/// let map = Value::map([
///     ("a", Value::map([("x", 1), ("y", 2)])),
///     ("b", Value::map([("x", 3)])),
/// ]);
/// let bumped = dmap(
///     |v| Value::Int(v.as_int().unwrap_or(0) + 10),
///     map.as_map().unwrap(),
///     &[PathKey::Any, PathKey::key("x")],
/// )
/// .unwrap();
///
/// assert_eq!(
///     Value::Map(bumped),
///     Value::map([
///         ("a", Value::map([("x", 11), ("y", 2)])),
///         ("b", Value::map([("x", 13)])),
///     ]),
/// );
/// ```
///
/// # Errors
///
/// Returns a type mismatch if the path descends into a value that is not a
/// mapping. The error context holds the key path to that value.
pub fn dmap<F>(f: F, map: &PMap<Value, Value>, path: &[PathKey]) -> Result<PMap<Value, Value>>
where
    F: Fn(&Value) -> Value,
{
    dmap_with(&f, map, path)
}

fn dmap_with<F>(f: &F, map: &PMap<Value, Value>, path: &[PathKey]) -> Result<PMap<Value, Value>>
where
    F: Fn(&Value) -> Value,
{
    let Some((step, rest)) = path.split_first() else {
        return Ok(map.iter().map(|(k, v)| (k.clone(), f(v))).collect());
    };

    map.iter()
        .map(|(key, value)| {
            let mapped = if !step.matches(key) {
                value.clone()
            } else if rest.is_empty() {
                f(value)
            } else {
                let nested = value
                    .as_map()
                    .ok_or_else(|| Error::type_mismatch(Kind::Map, value.kind()))
                    .and_then(|nested| dmap_with(f, nested, rest))
                    .map_err(|err| err.within(key))?;
                Value::Map(nested)
            };
            Ok((key.clone(), mapped))
        })
        .collect()
}

/// Merges two mappings, recursively.
///
/// For each key in either mapping, a nil or missing value counts as absent:
/// - present in both: two mappings merge recursively, otherwise `b` wins
/// - present in one: that value is kept
/// - absent from both: the key maps to nil
#[must_use]
pub fn merge(a: &PMap<Value, Value>, b: &PMap<Value, Value>) -> PMap<Value, Value> {
    a.keys()
        .chain(b.keys().filter(|key| !a.contains_key(key)))
        .map(|key| {
            let left = a.get(key).filter(|v| !v.is_nil());
            let right = b.get(key).filter(|v| !v.is_nil());
            let merged = match (left, right) {
                (Some(Value::Map(x)), Some(Value::Map(y))) => Value::Map(merge(x, y)),
                (_, Some(y)) => y.clone(),
                (Some(x), None) => x.clone(),
                (None, None) => Value::Nil,
            };
            (key.clone(), merged)
        })
        .collect()
}
