//! Core value type for nested data.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::{PMap, PSet, PVec};
use crate::types::Kind;

/// A dynamically typed, hashable data value.
///
/// Values are immutable and cheaply cloneable (O(1) for every variant).
/// Every variant is hashable, including the containers, so any value can be
/// a map key or a set element.
///
/// The containers come in two flavours. [`List`](Self::List), [`Set`](Self::Set)
/// and [`Map`](Self::Map) are what callers build nested data from.
/// [`Tuple`](Self::Tuple) and [`FrozenSet`](Self::FrozenSet) are their fixed
/// counterparts, which the set codec produces and otherwise treats as opaque
/// scalars.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// The nil value (represents absence).
    Nil,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(Arc<str>),
    /// Fixed, order-preserving sequence.
    Tuple(PVec<Value>),
    /// Immutable set.
    FrozenSet(PSet<Value>),
    /// Ordered sequence.
    List(PVec<Value>),
    /// Set.
    Set(PSet<Value>),
    /// Key/value mapping.
    Map(PMap<Value, Value>),
}

impl Value {
    /// Builds a list from anything convertible into values.
    #[must_use]
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a tuple from anything convertible into values.
    #[must_use]
    pub fn tuple<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Builds a set from anything convertible into values.
    #[must_use]
    pub fn set<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Set(items.into_iter().map(Into::into).collect())
    }

    /// Builds a frozen set from anything convertible into values.
    #[must_use]
    pub fn frozen_set<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::FrozenSet(items.into_iter().map(Into::into).collect())
    }

    /// Builds a map from key/value pairs.
    #[must_use]
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builds the two-element tuple `(key, value)`.
    #[must_use]
    pub fn pair(key: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self::Tuple(PVec::new().push_back(key.into()).push_back(value.into()))
    }

    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::String(_) => Kind::String,
            Self::Tuple(_) => Kind::Tuple,
            Self::FrozenSet(_) => Kind::FrozenSet,
            Self::List(_) => Kind::List,
            Self::Set(_) => Kind::Set,
            Self::Map(_) => Kind::Map,
        }
    }

    /// Returns true if this value is nil.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a tuple reference.
    #[must_use]
    pub const fn as_tuple(&self) -> Option<&PVec<Value>> {
        match self {
            Self::Tuple(t) => Some(t),
            _ => None,
        }
    }

    /// Attempts to extract a frozen set reference.
    #[must_use]
    pub const fn as_frozen_set(&self) -> Option<&PSet<Value>> {
        match self {
            Self::FrozenSet(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a list reference.
    #[must_use]
    pub const fn as_list(&self) -> Option<&PVec<Value>> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to extract a set reference.
    #[must_use]
    pub const fn as_set(&self) -> Option<&PSet<Value>> {
        match self {
            Self::Set(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a map reference.
    #[must_use]
    pub const fn as_map(&self) -> Option<&PMap<Value, Value>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Splits a two-element tuple into its halves.
    #[must_use]
    pub fn as_pair(&self) -> Option<(&Value, &Value)> {
        match self {
            Self::Tuple(t) if t.len() == 2 => Some((t.get(0)?, t.get(1)?)),
            _ => None,
        }
    }
}

// Implement PartialEq manually to handle float comparison
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Tuple(a), Self::Tuple(b)) | (Self::List(a), Self::List(b)) => a == b,
            (Self::FrozenSet(a), Self::FrozenSet(b)) | (Self::Set(a), Self::Set(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Nil => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(n) => n.hash(state),
            Self::Float(n) => n.to_bits().hash(state),
            Self::String(s) => s.hash(state),
            Self::Tuple(v) | Self::List(v) => v.hash(state),
            Self::FrozenSet(s) | Self::Set(s) => s.hash(state),
            Self::Map(m) => m.hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Tuple(v) => {
                let mut t = f.debug_tuple("");
                for item in v {
                    t.field(item);
                }
                t.finish()
            }
            Self::FrozenSet(s) => write!(f, "frozenset({s:?})"),
            Self::List(v) => write!(f, "{v:?}"),
            Self::Set(s) => write!(f, "{s:?}"),
            Self::Map(m) => write!(f, "{m:?}"),
        }
    }
}

/// Writes `items` separated by `", "`.
fn write_joined<'a, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator<Item = &'a Value>,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Tuple(v) => {
                write!(f, "(")?;
                write_joined(f, v)?;
                if v.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Self::FrozenSet(s) => {
                write!(f, "frozenset({{")?;
                write_joined(f, s)?;
                write!(f, "}})")
            }
            Self::List(v) => {
                write!(f, "[")?;
                write_joined(f, v)?;
                write!(f, "]")
            }
            Self::Set(s) => {
                write!(f, "{{")?;
                write_joined(f, s)?;
                write!(f, "}}")
            }
            Self::Map(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Nil, Into::into)
    }
}

impl From<PMap<Value, Value>> for Value {
    fn from(m: PMap<Value, Value>) -> Self {
        Self::Map(m)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::list(v)
    }
}
