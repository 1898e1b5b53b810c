//! Structure descriptors: the type information an encoding discards.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use morefunc_foundation::{PMap, Value};

/// What kind of container a mapping value was before encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeTag {
    /// An ordered sequence ([`Value::List`]).
    Sequence,
    /// A set ([`Value::Set`]).
    Set,
    /// A nested mapping ([`Value::Map`]).
    Mapping,
    /// Anything else, restored as-is.
    Scalar,
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence => write!(f, "sequence"),
            Self::Set => write!(f, "set"),
            Self::Mapping => write!(f, "mapping"),
            Self::Scalar => write!(f, "scalar"),
        }
    }
}

/// The recorded shape of one mapping value: its tag, plus the nested
/// descriptor when it was itself a mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
    /// Was an ordered sequence.
    Sequence,
    /// Was a set.
    Set,
    /// Was a mapping with the given structure.
    Mapping(Structure),
    /// Was an opaque scalar.
    Scalar,
}

impl Shape {
    /// Captures the shape of a value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::List(_) => Self::Sequence,
            Value::Set(_) => Self::Set,
            Value::Map(map) => Self::Mapping(capture_structure(map)),
            _ => Self::Scalar,
        }
    }

    /// The type tag of this shape.
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        match self {
            Self::Sequence => TypeTag::Sequence,
            Self::Set => TypeTag::Set,
            Self::Mapping(_) => TypeTag::Mapping,
            Self::Scalar => TypeTag::Scalar,
        }
    }

    /// The nested descriptor, present only for mappings.
    #[must_use]
    pub const fn sub_structure(&self) -> Option<&Structure> {
        match self {
            Self::Mapping(structure) => Some(structure),
            _ => None,
        }
    }
}

/// Per-key shapes of a mapping.
///
/// Together with the set produced by [`encode`](crate::encode) this is
/// enough to rebuild the original mapping; neither half suffices alone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Structure(PMap<Value, Shape>);

impl Structure {
    /// Creates an empty structure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new structure with `key` described by `shape`.
    #[must_use]
    pub fn with(&self, key: impl Into<Value>, shape: Shape) -> Self {
        Self(self.0.insert(key.into(), shape))
    }

    /// Gets the shape recorded for a key.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Shape> {
        self.0.get(key)
    }

    /// Returns true if the key has a recorded shape.
    #[must_use]
    pub fn contains_key(&self, key: &Value) -> bool {
        self.0.contains_key(key)
    }

    /// Number of described keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no key is described.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over keys and their shapes.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Shape)> {
        self.0.iter()
    }

    /// Iterates over the described keys.
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.0.keys()
    }
}

impl FromIterator<(Value, Shape)> for Structure {
    fn from_iter<I: IntoIterator<Item = (Value, Shape)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Records, for every key of `map`, the shape of its value, recursing into
/// nested mappings.
#[must_use]
pub fn capture_structure(map: &PMap<Value, Value>) -> Structure {
    map.iter()
        .map(|(key, value)| (key.clone(), Shape::of(value)))
        .collect()
}
