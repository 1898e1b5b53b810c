//! Runtime kind descriptors for values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The runtime variant of a [`Value`](crate::Value).
///
/// Used to report type mismatches and to classify values without
/// inspecting their contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    /// The nil kind (only value: nil).
    Nil,
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String.
    String,
    /// Fixed, hashable sequence.
    Tuple,
    /// Immutable, hashable set.
    FrozenSet,
    /// Ordered sequence.
    List,
    /// Set.
    Set,
    /// Key/value mapping.
    Map,
}

impl Kind {
    /// The lowercase name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Tuple => "tuple",
            Self::FrozenSet => "frozenset",
            Self::List => "list",
            Self::Set => "set",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
