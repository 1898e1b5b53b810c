//! Decoding sets of pairs back into nested mappings.

use morefunc_foundation::{Error, Kind, Limit, PMap, PSet, Result, Value};

use crate::config::{CodecConfig, KeyPolicy};
use crate::structure::{Shape, Structure};

/// Decodes encoded sets according to a [`CodecConfig`].
#[derive(Clone, Debug, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Creates a codec with the given configuration.
    #[must_use]
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Gets the configuration.
    #[must_use]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Rebuilds a mapping from its encoding and the structure captured from
    /// the original.
    ///
    /// Each encoded value is converted back according to the shape recorded
    /// for its key:
    /// - sequence: tuple -> list
    /// - set: frozen set -> set
    /// - mapping: frozen set of pairs -> mapping, recursively
    /// - scalar: unchanged
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An element of `encoded` is not a `(key, value)` pair
    /// - An encoded key has no entry in `structure`
    /// - An encoded value does not have the kind its shape requires
    /// - The key policy is strict and `structure` describes a key that is not
    ///   encoded
    /// - Mappings nest deeper than the configured limit
    ///
    /// Errors raised below the top level carry the key path in their context.
    pub fn decode(&self, encoded: &PSet<Value>, structure: &Structure) -> Result<PMap<Value, Value>> {
        self.decode_at(encoded, structure, 0).inspect_err(|err| {
            log::debug!("decoding {} pairs failed: {err}", encoded.len());
        })
    }

    fn decode_at(
        &self,
        encoded: &PSet<Value>,
        structure: &Structure,
        depth: usize,
    ) -> Result<PMap<Value, Value>> {
        if let Some(limit) = self.config.max_depth {
            if depth > limit {
                return Err(Error::limit_exceeded(Limit::MaxDepth { limit }));
            }
        }

        let mut decoded = PMap::new();
        for element in encoded {
            let (key, value) = element
                .as_pair()
                .ok_or_else(|| Error::malformed_pair(element.clone()))?;
            let shape = structure
                .get(key)
                .ok_or_else(|| Error::missing_structure(key.clone()))?;
            let restored = self
                .restore(value, shape, depth)
                .map_err(|err| err.within(key))?;
            decoded = decoded.insert(key.clone(), restored);
        }

        if self.config.key_policy == KeyPolicy::Strict {
            if let Some(key) = structure.keys().find(|key| !decoded.contains_key(key)) {
                return Err(Error::missing_value(key.clone()));
            }
        }

        Ok(decoded)
    }

    fn restore(&self, value: &Value, shape: &Shape, depth: usize) -> Result<Value> {
        match (shape, value) {
            (Shape::Sequence, Value::Tuple(items)) => Ok(Value::List(items.clone())),
            (Shape::Set, Value::FrozenSet(items)) => Ok(Value::Set(items.clone())),
            (Shape::Mapping(nested), Value::FrozenSet(pairs)) => {
                self.decode_at(pairs, nested, depth + 1).map(Value::Map)
            }
            (Shape::Scalar, other) => Ok(other.clone()),
            (Shape::Sequence, other) => Err(Error::type_mismatch(Kind::Tuple, other.kind())),
            (Shape::Set | Shape::Mapping(_), other) => {
                Err(Error::type_mismatch(Kind::FrozenSet, other.kind()))
            }
        }
    }
}

/// Rebuilds a mapping with the default (lenient, unbounded) configuration.
///
/// # Errors
///
/// See [`Codec::decode`].
pub fn decode(encoded: &PSet<Value>, structure: &Structure) -> Result<PMap<Value, Value>> {
    Codec::default().decode(encoded, structure)
}
