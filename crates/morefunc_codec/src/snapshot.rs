//! Snapshots: an encoded set kept together with its structure.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use morefunc_foundation::{PMap, PSet, Result, Value};

use crate::decode::Codec;
use crate::encode::encode;
use crate::structure::{Structure, capture_structure};

/// Both halves needed to rebuild a mapping.
///
/// The encoded half is hashable and can be compared, stored in sets, or
/// diffed; the structure half says how to thaw it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    encoded: PSet<Value>,
    structure: Structure,
}

impl Snapshot {
    /// Encodes a mapping and captures its structure.
    #[must_use]
    pub fn capture(map: &PMap<Value, Value>) -> Self {
        Self {
            encoded: encode(map),
            structure: capture_structure(map),
        }
    }

    /// Pairs an existing encoding with a structure.
    #[must_use]
    pub fn from_parts(encoded: PSet<Value>, structure: Structure) -> Self {
        Self { encoded, structure }
    }

    /// The encoded set.
    #[must_use]
    pub fn encoded(&self) -> &PSet<Value> {
        &self.encoded
    }

    /// The captured structure.
    #[must_use]
    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Splits into the encoded set and structure.
    #[must_use]
    pub fn into_parts(self) -> (PSet<Value>, Structure) {
        (self.encoded, self.structure)
    }

    /// Rebuilds the mapping with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`Codec::decode`].
    pub fn restore(&self) -> Result<PMap<Value, Value>> {
        self.restore_with(&Codec::default())
    }

    /// Rebuilds the mapping with the given codec.
    ///
    /// # Errors
    ///
    /// See [`Codec::decode`].
    pub fn restore_with(&self, codec: &Codec) -> Result<PMap<Value, Value>> {
        codec.decode(&self.encoded, &self.structure)
    }
}

#[cfg(feature = "serde")]
mod bytes {
    use morefunc_foundation::{Error, ErrorKind, Result};

    use super::Snapshot;

    impl Snapshot {
        /// Serializes to `MessagePack`, keeping field names.
        ///
        /// # Errors
        ///
        /// Returns an error if serialization fails.
        pub fn to_bytes(&self) -> Result<Vec<u8>> {
            rmp_serde::to_vec_named(self)
                .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
        }

        /// Deserializes from `MessagePack` bytes.
        ///
        /// # Errors
        ///
        /// Returns an error if the bytes are not a valid snapshot.
        pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
            rmp_serde::from_slice(bytes)
                .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
        }
    }
}
