//! Reversible encoding of nested mappings into hashable sets of pairs.
//!
//! This crate provides:
//! - [`encode`] - Freeze a mapping into a set of `(key, value)` pairs
//! - [`capture_structure`] / [`Structure`] - The container shapes encoding discards
//! - [`decode`] / [`Codec`] - Rebuild a mapping from both halves
//! - [`Snapshot`] - Both halves kept together
//!
//! # Example
//!
//! ```
//! use morefunc_codec::{capture_structure, decode, encode};
//! use morefunc_foundation::Value;
//!
//! let value = Value::map([("tags", Value::set(["a", "b"]))]);
//! let map = value.as_map().unwrap();
//!
//! let encoded = encode(map);
//! let structure = capture_structure(map);
//! assert_eq!(&decode(&encoded, &structure).unwrap(), map);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod decode;
pub mod encode;
pub mod snapshot;
pub mod structure;

pub use config::{CodecConfig, KeyPolicy};
pub use decode::{Codec, decode};
pub use encode::encode;
pub use snapshot::Snapshot;
pub use structure::{Shape, Structure, TypeTag, capture_structure};
