//! Morefunc - functional helpers, relation storage, and a nested-map set codec
//!
//! This crate re-exports all layers of the morefunc workspace for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: morefunc_functools  - Composition, currying, fallbacks, sequence and map helpers
//! Layer 1: morefunc_relation   - Bidirectional many-to-many relation store
//!          morefunc_codec      - Reversible nested map <-> set-of-pairs encoding
//! Layer 0: morefunc_foundation - Core types (Value, Kind, persistent collections, Error)
//! ```

pub use morefunc_codec as codec;
pub use morefunc_foundation as foundation;
pub use morefunc_functools as functools;
pub use morefunc_relation as relation;
