//! Core value type, persistent collections, and errors for morefunc.
//!
//! This crate provides:
//! - [`Value`] - The hashable data value nested maps are built from
//! - [`Kind`] - Runtime kind descriptors for values
//! - [`Error`] - Rich error types with context
//! - Persistent collections ([`PVec`], [`PSet`], [`PMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod types;
pub mod value;

pub use collections::{PMap, PSet, PVec};
pub use error::{Error, ErrorContext, ErrorKind, Limit};
pub use types::Kind;
pub use value::Value;

/// Result type for morefunc operations.
pub type Result<T> = std::result::Result<T, Error>;
