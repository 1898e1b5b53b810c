//! Small functional helpers for morefunc.
//!
//! This crate provides:
//! - [`compose!`] / [`compose2`] / [`identity`] - Function composition
//! - [`curry2!`] / [`curry3!`] - Fixed-arity currying
//! - [`unpack2`] / [`unpack3`] - Tuple-taking adapters for n-ary functions
//! - [`find_or`], [`last`], [`concat`], [`nwise`], [`disjoint_symmetric_diff`] - Sequence helpers
//! - [`replace`], [`dmap`], [`merge`] - Nested mapping helpers
//! - [`Recover`] / [`or_default`] - Error-to-fallback conversion

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compose;
pub mod dict;
pub mod fallback;
pub mod iter;

pub use compose::{compose2, identity, unpack2, unpack3};
pub use dict::{PathKey, dmap, merge, replace};
pub use fallback::{Recover, or_default};
pub use iter::{NWise, concat, disjoint_symmetric_diff, find_or, last, nwise};
