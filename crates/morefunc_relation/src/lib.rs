//! Bidirectional many-to-many relation storage for morefunc.
//!
//! This crate provides:
//! - [`RelationStore`] - Symmetric `(a, b)` pair storage indexed from both sides
//! - [`SideIndex`] - One side's key -> counterparts index
//! - [`Roles`] / [`Side`] - Labels and selectors for the two sides

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod index;
pub mod relation;

pub use index::{Pairs, SideIndex};
pub use relation::{RelationStore, Roles, Side};
