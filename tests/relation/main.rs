//! Integration tests for Layer 1: Relation
//!
//! Tests for RelationStore: mutation, traversal, roles, and invariants.

mod invariants;
mod store;
