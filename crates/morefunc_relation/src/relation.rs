//! Many-to-many relation storage with bidirectional indices.
//!
//! A relation connects keys on side A with keys on side B. Both directions
//! are indexed, so traversal from either side is a single lookup.

use std::fmt;
use std::hash::Hash;

use morefunc_foundation::{Error, Result};

use crate::index::{Pairs, SideIndex};

/// Selects one side of a relation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The side whose keys come first in each pair.
    A,
    /// The side whose keys come second in each pair.
    B,
}

/// The labels of the two sides of a relation.
///
/// Labels are for introspection and error messages only; they never select
/// fields at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Roles {
    /// Label of side A.
    pub a: String,
    /// Label of side B.
    pub b: String,
}

impl Roles {
    /// Creates a pair of role labels.
    #[must_use]
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// Gets the label of a side.
    #[must_use]
    pub fn label(&self, side: Side) -> &str {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }
}

impl fmt::Display for Roles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<->{}", self.a, self.b)
    }
}

/// Stores `(a, b)` pairs of a many-to-many relation.
///
/// Maintains two indices that always agree:
/// - side A: `a -> {b, ...}`
/// - side B: `b -> {a, ...}`
///
/// Every pair is present in both or in neither, and no key survives with an
/// empty counterpart set.
///
/// The store is not internally synchronized. Mutation takes `&mut self`;
/// callers sharing a store across threads wrap it in a `Mutex` or `RwLock`.
#[derive(Clone, Debug)]
pub struct RelationStore<A, B> {
    /// Labels of the two sides.
    roles: Roles,
    /// Side A index: a -> set of b.
    index_a: SideIndex<A, B>,
    /// Side B index: b -> set of a.
    index_b: SideIndex<B, A>,
}

impl<A, B> RelationStore<A, B>
where
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
{
    /// Creates an empty relation between two labelled sides.
    #[must_use]
    pub fn new(role_a: impl Into<String>, role_b: impl Into<String>) -> Self {
        Self {
            roles: Roles::new(role_a, role_b),
            index_a: SideIndex::new(),
            index_b: SideIndex::new(),
        }
    }

    /// Creates a relation holding the given initial pairs.
    #[must_use]
    pub fn with_pairs<I>(role_a: impl Into<String>, role_b: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
    {
        let mut store = Self::new(role_a, role_b);
        store.add(pairs);
        store
    }

    /// Gets the side labels.
    #[must_use]
    pub fn roles(&self) -> &Roles {
        &self.roles
    }

    /// Resolves a role label to its side.
    ///
    /// # Errors
    ///
    /// Returns an error if `role` labels neither side.
    pub fn side_of(&self, role: &str) -> Result<Side> {
        if role == self.roles.a {
            Ok(Side::A)
        } else if role == self.roles.b {
            Ok(Side::B)
        } else {
            Err(Error::unknown_role(format!(
                "{role} (relation has {})",
                self.roles
            )))
        }
    }

    /// Adds a batch of pairs.
    ///
    /// Adding an existing pair is idempotent (no-op). Returns the number of
    /// pairs that were not already present.
    pub fn add<I>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (A, B)>,
    {
        let mut added = 0;
        for (a, b) in pairs {
            if self.insert(a, b) {
                added += 1;
            }
        }
        log::trace!("relation {}: added {added} pairs", self.roles);
        debug_assert!(self.is_consistent());
        added
    }

    /// Adds a single pair. Returns false if it was already present.
    pub fn add_pair(&mut self, a: A, b: B) -> bool {
        self.add([(a, b)]) == 1
    }

    fn insert(&mut self, a: A, b: B) -> bool {
        let fresh = self.index_a.insert(a.clone(), b.clone());
        self.index_b.insert(b, a);
        fresh
    }

    /// Removes a batch of pairs.
    ///
    /// Removing a pair that is not present is idempotent (no-op). Returns the
    /// number of pairs actually removed.
    pub fn remove<I>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (A, B)>,
    {
        let mut removed = 0;
        for (a, b) in pairs {
            if self.unlink(&a, &b) {
                removed += 1;
            }
        }
        log::trace!("relation {}: removed {removed} pairs", self.roles);
        debug_assert!(self.is_consistent());
        removed
    }

    /// Removes a single pair. Returns false if it was not present.
    pub fn remove_pair(&mut self, a: &A, b: &B) -> bool {
        let removed = self.unlink(a, b);
        log::trace!("relation {}: removed {} pairs", self.roles, usize::from(removed));
        debug_assert!(self.is_consistent());
        removed
    }

    fn unlink(&mut self, a: &A, b: &B) -> bool {
        let removed = self.index_a.remove(a, b);
        self.index_b.remove(b, a);
        removed
    }

    /// Removes every pair.
    pub fn clear(&mut self) {
        self.index_a.clear();
        self.index_b.clear();
    }

    /// Checks if a pair exists.
    #[must_use]
    pub fn contains(&self, a: &A, b: &B) -> bool {
        self.index_a.contains(a, b) && self.index_b.contains(b, a)
    }

    /// Number of distinct pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index_a.pair_count()
    }

    /// Returns true if the relation holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index_a.is_empty()
    }

    /// Iterates over every pair, in unspecified order.
    ///
    /// Each call starts a fresh traversal.
    pub fn iter(&self) -> Pairs<'_, A, B> {
        Pairs::new(&self.index_a)
    }

    /// Gets the side-B keys related to `a` (forward traversal).
    pub fn counterparts_of_a<'a>(&'a self, a: &A) -> impl Iterator<Item = &'a B> + use<'a, A, B> {
        self.index_a.counterparts(a)
    }

    /// Gets the side-A keys related to `b` (reverse traversal).
    pub fn counterparts_of_b<'a>(&'a self, b: &B) -> impl Iterator<Item = &'a A> + use<'a, A, B> {
        self.index_b.counterparts(b)
    }

    /// Read-only view of the side-A index.
    #[must_use]
    pub fn index_a(&self) -> &SideIndex<A, B> {
        &self.index_a
    }

    /// Read-only view of the side-B index.
    #[must_use]
    pub fn index_b(&self) -> &SideIndex<B, A> {
        &self.index_b
    }

    /// Checks that both indices hold exactly the same pairs and that neither
    /// keeps a key with no counterparts.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.index_a.has_no_empty_sets()
            && self.index_b.has_no_empty_sets()
            && self.index_a.pair_count() == self.index_b.pair_count()
            && self.iter().all(|(a, b)| self.index_b.contains(b, a))
    }
}

impl<A, B> PartialEq for RelationStore<A, B>
where
    A: Eq + Hash,
    B: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.roles == other.roles && self.index_a == other.index_a
    }
}

impl<A: Eq + Hash, B: Eq + Hash> Eq for RelationStore<A, B> {}

impl<A, B> Extend<(A, B)> for RelationStore<A, B>
where
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = (A, B)>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<'s, A, B> IntoIterator for &'s RelationStore<A, B>
where
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
{
    type Item = (&'s A, &'s B);
    type IntoIter = Pairs<'s, A, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
