//! One side of a relation: key -> set of counterpart keys.

use std::collections::{HashMap, HashSet, hash_map, hash_set};
use std::hash::Hash;

/// Maps each key on one side of a relation to its counterparts on the other.
///
/// Keys whose counterpart set would become empty are removed, so every
/// stored set is non-empty.
#[derive(Clone, Debug)]
pub struct SideIndex<K, V> {
    entries: HashMap<K, HashSet<V>>,
}

impl<K, V> SideIndex<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Records `value` as a counterpart of `key`.
    ///
    /// Returns false if it was already recorded.
    pub(crate) fn insert(&mut self, key: K, value: V) -> bool {
        self.entries.entry(key).or_default().insert(value)
    }

    /// Forgets `value` as a counterpart of `key`, pruning `key` once it has
    /// no counterparts left.
    ///
    /// Returns false if it was not recorded.
    pub(crate) fn remove(&mut self, key: &K, value: &V) -> bool {
        let Some(values) = self.entries.get_mut(key) else {
            return false;
        };
        let removed = values.remove(value);
        if values.is_empty() {
            self.entries.remove(key);
        }
        removed
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Gets the counterparts of a key.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&HashSet<V>> {
        self.entries.get(key)
    }

    /// Returns true if the key has at least one counterpart.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns true if `value` is a counterpart of `key`.
    #[must_use]
    pub fn contains(&self, key: &K, value: &V) -> bool {
        self.entries.get(key).is_some_and(|s| s.contains(value))
    }

    /// Number of keys with at least one counterpart.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of `(key, counterpart)` associations.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.entries.values().map(HashSet::len).sum()
    }

    /// Returns true if no key has a counterpart.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the indexed keys.
    pub fn keys(&self) -> hash_map::Keys<'_, K, HashSet<V>> {
        self.entries.keys()
    }

    /// Iterates over keys and their counterpart sets.
    pub fn iter(&self) -> hash_map::Iter<'_, K, HashSet<V>> {
        self.entries.iter()
    }

    /// Lazily traverses the counterparts of a key; empty for absent keys.
    pub fn counterparts<'a>(&'a self, key: &K) -> impl Iterator<Item = &'a V> + use<'a, K, V> {
        self.entries
            .get(key)
            .into_iter()
            .flat_map(HashSet::iter)
    }

    /// Returns true if no key maps to an empty set.
    #[must_use]
    pub fn has_no_empty_sets(&self) -> bool {
        self.entries.values().all(|s| !s.is_empty())
    }
}

impl<K, V> Default for SideIndex<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PartialEq for SideIndex<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq + Hash, V: Eq + Hash> Eq for SideIndex<K, V> {}

impl<'a, K, V> IntoIterator for &'a SideIndex<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    type Item = (&'a K, &'a HashSet<V>);
    type IntoIter = hash_map::Iter<'a, K, HashSet<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over every `(key, counterpart)` association of an index.
#[derive(Debug)]
pub struct Pairs<'a, K, V> {
    outer: hash_map::Iter<'a, K, HashSet<V>>,
    current: Option<(&'a K, hash_set::Iter<'a, V>)>,
}

impl<'a, K, V> Pairs<'a, K, V> {
    pub(crate) fn new(index: &'a SideIndex<K, V>) -> Self {
        Self {
            outer: index.entries.iter(),
            current: None,
        }
    }
}

impl<'a, K, V> Iterator for Pairs<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, values)) = &mut self.current {
                if let Some(value) = values.next() {
                    return Some((*key, value));
                }
            }
            let (key, values) = self.outer.next()?;
            self.current = Some((key, values.iter()));
        }
    }
}
