use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};

/// An entity that can be stored in an [`IndexedCollection`].
///
/// The key is the entity's unique identity within a collection. Implementors
/// return the *canonical* form (for example, lowercased for case-insensitive
/// keys) and normalize raw lookup strings the same way.
pub trait Keyed {
    /// Canonical unique key for this entity, or `None` when the key field is
    /// blank and the entity cannot be indexed.
    fn key(&self) -> Option<String>;

    /// Normalize a raw lookup key into canonical form.
    fn normalize_key(raw: &str) -> String {
        raw.to_string()
    }
}

/// An ordered sequence of entities paired with a unique-key index.
///
/// The `Vec` preserves insertion order (which is meaningful for display and
/// never silently reordered); the map gives O(1) key lookup. Every mutating
/// operation updates both together — there is no partial state.
#[derive(Debug, Clone)]
pub struct IndexedCollection<T: Keyed> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Keyed> Default for IndexedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> IndexedCollection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append an entity.
    ///
    /// Fails without mutating anything if the entity has no usable key or a
    /// key collision exists.
    pub fn add(&mut self, item: T) -> CoreResult<()> {
        let key = item.key().ok_or(CoreError::EmptyKey)?;
        if self.index.contains_key(&key) {
            return Err(CoreError::DuplicateKey(key));
        }
        self.index.insert(key, self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Remove the entity stored under `key` and return it.
    ///
    /// Removes from the sequence and the index together; positions of later
    /// entries are reindexed.
    pub fn remove(&mut self, key: &str) -> CoreResult<T> {
        let key = T::normalize_key(key);
        let pos = self
            .index
            .remove(&key)
            .ok_or_else(|| CoreError::KeyNotFound(key.clone()))?;
        let item = self.items.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Ok(item)
    }

    /// Replace the entity stored under `key` in place, keeping its position
    /// in the ordered sequence.
    ///
    /// The replacement's own key must equal `key`; callers that force the key
    /// (quest-style collections) do so before delegating here.
    pub fn update(&mut self, key: &str, item: T) -> CoreResult<()> {
        let key = T::normalize_key(key);
        let pos = *self
            .index
            .get(&key)
            .ok_or_else(|| CoreError::KeyNotFound(key.clone()))?;
        let found = item.key().ok_or(CoreError::EmptyKey)?;
        if found != key {
            return Err(CoreError::KeyMismatch {
                expected: key,
                found,
            });
        }
        self.items[pos] = item;
        Ok(())
    }

    /// Look up an entity by key. O(1).
    pub fn get(&self, key: &str) -> Option<&T> {
        self.index
            .get(&T::normalize_key(key))
            .map(|&pos| &self.items[pos])
    }

    /// Look up an entity by key, mutably. O(1).
    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.index
            .get(&T::normalize_key(key))
            .map(|&pos| &mut self.items[pos])
    }

    /// Whether an entity is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(&T::normalize_key(key))
    }

    /// Number of stored entities.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over entities in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Keyed + Clone> IndexedCollection<T> {
    /// Defensive copy of the ordered sequence; mutating the returned `Vec`
    /// does not affect the collection.
    pub fn all(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Entities matching a predicate, in insertion order, as a new `Vec`.
    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.items.iter().filter(|t| pred(t)).cloned().collect()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a IndexedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
