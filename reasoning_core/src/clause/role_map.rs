//! Insertion-ordered role assignments.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use world_model::Role;

/// Role fillers of a clause.
///
/// Iteration and serialization follow insertion order; equality ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleMap<V> {
    entries: IndexMap<Role, V>,
}

impl<V> Default for RoleMap<V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<V> RoleMap<V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a role. An existing assignment is replaced in place and returned.
    pub fn insert(&mut self, role: Role, value: V) -> Option<V> {
        self.entries.insert(role, value)
    }

    pub fn get(&self, role: &str) -> Option<&V> {
        self.entries.get(role)
    }

    pub fn contains(&self, role: &str) -> bool {
        self.entries.contains_key(role)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over assignments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Role, &V)> {
        self.entries.iter()
    }

    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }
}

impl<V> FromIterator<(Role, V)> for RoleMap<V> {
    fn from_iter<I: IntoIterator<Item = (Role, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
