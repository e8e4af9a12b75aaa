//! The entity registry - a bijection between names and references.

use std::collections::HashMap;

use super::{EntityId, Person};
use crate::error::{WorldError, WorldResult};

/// Owns every entity of a run and maps names to stable references.
///
/// Entities are append-only: once registered they are never mutated or
/// removed, so an [`EntityId`] handed out by this registry stays valid.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    people: Vec<Person>,
    by_name: HashMap<String, EntityId>,
}

impl EntityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a person under its name and return the new reference.
    ///
    /// Fails with [`WorldError::DuplicateEntityName`] if the name is taken.
    pub fn register(&mut self, person: Person) -> WorldResult<EntityId> {
        if self.by_name.contains_key(&person.name) {
            return Err(WorldError::DuplicateEntityName { name: person.name });
        }

        let id = EntityId(self.people.len());
        tracing::debug!(%id, name = %person.name, "registered entity");

        self.by_name.insert(person.name.clone(), id);
        self.people.push(person);
        Ok(id)
    }

    /// Look up a name. Unknown names are not an error.
    pub fn resolve(&self, name: &str) -> Option<EntityId> {
        self.by_name.get(name).copied()
    }

    /// Get the entity behind a reference.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not minted by this registry.
    pub fn describe(&self, id: EntityId) -> &Person {
        &self.people[id.0]
    }

    /// Get the entity behind a reference, if it belongs to this registry.
    pub fn get(&self, id: EntityId) -> Option<&Person> {
        self.people.get(id.0)
    }

    /// Get the total number of registered entities.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Iterate over entities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Person)> {
        self.people
            .iter()
            .enumerate()
            .map(|(index, person)| (EntityId(index), person))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Gender;

    fn tim() -> Person {
        Person::new("Tim", Gender::Male, 28)
    }

    fn tom() -> Person {
        Person::new("Tom", Gender::Male, 26)
    }

    #[test]
    fn test_register_assigns_sequential_references() {
        let mut registry = EntityRegistry::new();

        let tim_id = registry.register(tim()).unwrap();
        let tom_id = registry.register(tom()).unwrap();

        assert_eq!(tim_id.index(), 0);
        assert_eq!(tom_id.index(), 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_resolve_and_describe() {
        let mut registry = EntityRegistry::new();
        let id = registry.register(tom()).unwrap();

        assert_eq!(registry.resolve("Tom"), Some(id));
        assert_eq!(registry.describe(id).age, 26);
        assert!(registry.resolve("Nobody").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = EntityRegistry::new();
        registry.register(tim()).unwrap();

        let err = registry
            .register(Person::new("Tim", Gender::Female, 40))
            .unwrap_err();
        assert!(matches!(err, WorldError::DuplicateEntityName { name } if name == "Tim"));

        // The original entry is untouched.
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.describe(registry.resolve("Tim").unwrap()).age, 28);
    }

    #[test]
    fn test_get_out_of_range() {
        let mut other = EntityRegistry::new();
        other.register(tim()).unwrap();
        let foreign = other.register(tom()).unwrap();

        let mut registry = EntityRegistry::new();
        registry.register(tim()).unwrap();

        assert!(registry.get(foreign).is_none());
    }

    #[test]
    fn test_iter_in_registration_order() {
        let mut registry = EntityRegistry::new();
        registry.register(tom()).unwrap();
        registry.register(tim()).unwrap();

        let names: Vec<_> = registry.iter().map(|(_, p)| p.name.as_str()).collect();
        assert_eq!(names, vec!["Tom", "Tim"]);
    }
}
