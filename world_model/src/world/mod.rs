//! World setup - the roster and lexicon a brain is constructed with.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::entities::{EntityId, EntityRegistry, Gender, Person};
use crate::error::{WorldError, WorldResult};
use crate::lexicon::{Role, VerbLexicon, VerbSpec};

/// Declarative description of a world, usually loaded from TOML.
///
/// ```toml
/// universal_roles = ["because"]
///
/// [[persons]]
/// name = "Tim"
/// gender = "m"
/// age = 28
///
/// [[verbs]]
/// lemma = "see"
/// roles = ["agent", "target"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    #[serde(default)]
    pub universal_roles: Vec<Role>,

    #[serde(default)]
    pub persons: Vec<Person>,

    #[serde(default)]
    pub verbs: Vec<VerbSpec>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            universal_roles: vec![Role::new("because")],
            persons: vec![
                Person::new("Tim", Gender::Male, 28),
                Person::new("Tom", Gender::Male, 26),
            ],
            verbs: vec![VerbSpec::new("see", ["agent", "target"])],
        }
    }
}

impl WorldConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(source: &str) -> WorldResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> WorldResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| WorldError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

/// The entities and verbs known for one run.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub registry: EntityRegistry,
    pub lexicon: VerbLexicon,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a world, registering persons in the order they are listed.
    pub fn from_config(config: WorldConfig) -> WorldResult<Self> {
        let mut world = Self {
            registry: EntityRegistry::new(),
            lexicon: VerbLexicon::new().with_universal_roles(config.universal_roles),
        };

        for person in config.persons {
            world.add_person(person)?;
        }
        for verb in config.verbs {
            world.lexicon.add_verb(verb)?;
        }

        tracing::debug!(
            entities = world.registry.len(),
            verbs = world.lexicon.verb_count(),
            "world constructed"
        );
        Ok(world)
    }

    /// Add a person to the world.
    pub fn add_person(&mut self, person: Person) -> WorldResult<EntityId> {
        self.registry.register(person)
    }
}
