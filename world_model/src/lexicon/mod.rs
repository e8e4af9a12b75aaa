//! The verb lexicon: which semantic roles each verb accepts.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;

use crate::error::{WorldError, WorldResult};

/// A named semantic slot a verb accepts (e.g. `agent`, `target`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    /// Create a role from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Role {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A verb and the fixed set of roles it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbSpec {
    pub lemma: String,
    pub roles: Vec<Role>,
}

impl VerbSpec {
    /// Create a verb entry.
    pub fn new<R: Into<Role>>(
        lemma: impl Into<String>,
        roles: impl IntoIterator<Item = R>,
    ) -> Self {
        Self {
            lemma: lemma.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if this verb lists the given role.
    pub fn accepts(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.as_str() == role)
    }
}

/// Static verb configuration, fixed once a brain is constructed.
///
/// Besides per-verb roles the lexicon carries the universal roles: roles
/// that apply to every verb and are offered as extra askable dimensions of
/// each learned statement.
#[derive(Debug, Clone, Default)]
pub struct VerbLexicon {
    verbs: HashMap<String, VerbSpec>,
    universal_roles: Vec<Role>,
}

impl VerbLexicon {
    /// Create an empty lexicon with no universal roles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the universal roles, keeping their order and dropping repeats.
    pub fn with_universal_roles<R: Into<Role>>(
        mut self,
        roles: impl IntoIterator<Item = R>,
    ) -> Self {
        self.universal_roles.clear();
        for role in roles {
            let role = role.into();
            if !self.universal_roles.contains(&role) {
                self.universal_roles.push(role);
            }
        }
        self
    }

    /// Add a verb. Each lemma may only be defined once.
    pub fn add_verb(&mut self, spec: VerbSpec) -> WorldResult<()> {
        if self.verbs.contains_key(&spec.lemma) {
            return Err(WorldError::DuplicateVerb { lemma: spec.lemma });
        }
        self.verbs.insert(spec.lemma.clone(), spec);
        Ok(())
    }

    /// Roles the verb accepts, or `None` for an unknown verb.
    pub fn roles_for(&self, verb: &str) -> Option<&[Role]> {
        self.verbs.get(verb).map(|spec| spec.roles.as_slice())
    }

    /// Get the full entry for a verb.
    pub fn spec(&self, verb: &str) -> Option<&VerbSpec> {
        self.verbs.get(verb)
    }

    pub fn universal_roles(&self) -> &[Role] {
        &self.universal_roles
    }

    /// Check if a role is meaningful for a verb, either listed or universal.
    pub fn knows_role(&self, verb: &str, role: &str) -> bool {
        self.universal_roles.iter().any(|r| r.as_str() == role)
            || self.spec(verb).is_some_and(|spec| spec.accepts(role))
    }

    /// Get the total number of verbs.
    pub fn verb_count(&self) -> usize {
        self.verbs.len()
    }
}
