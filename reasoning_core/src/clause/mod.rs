//! Clause representations.
//!
//! A clause is a verb plus role fillers and comes in two forms:
//! - [`ExternalClause`]: fillers are entity names or the unknown marker.
//!   Used only at the boundary of the brain.
//! - [`InternalClause`]: fillers are entity references, or `None` for a
//!   wildcard. This is what the inference engine reasons over.
//!
//! Only the roles actually supplied are present in a clause; the verb's
//! full role set from the lexicon is not filled in.

mod role_map;
mod translator;

pub use role_map::*;
pub use translator::*;

use serde::{Deserialize, Serialize};
use std::fmt;

use world_model::{EntityId, Role};

use crate::error::{ReasoningError, ReasoningResult};
use crate::knowledge_base::Pattern;

/// The filler written for a role whose value is unknown.
pub const UNKNOWN_MARKER: &str = "WHO";

/// What fills a role in an external clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Filler {
    /// An entity referred to by name.
    Name(String),
    /// The unknown marker.
    Unknown,
}

impl Filler {
    pub fn name(name: impl Into<String>) -> Self {
        Filler::Name(name.into())
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Filler::Unknown)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filler::Name(name) => name,
            Filler::Unknown => UNKNOWN_MARKER,
        }
    }
}

impl From<String> for Filler {
    fn from(value: String) -> Self {
        if value == UNKNOWN_MARKER {
            Filler::Unknown
        } else {
            Filler::Name(value)
        }
    }
}

impl From<&str> for Filler {
    fn from(value: &str) -> Self {
        Filler::from(value.to_owned())
    }
}

impl From<Filler> for String {
    fn from(filler: Filler) -> Self {
        match filler {
            Filler::Name(name) => name,
            Filler::Unknown => UNKNOWN_MARKER.to_owned(),
        }
    }
}

impl fmt::Display for Filler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A clause as the outside world writes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalClause {
    pub verb: String,
    pub roles: RoleMap<Filler>,
}

impl ExternalClause {
    /// Create a clause with no roles.
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            roles: RoleMap::new(),
        }
    }

    /// Assign a role.
    pub fn with_role(mut self, role: impl Into<Role>, filler: impl Into<Filler>) -> Self {
        self.roles.insert(role.into(), filler.into());
        self
    }

    /// Leave a role explicitly unknown.
    pub fn with_unknown(self, role: impl Into<Role>) -> Self {
        self.with_role(role, Filler::Unknown)
    }

    /// Render as indented JSON for display.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ExternalClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.verb)?;
        for (i, (role, filler)) in self.roles.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{role}={filler}")?;
        }
        f.write_str(")")
    }
}

/// Whether a clause states something or asks about something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
    /// Every role is bound.
    Statement,
    /// At least one role is a wildcard.
    Question,
}

/// A clause as the brain reasons over it. `None` marks a wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InternalClause {
    pub verb: String,
    pub roles: RoleMap<Option<EntityId>>,
}

impl InternalClause {
    /// Create a clause with no roles.
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            roles: RoleMap::new(),
        }
    }

    /// Return a copy of this clause with one role assigned.
    pub fn with_role(mut self, role: impl Into<Role>, value: Option<EntityId>) -> Self {
        self.roles.insert(role.into(), value);
        self
    }

    /// Bind a role to an entity.
    pub fn with_entity(self, role: impl Into<Role>, id: EntityId) -> Self {
        self.with_role(role, Some(id))
    }

    /// Leave a role as a wildcard.
    pub fn with_wildcard(self, role: impl Into<Role>) -> Self {
        self.with_role(role, None)
    }

    pub fn kind(&self) -> ClauseKind {
        if self.is_question() {
            ClauseKind::Question
        } else {
            ClauseKind::Statement
        }
    }

    pub fn is_question(&self) -> bool {
        self.roles.values().any(Option::is_none)
    }

    /// Roles currently bound to the wildcard, in clause order.
    pub fn wildcard_roles(&self) -> impl Iterator<Item = &Role> {
        self.roles
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(role, _)| role)
    }

    /// The single wildcard role of a well-formed question.
    pub fn wildcard_role(&self) -> ReasoningResult<&Role> {
        let mut wildcards = self.wildcard_roles();
        match (wildcards.next(), wildcards.next()) {
            (Some(role), None) => Ok(role),
            _ => Err(ReasoningError::MalformedQuestion {
                verb: self.verb.clone(),
                wildcards: self.wildcard_roles().count(),
            }),
        }
    }

    /// The verb plus every bound role.
    pub fn pattern(&self) -> Pattern {
        Pattern::from_clause(self)
    }
}
