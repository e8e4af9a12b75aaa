//! Patterns - the lookup key for facts.

use serde::Serialize;
use std::fmt;

use world_model::Role;

use crate::clause::InternalClause;

/// A verb plus the role names a fact must mention. Values are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Pattern {
    pub verb: String,
    pub roles: Vec<Role>,
}

impl Pattern {
    /// Create a pattern from a verb and role names.
    pub fn new<R: Into<Role>>(verb: impl Into<String>, roles: impl IntoIterator<Item = R>) -> Self {
        Self {
            verb: verb.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Derive a pattern from the bound roles of a clause, in clause order.
    pub fn from_clause(clause: &InternalClause) -> Self {
        Self {
            verb: clause.verb.clone(),
            roles: clause
                .roles
                .iter()
                .filter(|(_, value)| value.is_some())
                .map(|(role, _)| role.clone())
                .collect(),
        }
    }

    /// Check if a clause has this verb and mentions every pattern role.
    ///
    /// Presence is all that counts: a role bound to a wildcard still
    /// satisfies the pattern.
    pub fn matches(&self, clause: &InternalClause) -> bool {
        clause.verb == self.verb
            && self
                .roles
                .iter()
                .all(|role| clause.roles.contains(role.as_str()))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.verb)?;
        for (i, role) in self.roles.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{role}")?;
        }
        f.write_str("]")
    }
}
