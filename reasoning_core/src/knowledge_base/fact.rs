//! Fact definitions - learned statements in the store.

use serde::Serialize;
use uuid::Uuid;

use super::Pattern;
use crate::clause::InternalClause;

/// Unique identifier for facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FactId(pub Uuid);

impl FactId {
    /// Create a new random fact ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FactId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A statement the brain has learned.
#[derive(Debug, Clone, Serialize)]
pub struct Fact {
    pub id: FactId,

    /// Position in the store; facts are scanned in this order.
    pub sequence: usize,

    /// The statement exactly as it was learned.
    pub clause: InternalClause,
}

impl Fact {
    /// Create a new fact for a statement.
    pub fn new(sequence: usize, clause: InternalClause) -> Self {
        Self {
            id: FactId::new(),
            sequence,
            clause,
        }
    }

    pub fn verb(&self) -> &str {
        &self.clause.verb
    }

    /// Check if this fact mentions every role of the pattern for its verb.
    pub fn accepts_pattern(&self, pattern: &Pattern) -> bool {
        pattern.matches(&self.clause)
    }
}
