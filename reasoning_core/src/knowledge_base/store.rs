//! Fact Store - append-only memory with pattern lookup.

use super::{Fact, FactId, Pattern};
use crate::clause::InternalClause;

/// The collection of learned facts.
///
/// Facts are only ever appended. There is no deduplication and no
/// validation against the lexicon: learning a statement twice stores it
/// twice.
#[derive(Debug, Clone, Default)]
pub struct FactStore {
    facts: Vec<Fact>,
}

impl FactStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement as a new fact.
    ///
    /// Returns the fact ID for reference.
    pub fn add_fact(&mut self, clause: InternalClause) -> FactId {
        let fact = Fact::new(self.facts.len(), clause);
        let id = fact.id;

        tracing::debug!(fact = %id, sequence = fact.sequence, verb = %fact.verb(), "stored fact");

        self.facts.push(fact);
        id
    }

    /// All facts accepting the pattern, in insertion order.
    pub fn matching_facts(&self, pattern: &Pattern) -> Vec<&Fact> {
        self.find_facts(|fact| fact.accepts_pattern(pattern))
    }

    /// Find facts matching a predicate, in insertion order.
    pub fn find_facts<F>(&self, predicate: F) -> Vec<&Fact>
    where
        F: Fn(&Fact) -> bool,
    {
        self.facts.iter().filter(|f| predicate(f)).collect()
    }

    /// Get fact by ID.
    pub fn get_fact(&self, id: FactId) -> Option<&Fact> {
        self.facts.iter().find(|fact| fact.id == id)
    }

    /// Iterate over all facts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }

    /// Get the total number of facts.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}
