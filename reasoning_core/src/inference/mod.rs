//! Inference Engine - learns statements and answers questions.
//!
//! Every internal clause is dispatched on its kind:
//! 1. **Statement**: store it as a fact, then offer one generalized copy
//!    per universal role the statement does not mention yet
//! 2. **Question**: match the bound roles against the facts, require a
//!    single match, and fill the wildcard from that fact

use world_model::{Role, VerbLexicon};

use crate::clause::{ClauseKind, InternalClause};
use crate::error::{ReasoningError, ReasoningResult};
use crate::knowledge_base::FactStore;

/// Configuration for the inference engine.
#[derive(Debug, Clone, Default)]
pub struct InferenceConfig {
    /// Roles offered as extra askable dimensions of every learned statement.
    pub universal_roles: Vec<Role>,
}

impl InferenceConfig {
    /// Take the universal roles from a lexicon.
    pub fn from_lexicon(lexicon: &VerbLexicon) -> Self {
        Self {
            universal_roles: lexicon.universal_roles().to_vec(),
        }
    }
}

/// The reasoning half of the brain. Owns the fact store.
#[derive(Debug, Clone, Default)]
pub struct InferenceEngine {
    config: InferenceConfig,
    facts: FactStore,
}

impl InferenceEngine {
    /// Create an engine with an empty fact store.
    pub fn new(config: InferenceConfig) -> Self {
        Self {
            config,
            facts: FactStore::new(),
        }
    }

    pub fn facts(&self) -> &FactStore {
        &self.facts
    }

    /// Learn or answer depending on whether the clause has a wildcard.
    ///
    /// Learning yields zero or more generalized clauses; answering yields
    /// exactly one clause on success.
    pub fn think_about(&mut self, clause: InternalClause) -> ReasoningResult<Vec<InternalClause>> {
        match clause.kind() {
            ClauseKind::Statement => self.learn(clause),
            ClauseKind::Question => Ok(vec![self.answer(&clause)?]),
        }
    }

    /// Store a statement and return its generalizations.
    ///
    /// The generalized clauses are derived output only; they are not
    /// stored as facts.
    pub fn learn(&mut self, clause: InternalClause) -> ReasoningResult<Vec<InternalClause>> {
        if let Some(role) = clause.wildcard_roles().next() {
            return Err(ReasoningError::WildcardInStatement {
                verb: clause.verb.clone(),
                role: role.clone(),
            });
        }

        let generalized: Vec<_> = self
            .config
            .universal_roles
            .iter()
            .filter(|role| !clause.roles.contains(role.as_str()))
            .map(|role| clause.clone().with_wildcard(role.clone()))
            .collect();

        self.facts.add_fact(clause);
        Ok(generalized)
    }

    /// Answer a question with exactly one wildcard role from a single fact.
    ///
    /// The fact lookup comes first: a question matching zero or several
    /// facts is reported as such even if it also has several wildcards.
    pub fn answer(&self, clause: &InternalClause) -> ReasoningResult<InternalClause> {
        let pattern = clause.pattern();

        let matches = self.facts.matching_facts(&pattern);
        tracing::debug!(%pattern, matches = matches.len(), "matched facts");

        let fact = match matches.as_slice() {
            [fact] => *fact,
            _ => {
                return Err(ReasoningError::AmbiguousOrMissingFact {
                    matches: matches.len(),
                    pattern,
                })
            }
        };

        let wildcard = clause.wildcard_role()?;
        let value = fact
            .clause
            .roles
            .get(wildcard.as_str())
            .copied()
            .flatten()
            .ok_or_else(|| ReasoningError::UnansweredRole {
                fact: fact.id,
                pattern: pattern.clone(),
                role: wildcard.clone(),
            })?;

        tracing::debug!(fact = %fact.id, role = %wildcard, entity = %value, "answered");
        Ok(clause.clone().with_entity(wildcard.clone(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use world_model::{EntityId, EntityRegistry, Gender, Person};

    fn setup() -> (InferenceEngine, EntityId, EntityId) {
        let mut registry = EntityRegistry::new();
        let tim = registry.register(Person::new("Tim", Gender::Male, 28)).unwrap();
        let tom = registry.register(Person::new("Tom", Gender::Male, 26)).unwrap();

        let engine = InferenceEngine::new(InferenceConfig {
            universal_roles: vec![Role::new("because")],
        });
        (engine, tim, tom)
    }

    fn see(agent: EntityId, target: EntityId) -> InternalClause {
        InternalClause::new("see")
            .with_entity("agent", agent)
            .with_entity("target", target)
    }

    #[test]
    fn test_learn_stores_and_generalizes() {
        let (mut engine, tim, tom) = setup();

        let generalized = engine.learn(see(tim, tom)).unwrap();

        assert_eq!(generalized, vec![see(tim, tom).with_wildcard("because")]);
        assert_eq!(engine.facts().len(), 1);
        // The stored fact does not pick up the generalized role.
        let fact = engine.facts().iter().next().unwrap();
        assert_eq!(fact.clause, see(tim, tom));
    }

    #[test]
    fn test_learn_skips_universal_roles_already_present() {
        let (mut engine, tim, tom) = setup();

        let generalized = engine
            .learn(see(tim, tom).with_entity("because", tim))
            .unwrap();

        assert!(generalized.is_empty());
        assert_eq!(engine.facts().len(), 1);
    }

    #[test]
    fn test_learn_twice_keeps_both_facts() {
        let (mut engine, tim, tom) = setup();

        let first = engine.learn(see(tim, tom)).unwrap();
        let second = engine.learn(see(tim, tom)).unwrap();

        assert_eq!(first, second);
        assert_eq!(engine.facts().len(), 2);
    }

    #[test]
    fn test_learn_rejects_wildcards() {
        let (mut engine, _, tom) = setup();

        let question = InternalClause::new("see")
            .with_wildcard("agent")
            .with_entity("target", tom);
        let err = engine.learn(question).unwrap_err();

        assert!(matches!(
            err,
            ReasoningError::WildcardInStatement { ref role, .. } if role.as_str() == "agent"
        ));
        assert!(engine.facts().is_empty());
    }

    #[test]
    fn test_no_universal_roles_means_no_generalization() {
        let (_, tim, tom) = setup();
        let mut engine = InferenceEngine::default();

        assert!(engine.learn(see(tim, tom)).unwrap().is_empty());
        assert_eq!(engine.facts().len(), 1);
    }

    #[test]
    fn test_answer_fills_wildcard() {
        let (mut engine, tim, tom) = setup();
        engine.learn(see(tim, tom)).unwrap();

        let question = InternalClause::new("see")
            .with_wildcard("agent")
            .with_entity("target", tom);

        assert_eq!(engine.answer(&question).unwrap(), see(tim, tom));
    }

    #[test]
    fn test_answer_ambiguous() {
        let (mut engine, tim, tom) = setup();
        engine.learn(see(tim, tom)).unwrap();
        engine.learn(see(tom, tim)).unwrap();

        let question = InternalClause::new("see")
            .with_wildcard("agent")
            .with_entity("target", tom);

        let err = engine.answer(&question).unwrap_err();
        assert!(matches!(err, ReasoningError::AmbiguousOrMissingFact { matches: 2, .. }));
    }

    #[test]
    fn test_answer_missing() {
        let (engine, _, tom) = setup();

        let question = InternalClause::new("hear")
            .with_wildcard("agent")
            .with_entity("target", tom);

        let err = engine.answer(&question).unwrap_err();
        assert!(matches!(err, ReasoningError::AmbiguousOrMissingFact { matches: 0, .. }));
    }

    #[test]
    fn test_answer_malformed() {
        let (mut engine, tim, tom) = setup();
        engine.learn(see(tim, tom)).unwrap();

        let question = InternalClause::new("see")
            .with_wildcard("agent")
            .with_wildcard("target");

        let err = engine.answer(&question).unwrap_err();
        assert!(matches!(err, ReasoningError::MalformedQuestion { wildcards: 2, .. }));
    }

    #[test]
    fn test_answer_checks_facts_before_wildcards() {
        let (mut engine, tim, tom) = setup();
        engine.learn(see(tim, tom)).unwrap();
        engine.learn(see(tom, tim)).unwrap();

        let question = InternalClause::new("see")
            .with_wildcard("agent")
            .with_wildcard("target");

        let err = engine.answer(&question).unwrap_err();
        assert!(matches!(err, ReasoningError::AmbiguousOrMissingFact { matches: 2, .. }));
    }

    #[test]
    fn test_answer_role_missing_from_fact() {
        let (mut engine, tim, tom) = setup();
        engine.learn(see(tim, tom)).unwrap();

        // Only `agent` is bound, so the stored fact matches, but it never
        // said anything about `because`.
        let question = InternalClause::new("see")
            .with_entity("agent", tim)
            .with_wildcard("because");

        let err = engine.answer(&question).unwrap_err();
        assert!(matches!(
            err,
            ReasoningError::UnansweredRole { ref role, .. } if role.as_str() == "because"
        ));
    }

    #[test]
    fn test_think_about_dispatches_on_kind() {
        let (mut engine, tim, tom) = setup();

        let learned = engine.think_about(see(tim, tom)).unwrap();
        assert_eq!(learned.len(), 1);

        let answered = engine
            .think_about(
                InternalClause::new("see")
                    .with_entity("agent", tim)
                    .with_wildcard("target"),
            )
            .unwrap();
        assert_eq!(answered, vec![see(tim, tom)]);
        assert_eq!(engine.facts().len(), 1);
    }
}
