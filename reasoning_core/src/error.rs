//! Error types for the brain.
//!
//! Every variant is a contract violation for the clause being processed:
//! the brain assumes a closed, well-formed world and never guesses.

use thiserror::Error;

use world_model::{Role, WorldError};

use crate::knowledge_base::{FactId, Pattern};

#[derive(Debug, Error)]
pub enum ReasoningError {
    #[error("Question '{verb}' must have exactly one wildcard role, found {wildcards}")]
    MalformedQuestion { verb: String, wildcards: usize },

    #[error("Statement '{verb}' leaves role '{role}' unbound")]
    WildcardInStatement { verb: String, role: Role },

    #[error("Pattern {pattern} matched {matches} facts, expected exactly one")]
    AmbiguousOrMissingFact { pattern: Pattern, matches: usize },

    #[error("Fact {fact} matches pattern {pattern} but has no value for role '{role}'")]
    UnansweredRole {
        fact: FactId,
        pattern: Pattern,
        role: Role,
    },

    #[error(transparent)]
    World(#[from] WorldError),
}

pub type ReasoningResult<T> = Result<T, ReasoningError>;
