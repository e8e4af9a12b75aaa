//! Error types for world setup.

use thiserror::Error;

/// Errors raised while building the roster and lexicon.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("Entity name '{name}' is already registered")]
    DuplicateEntityName { name: String },

    #[error("Verb '{lemma}' is already in the lexicon")]
    DuplicateVerb { lemma: String },

    #[error("Invalid world configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to read world configuration from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type WorldResult<T> = Result<T, WorldError>;
