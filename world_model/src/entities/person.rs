//! Person definitions.

use serde::{Deserialize, Serialize};

/// A person the brain can reason about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique within a registry.
    pub name: String,
    pub gender: Gender,
    pub age: u32,
}

impl Person {
    /// Create a new person.
    pub fn new(name: impl Into<String>, gender: Gender, age: u32) -> Self {
        Self {
            name: name.into(),
            gender,
            age,
        }
    }
}

/// Grammatical gender, used when a clause refers back to a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
    #[serde(rename = "x")]
    Other,
}

impl Gender {
    /// Short code used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "m",
            Gender::Female => "f",
            Gender::Other => "x",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
