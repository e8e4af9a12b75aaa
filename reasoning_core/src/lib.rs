//! # Reasoning Core (The Brain)
//!
//! A minimal symbolic reasoner. It receives clauses (a verb plus named
//! semantic roles), stores statements as facts, and answers wildcard
//! questions by matching them against those facts.
//!
//! ## Core Components
//!
//! - **clause**: external and internal clause forms and the translator between them
//! - **knowledge_base**: append-only fact store with pattern matching
//! - **inference**: the learn/answer engine
//! - **brain**: the facade a driver talks to
//!
//! ## Design Philosophy
//!
//! - **Closed World**: malformed or unanswerable input is an error, never a guess
//! - **Explicit State**: a [`Brain`] is an ordinary value owned by its caller
//! - **Append-Only**: entities and facts are never mutated once stored

pub mod brain;
pub mod clause;
pub mod error;
pub mod inference;
pub mod knowledge_base;

pub use brain::*;
pub use clause::*;
pub use error::*;
pub use inference::*;
pub use knowledge_base::*;
