//! Knowledge Base module - the brain's long-term memory.
//!
//! The knowledge base consists of:
//! - **Facts**: learned statements, stored verbatim and never mutated
//! - **Patterns**: a verb plus role names, used to select facts

mod fact;
mod pattern;
mod store;

pub use fact::*;
pub use pattern::*;
pub use store::*;
