//! # World Model
//!
//! The "roster" crate - the entities a brain can talk about and the verbs
//! (with their semantic roles) it understands. This crate holds data only
//! and does not contain any reasoning logic.

pub mod entities;
pub mod error;
pub mod lexicon;
pub mod world;

pub use entities::*;
pub use error::*;
pub use lexicon::*;
pub use world::*;
