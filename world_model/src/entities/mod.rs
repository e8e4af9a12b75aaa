//! Entity definitions and the registry that names them.

mod person;
mod registry;

pub use person::*;
pub use registry::*;

use serde::Serialize;

/// Stable reference to a registered entity.
///
/// References are minted by [`EntityRegistry::register`] in registration
/// order, starting at zero, and stay valid for the lifetime of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(usize);

impl EntityId {
    /// Position of the entity in the registry that minted it.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
