//! Conversion between external (name-based) and internal (reference-based)
//! clauses.

use world_model::EntityRegistry;

use super::{ExternalClause, Filler, InternalClause, RoleMap};

/// Translates clauses against an entity registry.
///
/// The translation is lossy on the way in: a name the registry does not
/// know and the explicit unknown marker both become a wildcard. Roles are
/// not checked against the lexicon here; whatever the caller supplies
/// passes through.
#[derive(Debug, Clone, Copy)]
pub struct ClauseTranslator<'a> {
    registry: &'a EntityRegistry,
}

impl<'a> ClauseTranslator<'a> {
    pub fn new(registry: &'a EntityRegistry) -> Self {
        Self { registry }
    }

    /// Resolve every filler to an entity reference.
    pub fn to_internal(&self, clause: &ExternalClause) -> InternalClause {
        let roles: RoleMap<_> = clause
            .roles
            .iter()
            .map(|(role, filler)| {
                let value = match filler {
                    Filler::Name(name) => {
                        let id = self.registry.resolve(name);
                        if id.is_none() {
                            tracing::debug!(%role, %name, "unresolved name read as wildcard");
                        }
                        id
                    }
                    Filler::Unknown => None,
                };
                (role.clone(), value)
            })
            .collect();

        InternalClause {
            verb: clause.verb.clone(),
            roles,
        }
    }

    /// Substitute entity names back in; wildcards become the unknown marker.
    pub fn to_external(&self, clause: &InternalClause) -> ExternalClause {
        let roles: RoleMap<_> = clause
            .roles
            .iter()
            .map(|(role, value)| {
                let filler = match value {
                    Some(id) => Filler::name(self.registry.describe(*id).name.clone()),
                    None => Filler::Unknown,
                };
                (role.clone(), filler)
            })
            .collect();

        ExternalClause {
            verb: clause.verb.clone(),
            roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use world_model::{Gender, Person};

    fn registry() -> EntityRegistry {
        let mut registry = EntityRegistry::new();
        registry.register(Person::new("Tim", Gender::Male, 28)).unwrap();
        registry.register(Person::new("Tom", Gender::Male, 26)).unwrap();
        registry
    }

    #[test]
    fn test_to_internal_resolves_names() {
        let registry = registry();
        let translator = ClauseTranslator::new(&registry);

        let clause = ExternalClause::new("see")
            .with_role("agent", "Tim")
            .with_unknown("target");
        let internal = translator.to_internal(&clause);

        assert_eq!(
            internal,
            InternalClause::new("see")
                .with_entity("agent", registry.resolve("Tim").unwrap())
                .with_wildcard("target")
        );
    }

    #[test]
    fn test_round_trip_with_known_names() {
        let registry = registry();
        let translator = ClauseTranslator::new(&registry);

        let clause = ExternalClause::new("see")
            .with_role("agent", "Tom")
            .with_role("target", "Tim");

        assert_eq!(translator.to_external(&translator.to_internal(&clause)), clause);
    }

    #[test]
    fn test_unknown_marker_round_trips() {
        let registry = registry();
        let translator = ClauseTranslator::new(&registry);

        let clause = ExternalClause::new("see")
            .with_unknown("agent")
            .with_role("target", "Tom");

        assert_eq!(translator.to_external(&translator.to_internal(&clause)), clause);
    }

    // Known ambiguity: an unregistered name cannot be told apart from a
    // deliberate wildcard once translated.
    #[test]
    fn test_unregistered_name_collapses_to_wildcard() {
        let registry = registry();
        let translator = ClauseTranslator::new(&registry);

        let with_stranger = ExternalClause::new("see")
            .with_role("agent", "Stranger")
            .with_role("target", "Tom");
        let with_marker = ExternalClause::new("see")
            .with_unknown("agent")
            .with_role("target", "Tom");

        let internal = translator.to_internal(&with_stranger);
        assert_eq!(internal, translator.to_internal(&with_marker));
        assert!(internal.is_question());

        // The name does not come back.
        assert_eq!(translator.to_external(&internal), with_marker);
    }

    #[test]
    fn test_roles_outside_lexicon_pass_through() {
        let registry = registry();
        let translator = ClauseTranslator::new(&registry);

        let clause = ExternalClause::new("juggle").with_role("instrument", "Tim");
        let internal = translator.to_internal(&clause);

        assert_eq!(internal.verb, "juggle");
        assert!(internal.roles.get("instrument").unwrap().is_some());
    }
}
