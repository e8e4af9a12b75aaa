//! The Brain - the explicit entry point tying world, translator and engine
//! together.

use world_model::{World, WorldConfig};

use crate::clause::{ClauseKind, ClauseTranslator, ExternalClause, Filler, InternalClause};
use crate::error::ReasoningResult;
use crate::inference::{InferenceConfig, InferenceEngine};

/// A reasoner over one world. Construct once and feed it clauses.
#[derive(Debug, Clone)]
pub struct Brain {
    world: World,
    engine: InferenceEngine,
}

impl Brain {
    /// Create a brain over a world; universal roles come from its lexicon.
    pub fn new(world: World) -> Self {
        let engine = InferenceEngine::new(InferenceConfig::from_lexicon(&world.lexicon));
        Self { world, engine }
    }

    /// Build the world from configuration, then the brain over it.
    pub fn from_config(config: WorldConfig) -> ReasoningResult<Self> {
        Ok(Self::new(World::from_config(config)?))
    }

    /// A brain over the default roster.
    pub fn with_defaults() -> ReasoningResult<Self> {
        Self::from_config(WorldConfig::default())
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn engine(&self) -> &InferenceEngine {
        &self.engine
    }

    /// Translate, think, and translate the results back.
    ///
    /// A failed clause leaves the brain as it was: questions never touch
    /// the fact store, and a statement is only stored once it is known to
    /// be well formed.
    pub fn receive(&mut self, clause: &ExternalClause) -> ReasoningResult<Vec<ExternalClause>> {
        let translator = ClauseTranslator::new(&self.world.registry);
        let internal = translator.to_internal(clause);
        self.check_lexicon(&internal);

        let kind = internal.kind();
        let wildcard = internal.wildcard_roles().next().cloned();

        let thoughts = self.engine.think_about(internal)?;
        let outputs: Vec<_> = thoughts.iter().map(|t| translator.to_external(t)).collect();

        if let (ClauseKind::Question, Some(role)) = (kind, wildcard) {
            for output in &outputs {
                if let Some(Filler::Name(name)) = output.roles.get(role.as_str()) {
                    tracing::info!(%role, argument = %name, "notable argument");
                }
            }
        }

        Ok(outputs)
    }

    /// Warn about roles the lexicon does not list. Nothing is rejected.
    fn check_lexicon(&self, clause: &InternalClause) {
        let lexicon = &self.world.lexicon;
        if lexicon.spec(&clause.verb).is_none() {
            tracing::warn!(verb = %clause.verb, "verb not in lexicon");
            return;
        }
        for role in clause.roles.roles() {
            if !lexicon.knows_role(&clause.verb, role.as_str()) {
                tracing::warn!(verb = %clause.verb, %role, "role not in lexicon for verb");
            }
        }
    }
}
