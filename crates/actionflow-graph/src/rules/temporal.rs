//! Temporal dependency rule
//!
//! A task with a sequencing cue ("after", "once", ...) that mentions
//! another task's owner depends on that owner's task.

use super::{emit, DependencyRule};
use crate::annotate::AnnotatedTask;
use crate::config::{GraphConfig, SelfChainException};
use crate::owner::mentions_owner;
use crate::semantics::contains_any;
use actionflow_core::{Edge, Relation};

/// Emits `temporal_after` edges
#[derive(Debug, Clone)]
pub struct TemporalRule {
    triggers: Vec<String>,
    exception: Option<SelfChainException>,
}

impl TemporalRule {
    /// Create with lower-case triggers and an optional same-owner exception
    #[must_use]
    pub fn new(triggers: Vec<String>, exception: Option<SelfChainException>) -> Self {
        Self {
            triggers,
            exception,
        }
    }

    /// Create from a (normalized) config
    #[must_use]
    pub fn from_config(config: &GraphConfig) -> Self {
        let exception = config
            .self_chain_exception
            .enabled
            .then(|| config.self_chain_exception.clone());
        Self::new(config.temporal_triggers.clone(), exception)
    }

    /// Same-owner pair that may still chain (e.g. own review -> own client update)
    fn self_chain_allowed(&self, target: &AnnotatedTask<'_>, source: &AnnotatedTask<'_>) -> bool {
        self.exception.as_ref().is_some_and(|ex| {
            target.category == ex.target_category
                && source.category == ex.source_category
                && ex
                    .required_terms
                    .iter()
                    .all(|term| target.lower.contains(term.as_str()))
        })
    }
}

impl DependencyRule for TemporalRule {
    fn name(&self) -> &'static str {
        "temporal"
    }

    fn relation(&self) -> Relation {
        Relation::TemporalAfter
    }

    fn apply(&self, tasks: &[AnnotatedTask<'_>], candidates: &mut Vec<Edge>) {
        for target in tasks {
            if !contains_any(&target.lower, &self.triggers) {
                continue;
            }

            for source in tasks {
                if source.is(target) || source.administrative {
                    continue;
                }
                if source.same_owner(target) && !self.self_chain_allowed(target, source) {
                    continue;
                }
                if mentions_owner(&target.lower, &source.owner) {
                    emit(candidates, source, target, self.relation());
                }
            }
        }
    }
}
