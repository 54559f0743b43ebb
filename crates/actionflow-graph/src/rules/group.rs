//! Group dependency rule
//!
//! Collective-completion language ("once both", "after all") cannot say
//! which tasks it means, so the task is linked from every eligible
//! candidate: non-administrative and owned by someone else. This
//! over-approximation is intentional.

use super::{emit, DependencyRule};
use crate::annotate::AnnotatedTask;
use crate::config::GraphConfig;
use crate::semantics::contains_any;
use actionflow_core::{Edge, Relation};

/// Emits `group_dependency` edges
#[derive(Debug, Clone)]
pub struct GroupRule {
    triggers: Vec<String>,
}

impl GroupRule {
    /// Create with lower-case triggers
    #[inline]
    #[must_use]
    pub fn new(triggers: Vec<String>) -> Self {
        Self { triggers }
    }

    /// Create from a (normalized) config
    #[inline]
    #[must_use]
    pub fn from_config(config: &GraphConfig) -> Self {
        Self::new(config.group_triggers.clone())
    }
}

impl DependencyRule for GroupRule {
    fn name(&self) -> &'static str {
        "group"
    }

    fn relation(&self) -> Relation {
        Relation::GroupDependency
    }

    fn apply(&self, tasks: &[AnnotatedTask<'_>], candidates: &mut Vec<Edge>) {
        for target in tasks.iter().filter(|t| contains_any(&t.lower, &self.triggers)) {
            let sources = tasks
                .iter()
                .filter(|s| !s.is(target) && !s.administrative && !s.same_owner(target));
            for source in sources {
                emit(candidates, source, target, self.relation());
            }
        }
    }
}
