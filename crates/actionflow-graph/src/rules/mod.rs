//! Dependency inference rules
//!
//! Each rule scans the annotated task list and appends candidate edges.
//! Rules never deduplicate; the assembler does that once all rules
//! have run, so the order rules run in decides which relation survives
//! for a repeated pair.

mod aggregation;
mod group;
mod temporal;

pub use aggregation::AggregationRule;
pub use group::GroupRule;
pub use temporal::TemporalRule;

use crate::annotate::AnnotatedTask;
use actionflow_core::{Edge, Relation};
use std::fmt;
use tracing::debug;

/// A heuristic that proposes dependency edges
pub trait DependencyRule: fmt::Debug + Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Relation attached to every edge this rule emits
    fn relation(&self) -> Relation;

    /// Append candidate edges for `tasks` to `candidates`
    fn apply(&self, tasks: &[AnnotatedTask<'_>], candidates: &mut Vec<Edge>);
}

pub(crate) fn emit(
    candidates: &mut Vec<Edge>,
    from: &AnnotatedTask<'_>,
    to: &AnnotatedTask<'_>,
    relation: Relation,
) {
    debug!(from = %from.id(), to = %to.id(), %relation, "candidate edge");
    candidates.push(Edge::new(from.id().clone(), to.id().clone(), relation));
}
