//! Aggregation rule
//!
//! Review work gates on build work by default: every task in the
//! target category depends on every task in the source category, with
//! no trigger words and no owner guard.

use super::{emit, DependencyRule};
use crate::annotate::AnnotatedTask;
use crate::config::{AggregationPair, GraphConfig};
use actionflow_core::{Edge, Relation};

/// Emits `aggregation` edges
#[derive(Debug, Clone, Copy)]
pub struct AggregationRule {
    pair: AggregationPair,
}

impl AggregationRule {
    /// Create for a category pair
    #[inline]
    #[must_use]
    pub fn new(pair: AggregationPair) -> Self {
        Self { pair }
    }

    /// Create from config
    #[inline]
    #[must_use]
    pub fn from_config(config: &GraphConfig) -> Self {
        Self::new(config.aggregation)
    }
}

impl Default for AggregationRule {
    fn default() -> Self {
        Self::new(AggregationPair::default())
    }
}

impl DependencyRule for AggregationRule {
    fn name(&self) -> &'static str {
        "aggregation"
    }

    fn relation(&self) -> Relation {
        Relation::Aggregation
    }

    fn apply(&self, tasks: &[AnnotatedTask<'_>], candidates: &mut Vec<Edge>) {
        for target in tasks.iter().filter(|t| t.category == self.pair.target) {
            // administrative tasks never act as a prerequisite
            let sources = tasks.iter().filter(|s| {
                s.category == self.pair.source && !s.administrative && !s.is(target)
            });
            for source in sources {
                emit(candidates, source, target, self.relation());
            }
        }
    }
}
