//! Edge deduplication and assembly
//!
//! Candidates are keyed by `(from, to)`. The first candidate for a pair
//! is kept and later ones are dropped even when their relation differs,
//! so rule order decides which relation label survives. Output keeps
//! first-insertion order.

use actionflow_core::{Edge, Relation, TaskId};
use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::{trace, warn};

/// Ordered, deduplicating edge collector
#[derive(Debug, Default)]
pub struct EdgeAssembler {
    edges: IndexMap<(TaskId, TaskId), Relation>,
    duplicates: usize,
    self_loops: usize,
}

impl EdgeAssembler {
    /// Create empty assembler
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer one candidate; returns `true` if it was kept
    pub fn push(&mut self, edge: Edge) -> bool {
        if edge.is_self_loop() {
            warn!(task = %edge.from, relation = %edge.relation, "rejected self-loop edge");
            self.self_loops += 1;
            return false;
        }

        match self.edges.entry((edge.from, edge.to)) {
            Entry::Occupied(existing) => {
                trace!(
                    from = %existing.key().0,
                    to = %existing.key().1,
                    kept = %existing.get(),
                    dropped = %edge.relation,
                    "duplicate edge discarded"
                );
                self.duplicates += 1;
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(edge.relation);
                true
            }
        }
    }

    /// Candidates dropped as repeated pairs
    #[inline]
    #[must_use]
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Candidates dropped as self-loops
    #[inline]
    #[must_use]
    pub fn self_loops(&self) -> usize {
        self.self_loops
    }

    /// Kept edges in first-insertion order
    #[must_use]
    pub fn finish(self) -> Vec<Edge> {
        self.edges
            .into_iter()
            .map(|((from, to), relation)| Edge::new(from, to, relation))
            .collect()
    }
}

impl Extend<Edge> for EdgeAssembler {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        for edge in iter {
            self.push(edge);
        }
    }
}

/// Deduplicate a candidate list in one call
#[must_use]
pub fn deduplicate(candidates: impl IntoIterator<Item = Edge>) -> Vec<Edge> {
    let mut assembler = EdgeAssembler::new();
    assembler.extend(candidates);
    assembler.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn edge(from: &str, to: &str, relation: Relation) -> Edge {
        Edge::new(from.into(), to.into(), relation)
    }

    #[test]
    fn first_relation_wins() {
        let out = deduplicate(vec![
            edge("a", "b", Relation::Aggregation),
            edge("a", "b", Relation::GroupDependency),
        ]);
        assert_eq!(out, vec![edge("a", "b", Relation::Aggregation)]);
    }

    #[test]
    fn keeps_insertion_order() {
        let out = deduplicate(vec![
            edge("c", "d", Relation::TemporalAfter),
            edge("a", "b", Relation::Aggregation),
            edge("c", "d", Relation::GroupDependency),
            edge("b", "a", Relation::GroupDependency),
        ]);
        assert_eq!(
            out,
            vec![
                edge("c", "d", Relation::TemporalAfter),
                edge("a", "b", Relation::Aggregation),
                edge("b", "a", Relation::GroupDependency),
            ]
        );
    }

    #[test]
    fn self_loops_rejected() {
        let mut assembler = EdgeAssembler::new();
        assert!(!assembler.push(edge("a", "a", Relation::TemporalAfter)));
        assert!(assembler.push(edge("a", "b", Relation::TemporalAfter)));
        assert_eq!(assembler.self_loops(), 1);
        assert_eq!(assembler.finish().len(), 1);
    }

    #[test]
    fn counts_duplicates() {
        let mut assembler = EdgeAssembler::new();
        assembler.extend(vec![
            edge("a", "b", Relation::TemporalAfter),
            edge("a", "b", Relation::TemporalAfter),
            edge("a", "b", Relation::Aggregation),
        ]);
        assert_eq!(assembler.duplicates(), 2);
        assert_eq!(assembler.finish().len(), 1);
    }

    #[test]
    fn empty_in_empty_out() {
        assert!(deduplicate(Vec::new()).is_empty());
    }
}
