//! Invariants that hold for every task list

use actionflow_core::{Relation, SemanticCategory};
use actionflow_graph::{AdministrativeFilter, DependencyGraphBuilder};
use actionflow_test_utils::{arb_tasks, assert_no_self_loops, assert_unique_pairs};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #[test]
    fn prop_edges_are_well_formed(tasks in arb_tasks(12)) {
        let edges = DependencyGraphBuilder::default().build(&tasks).unwrap();

        assert_no_self_loops(&edges);
        assert_unique_pairs(&edges);

        let ids: HashSet<_> = tasks.iter().map(|t| &t.id).collect();
        for edge in &edges {
            prop_assert!(ids.contains(&edge.from));
            prop_assert!(ids.contains(&edge.to));
        }
    }

    #[test]
    fn prop_administrative_tasks_never_source(tasks in arb_tasks(12)) {
        let admin = AdministrativeFilter::default();
        let edges = DependencyGraphBuilder::default().build(&tasks).unwrap();

        for edge in &edges {
            let source = tasks.iter().find(|t| t.id == edge.from).unwrap();
            prop_assert!(!admin.is_administrative(&source.text), "admin source: {}", edge);
        }
    }

    #[test]
    fn prop_build_is_deterministic(tasks in arb_tasks(12)) {
        let builder = DependencyGraphBuilder::default();
        let first = builder.build(&tasks).unwrap();
        let second = builder.build(&tasks).unwrap();
        let fresh = DependencyGraphBuilder::default().build(&tasks).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &fresh);
    }

    #[test]
    fn prop_temporal_edges_respect_owner_guard(tasks in arb_tasks(12)) {
        let builder = DependencyGraphBuilder::default();
        let annotated = builder.annotate(&tasks);
        let edges = builder.build(&tasks).unwrap();

        for edge in edges.iter().filter(|e| e.relation == Relation::TemporalAfter) {
            let from = annotated.iter().find(|a| a.id() == &edge.from).unwrap();
            let to = annotated.iter().find(|a| a.id() == &edge.to).unwrap();
            prop_assert!(to.lower.contains(from.owner.as_str()));

            // one owner may only chain their own review into a client update
            if from.same_owner(to) {
                prop_assert_eq!(from.category, SemanticCategory::Review, "{}", edge);
                prop_assert_eq!(to.category, SemanticCategory::Comm, "{}", edge);
                prop_assert!(
                    to.lower.contains("review") && to.lower.contains("client"),
                    "same-owner edge without review and client: {}",
                    edge
                );
            }
        }
    }
}

#[test]
fn empty_input_yields_no_edges() {
    assert!(DependencyGraphBuilder::default().build(&[]).unwrap().is_empty());
}
