//! End-to-end graph construction scenarios

use actionflow_core::{Relation, SemanticCategory, Task, ValidationError};
use actionflow_graph::{
    build_dependency_graph, dispatch_order, ClassificationScope, DependencyGraphBuilder,
    DependencyIndex, GraphConfig,
};
use actionflow_test_utils::{
    dashboard_meeting, dashboard_meeting_edges, edge, meeting_with_admin, same_owner_pair, task,
};
use pretty_assertions::assert_eq;

#[test]
fn dashboard_meeting_produces_three_edges() {
    let edges = build_dependency_graph(&dashboard_meeting()).unwrap();
    assert_eq!(edges, dashboard_meeting_edges());
}

#[test]
fn group_duplicate_keeps_aggregation_label() {
    let edges = build_dependency_graph(&dashboard_meeting()).unwrap();
    let into_review: Vec<_> = edges
        .iter()
        .filter(|e| e.to.as_str() == "task_2")
        .map(|e| (e.from.as_str(), e.relation))
        .collect();
    assert_eq!(
        into_review,
        vec![
            ("task_1", Relation::Aggregation),
            ("task_0", Relation::GroupDependency),
        ]
    );
}

#[test]
fn same_owner_tasks_do_not_chain() {
    let edges = build_dependency_graph(&same_owner_pair()).unwrap();
    assert!(edges.iter().all(|e| e.relation != Relation::TemporalAfter));
    assert!(edges.is_empty());
}

#[test]
fn administrative_task_is_never_a_source() {
    let edges = build_dependency_graph(&meeting_with_admin()).unwrap();
    assert_eq!(edges, vec![edge("task_1", "task_2", Relation::Aggregation)]);
}

#[test]
fn administrative_task_can_depend_on_others() {
    let tasks = vec![
        task("task_0", "Raj will fix the checkout bug"),
        task("task_1", "Tom will schedule a demo meeting after Raj ships"),
    ];
    let edges = build_dependency_graph(&tasks).unwrap();
    assert_eq!(edges, vec![edge("task_0", "task_1", Relation::TemporalAfter)]);
}

#[test]
fn review_then_client_update_by_one_person() {
    let tasks = vec![
        task("task_0", "Sara will review the mockups"),
        task("task_1", "Sara will inform the client as soon as the review is done"),
    ];
    let edges = build_dependency_graph(&tasks).unwrap();
    assert_eq!(edges, vec![edge("task_0", "task_1", Relation::TemporalAfter)]);
}

#[test]
fn group_rule_overapproximates() {
    let tasks = vec![
        task("task_0", "Maria will draft the copy"),
        task("task_1", "Raj will wire the form"),
        task("task_2", "Lee will book the venue"),
        task("task_3", "Sara will publish after both are ready"),
    ];
    let edges = build_dependency_graph(&tasks).unwrap();
    assert_eq!(
        edges,
        vec![
            edge("task_0", "task_3", Relation::GroupDependency),
            edge("task_1", "task_3", Relation::GroupDependency),
            edge("task_2", "task_3", Relation::GroupDependency),
        ]
    );
}

#[test]
fn full_text_scope_reproduces_literal_table() {
    let config = GraphConfig::default().with_scope(ClassificationScope::FullText);
    let builder = DependencyGraphBuilder::new(&config).unwrap();
    let edges = builder.build(&dashboard_meeting()).unwrap();

    // task_1 mentions "design", so it is DESIGN and no aggregation edge exists
    assert_eq!(
        edges,
        vec![
            edge("task_0", "task_1", Relation::TemporalAfter),
            edge("task_0", "task_2", Relation::GroupDependency),
            edge("task_1", "task_2", Relation::GroupDependency),
        ]
    );
}

#[test]
fn leading_clause_decides_review_to_client_chain() {
    let tasks = vec![
        task("a", "Sara will review the copy after Raj fixes the layout"),
        task("d", "Sara will inform the client after the review"),
    ];

    let leading = DependencyGraphBuilder::default();
    let categories: Vec<_> = leading.annotate(&tasks).iter().map(|a| a.category).collect();
    assert_eq!(categories, vec![SemanticCategory::Review, SemanticCategory::Comm]);
    assert_eq!(
        leading.build(&tasks).unwrap(),
        vec![edge("a", "d", Relation::TemporalAfter)]
    );

    // whole text: "layout" makes a DESIGN and "review" makes d REVIEW
    let full = DependencyGraphBuilder::new(
        &GraphConfig::default().with_scope(ClassificationScope::FullText),
    )
    .unwrap();
    let categories: Vec<_> = full.annotate(&tasks).iter().map(|a| a.category).collect();
    assert_eq!(categories, vec![SemanticCategory::Design, SemanticCategory::Review]);
    assert!(full.build(&tasks).unwrap().is_empty());
}

#[test]
fn missing_text_is_fatal() {
    let tasks = vec![task("task_0", "Raj will fix it"), Task::new("task_1", "")];
    assert_eq!(
        build_dependency_graph(&tasks),
        Err(ValidationError::missing_field(1, "text"))
    );
}

#[test]
fn cyclic_output_is_possible_and_detected() {
    let tasks = vec![
        task("task_0", "Maria will draft the brief after Raj sends numbers"),
        task("task_1", "Raj will send numbers once Maria asks"),
    ];
    let edges = build_dependency_graph(&tasks).unwrap();
    assert_eq!(
        edges,
        vec![
            edge("task_1", "task_0", Relation::TemporalAfter),
            edge("task_0", "task_1", Relation::TemporalAfter),
        ]
    );
    assert!(dispatch_order(&tasks, &edges).is_err());
}

#[test]
fn dashboard_dispatch_order_and_annotations() {
    let tasks = dashboard_meeting();
    let edges = build_dependency_graph(&tasks).unwrap();

    let order: Vec<_> = dispatch_order(&tasks, &edges)
        .unwrap()
        .into_iter()
        .map(|id| id.as_str())
        .collect();
    assert_eq!(order, vec!["task_0", "task_1", "task_2"]);

    let index = DependencyIndex::new(&edges);
    assert_eq!(
        index.annotation(&tasks[2].id).as_deref(),
        Some("depends on: task_1, task_0")
    );
}
