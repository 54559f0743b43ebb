//! Testing utilities for ActionFlow workspace
//!
//! Shared fixtures, task strategies, and edge-list assertions.

#![allow(missing_docs)]

use actionflow_core::{roles, Edge, Relation, Task, TaskId};
use proptest::prelude::*;
use std::collections::HashSet;

pub fn task(id: &str, text: &str) -> Task {
    Task::new(id, text)
}

pub fn edge(from: &str, to: &str, relation: Relation) -> Edge {
    Edge::new(TaskId::new(from), TaskId::new(to), relation)
}

/// Design -> build -> review meeting from the reference scenario
pub fn dashboard_meeting() -> Vec<Task> {
    vec![
        task("task_0", "Maria will design the dashboard layout").with_role(roles::UX_DESIGNER),
        task(
            "task_1",
            "Raj will update the frontend components after Maria finishes the design",
        )
        .with_role(roles::FRONTEND_ENGINEER),
        task("task_2", "Sara will review everything once both tasks are done")
            .with_role(roles::PROJECT_MANAGER),
    ]
}

pub fn dashboard_meeting_edges() -> Vec<Edge> {
    vec![
        edge("task_0", "task_1", Relation::TemporalAfter),
        edge("task_1", "task_2", Relation::Aggregation),
        edge("task_0", "task_2", Relation::GroupDependency),
    ]
}

/// Two tasks owned by Raj where the second names Raj after a cue
pub fn same_owner_pair() -> Vec<Task> {
    vec![
        task("task_0", "Raj will prepare the release notes"),
        task("task_1", "Raj will publish them once raj has proofread"),
    ]
}

/// Meeting with an administrative task that others refer to
pub fn meeting_with_admin() -> Vec<Task> {
    vec![
        task("task_0", "Tom will schedule the follow-up meeting"),
        task("task_1", "Lee will implement the export after Tom confirms"),
        task("task_2", "Ana will approve the export when all tasks are done"),
    ]
}

pub fn assert_no_self_loops(edges: &[Edge]) {
    for edge in edges {
        assert_ne!(edge.from, edge.to, "self-loop: {edge}");
    }
}

pub fn assert_unique_pairs(edges: &[Edge]) {
    let mut seen = HashSet::new();
    for edge in edges {
        assert!(seen.insert((&edge.from, &edge.to)), "repeated pair: {edge}");
    }
}

const OWNERS: &[&str] = &["Maria", "Raj", "Sara", "Tom", "Lee", "Ana"];

const PHRASES: &[&str] = &[
    "will design the layout",
    "will fix the login bug",
    "will implement the frontend",
    "will review the release",
    "will approve the budget",
    "will inform the client",
    "will schedule a meeting",
    "will book the venue",
    "will ship after Maria is done",
    "will deploy once Raj finishes",
    "will test when Sara approves",
    "will wrap up once both tasks are done",
    "will sign off at the end",
    "will update the docs after all tasks",
    "will review for the client upon Tom's note",
];

/// Arbitrary task text built from owner-first phrases
pub fn arb_task_text() -> impl Strategy<Value = String> {
    (
        prop::sample::select(OWNERS),
        prop::sample::select(PHRASES),
        prop::option::of(prop::sample::select(PHRASES)),
    )
        .prop_map(|(owner, phrase, tail)| match tail {
            Some(tail) => format!("{owner} {phrase} and {tail}"),
            None => format!("{owner} {phrase}"),
        })
}

/// Arbitrary task list with unique sequential ids
pub fn arb_tasks(max: usize) -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(arb_task_text(), 0..=max).prop_map(|texts| {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Task::new(TaskId::indexed(i), text))
            .collect()
    })
}
