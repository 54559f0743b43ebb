//! Graph analysis for downstream consumers
//!
//! Helpers over a built edge list: per-task "depends on" lookups,
//! per-owner grouping and a dispatch order. The builder does not
//! guarantee acyclicity, so ordering can fail.

use crate::owner::resolve_owner;
use actionflow_core::{Edge, GraphError, OwnerToken, Task, TaskId};
use indexmap::IndexMap;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Prerequisite and dependent lookups over an edge list
#[derive(Debug, Clone, Default)]
pub struct DependencyIndex {
    prerequisites: HashMap<TaskId, Vec<TaskId>>,
    dependents: HashMap<TaskId, Vec<TaskId>>,
}

impl DependencyIndex {
    /// Index edges, preserving edge order per task
    #[must_use]
    pub fn new(edges: &[Edge]) -> Self {
        let mut index = Self::default();
        for edge in edges {
            index
                .prerequisites
                .entry(edge.to.clone())
                .or_default()
                .push(edge.from.clone());
            index
                .dependents
                .entry(edge.from.clone())
                .or_default()
                .push(edge.to.clone());
        }
        index
    }

    /// Tasks that must finish before `id`
    #[must_use]
    pub fn dependencies_of(&self, id: &TaskId) -> &[TaskId] {
        self.prerequisites
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Tasks waiting on `id`
    #[must_use]
    pub fn dependents_of(&self, id: &TaskId) -> &[TaskId] {
        self.dependents
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// `depends on: a, b` annotation, `None` for independent tasks
    #[must_use]
    pub fn annotation(&self, id: &TaskId) -> Option<String> {
        let deps = self.dependencies_of(id);
        if deps.is_empty() {
            return None;
        }
        let ids: Vec<&str> = deps.iter().map(TaskId::as_str).collect();
        Some(format!("depends on: {}", ids.join(", ")))
    }
}

/// Group tasks by owner token, owners and tasks in input order
#[must_use]
pub fn tasks_by_owner(tasks: &[Task]) -> IndexMap<OwnerToken, Vec<&Task>> {
    let mut groups: IndexMap<OwnerToken, Vec<&Task>> = IndexMap::new();
    for task in tasks {
        groups.entry(resolve_owner(&task.text)).or_default().push(task);
    }
    groups
}

/// Topological dispatch order, ties broken by input position
///
/// # Errors
/// [`GraphError::UnknownTask`] if an edge names an id not in `tasks`;
/// [`GraphError::CycleDetected`] listing the ids on a cycle.
pub fn dispatch_order<'a>(
    tasks: &'a [Task],
    edges: &[Edge],
) -> Result<Vec<&'a TaskId>, GraphError> {
    let mut graph: DiGraph<usize, ()> = DiGraph::with_capacity(tasks.len(), edges.len());
    let mut nodes: HashMap<&TaskId, NodeIndex> = HashMap::with_capacity(tasks.len());
    for (position, task) in tasks.iter().enumerate() {
        nodes.insert(&task.id, graph.add_node(position));
    }

    for edge in edges {
        let from = *nodes
            .get(&edge.from)
            .ok_or_else(|| GraphError::UnknownTask(edge.from.clone()))?;
        let to = *nodes
            .get(&edge.to)
            .ok_or_else(|| GraphError::UnknownTask(edge.to.clone()))?;
        graph.update_edge(from, to, ());
    }

    let mut in_degree: Vec<usize> = graph
        .node_indices()
        .map(|n| graph.neighbors_directed(n, Direction::Incoming).count())
        .collect();
    let mut ready: BinaryHeap<Reverse<usize>> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, degree)| **degree == 0)
        .map(|(position, _)| Reverse(position))
        .collect();

    let mut order = Vec::with_capacity(tasks.len());
    while let Some(Reverse(position)) = ready.pop() {
        order.push(&tasks[position].id);
        for next in graph.neighbors_directed(NodeIndex::new(position), Direction::Outgoing) {
            let slot = &mut in_degree[next.index()];
            *slot -= 1;
            if *slot == 0 {
                ready.push(Reverse(next.index()));
            }
        }
    }

    if order.len() < tasks.len() {
        let mut involved: Vec<usize> = tarjan_scc(&graph)
            .into_iter()
            .filter(|component| component.len() > 1)
            .flatten()
            .map(|n| graph[n])
            .collect();
        involved.sort_unstable();
        return Err(GraphError::CycleDetected {
            involved: involved.into_iter().map(|p| tasks[p].id.clone()).collect(),
        });
    }

    Ok(order)
}
