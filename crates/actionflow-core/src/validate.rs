//! Task list validation
//!
//! Edge identity depends on id uniqueness, so a list with repeated or
//! blank ids is rejected outright rather than silently merged. Edge
//! lists read back from storage are checked against the same rules the
//! builder guarantees for its own output.

use crate::error::ValidationError;
use crate::types::{Edge, Task, TaskRecord};
use std::collections::HashSet;

/// Check a task list before graph construction
///
/// # Errors
/// The first [`ValidationError`] encountered in list order.
pub fn validate_tasks(tasks: &[Task]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(tasks.len());

    for (index, task) in tasks.iter().enumerate() {
        if task.id.is_blank() {
            return Err(ValidationError::missing_field(index, "id"));
        }
        if task.text.trim().is_empty() {
            return Err(ValidationError::missing_field(index, "text"));
        }
        if !task.confidence.is_finite() || !(0.0..=1.0).contains(&task.confidence) {
            return Err(ValidationError::ConfidenceOutOfRange {
                id: task.id.clone(),
                value: task.confidence,
            });
        }
        if !seen.insert(&task.id) {
            return Err(ValidationError::DuplicateTaskId {
                id: task.id.clone(),
            });
        }
    }

    Ok(())
}

/// Check an edge list against its task list
///
/// Every endpoint must name a task, no edge may be a self-loop, and
/// each `(from, to)` pair may appear once.
///
/// # Errors
/// The first [`ValidationError`] encountered in edge order.
pub fn validate_edges(tasks: &[Task], edges: &[Edge]) -> Result<(), ValidationError> {
    let ids: HashSet<_> = tasks.iter().map(|t| &t.id).collect();
    let mut pairs = HashSet::with_capacity(edges.len());

    for edge in edges {
        for id in [&edge.from, &edge.to] {
            if !ids.contains(id) {
                return Err(ValidationError::UnknownEdgeEndpoint { id: id.clone() });
            }
        }
        if edge.is_self_loop() {
            return Err(ValidationError::SelfLoopEdge {
                id: edge.from.clone(),
            });
        }
        if !pairs.insert(edge.key()) {
            return Err(ValidationError::DuplicateEdge {
                from: edge.from.clone(),
                to: edge.to.clone(),
            });
        }
    }

    Ok(())
}

/// Convert wire records into validated tasks
///
/// # Errors
/// Any per-record field error, or a duplicate id across records.
pub fn tasks_from_records(records: Vec<TaskRecord>) -> Result<Vec<Task>, ValidationError> {
    let tasks = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_task(index))
        .collect::<Result<Vec<_>, _>>()?;

    validate_tasks(&tasks)?;
    Ok(tasks)
}
