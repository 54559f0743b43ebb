//! Workflow document
//!
//! The `{tasks, edges}` shape handed to downstream consumers (graph
//! rendering, per-person task lists, notification dispatch).

use actionflow_core::{
    validate_edges, validate_tasks, ConfidenceBand, Edge, PipelineError, Task, TaskId,
};
use actionflow_graph::{tasks_by_owner, DependencyIndex};
use serde::{Deserialize, Serialize};

/// Tasks plus their dependency edges
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDocument {
    /// Tasks in extraction order
    pub tasks: Vec<Task>,
    /// Edges in rule order
    pub edges: Vec<Edge>,
}

/// One line of a person's task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerTaskLine {
    /// Task id
    pub id: TaskId,
    /// Task text
    pub text: String,
    /// Commitment band from the task's confidence
    pub band: ConfidenceBand,
    /// Prerequisite ids, in edge order
    pub depends_on: Vec<TaskId>,
}

impl WorkflowDocument {
    /// Create new document
    #[inline]
    #[must_use]
    pub fn new(tasks: Vec<Task>, edges: Vec<Edge>) -> Self {
        Self { tasks, edges }
    }

    /// Pretty JSON
    ///
    /// # Errors
    /// [`PipelineError::Serialization`] if encoding fails.
    pub fn to_json_pretty(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode and validate tasks and edges
    ///
    /// # Errors
    /// [`PipelineError::Serialization`] for malformed JSON,
    /// [`PipelineError::Validation`] for an invalid task list or an
    /// edge that names an unknown task, loops, or repeats a pair.
    pub fn from_json(text: &str) -> Result<Self, PipelineError> {
        let document: Self = serde_json::from_str(text)?;
        validate_tasks(&document.tasks)?;
        validate_edges(&document.tasks, &document.edges)?;
        Ok(document)
    }

    /// Prerequisite lookups over the edges
    #[must_use]
    pub fn index(&self) -> DependencyIndex {
        DependencyIndex::new(&self.edges)
    }

    /// Each owner's tasks with their "depends on" lists and bands
    #[must_use]
    pub fn owner_task_lists(&self) -> Vec<(String, Vec<OwnerTaskLine>)> {
        let index = self.index();
        tasks_by_owner(&self.tasks)
            .into_iter()
            .map(|(owner, tasks)| {
                let lines = tasks
                    .into_iter()
                    .map(|task| OwnerTaskLine {
                        id: task.id.clone(),
                        text: task.text.clone(),
                        band: task.confidence_band(),
                        depends_on: index.dependencies_of(&task.id).to_vec(),
                    })
                    .collect();
                (owner.to_string(), lines)
            })
            .collect()
    }
}
