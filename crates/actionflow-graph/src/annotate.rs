//! Per-task annotations
//!
//! Computed once per build and shared by every rule: lower-cased text,
//! semantic category, owner token, administrative flag.

use crate::admin::AdministrativeFilter;
use crate::owner::resolve_owner;
use crate::semantics::SemanticClassifier;
use actionflow_core::{OwnerToken, SemanticCategory, Task, TaskId};

/// A task plus the derived facts the rules read
#[derive(Debug, Clone)]
pub struct AnnotatedTask<'a> {
    /// Source task
    pub task: &'a Task,
    /// Lower-cased text
    pub lower: String,
    /// Semantic category
    pub category: SemanticCategory,
    /// Owner token
    pub owner: OwnerToken,
    /// Scheduling/meeting task
    pub administrative: bool,
}

impl<'a> AnnotatedTask<'a> {
    /// Annotate one task
    #[must_use]
    pub fn new(
        task: &'a Task,
        classifier: &SemanticClassifier,
        admin: &AdministrativeFilter,
    ) -> Self {
        let lower = task.text.to_lowercase();
        Self {
            task,
            category: classifier.classify_lower(&lower),
            owner: resolve_owner(&task.text),
            administrative: admin.is_administrative_lower(&lower),
            lower,
        }
    }

    /// Task id
    #[inline]
    #[must_use]
    pub fn id(&self) -> &TaskId {
        &self.task.id
    }

    /// True when both tasks resolve to the same owner token
    #[inline]
    #[must_use]
    pub fn same_owner(&self, other: &AnnotatedTask<'_>) -> bool {
        self.owner == other.owner
    }

    /// True when both annotations refer to the same task id
    #[inline]
    #[must_use]
    pub fn is(&self, other: &AnnotatedTask<'_>) -> bool {
        self.task.id == other.task.id
    }
}

/// Annotate a task list in order
#[must_use]
pub fn annotate<'a>(
    tasks: &'a [Task],
    classifier: &SemanticClassifier,
    admin: &AdministrativeFilter,
) -> Vec<AnnotatedTask<'a>> {
    tasks
        .iter()
        .map(|task| AnnotatedTask::new(task, classifier, admin))
        .collect()
}
