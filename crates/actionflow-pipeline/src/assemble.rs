//! Task assembly from collaborator records

use crate::collaborators::{ActionItem, RoleAssignment};
use actionflow_core::{roles, Task, TaskId, DEFAULT_CONFIDENCE};
use tracing::{debug, warn};

/// Trim transcript lines and drop blank ones
#[must_use]
pub fn clean_transcript(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Clamp into [0, 1]; non-finite values take the default
#[inline]
#[must_use]
pub fn clamp_confidence(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        DEFAULT_CONFIDENCE
    }
}

/// Pair actions with roles by position and assign `task_<n>` ids
///
/// Blank actions are dropped before numbering. Actions past the end
/// of `assignments`, or labelled with a role outside [`roles::ALL`],
/// get the fallback role.
#[must_use]
pub fn assemble_tasks(actions: Vec<ActionItem>, assignments: Vec<RoleAssignment>) -> Vec<Task> {
    let mut assignments = assignments.into_iter();
    actions
        .into_iter()
        .filter_map(|action| {
            let role = assignments.next();
            let text = action.text.trim();
            if text.is_empty() {
                debug!("dropping blank action item");
                return None;
            }
            let role = role.map_or_else(|| roles::FALLBACK.to_string(), known_role);
            Some((text.to_string(), role, clamp_confidence(action.confidence)))
        })
        .enumerate()
        .map(|(index, (text, role, confidence))| {
            Task::new(TaskId::indexed(index), text)
                .with_role(role)
                .with_confidence(confidence)
        })
        .collect()
}

fn known_role(assignment: RoleAssignment) -> String {
    let label = assignment.assignee.trim();
    if roles::is_known(label) {
        label.to_string()
    } else {
        warn!(role = label, action = %assignment.action, "unknown role label, using fallback");
        roles::FALLBACK.to_string()
    }
}
