//! Subcommand implementations
//!
//! Everything here returns values or strings; printing and exit codes
//! belong to the binary.

use actionflow_core::{ActionFlowError, TaskId, TaskRecord};
use actionflow_graph::{dispatch_order, DependencyGraphBuilder, GraphConfig};
use actionflow_pipeline::{OwnerTaskLine, WorkflowDocument};
use anyhow::Context;
use std::path::Path;
use tracing::info;

/// Command failure split by how the binary reports it
#[derive(Debug)]
pub enum CommandError {
    /// Bad task input or a cyclic graph (exit code 1)
    Rejected(ActionFlowError),
    /// I/O, malformed JSON or configuration problems (exit code 2)
    Other(anyhow::Error),
}

impl CommandError {
    /// Process exit code for this failure
    #[inline]
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Rejected(_) => 1,
            Self::Other(_) => 2,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(e) => write!(f, "{e}"),
            Self::Other(e) => write!(f, "{e:#}"),
        }
    }
}

impl From<ActionFlowError> for CommandError {
    fn from(error: ActionFlowError) -> Self {
        Self::Rejected(error)
    }
}

impl From<anyhow::Error> for CommandError {
    fn from(error: anyhow::Error) -> Self {
        Self::Other(error)
    }
}

/// Read a JSON array of task records
///
/// # Errors
/// Fails if the file cannot be read or is not a record array.
pub fn read_records(path: &Path) -> anyhow::Result<Vec<TaskRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tasks from {}", path.display()))?;
    let records: Vec<TaskRecord> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of tasks", path.display()))?;
    info!(path = %path.display(), records = records.len(), "loaded task records");
    Ok(records)
}

/// Load the graph configuration, defaults when no path is given
///
/// # Errors
/// Fails on unreadable, malformed or invalid configuration.
pub fn load_config(path: Option<&Path>, strict_admin: bool) -> anyhow::Result<GraphConfig> {
    let config = match path {
        Some(path) => GraphConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GraphConfig::default(),
    };
    Ok(if strict_admin {
        config.with_strict_admin(true)
    } else {
        config
    })
}

/// Validate records and build their workflow document
///
/// # Errors
/// [`CommandError::Rejected`] for invalid tasks, [`CommandError::Other`]
/// for an unusable configuration.
pub fn build_document(
    records: Vec<TaskRecord>,
    config: &GraphConfig,
) -> Result<WorkflowDocument, CommandError> {
    let builder = DependencyGraphBuilder::new(config).context("invalid graph configuration")?;
    let (tasks, edges) = builder
        .build_records(records)
        .map_err(ActionFlowError::from)?;
    Ok(WorkflowDocument::new(tasks, edges))
}

/// Write the document as pretty JSON
///
/// # Errors
/// Fails if encoding or writing fails.
pub fn write_document(document: &WorkflowDocument, path: &Path) -> anyhow::Result<()> {
    let json = document.to_json_pretty()?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write workflow to {}", path.display()))?;
    info!(path = %path.display(), "workflow written");
    Ok(())
}

/// Per-owner task lists with dependency and confidence annotations
///
/// Tentative and low-confidence tasks are marked so the owner can
/// confirm them before work starts.
#[must_use]
pub fn render_deps(document: &WorkflowDocument) -> String {
    document
        .owner_task_lists()
        .into_iter()
        .map(|(owner, lines)| {
            let body: Vec<String> = lines.iter().map(render_line).collect();
            format!("{owner}:\n{}", body.join(""))
        })
        .collect()
}

fn render_line(line: &OwnerTaskLine) -> String {
    let mut notes = Vec::new();
    if let Some(marker) = line.band.marker() {
        notes.push(marker.to_string());
    }
    if !line.depends_on.is_empty() {
        let ids: Vec<&str> = line.depends_on.iter().map(TaskId::as_str).collect();
        notes.push(format!("depends on: {}", ids.join(", ")));
    }

    if notes.is_empty() {
        format!("  [{}] {}\n", line.id, line.text)
    } else {
        format!("  [{}] {} ({})\n", line.id, line.text, notes.join("; "))
    }
}

/// Numbered dispatch order
///
/// # Errors
/// [`CommandError::Rejected`] when the graph has a cycle.
pub fn render_order(document: &WorkflowDocument) -> Result<String, CommandError> {
    let order = dispatch_order(&document.tasks, &document.edges).map_err(ActionFlowError::from)?;
    Ok(order
        .into_iter()
        .enumerate()
        .map(|(step, id)| format!("{}. {id}\n", step + 1))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actionflow_core::{Edge, GraphError, Relation, Task};
    use pretty_assertions::assert_eq;

    #[test]
    fn exit_codes() {
        let rejected = CommandError::from(ActionFlowError::Graph(GraphError::CycleDetected {
            involved: Vec::new(),
        }));
        assert_eq!(rejected.exit_code(), 1);
        assert_eq!(CommandError::from(anyhow::anyhow!("io")).exit_code(), 2);
    }

    #[test]
    fn order_rendering() {
        let document = WorkflowDocument::new(
            vec![Task::new("a", "Maria will design"), Task::new("b", "Raj will build")],
            vec![Edge::new("b".into(), "a".into(), Relation::TemporalAfter)],
        );
        assert_eq!(render_order(&document).unwrap(), "1. b\n2. a\n");
    }

    #[test]
    fn deps_marks_uncertain_tasks() {
        let document = WorkflowDocument::new(
            vec![
                Task::new("a", "Maria will design the layout").with_confidence(0.75),
                Task::new("b", "Maria will pick colours after Raj").with_confidence(0.5),
                Task::new("c", "Raj will fix the bug").with_confidence(0.4),
            ],
            vec![Edge::new("c".into(), "b".into(), Relation::TemporalAfter)],
        );
        let expected = "\
maria:
  [a] Maria will design the layout
  [b] Maria will pick colours after Raj (tentative; depends on: c)
raj:
  [c] Raj will fix the bug (needs confirmation)
";
        assert_eq!(render_deps(&document), expected);
    }

    #[test]
    fn strict_admin_flag_applies_over_defaults() {
        let config = load_config(None, true).unwrap();
        assert!(config.strict_admin);
        assert!(!load_config(None, false).unwrap().strict_admin);
    }
}
