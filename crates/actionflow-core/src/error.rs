//! Error types for ActionFlow
//!
//! Provides error handling for:
//! - Task list validation (fatal, no partial graph)
//! - Graph analysis (cycles, unknown ids)
//! - Builder configuration loading
//! - The collaborator pipeline

use crate::types::TaskId;
use std::path::PathBuf;

/// Main ActionFlow error type
#[derive(Debug, thiserror::Error)]
pub enum ActionFlowError {
    /// Malformed task input
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Graph analysis failed
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    /// Builder configuration is unusable
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Collaborator pipeline failed
    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

impl ActionFlowError {
    /// Check if error is an input validation failure
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Pipeline(PipelineError::Validation(_))
        )
    }

    /// Check if error is retryable
    ///
    /// Only collaborator calls can succeed on a second attempt; every
    /// other failure replays identically for the same input.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Pipeline(e) if e.is_retryable())
    }
}

/// Task list validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Two tasks share an id
    #[error("duplicate task id: {id}")]
    DuplicateTaskId {
        /// The repeated id
        id: TaskId,
    },

    /// Required field absent or blank
    #[error("task at index {index} is missing required field '{field}'")]
    MissingField {
        /// Position of the task in its list
        index: usize,
        /// Field name (`id` or `text`)
        field: &'static str,
    },

    /// Confidence not a finite value in [0, 1]
    #[error("task {id} has confidence {value} outside [0, 1]")]
    ConfidenceOutOfRange {
        /// Offending task
        id: TaskId,
        /// Supplied value
        value: f64,
    },

    /// Edge endpoint is not a task in the list
    #[error("edge references unknown task id: {id}")]
    UnknownEdgeEndpoint {
        /// Missing id
        id: TaskId,
    },

    /// Edge points at its own source
    #[error("self-loop edge on task {id}")]
    SelfLoopEdge {
        /// Task on both ends
        id: TaskId,
    },

    /// Two edges share a `(from, to)` pair
    #[error("repeated edge {from} -> {to}")]
    DuplicateEdge {
        /// Source id
        from: TaskId,
        /// Target id
        to: TaskId,
    },
}

impl ValidationError {
    /// Create missing field error
    #[inline]
    #[must_use]
    pub fn missing_field(index: usize, field: &'static str) -> Self {
        Self::MissingField { index, field }
    }
}

/// Graph analysis errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Edges form a cycle, no dispatch order exists
    #[error("cyclic dependency among: {involved:?}")]
    CycleDetected {
        /// Ids that could not be ordered
        involved: Vec<TaskId>,
    },

    /// Edge references an id not in the task list
    #[error("unknown task id: {0}")]
    UnknownTask(TaskId),
}

/// Builder configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for the expected shape
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A keyword table has no entries
    #[error("keyword table '{table}' is empty")]
    EmptyKeywordList {
        /// Table name
        table: String,
    },
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create empty table error
    pub fn empty_table(table: impl Into<String>) -> Self {
        Self::EmptyKeywordList {
            table: table.into(),
        }
    }
}

/// Collaborator pipeline errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The action extractor failed
    #[error("action extraction failed: {0}")]
    Extraction(String),

    /// The role classifier failed
    #[error("role classification failed: {0}")]
    Classification(String),

    /// Assembled tasks did not validate
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Workflow document encode/decode failed
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PipelineError {
    /// Check if error is retryable
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Extraction(_) | Self::Classification(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_id_display() {
        let err = ValidationError::DuplicateTaskId {
            id: TaskId::new("task_1"),
        };
        assert_eq!(err.to_string(), "duplicate task id: task_1");
    }

    #[test]
    fn missing_field_names_field() {
        let err = ValidationError::missing_field(2, "text");
        assert!(err.to_string().contains("'text'"));
        assert!(err.to_string().contains("index 2"));
    }

    #[test]
    fn validation_is_not_retryable() {
        let err: ActionFlowError = ValidationError::missing_field(0, "id").into();
        assert!(err.is_validation());
        assert!(!err.is_retryable());
    }

    #[test]
    fn collaborator_failures_are_retryable() {
        let err: ActionFlowError = PipelineError::Extraction("timeout".into()).into();
        assert!(err.is_retryable());
        assert!(!err.is_validation());
    }

    #[test]
    fn pipeline_validation_counts_as_validation() {
        let err: ActionFlowError =
            PipelineError::from(ValidationError::missing_field(0, "id")).into();
        assert!(err.is_validation());
    }

    #[test]
    fn cycle_error_lists_ids() {
        let err = GraphError::CycleDetected {
            involved: vec![TaskId::new("a"), TaskId::new("b")],
        };
        assert!(err.to_string().contains("cyclic dependency"));
    }
}
