//! ActionFlow Core - shared data model
//!
//! The types every other ActionFlow crate speaks:
//! - Tasks extracted from a meeting and their wire records
//! - Dependency edges and relation kinds
//! - Per-task annotations (semantic category, owner token)
//! - The error taxonomy and task list validation
//!
//! # Example
//!
//! ```rust
//! use actionflow_core::{validate_tasks, Task};
//!
//! let tasks = vec![
//!     Task::new("task_0", "Maria will design the dashboard layout"),
//!     Task::new("task_1", "Raj will update the frontend after Maria finishes"),
//! ];
//! assert!(validate_tasks(&tasks).is_ok());
//! ```

#![warn(unreachable_pub)]

pub mod error;
pub mod types;
pub mod validate;

pub use error::{ActionFlowError, ConfigError, GraphError, PipelineError, ValidationError};
pub use types::{
    roles, ConfidenceBand, Edge, OwnerToken, Relation, SemanticCategory, Task, TaskId,
    TaskRecord, DEFAULT_CONFIDENCE,
};
pub use validate::{tasks_from_records, validate_edges, validate_tasks};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with ActionFlow types
    pub use crate::{
        ActionFlowError, ConfidenceBand, Edge, OwnerToken, Relation, SemanticCategory, Task,
        TaskId, TaskRecord, ValidationError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
