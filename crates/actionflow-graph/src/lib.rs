//! ActionFlow Graph - task dependency inference
//!
//! Turns a flat list of meeting action items into a directed dependency
//! graph using lexical heuristics over the task text:
//! - Temporal rule: sequencing cue plus a mention of another owner
//! - Aggregation rule: review work depends on build work
//! - Group rule: collective-completion cue fans in from other owners
//!
//! Rules run in that order and the first edge proposed for a
//! `(from, to)` pair wins. No model calls, no I/O.
//!
//! # Example
//!
//! ```rust
//! use actionflow_core::{Relation, Task};
//! use actionflow_graph::build_dependency_graph;
//!
//! let tasks = vec![
//!     Task::new("task_0", "Maria will design the dashboard layout"),
//!     Task::new("task_1", "Raj will update the frontend components after Maria finishes the design"),
//!     Task::new("task_2", "Sara will review everything once both tasks are done"),
//! ];
//!
//! let edges = build_dependency_graph(&tasks)?;
//! assert_eq!(edges.len(), 3);
//! assert_eq!(edges[0].relation, Relation::TemporalAfter);
//! # Ok::<(), actionflow_core::ValidationError>(())
//! ```

#![warn(unreachable_pub)]

pub mod admin;
pub mod analysis;
pub mod annotate;
pub mod assembly;
pub mod builder;
pub mod config;
pub mod owner;
pub mod rules;
pub mod semantics;

pub use admin::AdministrativeFilter;
pub use analysis::{dispatch_order, tasks_by_owner, DependencyIndex};
pub use annotate::AnnotatedTask;
pub use assembly::{deduplicate, EdgeAssembler};
pub use builder::{build_dependency_graph, DependencyGraphBuilder};
pub use config::{
    AggregationPair, ClassificationScope, ClassifierRule, GraphConfig, SelfChainException,
};
pub use owner::{mentions_owner, resolve_owner};
pub use rules::{AggregationRule, DependencyRule, GroupRule, TemporalRule};
pub use semantics::SemanticClassifier;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for building dependency graphs
    pub use crate::{
        build_dependency_graph, dispatch_order, DependencyGraphBuilder, DependencyIndex,
        GraphConfig,
    };
    pub use actionflow_core::prelude::*;
}
