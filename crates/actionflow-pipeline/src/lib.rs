//! ActionFlow Pipeline - collaborator boundary
//!
//! Wires the external action extractor and role classifier to the
//! dependency graph builder and produces the `{tasks, edges}` workflow
//! document consumed downstream.
//!
//! # Example
//!
//! ```rust,ignore
//! use actionflow_pipeline::MeetingPipeline;
//!
//! # async fn example(extractor: impl ActionExtractor, classifier: impl RoleClassifier)
//! #     -> Result<(), PipelineError> {
//! let pipeline = MeetingPipeline::new(extractor, classifier);
//! let document = pipeline.run(&transcript_lines).await?;
//! println!("{}", document.to_json_pretty()?);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod assemble;
pub mod collaborators;
pub mod document;
pub mod pipeline;

pub use assemble::{assemble_tasks, clamp_confidence, clean_transcript};
pub use collaborators::{ActionExtractor, ActionItem, RoleAssignment, RoleClassifier};
pub use document::{OwnerTaskLine, WorkflowDocument};
pub use pipeline::MeetingPipeline;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running the meeting pipeline
    pub use crate::{
        ActionExtractor, ActionItem, MeetingPipeline, RoleAssignment, RoleClassifier,
        WorkflowDocument,
    };
    pub use actionflow_graph::prelude::*;
}
