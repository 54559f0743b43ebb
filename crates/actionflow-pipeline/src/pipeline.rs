//! Meeting pipeline
//!
//! transcript -> action extractor -> role classifier -> tasks -> graph.
//! All awaiting happens in the collaborators; graph construction is
//! synchronous and never waits.

use crate::assemble::{assemble_tasks, clean_transcript};
use crate::collaborators::{ActionExtractor, RoleClassifier};
use crate::document::WorkflowDocument;
use actionflow_core::PipelineError;
use actionflow_graph::DependencyGraphBuilder;
use tracing::{info, instrument, warn};

/// Runs the collaborators and builds the workflow document
#[derive(Debug)]
pub struct MeetingPipeline<E, R> {
    extractor: E,
    classifier: R,
    builder: DependencyGraphBuilder,
}

impl<E, R> MeetingPipeline<E, R>
where
    E: ActionExtractor,
    R: RoleClassifier,
{
    /// Create with the default graph builder
    #[must_use]
    pub fn new(extractor: E, classifier: R) -> Self {
        Self {
            extractor,
            classifier,
            builder: DependencyGraphBuilder::with_defaults(),
        }
    }

    /// With a configured graph builder
    #[must_use]
    pub fn with_builder(mut self, builder: DependencyGraphBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Process one transcript
    ///
    /// A failing role classifier does not abort the run: every task
    /// gets the fallback role instead.
    ///
    /// # Errors
    /// [`PipelineError::Extraction`] from the extractor, or
    /// [`PipelineError::Validation`] if the assembled tasks are invalid.
    #[instrument(skip_all, fields(lines = transcript.len()))]
    pub async fn run(&self, transcript: &[String]) -> Result<WorkflowDocument, PipelineError> {
        let lines = clean_transcript(transcript);
        let actions = self.extractor.extract(&lines).await?;

        let assignments = match self.classifier.classify(&actions).await {
            Ok(assignments) => {
                if assignments.len() != actions.len() {
                    warn!(
                        actions = actions.len(),
                        roles = assignments.len(),
                        "role count mismatch, pairing by position"
                    );
                }
                assignments
            }
            Err(error) => {
                warn!(%error, "role classification failed, using fallback role");
                Vec::new()
            }
        };

        let tasks = assemble_tasks(actions, assignments);
        let edges = self.builder.build(&tasks)?;
        info!(tasks = tasks.len(), edges = edges.len(), "workflow assembled");

        Ok(WorkflowDocument::new(tasks, edges))
    }
}
