//! External collaborator contracts
//!
//! The action extractor and role classifier are backed by a language
//! model and live outside this workspace. They must hand back
//! structured records; scraping free-form model output is their job,
//! not the pipeline's.

use actionflow_core::PipelineError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// An action item as returned by the extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    /// Task phrased person-first
    pub text: String,
    /// Commitment strength, nominally in [0, 1]
    pub confidence: f64,
}

impl ActionItem {
    /// Create new action item
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// A role label for one action, as returned by the classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// Action text the label belongs to
    pub action: String,
    /// Role label
    pub assignee: String,
}

impl RoleAssignment {
    /// Create new assignment
    #[inline]
    #[must_use]
    pub fn new(action: impl Into<String>, assignee: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            assignee: assignee.into(),
        }
    }
}

/// Extracts action items from transcript lines
#[async_trait]
pub trait ActionExtractor: Send + Sync {
    /// Extract action items in transcript order
    async fn extract(&self, transcript: &[String]) -> Result<Vec<ActionItem>, PipelineError>;
}

/// Assigns a semantic role to each action item
#[async_trait]
pub trait RoleClassifier: Send + Sync {
    /// One assignment per action, in the same order
    async fn classify(&self, actions: &[ActionItem])
        -> Result<Vec<RoleAssignment>, PipelineError>;
}
