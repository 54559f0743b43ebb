//! Core types for ActionFlow
//!
//! Defines the data model shared by every crate in the workspace:
//! - Tasks (validated action items) and their raw wire records
//! - Dependency edges and their relation kinds
//! - Derived per-task annotations (semantic category, owner token)

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence assigned when a record carries none
pub const DEFAULT_CONFIDENCE: f64 = 0.6;

/// Role labels the upstream classifier is allowed to hand back
pub mod roles {
    /// Visual and interaction design work
    pub const UX_DESIGNER: &str = "UX Designer";
    /// Client-side implementation work
    pub const FRONTEND_ENGINEER: &str = "Frontend Engineer";
    /// Server-side and data work
    pub const BACKEND_ENGINEER: &str = "Backend Engineer";
    /// Testing and verification work
    pub const QA_LEAD: &str = "QA Lead";
    /// Coordination, communication, review and scheduling
    pub const PROJECT_MANAGER: &str = "Project Manager";

    /// Every allowed role, in classifier precedence order
    pub const ALL: [&str; 5] = [
        UX_DESIGNER,
        FRONTEND_ENGINEER,
        BACKEND_ENGINEER,
        QA_LEAD,
        PROJECT_MANAGER,
    ];

    /// Role used when classification is unavailable
    pub const FALLBACK: &str = PROJECT_MANAGER;

    /// True for one of the [`ALL`] labels
    #[must_use]
    pub fn is_known(label: &str) -> bool {
        ALL.contains(&label)
    }
}

/// Caller-assigned, opaque task identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wrap an identifier
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Sequential identifier used by the pipeline (`task_<index>`)
    #[inline]
    #[must_use]
    pub fn indexed(index: usize) -> Self {
        Self(format!("task_{index}"))
    }

    /// Borrow as str
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the id is empty or whitespace
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// An extracted, classified action item
///
/// Tasks are read-only inputs to the graph builder. The `role` and
/// `confidence` fields travel with the task but do not influence
/// dependency inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id within one build call
    pub id: TaskId,
    /// Natural-language action, expected to lead with the owner's name
    pub text: String,
    /// Semantic role label from the upstream classifier
    #[serde(default)]
    pub role: String,
    /// Extraction confidence in [0, 1]
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

fn default_confidence() -> f64 {
    DEFAULT_CONFIDENCE
}

/// How firmly a task was committed to in the meeting
///
/// Bands follow the extractor's confidence: at least 0.75 is a firm
/// commitment, 0.5 up to 0.75 is tentative, anything lower needs the
/// owner to confirm before it is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    /// Confidence >= 0.75
    High,
    /// 0.5 <= confidence < 0.75
    Tentative,
    /// Confidence < 0.5
    NeedsConfirmation,
}

impl ConfidenceBand {
    /// Lower bound of [`ConfidenceBand::High`]
    pub const HIGH_THRESHOLD: f64 = 0.75;
    /// Lower bound of [`ConfidenceBand::Tentative`]
    pub const TENTATIVE_THRESHOLD: f64 = 0.5;

    /// Band for a confidence score
    #[must_use]
    pub fn of(confidence: f64) -> Self {
        if confidence >= Self::HIGH_THRESHOLD {
            Self::High
        } else if confidence >= Self::TENTATIVE_THRESHOLD {
            Self::Tentative
        } else {
            Self::NeedsConfirmation
        }
    }

    /// Marker appended to a task line, `None` for firm tasks
    #[must_use]
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Self::High => None,
            Self::Tentative => Some("tentative"),
            Self::NeedsConfirmation => Some("needs confirmation"),
        }
    }
}

impl Task {
    /// Create a task with no role and default confidence
    #[must_use]
    pub fn new(id: impl Into<TaskId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            role: String::new(),
            confidence: DEFAULT_CONFIDENCE,
        }
    }

    /// Commitment band of this task's confidence
    #[inline]
    #[must_use]
    pub fn confidence_band(&self) -> ConfidenceBand {
        ConfidenceBand::of(self.confidence)
    }

    /// With role label
    #[inline]
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// With confidence score
    #[inline]
    #[must_use]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }
}

/// A task as it arrives over the wire, before validation
///
/// Every field is optional so that a missing `id` or `text` can be
/// reported by name instead of as a generic decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task id
    #[serde(default)]
    pub id: Option<String>,
    /// Task text
    #[serde(default)]
    pub text: Option<String>,
    /// Role label
    #[serde(default)]
    pub role: Option<String>,
    /// Confidence score
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl TaskRecord {
    /// Validate into a [`Task`]
    ///
    /// `index` is the record's position in its list and is echoed back
    /// in errors.
    ///
    /// # Errors
    /// [`ValidationError::MissingField`] when `id` or `text` is absent
    /// or blank, [`ValidationError::ConfidenceOutOfRange`] when the
    /// confidence is not a finite value in [0, 1].
    pub fn into_task(self, index: usize) -> Result<Task, ValidationError> {
        let id = match self.id {
            Some(id) if !id.trim().is_empty() => TaskId::new(id),
            _ => return Err(ValidationError::missing_field(index, "id")),
        };
        let text = match self.text {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Err(ValidationError::missing_field(index, "text")),
        };
        let confidence = self.confidence.unwrap_or(DEFAULT_CONFIDENCE);
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(ValidationError::ConfidenceOutOfRange {
                id,
                value: confidence,
            });
        }

        Ok(Task {
            id,
            text,
            role: self.role.unwrap_or_default(),
            confidence,
        })
    }
}

/// Why one task precedes another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Explicit sequencing language naming another task's owner
    TemporalAfter,
    /// Implicit build-before-review fan-in
    Aggregation,
    /// Collective-completion language ("once both", "after all")
    GroupDependency,
}

impl Relation {
    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::TemporalAfter => "temporal_after",
            Relation::Aggregation => "aggregation",
            Relation::GroupDependency => "group_dependency",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directed dependency: `from` must complete before `to`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Prerequisite task
    pub from: TaskId,
    /// Dependent task
    pub to: TaskId,
    /// Rule that produced the edge
    pub relation: Relation,
}

impl Edge {
    /// Create new edge
    #[inline]
    #[must_use]
    pub fn new(from: TaskId, to: TaskId, relation: Relation) -> Self {
        Self { from, to, relation }
    }

    /// Deduplication key
    #[inline]
    #[must_use]
    pub fn key(&self) -> (&TaskId, &TaskId) {
        (&self.from, &self.to)
    }

    /// True when the edge points at its own source
    #[inline]
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.relation)
    }
}

/// Coarse work category derived from task text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SemanticCategory {
    /// Design, layout, UX work
    Design,
    /// Implementation and fixes
    Build,
    /// Review and approval
    Review,
    /// Client communication
    Comm,
    /// Anything else
    Other,
}

impl fmt::Display for SemanticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SemanticCategory::Design => "DESIGN",
            SemanticCategory::Build => "BUILD",
            SemanticCategory::Review => "REVIEW",
            SemanticCategory::Comm => "COMM",
            SemanticCategory::Other => "OTHER",
        };
        f.write_str(name)
    }
}

/// Lower-cased leading word of a task's text
///
/// A weak matching key for "who is responsible", not a validated
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerToken(String);

impl OwnerToken {
    /// Derive from task text
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self(
            text.split_whitespace()
                .next()
                .map(str::to_lowercase)
                .unwrap_or_default(),
        )
    }

    /// Borrow as str
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for text with no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for OwnerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
