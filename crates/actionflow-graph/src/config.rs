//! Builder configuration
//!
//! Every keyword table the builder consults lives here as plain data,
//! so precedence and trigger vocabularies can be overridden per call
//! and tested without touching shared state.
//!
//! # TOML layout
//!
//! ```toml
//! classification_scope = "leading_clause"
//! strict_admin = true
//! temporal_triggers = ["after", "once"]
//!
//! [[classifier]]
//! category = "DESIGN"
//! keywords = ["design", "layout"]
//! ```
//!
//! Omitted fields keep their defaults.

use actionflow_core::{ConfigError, SemanticCategory};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One row of the ordered classification table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierRule {
    /// Category assigned on match
    pub category: SemanticCategory,
    /// Substrings that select this row
    pub keywords: Vec<String>,
}

impl ClassifierRule {
    /// Create new row
    #[must_use]
    pub fn new(category: SemanticCategory, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: to_owned(keywords),
        }
    }
}

/// Which part of the text the classifier reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationScope {
    /// Text before the first temporal trigger, falling back to the
    /// full text when that clause matches no row
    #[default]
    LeadingClause,
    /// Whole text
    FullText,
}

/// Implicit fan-in between two categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationPair {
    /// Prerequisite category
    pub source: SemanticCategory,
    /// Dependent category
    pub target: SemanticCategory,
}

impl Default for AggregationPair {
    fn default() -> Self {
        Self {
            source: SemanticCategory::Build,
            target: SemanticCategory::Review,
        }
    }
}

/// Lets one person's review feed their own client update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfChainException {
    /// Whether the exception applies at all
    pub enabled: bool,
    /// Category the dependent task must have
    pub target_category: SemanticCategory,
    /// Terms the dependent task's text must all contain
    pub required_terms: Vec<String>,
    /// Category the prerequisite task must have
    pub source_category: SemanticCategory,
}

impl Default for SelfChainException {
    fn default() -> Self {
        Self {
            enabled: true,
            target_category: SemanticCategory::Comm,
            required_terms: to_owned(&["review", "client"]),
            source_category: SemanticCategory::Review,
        }
    }
}

/// Keyword tables and policy knobs for the graph builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Ordered classification table, first match wins
    pub classifier: Vec<ClassifierRule>,
    /// Portion of text the classifier reads
    pub classification_scope: ClassificationScope,
    /// Terms marking a task as administrative
    pub admin_keywords: Vec<String>,
    /// Also apply `strict_admin_phrases`
    pub strict_admin: bool,
    /// Extra administrative phrases for strict mode
    pub strict_admin_phrases: Vec<String>,
    /// Explicit sequencing cues
    pub temporal_triggers: Vec<String>,
    /// Collective-completion cues
    pub group_triggers: Vec<String>,
    /// Category fan-in applied without trigger words
    pub aggregation: AggregationPair,
    /// Same-owner guard exception for the temporal rule
    pub self_chain_exception: SelfChainException,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            classifier: vec![
                ClassifierRule::new(
                    SemanticCategory::Design,
                    &["design", "redesign", "layout", "ux"],
                ),
                ClassifierRule::new(
                    SemanticCategory::Build,
                    &["update", "fix", "implement", "frontend"],
                ),
                ClassifierRule::new(SemanticCategory::Review, &["review", "approve"]),
                ClassifierRule::new(SemanticCategory::Comm, &["client", "inform"]),
            ],
            classification_scope: ClassificationScope::default(),
            admin_keywords: to_owned(&["meeting", "schedule"]),
            strict_admin: false,
            strict_admin_phrases: to_owned(&["follow-up meeting", "set up a call", "block time"]),
            temporal_triggers: to_owned(&[
                "after",
                "once",
                "when",
                "following",
                "upon",
                "as soon as",
                "next",
                "later",
                "subsequent",
            ]),
            group_triggers: to_owned(&[
                "after both",
                "after all",
                "once both",
                "once all",
                "when both",
                "when all",
                "after everything",
                "once everything",
                "when everything",
                "after all tasks",
                "once all tasks",
                "when all tasks",
                "conditional on",
                "at the end",
                "when they are done",
            ]),
            aggregation: AggregationPair::default(),
            self_chain_exception: SelfChainException::default(),
        }
    }
}

impl GraphConfig {
    /// Parse from TOML text and validate
    ///
    /// # Errors
    /// [`ConfigError::Parse`] on malformed TOML, or
    /// [`ConfigError::EmptyKeywordList`] when a table is empty.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    ///
    /// # Errors
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`GraphConfig::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        Self::from_toml_str(&text)
    }

    /// With strict administrative matching
    #[inline]
    #[must_use]
    pub fn with_strict_admin(mut self, strict: bool) -> Self {
        self.strict_admin = strict;
        self
    }

    /// With classification scope
    #[inline]
    #[must_use]
    pub fn with_scope(mut self, scope: ClassificationScope) -> Self {
        self.classification_scope = scope;
        self
    }

    /// With classification table
    #[inline]
    #[must_use]
    pub fn with_classifier(mut self, rows: Vec<ClassifierRule>) -> Self {
        self.classifier = rows;
        self
    }

    /// Without the same-owner exception
    #[inline]
    #[must_use]
    pub fn without_self_chain_exception(mut self) -> Self {
        self.self_chain_exception.enabled = false;
        self
    }

    /// Reject configurations with empty keyword tables
    ///
    /// # Errors
    /// [`ConfigError::EmptyKeywordList`] naming the first empty table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.classifier.is_empty() {
            return Err(ConfigError::empty_table("classifier"));
        }
        for row in &self.classifier {
            if is_blank(&row.keywords) {
                return Err(ConfigError::empty_table(format!("classifier.{}", row.category)));
            }
        }

        let tables = [
            ("admin_keywords", &self.admin_keywords),
            ("temporal_triggers", &self.temporal_triggers),
            ("group_triggers", &self.group_triggers),
        ];
        for (name, table) in tables {
            if is_blank(table) {
                return Err(ConfigError::empty_table(name));
            }
        }

        if self.self_chain_exception.enabled && is_blank(&self.self_chain_exception.required_terms)
        {
            return Err(ConfigError::empty_table("self_chain_exception.required_terms"));
        }

        Ok(())
    }

    /// Administrative terms in effect
    #[must_use]
    pub fn admin_terms(&self) -> Vec<String> {
        let mut terms = self.admin_keywords.clone();
        if self.strict_admin {
            terms.extend(self.strict_admin_phrases.iter().cloned());
        }
        terms
    }

    /// Copy with every keyword lower-cased and blank entries dropped
    #[must_use]
    pub(crate) fn normalized(&self) -> Self {
        let mut config = self.clone();
        for row in &mut config.classifier {
            normalize(&mut row.keywords);
        }
        normalize(&mut config.admin_keywords);
        normalize(&mut config.strict_admin_phrases);
        normalize(&mut config.temporal_triggers);
        normalize(&mut config.group_triggers);
        normalize(&mut config.self_chain_exception.required_terms);
        config
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

fn is_blank(words: &[String]) -> bool {
    words.iter().all(|w| w.trim().is_empty())
}

fn normalize(words: &mut Vec<String>) {
    words.retain(|w| !w.trim().is_empty());
    for word in words.iter_mut() {
        *word = word.to_lowercase();
    }
}
