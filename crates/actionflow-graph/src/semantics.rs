//! Semantic classification
//!
//! Labels a task with a coarse [`SemanticCategory`] by walking an
//! ordered keyword table top to bottom; the first row with a matching
//! keyword wins, and unmatched text is [`SemanticCategory::Other`].

use crate::config::{ClassificationScope, ClassifierRule, GraphConfig};
use actionflow_core::SemanticCategory;

/// Table-driven classifier
#[derive(Debug, Clone)]
pub struct SemanticClassifier {
    rules: Vec<ClassifierRule>,
    scope: ClassificationScope,
    clause_markers: Vec<String>,
}

impl SemanticClassifier {
    /// Build from normalized rows
    ///
    /// `clause_markers` bound the leading clause when the scope is
    /// [`ClassificationScope::LeadingClause`]; keywords and markers are
    /// expected lower-case.
    #[must_use]
    pub fn new(
        rules: Vec<ClassifierRule>,
        scope: ClassificationScope,
        clause_markers: Vec<String>,
    ) -> Self {
        Self {
            rules,
            scope,
            clause_markers,
        }
    }

    /// Build from a (normalized) config
    #[must_use]
    pub fn from_config(config: &GraphConfig) -> Self {
        Self::new(
            config.classifier.clone(),
            config.classification_scope,
            config.temporal_triggers.clone(),
        )
    }

    /// Classify raw task text
    #[must_use]
    pub fn classify(&self, text: &str) -> SemanticCategory {
        self.classify_lower(&text.to_lowercase())
    }

    /// Classify text that is already lower-cased
    #[must_use]
    pub fn classify_lower(&self, lower: &str) -> SemanticCategory {
        match self.scope {
            ClassificationScope::FullText => self.match_table(lower),
            ClassificationScope::LeadingClause => {
                match self.match_table(leading_clause(lower, &self.clause_markers)) {
                    SemanticCategory::Other => self.match_table(lower),
                    category => category,
                }
            }
        }
    }

    fn match_table(&self, text: &str) -> SemanticCategory {
        self.rules
            .iter()
            .find(|rule| contains_any(text, &rule.keywords))
            .map_or(SemanticCategory::Other, |rule| rule.category)
    }
}

impl Default for SemanticClassifier {
    fn default() -> Self {
        Self::from_config(&GraphConfig::default())
    }
}

/// Text up to the earliest marker occurrence (the whole text if none)
#[must_use]
pub fn leading_clause<'a>(lower: &'a str, markers: &[String]) -> &'a str {
    markers
        .iter()
        .filter_map(|marker| lower.find(marker.as_str()))
        .min()
        .map_or(lower, |end| &lower[..end])
}

pub(crate) fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| text.contains(k.as_str()))
}
