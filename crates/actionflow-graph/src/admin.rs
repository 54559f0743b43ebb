//! Administrative task filter
//!
//! Scheduling and meeting-only tasks may depend on other work but are
//! never treated as a prerequisite of anything.

use crate::config::GraphConfig;
use crate::semantics::contains_any;

/// Flags administrative tasks by keyword
#[derive(Debug, Clone)]
pub struct AdministrativeFilter {
    terms: Vec<String>,
}

impl AdministrativeFilter {
    /// Create from lower-case terms
    #[must_use]
    pub fn new(terms: Vec<String>) -> Self {
        Self { terms }
    }

    /// Create from a (normalized) config
    #[must_use]
    pub fn from_config(config: &GraphConfig) -> Self {
        Self::new(config.admin_terms())
    }

    /// Case-insensitive check on raw text
    #[must_use]
    pub fn is_administrative(&self, text: &str) -> bool {
        self.is_administrative_lower(&text.to_lowercase())
    }

    /// Check on already lower-cased text
    #[must_use]
    pub fn is_administrative_lower(&self, lower: &str) -> bool {
        contains_any(lower, &self.terms)
    }
}

impl Default for AdministrativeFilter {
    fn default() -> Self {
        Self::from_config(&GraphConfig::default())
    }
}
