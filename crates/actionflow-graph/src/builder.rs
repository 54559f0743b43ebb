//! Dependency graph builder
//!
//! Validates the task list, annotates each task once, runs the rules in
//! fixed order (temporal, aggregation, group) into one candidate list
//! and deduplicates it. The builder holds no per-call state, so one
//! instance can serve concurrent callers.

use crate::admin::AdministrativeFilter;
use crate::annotate::{annotate, AnnotatedTask};
use crate::assembly::EdgeAssembler;
use crate::config::GraphConfig;
use crate::rules::{AggregationRule, DependencyRule, GroupRule, TemporalRule};
use crate::semantics::SemanticClassifier;
use actionflow_core::{
    tasks_from_records, validate_tasks, ConfigError, Edge, Task, TaskRecord, ValidationError,
};
use tracing::{debug, info, instrument};

/// Infers a dependency graph from task text
#[derive(Debug)]
pub struct DependencyGraphBuilder {
    classifier: SemanticClassifier,
    admin: AdministrativeFilter,
    rules: Vec<Box<dyn DependencyRule>>,
}

impl DependencyGraphBuilder {
    /// Create from a configuration
    ///
    /// # Errors
    /// [`ConfigError::EmptyKeywordList`] if a keyword table is empty.
    pub fn new(config: &GraphConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(&config.normalized()))
    }

    /// Create with the default keyword tables
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::from_valid(&GraphConfig::default().normalized())
    }

    fn from_valid(config: &GraphConfig) -> Self {
        let rules: Vec<Box<dyn DependencyRule>> = vec![
            Box::new(TemporalRule::from_config(config)),
            Box::new(AggregationRule::from_config(config)),
            Box::new(GroupRule::from_config(config)),
        ];

        Self {
            classifier: SemanticClassifier::from_config(config),
            admin: AdministrativeFilter::from_config(config),
            rules,
        }
    }

    /// Rule names in execution order
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Annotate tasks without building edges
    #[must_use]
    pub fn annotate<'a>(&self, tasks: &'a [Task]) -> Vec<AnnotatedTask<'a>> {
        annotate(tasks, &self.classifier, &self.admin)
    }

    /// Build the dependency edge list
    ///
    /// An empty list yields no edges. The result is a pure function of
    /// `tasks`: identical input gives identical output.
    ///
    /// # Errors
    /// [`ValidationError`] for duplicate ids, blank `id`/`text`, or an
    /// out-of-range confidence. No partial graph is returned.
    #[instrument(level = "debug", skip_all, fields(tasks = tasks.len()))]
    pub fn build(&self, tasks: &[Task]) -> Result<Vec<Edge>, ValidationError> {
        validate_tasks(tasks)?;

        let annotated = self.annotate(tasks);
        let mut candidates = Vec::new();
        for rule in &self.rules {
            let before = candidates.len();
            rule.apply(&annotated, &mut candidates);
            debug!(rule = rule.name(), proposed = candidates.len() - before, "rule applied");
        }

        let proposed = candidates.len();
        let mut assembler = EdgeAssembler::new();
        assembler.extend(candidates);
        let duplicates = assembler.duplicates();
        let self_loops = assembler.self_loops();
        let edges = assembler.finish();

        info!(
            tasks = tasks.len(),
            candidates = proposed,
            duplicates,
            self_loops,
            edges = edges.len(),
            "dependency graph built"
        );
        Ok(edges)
    }

    /// Validate wire records and build their graph
    ///
    /// # Errors
    /// [`ValidationError::MissingField`] naming the offending field, or
    /// any error from [`DependencyGraphBuilder::build`].
    pub fn build_records(
        &self,
        records: Vec<TaskRecord>,
    ) -> Result<(Vec<Task>, Vec<Edge>), ValidationError> {
        let tasks = tasks_from_records(records)?;
        let edges = self.build(&tasks)?;
        Ok((tasks, edges))
    }
}

impl Default for DependencyGraphBuilder {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Build with the default configuration
///
/// # Errors
/// As [`DependencyGraphBuilder::build`].
pub fn build_dependency_graph(tasks: &[Task]) -> Result<Vec<Edge>, ValidationError> {
    DependencyGraphBuilder::with_defaults().build(tasks)
}
