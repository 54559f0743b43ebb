//! Loading builder configuration from disk

use actionflow_core::{ConfigError, Relation, SemanticCategory};
use actionflow_graph::{DependencyGraphBuilder, GraphConfig};
use actionflow_test_utils::{edge, task};
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn config_file_overrides_aggregation_pair() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[aggregation]
source = "DESIGN"
target = "BUILD"
"#
    )
    .unwrap();

    let config = GraphConfig::from_path(file.path()).unwrap();
    assert_eq!(config.aggregation.source, SemanticCategory::Design);

    let builder = DependencyGraphBuilder::new(&config).unwrap();
    let tasks = vec![
        task("task_0", "Maria will design the layout"),
        task("task_1", "Raj will implement the frontend"),
    ];
    assert_eq!(
        builder.build(&tasks).unwrap(),
        vec![edge("task_0", "task_1", Relation::Aggregation)]
    );
}

#[test]
fn strict_admin_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "strict_admin = true").unwrap();

    let config = GraphConfig::from_path(file.path()).unwrap();
    let builder = DependencyGraphBuilder::new(&config).unwrap();
    let tasks = vec![
        task("task_0", "Tom will set up a call with the vendor"),
        task("task_1", "Raj will sign the contract after Tom reports back"),
    ];
    assert!(builder.build(&tasks).unwrap().is_empty());
    assert_eq!(
        DependencyGraphBuilder::default().build(&tasks).unwrap(),
        vec![edge("task_0", "task_1", Relation::TemporalAfter)]
    );
}

#[test]
fn invalid_file_reports_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "temporal_triggers = \"after\"").unwrap();
    assert!(matches!(
        GraphConfig::from_path(file.path()),
        Err(ConfigError::Parse(_))
    ));
}
