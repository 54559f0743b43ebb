//! File-level tests for the CLI commands

use actionflow_cli::{
    build_document, load_config, read_records, render_deps, render_order, write_document,
    CommandError,
};
use actionflow_core::{ActionFlowError, GraphError, TaskId, ValidationError};
use actionflow_pipeline::WorkflowDocument;
use actionflow_test_utils::dashboard_meeting_edges;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tempfile::TempDir;

const DASHBOARD: &str = r#"[
  {"id": "task_0", "text": "Maria will design the dashboard layout", "role": "UX Designer", "confidence": 0.9},
  {"id": "task_1", "text": "Raj will update the frontend components after Maria finishes the design"},
  {"id": "task_2", "text": "Sara will review everything once both tasks are done", "confidence": 0.8}
]"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn build(dir: &TempDir, tasks: &str) -> Result<WorkflowDocument, CommandError> {
    let path = write(dir, "tasks.json", tasks);
    let records = read_records(&path).unwrap();
    build_document(records, &load_config(None, false).unwrap())
}

#[test]
fn build_writes_document() {
    let dir = TempDir::new().unwrap();
    let document = build(&dir, DASHBOARD).unwrap();
    assert_eq!(document.edges, dashboard_meeting_edges());
    assert_eq!(document.tasks[0].role, "UX Designer");

    let out = dir.path().join("workflow.json");
    write_document(&document, &out).unwrap();
    let text = std::fs::read_to_string(&out).unwrap();
    assert_eq!(WorkflowDocument::from_json(&text).unwrap(), document);
}

#[test]
fn deps_lists_tasks_per_owner() {
    let dir = TempDir::new().unwrap();
    let document = build(&dir, DASHBOARD).unwrap();
    let expected = "\
maria:
  [task_0] Maria will design the dashboard layout
raj:
  [task_1] Raj will update the frontend components after Maria finishes the design (tentative; depends on: task_0)
sara:
  [task_2] Sara will review everything once both tasks are done (depends on: task_1, task_0)
";
    assert_eq!(render_deps(&document), expected);
}

#[test]
fn order_follows_dependencies() {
    let dir = TempDir::new().unwrap();
    let document = build(&dir, DASHBOARD).unwrap();
    assert_eq!(render_order(&document).unwrap(), "1. task_0\n2. task_1\n3. task_2\n");
}

#[test]
fn order_reports_cycle() {
    let dir = TempDir::new().unwrap();
    let document = build(
        &dir,
        r#"[
            {"id": "task_0", "text": "Raj will fix the bug after Sara confirms the repro"},
            {"id": "task_1", "text": "Sara will review it after Raj pushes"}
        ]"#,
    )
    .unwrap();

    let err = render_order(&document).unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert!(matches!(
        err,
        CommandError::Rejected(ActionFlowError::Graph(GraphError::CycleDetected { ref involved }))
            if involved == &[TaskId::new("task_0"), TaskId::new("task_1")]
    ));
}

#[test]
fn missing_text_is_rejected() {
    let dir = TempDir::new().unwrap();
    let err = build(&dir, r#"[{"id": "task_0"}]"#).unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert!(matches!(
        err,
        CommandError::Rejected(ActionFlowError::Validation(ValidationError::MissingField {
            index: 0,
            field: "text"
        }))
    ));
}

#[test]
fn malformed_input_is_not_a_validation_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "tasks.json", "{not json");
    let err = read_records(&path).unwrap_err();
    assert!(format!("{err:#}").contains("is not a JSON array of tasks"));
}

#[test]
fn config_file_and_strict_flag() {
    let dir = TempDir::new().unwrap();
    let config_path = write(&dir, "graph.toml", "temporal_triggers = [\"after\"]\n");
    let config = load_config(Some(&config_path), true).unwrap();
    assert!(config.strict_admin);
    assert_eq!(config.temporal_triggers, vec!["after".to_string()]);

    let bad = write(&dir, "bad.toml", "group_triggers = []\n");
    let err = load_config(Some(&bad), false).unwrap_err();
    assert!(format!("{err:#}").contains("failed to load config"));
}
