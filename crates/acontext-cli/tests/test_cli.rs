use serde_json::{Value, json};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const SESSION_A: &str = "0b9d8e7f-6a5c-4b3d-8e2f-1a0b9c8d7e6f";
const SESSION_B: &str = "f1e2d3c4-b5a6-4978-8a6b-5c4d3e2f1a0b";

fn record(session_id: &str, order: i64, description: &str, status: &str) -> Value {
    json!({
        "id": "7f1c2a9e-3b1d-4c55-9a0e-2d4b6f8a1c30",
        "session_id": session_id,
        "task_order": order,
        "task_description": description,
        "task_status": status,
        "task_data": { "attempt": 1 },
        "space_digested": false,
        "raw_message_ids": []
    })
}

fn write_fixture(dir: &TempDir, body: &Value) -> std::path::PathBuf {
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, body.to_string()).unwrap();
    path
}

fn acontext(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_acontext"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Should run acontext binary")
}

fn acontext_path(subcommand: &str, path: &Path) -> Output {
    acontext(&[subcommand, path.to_str().unwrap()])
}

#[test]
fn test_statuses_lists_all_four() {
    let output = acontext(&["statuses"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "pending\nrunning\nsuccess\nfailed\n"
    );
}

#[test]
fn test_summarize_orders_tasks_within_session() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        &json!([
            record(SESSION_A, 2, "Write report", "pending"),
            record(SESSION_A, 1, "Fetch URL", "running"),
        ]),
    );

    let output = acontext_path("summarize", &path);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        format!(
            "Session {SESSION_A}\n  Task 1: Fetch URL (Status: running)\n  Task 2: Write report (Status: pending)\n"
        )
    );
}

#[test]
fn test_summarize_groups_sessions() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        &json!([
            record(SESSION_B, 1, "Other session", "success"),
            record(SESSION_A, 1, "First session", "failed"),
        ]),
    );

    let output = acontext_path("summarize", &path);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let a = stdout.find(SESSION_A).expect("session A listed");
    let b = stdout.find(SESSION_B).expect("session B listed");
    assert!(a < b, "sessions are listed in id order");
    assert!(stdout.contains("Task 1: Other session (Status: success)"));
}

#[test]
fn test_summarize_json_output_decodes() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &record(SESSION_A, 4, "Digest", "success"));

    let output = acontext(&["summarize", "--json", path.to_str().unwrap()]);
    assert!(output.status.success());
    let printed: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(printed[0]["task_status"], "success");
    assert_eq!(printed[0]["task_data"]["attempt"], 1);
}

fn validate_stdin(body: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_acontext"))
        .args(["validate", "-"])
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Should spawn acontext binary");

    child.stdin.take().unwrap().write_all(body).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_summarize_json_is_one_array_accepted_by_validate() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        &json!([
            record(SESSION_B, 1, "Other session", "success"),
            record(SESSION_A, 2, "Write report", "pending"),
            record(SESSION_A, 1, "Fetch URL", "running"),
        ]),
    );

    let output = acontext(&["summarize", "--json", path.to_str().unwrap()]);
    assert!(output.status.success());
    let printed: Value = serde_json::from_slice(&output.stdout).expect("stdout is one JSON document");
    let descriptions: Vec<&str> = printed
        .as_array()
        .expect("stdout is a JSON array")
        .iter()
        .map(|task| task["task_description"].as_str().unwrap())
        .collect();
    assert_eq!(descriptions, vec!["Fetch URL", "Write report", "Other session"]);

    let validated = validate_stdin(&output.stdout);
    assert!(validated.status.success());
    assert_eq!(String::from_utf8_lossy(&validated.stdout), "OK: 3 task(s)\n");
}

#[test]
fn test_validate_accepts_valid_batch() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        &json!([
            record(SESSION_A, 1, "One", "pending"),
            record(SESSION_A, 2, "Two", "success"),
        ]),
    );

    let output = acontext_path("validate", &path);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "OK: 2 task(s)\n");
}

#[test]
fn test_validate_rejects_unknown_status() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &json!([record(SESSION_A, 1, "One", "done")]));

    let output = acontext_path("validate", &path);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid task status at index 0: 'done'"),
        "stderr: {stderr}"
    );
    assert_eq!(stderr.matches("'done'").count(), 1, "stderr: {stderr}");
}

#[test]
fn test_piped_logs_have_no_color_codes() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &record(SESSION_A, 1, "One", "pending"));

    let output = acontext(&["--log-level", "debug", "validate", path.to_str().unwrap()]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Decoded task records"), "stderr: {stderr}");
    assert!(!stderr.contains('\u{1b}'), "stderr: {stderr}");
}

#[test]
fn test_validate_reads_stdin() {
    let output = validate_stdin(record(SESSION_A, 1, "Piped", "running").to_string().as_bytes());
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "OK: 1 task(s)\n");
}

#[test]
fn test_validate_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = acontext_path("validate", &dir.path().join("absent.json"));
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to open"));
}
