//! Integration tests for the `run` command

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const SCRIPT: &str = r#"
# two books, then fix and drop
type title "The Hobbit"
type author Tolkien
type genre Fantasy
type year 1937
type isbn 978-0261102217
add
type title Dune
type author Herbert
type genre SF
type year 1965
type isbn 978-0441013593
add
edit 2
change author "Frank Herbert"
save
delete 1
"#;

/// Helper to run book-catalog with a script file
fn run_script(dir: &Path, script: &str, args: &[&str]) -> Output {
    let path = dir.join("books.txt");
    std::fs::write(&path, script).unwrap();
    Command::new(env!("CARGO_BIN_EXE_book-catalog"))
        .arg("run")
        .arg(&path)
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .output()
        .unwrap()
}

fn json_output(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_run_prints_final_json_table() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_script(temp_dir.path(), SCRIPT, &["--format", "json"]);
    let json = json_output(&output);

    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["sequenceNumber"], 1);
    assert_eq!(records[0]["title"], "Dune");
    assert_eq!(records[0]["author"], "Frank Herbert");
    assert_eq!(records[0]["yearOfPublication"], "1965");
}

#[test]
fn test_run_prints_text_table() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_script(temp_dir.path(), SCRIPT, &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("S.No"));
    assert!(stdout.contains("Book Title"));
    assert!(stdout.contains("Frank Herbert"));
    assert!(!stdout.contains("The Hobbit"));
}

#[test]
fn test_run_reads_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_book-catalog"))
        .args(["run", "-", "--format", "json", "--allow-empty"])
        .env("HOME", temp_dir.path())
        .env("XDG_CONFIG_HOME", temp_dir.path().join("xdg"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"type title Lonely\nadd\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let json = json_output(&output);
    assert_eq!(json[0]["title"], "Lonely");
    assert_eq!(json[0]["author"], "");
}

#[test]
fn test_guard_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("catalog.yaml");
    std::fs::write(&config, "submit_guard: off\n").unwrap();

    let script = "type title Untitled\nadd\n";
    let guarded = run_script(temp_dir.path(), script, &["--format", "json"]);
    assert_eq!(json_output(&guarded).as_array().unwrap().len(), 0);

    let unguarded = run_script(
        temp_dir.path(),
        script,
        &["--format", "json", "--config", config.to_str().unwrap()],
    );
    assert_eq!(json_output(&unguarded).as_array().unwrap().len(), 1);
}

#[test]
fn test_script_error_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_script(temp_dir.path(), "add\nshelve 3\n", &[]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line: 2"));
    assert!(stderr.contains("shelve"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_bad_config_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("catalog.yaml");
    std::fs::write(&config, "submit_guard: sometimes\n").unwrap();

    let output = run_script(
        temp_dir.path(),
        "add\n",
        &["--config", config.to_str().unwrap()],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse config file"));
}

#[test]
fn test_debug_logs_go_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_script(
        temp_dir.path(),
        SCRIPT,
        &["--format", "json", "--log-level", "debug"],
    );

    // Stdout stays parseable while logs land on stderr
    json_output(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("appended record"));
    assert!(stderr.contains("removed record"));
}
