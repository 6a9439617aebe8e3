//! End-to-end tests for the `yavl` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const GRAMMAR: &str = r#"
map:
  name: [string]
  port: [uint]
  mode: [{enum: [fast, slow]}]
"#;

const SPEC: &str = r#"
Types:
  Mode: [fast, slow]
  Server:
    name: String
    mode: Mode
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

fn yavl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_yavl"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to run yavl")
}

fn arg(path: &Path) -> &str {
    path.to_str().expect("Temp path is not UTF-8")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_validate_success() {
    let dir = TempDir::new().unwrap();
    let grammar = write(&dir, "grammar.yaml", GRAMMAR);
    let input = write(&dir, "doc.yaml", "name: api\nport: 80\nmode: fast\n");

    let output = yavl(&["validate", "--grammar", arg(&grammar), "--input", arg(&input)]);
    assert!(output.status.success());
}

#[test]
fn test_validate_failure_reports_every_error_as_json() {
    let dir = TempDir::new().unwrap();
    let grammar = write(&dir, "grammar.yaml", GRAMMAR);
    let input = write(&dir, "doc.yaml", "port: -1\nmode: medium\n");

    let output = yavl(&[
        "validate",
        "--grammar",
        arg(&grammar),
        "--input",
        arg(&input),
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(1));

    let records: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let codes: Vec<&str> = records
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes.len(), 3);
    assert!(codes.contains(&"Y-1-10"));
    assert!(codes.contains(&"Y-1-13"));
    assert!(codes.contains(&"Y-1-12"));
}

#[test]
fn test_compile_writes_bindings() {
    let dir = TempDir::new().unwrap();
    let spec = write(&dir, "spec.yaml", SPEC);
    let target = dir.path().join("bindings.rs");

    let output = yavl(&["compile", arg(&spec), arg(&target)]);
    assert!(output.status.success());
    let code = fs::read_to_string(&target).unwrap();
    assert!(code.contains("pub enum Mode {"));
    assert!(code.contains("pub fn validate_simple("));
}

#[test]
fn test_compile_flags_disable_blocks() {
    let dir = TempDir::new().unwrap();
    let spec = write(&dir, "spec.yaml", SPEC);

    let output = yavl(&["compile", "--no-emit-validator", "--no-emit-writers", arg(&spec), "-"]);
    assert!(output.status.success());
    let code = stdout(&output);
    assert!(code.contains("impl yavl_runtime::FromYaml for Server {"));
    assert!(!code.contains("ToYaml for Server"));
    assert!(!code.contains("get_types"));
}

#[test]
fn test_compile_failure_leaves_no_partial_output() {
    let dir = TempDir::new().unwrap();
    let spec = write(&dir, "spec.yaml", "Types:\n  Mode: [a, a]\n");

    let output = yavl(&["compile", arg(&spec), "-"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_failed_compile_keeps_existing_output() {
    let dir = TempDir::new().unwrap();
    let spec = write(&dir, "spec.yaml", "Types:\n  Good: [a]\n  Bad: 3\n");
    let target = write(&dir, "bindings.rs", "previous good output\n");

    let output = yavl(&["compile", arg(&spec), arg(&target)]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read_to_string(&target).unwrap(), "previous good output\n");
}

#[test]
fn test_failed_bind_keeps_existing_output() {
    let dir = TempDir::new().unwrap();
    let grammar = write(&dir, "grammar.yaml", "list:\n  map:\n    id: [int64]\n");
    let target = write(&dir, "item.rs", "previous good output\n");

    let output = yavl(&["bind", "--grammar", arg(&grammar), "--top-name", "item", arg(&target)]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read_to_string(&target).unwrap(), "previous good output\n");
}

#[test]
fn test_bind_to_stdout() {
    let dir = TempDir::new().unwrap();
    let grammar = write(&dir, "grammar.yaml", GRAMMAR);

    let output = yavl(&["bind", "--grammar", arg(&grammar), "--top-name", "server", "-"]);
    assert!(output.status.success());
    let code = stdout(&output);
    assert!(code.contains("pub struct Server {"));
    assert!(code.contains("pub port: u32,"));
}

#[test]
fn test_check_spec() {
    let dir = TempDir::new().unwrap();
    let good = write(&dir, "good.yaml", SPEC);
    let bad = write(&dir, "bad.yaml", "Type: {}\n");

    let output = yavl(&["check-spec", arg(&good)]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "Validation successful!");

    let output = yavl(&["check-spec", arg(&bad)]);
    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.starts_with("Validation failed!"));
    assert!(text.contains("Missing key \"Types\""));
}

#[test]
fn test_list_types_in_declaration_order() {
    let dir = TempDir::new().unwrap();
    let spec = write(&dir, "spec.yaml", SPEC);

    let output = yavl(&["list-types", arg(&spec)]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Mode\nServer\n");
}

#[test]
fn test_normalize_round_trips() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "doc.yaml", "b: 1\na: [x, y]\n");

    let output = yavl(&["normalize", arg(&input)]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.find("b: 1").unwrap() < text.find("a:").unwrap());
}
