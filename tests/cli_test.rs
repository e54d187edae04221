//! Tests for the `svg-coords` binary

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use svg_coords::read_json;

fn layouts_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/artifacts/layouts")
}

fn temp_path(name: &str) -> PathBuf {
    let temp_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/artifacts/temp");
    let _ = fs::create_dir_all(&temp_dir);
    temp_dir.join(name)
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_svg-coords"))
        .args(args)
        .env("RUST_LOG", "svg_coords=warn")
        .output()
        .expect("failed to run svg-coords")
}

#[test]
fn test_extracts_directory() {
    let output_path = temp_path("cli_layouts.json");
    let _ = fs::remove_file(&output_path);

    let output = run(&[
        layouts_dir().to_str().unwrap(),
        output_path.to_str().unwrap(),
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.contains(&format!(
        "Extracted coordinates for 3 POI types to {}",
        output_path.display()
    )));
    // One line for the malformed file
    assert!(stdout.contains("Error processing broken.svg"));

    let written = read_json(&output_path).unwrap();
    assert_eq!(written.len(), 3);
    assert_eq!(written.get("bases"), Some(&[[-5.5, 6.0]][..]));
}

#[test]
fn test_output_is_indented_json() {
    let output_path = temp_path("cli_indent.json");
    let output = run(&[
        layouts_dir().to_str().unwrap(),
        output_path.to_str().unwrap(),
        "--policy",
        "first",
    ]);
    assert_eq!(output.status.code(), Some(0));

    let json = fs::read_to_string(&output_path).unwrap();
    assert!(json.starts_with("{\n  \"OVERLAY\": [\n    [\n      50.0,"));
}

#[test]
fn test_wrong_arity_is_usage_error() {
    let output = run(&[layouts_dir().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));

    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_invalid_policy_is_usage_error() {
    let output_path = temp_path("cli_invalid.json");
    let output = run(&[
        layouts_dir().to_str().unwrap(),
        output_path.to_str().unwrap(),
        "--policy",
        "middle",
    ]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_help_documents_policy_default() {
    let output = run(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Defaults to every path"));
    assert!(stdout.contains("Use --policy first"));
    assert!(stdout.contains("[default: every]"));
}

#[test]
fn test_missing_input_dir() {
    let output_path = temp_path("cli_missing.json");
    let output = run(&[
        layouts_dir().join("nope").to_str().unwrap(),
        output_path.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read directory"));
}

#[test]
fn test_unwritable_output() {
    let output_path = layouts_dir().join("no/such/dir/out.json");
    let output = run(&[
        layouts_dir().to_str().unwrap(),
        output_path.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to write"));
}
