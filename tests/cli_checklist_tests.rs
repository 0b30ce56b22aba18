//! End-to-end tests for `lazychecklist checklist render`.

use std::path::Path;
use std::process::{Command, Output};

mod fixtures;
use fixtures::*;

fn run(store: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lazychecklist"))
        .arg("--store")
        .arg(store)
        .arg("--config")
        .arg(store.with_file_name("config.toml"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_render_plain_with_checked_row() {
    let (_dir, store) = temp_store();
    let template = template_json(&["Name:\\t", "Done"]);
    write_store(&store, &[("template:intake", template.as_str())]);

    let output = run(&store, &["checklist", "render", "intake", "--check", "2"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Checklist: intake\n[ ] Name: ______\n[x] Done\n"
    );
}

#[test]
fn test_render_json_segments() {
    let (_dir, store) = temp_store();
    let template = template_json(&["From\\t\\tto\\t"]);
    write_store(&store, &[("template:trip", template.as_str())]);

    let output = run(&store, &["checklist", "render", "trip", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let rows: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(
        rows,
        serde_json::json!([{
            "checked": false,
            "segments": [
                { "kind": "text", "text": "From" },
                { "kind": "blank" },
                { "kind": "text", "text": "to" },
                { "kind": "blank" }
            ]
        }])
    );
}

#[test]
fn test_render_rejects_out_of_range_row() {
    let (_dir, store) = temp_store();
    let template = template_json(&["Done"]);
    write_store(&store, &[("template:one", template.as_str())]);

    let output = run(&store, &["checklist", "render", "one", "--check", "3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("out of range"));
}

#[test]
fn test_render_unknown_template() {
    let (_dir, store) = temp_store();
    let output = run(&store, &["checklist", "render", "missing"]);
    assert_eq!(output.status.code(), Some(1));
}
