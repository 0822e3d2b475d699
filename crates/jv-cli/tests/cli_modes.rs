//! End-to-end tests of every mode, exit codes and diagnostics.

use assert_cmd::cargo::cargo_bin_cmd;
use jv_testing::fixtures::{CLAUDE_STREAM, TRAJECTORY};
use jv_testing::records::{
    assistant_edit, assistant_text, assistant_write, init_record, result_record,
    trajectory_step, user_tool_result,
};
use jv_testing::{TestWorld, assertions};
use predicates::prelude::*;
use serde_json::json;

#[test]
fn test_missing_file_is_fatal() {
    let world = TestWorld::new();

    let result = world.run(&["missing.jsonl"]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stdout().is_empty());
    assert!(result.stderr().contains("Error: File not found: missing.jsonl"));
}

#[test]
fn test_file_without_records_is_fatal() {
    let world = TestWorld::new().with_file("empty.jsonl", "\n   \nnot json\n");

    let result = world.run(&["empty.jsonl"]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("has no valid JSON records"));
}

#[test]
fn test_malformed_line_is_reported_with_physical_line_number() {
    let world = TestWorld::new().with_sample(CLAUDE_STREAM);

    let result = world.run(&[CLAUDE_STREAM]).unwrap();

    assert!(result.success());
    assert!(result.stderr().contains("line 6: JSON parse failed"));
    assert_eq!(result.stderr().matches("JSON parse failed").count(), 1);
}

#[test]
fn test_log_level_error_silences_warnings() {
    let world = TestWorld::new().with_sample(CLAUDE_STREAM);

    let result = world.run(&[CLAUDE_STREAM, "--log-level", "error"]).unwrap();

    assert!(result.success());
    assert!(!result.stderr().contains("JSON parse failed"));
}

#[test]
fn test_line_mode_prints_exact_record() {
    let world = TestWorld::new().with_sample(CLAUDE_STREAM);

    let result = world.run(&[CLAUDE_STREAM, "-l", "9"]).unwrap();

    assert!(result.success());
    assert!(
        result
            .stdout()
            .starts_with("=== line 9 ===\n{\n  \"type\": \"result\",\n  \"subtype\": \"success\",")
    );
}

#[test]
fn test_line_numbers_follow_parsed_sequence() {
    // physical line 7 follows the malformed line, so it is record 6
    let world = TestWorld::new().with_sample(CLAUDE_STREAM);

    let result = world.run(&[CLAUDE_STREAM, "--line", "6"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("pytest is missing"));
}

#[test]
fn test_line_out_of_range() {
    let world = TestWorld::new().with_sample(CLAUDE_STREAM);

    for line in ["0", "10"] {
        let result = world.run(&[CLAUDE_STREAM, "-l", line]).unwrap();
        assert_eq!(result.code(), Some(1));
        assert!(result.stdout().is_empty());
        assert!(result.stderr().contains("Error: line out of range (1-9)"));
    }
}

#[test]
fn test_line_truncation() {
    let world = TestWorld::new().with_sample(CLAUDE_STREAM);

    let result = world
        .run(&[CLAUDE_STREAM, "-l", "1", "--truncate", "20"])
        .unwrap();

    assert!(result.success());
    assert_eq!(
        result.stdout(),
        "=== line 1 ===\n{\n  \"type\": \"system\"\n... (truncated)\n"
    );
}

#[test]
fn test_type_filter() {
    let world = TestWorld::new().with_sample(CLAUDE_STREAM);

    let result = world.run(&[CLAUDE_STREAM, "-t", "user"]).unwrap();

    assert!(result.success());
    assertions::assert_line_count(result.stdout(), "=== line", 3).unwrap();
    assertions::assert_in_order(
        result.stdout(),
        &["=== line 3 ===", "=== line 5 ===", "=== line 7 ==="],
    )
    .unwrap();
}

#[test]
fn test_type_filter_without_match_is_soft() {
    let world = TestWorld::new().with_sample(CLAUDE_STREAM);

    let result = world.run(&[CLAUDE_STREAM, "-t", "nope"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().is_empty());
    assert!(result.stderr().contains("No records with type='nope'"));
}

#[test]
fn test_keys_projection() {
    let world = TestWorld::new().with_sample(CLAUDE_STREAM);

    let result = world.run(&[CLAUDE_STREAM, "-k", "type, subtype"]).unwrap();

    assert!(result.success());
    assertions::assert_line_count(result.stdout(), "line ", 9).unwrap();
    assert!(
        result
            .stdout()
            .starts_with("line 1: {\"type\":\"system\",\"subtype\":\"init\"}\n")
    );
    assert!(
        result
            .stdout()
            .ends_with("line 9: {\"type\":\"result\",\"subtype\":\"success\"}\n")
    );
}

#[test]
fn test_nested_keys_skip_records_without_them() {
    let world = TestWorld::new().with_sample(CLAUDE_STREAM);

    let result = world.run(&[CLAUDE_STREAM, "-k", "usage.output_tokens"]).unwrap();

    assert!(result.success());
    assert_eq!(result.stdout(), "line 9: {\"usage.output_tokens\":640}\n");
}

#[test]
fn test_mode_precedence_line_wins() {
    let world = TestWorld::new().with_sample(CLAUDE_STREAM);

    let result = world
        .run(&[CLAUDE_STREAM, "-a", "-c", "-t", "user", "-l", "1"])
        .unwrap();

    assert!(result.success());
    assert!(result.stdout().starts_with("=== line 1 ==="));
}

#[test]
fn test_analysis_json_keeps_raw_numbers() {
    let world = TestWorld::new().with_sample(CLAUDE_STREAM);

    let result = world.run(&[CLAUDE_STREAM, "-a", "--format", "json"]).unwrap();

    assert!(result.success());
    let json = result.json().unwrap();
    let outcome = &json["content"]["outcome"];
    assert_eq!(outcome["duration_secs"], json!(12.345));
    assert_eq!(outcome["usage"]["output_tokens"], json!(640));
    assert_eq!(json["content"]["errors"][0]["position"], json!(5));
    assert_eq!(json["badge"]["level"], json!("info"));
}

#[test]
fn test_analysis_of_generated_log() {
    let world = TestWorld::new().with_jsonl(
        "run.jsonl",
        &[
            init_record("claude-opus", &["Bash"]),
            assistant_text("Looking around"),
            user_tool_result("permission denied", true),
            result_record(1500, 0.0012, 10, 20),
        ],
    );

    let result = world.run(&["run.jsonl", "-a"]).unwrap();

    assert!(result.success());
    let out = result.stdout();
    assert!(out.contains("  Model: claude-opus\n"));
    assert!(out.contains("  Duration: 1.5s\n"));
    assert!(out.contains("  Cost: $0.0012\n"));
    assert!(out.contains("  Input: 10\n  Output: 20\n"));
    assert!(out.contains("[Errors (1)]\n  line 3: permission denied...\n"));
    assert!(out.contains("  line 2: Looking around...\n"));
}

#[test]
fn test_code_extraction_from_claude_log() {
    let world = TestWorld::new().with_sample(CLAUDE_STREAM);

    let result = world.run(&[CLAUDE_STREAM, "-c"]).unwrap();

    assert!(result.success());
    let out = result.stdout();
    assert!(out.contains("Found 2 code changes\n"));
    assert!(out.contains("  /work/demo/calc.py: 1 write, 1 edit\n"));
    assertions::assert_in_order(
        out,
        &[
            "[1/2] line 2: Write → /work/demo/calc.py",
            "def add(a, b):",
            "[2/2] line 6: Edit → /work/demo/calc.py",
            "--- OLD ---",
            "+++ NEW +++",
            "def sub(a, b):",
        ],
    )
    .unwrap();
}

#[test]
fn test_code_extraction_from_trajectory_with_export() {
    let world = TestWorld::new().with_sample(TRAJECTORY);

    let result = world.run(&[TRAJECTORY, "-c", "-o", "out/codes"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let out = result.stdout();
    assert!(out.contains("Found 3 code changes\n"));
    assert!(out.contains("  hello.py: 2 writes, 1 edit\n"));
    assert!(out.contains("[3/3] line 3: Edit → hello.py\n"));
    assert!(out.contains("Saved to out/codes:\n"));

    let dir = world.path("out/codes");
    let mut names: Vec<String> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec!["001_write_hello.py", "002_write_hello.py", "003_edit_hello.py.diff"]
    );

    let diff = std::fs::read_to_string(dir.join("003_edit_hello.py.diff")).unwrap();
    assert_eq!(
        diff,
        "# Source: line 3, tool: Edit\n# Target: hello.py\n\n--- OLD ---\nhello\n\n+++ NEW +++\nhello, world"
    );
}

#[test]
fn test_trajectory_string_arguments_are_decoded() {
    let arguments = r#"{"file_path": "src/x.rs", "old_string": "a", "new_string": "b"}"#;
    let doc = json!({
        "steps": [
            trajectory_step(7, json!([{"function_name": "Edit", "arguments": arguments}]))
        ]
    });
    let world = TestWorld::new().with_file("t.json", &doc.to_string());

    let result = world.run(&["t.json", "-c"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("[1/1] line 7: Edit → src/x.rs\n"));
}

#[test]
fn test_long_payload_preview() {
    let big = "a".repeat(3500);
    let world = TestWorld::new().with_jsonl("big.jsonl", &[assistant_write("big.py", &big)]);

    let result = world.run(&["big.jsonl", "-c"]).unwrap();

    assert!(result.success());
    assert!(
        result
            .stdout()
            .contains(&format!("\n{}\n\n... (3500 chars total, truncated)\n", "a".repeat(3000)))
    );
}

#[test]
fn test_edit_export_with_debug_logging() {
    let world = TestWorld::new()
        .with_env("JV_LOG", "debug")
        .with_jsonl("edit.jsonl", &[assistant_edit("src/lib.rs", "a", "b")]);

    let result = world.run(&["edit.jsonl", "-c", "-o", "out"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("[1/1] line 1: Edit → src/lib.rs\n"));
    assert!(result.stdout().contains("\n--- OLD ---\na\n\n+++ NEW +++\nb\n"));
    assert!(result.stderr().contains("exported"));

    let diff = std::fs::read_to_string(world.root().join("out/001_edit_src_lib.rs.diff")).unwrap();
    assert_eq!(
        diff,
        "# Source: line 1, tool: Edit\n# Target: src/lib.rs\n\n--- OLD ---\na\n\n+++ NEW +++\nb"
    );
}

#[test]
fn test_no_code_changes_is_soft() {
    let world = TestWorld::new().with_jsonl("plain.jsonl", &[assistant_text("hi")]);

    let result = world.run(&["plain.jsonl", "-c", "-o", "never"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("no code changes found"));
    assert!(!world.path("never").exists());
}

#[test]
fn test_trajectory_summary() {
    let world = TestWorld::new().with_sample(TRAJECTORY);

    let result = world.run(&[TRAJECTORY]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("Records: 4\nFormat: trajectory\n"));
    assert!(result.stdout().contains("  unknown: 4\n"));
    assert!(!result.stdout().contains("--analyze"));
}

#[test]
fn test_config_file_sets_previews_and_truncate() {
    let world = TestWorld::new()
        .with_sample(CLAUDE_STREAM)
        .with_config("[display]\nthought_preview_chars = 10\ntruncate = 20\n");

    let result = world.run(&[CLAUDE_STREAM, "-a"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("  line 2: I'll creat...\n"));

    let result = world.run(&[CLAUDE_STREAM, "-l", "1"]).unwrap();
    assert!(result.stdout().ends_with("... (truncated)\n"));
}

#[test]
fn test_malformed_config_is_fatal() {
    let world = TestWorld::new()
        .with_sample(CLAUDE_STREAM)
        .with_config("[display\n");

    let result = world.run(&[CLAUDE_STREAM]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("Error: Invalid config"));
}

#[test]
fn test_explicit_config_flag_wins_over_env() {
    let world = TestWorld::new()
        .with_sample(CLAUDE_STREAM)
        .with_config("[display\n")
        .with_file("good.toml", "[display]\nerror_preview_chars = 5\n");

    let result = world
        .run(&[CLAUDE_STREAM, "-a", "--config", "good.toml"])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("  line 5: Modul...\n"));
}

#[test]
fn test_version_flags() {
    for flag in ["-v", "-V", "--version"] {
        let mut cmd = cargo_bin_cmd!("jv");
        cmd.arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("jv 0.2.0"));
    }
}

#[test]
fn test_help_lists_examples() {
    let mut cmd = cargo_bin_cmd!("jv");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--analyze"))
        .stdout(predicate::str::contains("Examples:"));
}
