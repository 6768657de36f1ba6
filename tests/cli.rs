//! End-to-end checks of the `lumifmt` binary against a request document.

mod common;

use common::{fixture, run, run_with_stdin};

const REQUEST_LUMIS: &str = concat!(
    "{\n",
    "  \"356433\": [[1,25]   , [27,90]  , [92,140] , [142,268], [270,311],\n",
    "             [313,405], [407,580]],\n",
    "  \"356426\": [[1,60]],\n",
    "  \"356428\": [[10,12]  , [15,1800]],\n",
    "}\n"
);

fn request() -> String {
    fixture("request.json").display().to_string()
}

#[test]
fn formats_request_lumisections() {
    let result = run(&["lumis", "--input", &request(), "--field", "lumisections"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, REQUEST_LUMIS);
}

#[test]
fn missing_lumisections_field_is_empty_block() {
    let result = run(&["lumis", "--input", &request(), "--field", "no_such_field"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "{}\n");
}

#[test]
fn lumis_from_stdin_with_custom_wrap() {
    let result = run_with_stdin(
        &["lumis", "--per-line", "2"],
        r#"{"2": [[1,1],[2,2],[3,3]], "10": []}"#,
    );
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(
        result.stdout,
        "{\n  \"2\": [[1,1], [2,2],\n        [3,3]],\n  \"10\": [],\n}\n"
    );
}

#[test]
fn parse_reads_formatted_block_back() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("lumis.txt");
    std::fs::write(&path, REQUEST_LUMIS).expect("write block");

    let result = run(&["parse", "--input", &path.display().to_string()]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(
        result.stdout,
        concat!(
            r#"{"356433":[[1,25],[27,90],[92,140],[142,268],[270,311],[313,405],[407,580]],"#,
            r#""356426":[[1,60]],"356428":[[10,12],[15,1800]]}"#,
            "\n"
        )
    );
}

#[test]
fn parse_rejects_garbage_with_context() {
    let result = run_with_stdin(&["parse"], "{\"1\": [[1,2,3]]}");
    assert!(!result.success);
    assert!(
        result.stderr.contains("parse lumisection ranges"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn has_step_matches_list_and_delimited_sequences() {
    for (step, expected) in [
        ("DQM", "true\n"),
        ("RECO", "true\n"),
        ("NANO", "true\n"),
        ("ALCA", "true\n"),
        ("HARVESTING", "false\n"),
        ("NANO:@PHYS", "false\n"),
    ] {
        let result = run(&["has-step", "--input", &request(), "--step", step]);
        assert!(result.success, "stderr: {}", result.stderr);
        assert_eq!(result.stdout, expected, "step {step}");
    }
}

#[test]
fn has_step_exit_code_reports_absence() {
    let absent = run(&[
        "has-step",
        "--input",
        &request(),
        "--step",
        "SKIM",
        "--exit-code",
    ]);
    assert_eq!(absent.code, Some(1));
    assert_eq!(absent.stdout, "false\n");

    let present = run(&[
        "has-step",
        "--input",
        &request(),
        "--step",
        "PAT",
        "--exit-code",
    ]);
    assert_eq!(present.code, Some(0));
}

#[test]
fn has_step_on_malformed_document_is_false() {
    let result = run_with_stdin(&["has-step", "--step", "RECO"], r#"{"sequences": 3}"#);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "false\n");
}

#[test]
fn harvesting_lists_dqm_sequences() {
    let result = run(&["harvesting", "--input", &request()]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "0\n");
}

#[test]
fn count_runs_text_and_lists() {
    let runs = run(&["count", "--input", &request(), "--field", "runs"]);
    assert_eq!(runs.stdout, "3\n");

    let sequences = run(&["count", "--input", &request(), "--field", "sequences"]);
    assert_eq!(sequences.stdout, "2\n");

    let missing = run(&["count", "--input", &request(), "--field", "output_datasets"]);
    assert_eq!(missing.stdout, "0\n");
}

#[test]
fn unreadable_input_fails_with_path() {
    let result = run(&["count", "--input", "/nonexistent/request.json"]);
    assert!(!result.success);
    assert!(
        result.stderr.contains("/nonexistent/request.json"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn verbose_logs_to_stderr_only() {
    let result = run(&["--verbose", "count", "--input", &request(), "--field", "runs"]);
    assert!(result.success);
    assert_eq!(result.stdout, "3\n");
    assert!(result.stderr.contains("read input"), "stderr: {}", result.stderr);
}
