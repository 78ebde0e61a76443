use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Run the binary in `dir` with `stdin` piped in.
fn run_in(dir: &Path, args: &[&str], stdin: impl AsRef<[u8]>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_numscan"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn numscan");

    // Commands that never read stdin may exit first; a broken pipe is fine.
    let _ = child.stdin.take().unwrap().write_all(stdin.as_ref());
    child.wait_with_output().expect("Failed to wait for numscan")
}

fn run(args: &[&str], stdin: impl AsRef<[u8]>) -> Output {
    let temp_dir = TempDir::new().unwrap();
    run_in(temp_dir.path(), args, stdin)
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_two_sum_found() {
    let output = run(&["two-sum"], "4\n2 7 11 15\n9\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0 1\n");
}

#[test]
fn test_two_sum_second_scenario() {
    let output = run(&["two-sum"], "3\n3 2 4\n6\n");
    assert_eq!(stdout(&output), "1 2\n");
}

#[test]
fn test_two_sum_not_found_prints_minus_one_and_exits_zero() {
    let output = run(&["two-sum"], "1\n5\n10\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "-1\n");
}

#[test]
fn test_max() {
    let output = run(&["max"], "3\n-5 -1 -9\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-1\n");
}

#[test]
fn test_max_empty_input_is_error() {
    let output = run(&["max"], "0\n");
    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("empty sequence"));
}

#[test]
fn test_malformed_input() {
    let output = run(&["two-sum"], "3\n1 x 3\n4\n");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid integer 'x'"));

    let output = run(&["max"], "5\n1 2\n");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_json_envelope() {
    let output = run(&["two-sum", "--json"], "4 2 7 11 15 9");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["code"], "OK");
    assert_eq!(value["data"]["first"], 0);
    assert_eq!(value["data"]["second"], 1);
    assert_eq!(value["meta"]["count"], 2);
    assert_eq!(value["meta"]["problem"], "two-sum");
}

#[test]
fn test_json_not_found() {
    let output = run(&["two-sum", "--json"], "0 0");
    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["status"], "not_found");
    assert_eq!(value["meta"]["count"], 0);
    assert!(value["data"].is_null());
}

#[test]
fn test_json_error() {
    let output = run(&["max", "--json"], "0");
    assert_eq!(output.status.code(), Some(3));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["type"], "error");
    assert_eq!(value["code"], "EMPTY_INPUT");
    assert_eq!(value["exit_code"], 3);
}

#[test]
fn test_invalid_utf8_is_malformed_input() {
    let output = run(&["two-sum", "--json"], b"2\n1 \xff\n3\n");
    assert_eq!(output.status.code(), Some(2));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["type"], "error");
    assert_eq!(value["code"], "MALFORMED_INPUT");
    assert_eq!(value["exit_code"], 2);
    assert_eq!(value["meta"]["problem"], "two-sum");

    let output = run(&["max"], b"2 \xfe 3");
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not valid UTF-8"));
}

#[test]
fn test_config_output_format() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".numscan");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("settings.toml"), "[output]\nformat = \"json\"\n").unwrap();

    let output = run_in(temp_dir.path(), &["max"], "2 4 8");
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["data"], 8);
}

#[test]
fn test_judge_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let cases = temp_dir.path().join("cases");
    std::fs::create_dir_all(&cases).unwrap();
    std::fs::write(cases.join("0.txt"), "4\n2 7 11 15\n9\n").unwrap();
    std::fs::write(cases.join("0.out"), "0 1\n").unwrap();
    std::fs::write(cases.join("1.txt"), "2\n1 1\n5\n").unwrap();
    std::fs::write(cases.join("1.out"), "-1\n").unwrap();

    let output = run_in(temp_dir.path(), &["judge", "two-sum", "cases"], "");
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("0 1\n-1\n"));
    assert!(text.contains("Accepted: 2/2 passed"));
}

#[test]
fn test_judge_wrong_answer_json() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("0.txt"), "2 3 9").unwrap();
    std::fs::write(temp_dir.path().join("0.out"), "3").unwrap();

    let output = run_in(temp_dir.path(), &["judge", "max", ".", "--json"], "");
    assert_eq!(output.status.code(), Some(4));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["code"], "JUDGE_FAILED");
    assert_eq!(value["data"]["status"], "wrong_answer");
    assert_eq!(value["data"]["failed_at"], "0.txt");
    assert_eq!(value["data"]["outputs"][0], "9");
}

#[test]
fn test_judge_missing_directory() {
    let output = run(&["judge", "max", "does-not-exist"], "");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_init_and_config_commands() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["init"], "");
    assert!(output.status.success());
    let config_path = temp_dir.path().join(".numscan/settings.toml");
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("version = 1"));
    assert!(content.contains("[judge]"));

    // Second init without --force refuses
    let output = run_in(temp_dir.path(), &["init"], "");
    assert_eq!(output.status.code(), Some(1));

    std::fs::write(&config_path, "version = 2\n[judge]\ntime_limit_ms = 99\n").unwrap();
    let output = run_in(temp_dir.path(), &["config"], "");
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("version = 2"));
    assert!(text.contains("time_limit_ms = 99"));
}

#[test]
fn test_explicit_config_missing_is_fatal() {
    let output = run(&["--config", "missing.toml", "max"], "1 1");
    assert_eq!(output.status.code(), Some(1));
}
