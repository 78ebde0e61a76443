//! Test-case harness for the built-in problems.
//!
//! Feeds every input file in a directory to a problem, keeps the first line
//! of each answer and compares it with an optional expected-output file.
//! The run stops at the first case that fails, exceeds the time limit or
//! has unusable input.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::config::JudgeConfig;
use crate::problem::Problem;
use crate::utils::duration_ms;
use crate::{debug_event, log_event};

/// Failures of the harness itself, as opposed to a failing verdict.
#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("Test case directory not found: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No '*.{extension}' test cases in {}", dir.display())]
    NoTestCases { dir: PathBuf, extension: String },

    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type JudgeResult<T> = Result<T, JudgeError>;

/// Verdict of a judge run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JudgeStatus {
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    RuntimeError,
}

impl JudgeStatus {
    pub fn is_accepted(self) -> bool {
        self == Self::Accepted
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::WrongAnswer => "Wrong Answer",
            Self::TimeLimitExceeded => "Time Limit Exceeded",
            Self::RuntimeError => "Runtime Error",
        }
    }
}

/// Outcome of running one problem over a test-case directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeReport {
    pub problem: Problem,
    pub status: JudgeStatus,
    /// First output line of every case that ran to completion
    pub outputs: Vec<String>,
    /// Cases that completed within the limit and matched (when checked)
    pub passed: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub duration_ms: u64,
}

/// A single input file and its optional expected output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub input: PathBuf,
    pub expected: Option<PathBuf>,
}

/// Collect the test cases in `dir`, ordered by numeric stem when possible.
pub fn discover_cases(dir: &Path, config: &JudgeConfig) -> JudgeResult<Vec<TestCase>> {
    if !dir.is_dir() {
        return Err(JudgeError::NotADirectory(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| JudgeError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut cases = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| JudgeError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let extension = path.extension().and_then(|e| e.to_str());
        if !path.is_file() || extension != Some(config.input_extension.as_str()) {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
            continue;
        };
        let expected = path.with_extension(&config.expected_extension);
        cases.push(TestCase {
            name,
            expected: expected.is_file().then_some(expected),
            input: path,
        });
    }

    if cases.is_empty() {
        return Err(JudgeError::NoTestCases {
            dir: dir.to_path_buf(),
            extension: config.input_extension.clone(),
        });
    }

    cases.sort_by(|a, b| compare_case_names(&a.input, &b.input));
    Ok(cases)
}

// `2.txt` sorts before `10.txt`; non-numeric stems follow in name order.
fn compare_case_names(a: &Path, b: &Path) -> Ordering {
    let numeric = |p: &Path| p.file_stem()?.to_str()?.parse::<u64>().ok();
    match (numeric(a), numeric(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Run `problem` over every test case in `dir`.
pub fn run_judge(problem: Problem, dir: &Path, config: &JudgeConfig) -> JudgeResult<JudgeReport> {
    let cases = discover_cases(dir, config)?;
    let limit = Duration::from_millis(config.time_limit_ms);
    let run_start = Instant::now();

    let mut report = JudgeReport {
        problem,
        status: JudgeStatus::Accepted,
        outputs: Vec::with_capacity(cases.len()),
        passed: 0,
        total: cases.len(),
        failed_at: None,
        message: None,
        duration_ms: 0,
    };

    log_event!("judge", "start", "{} case(s) for {problem}", cases.len());

    for case in &cases {
        let bytes = read_file(&case.input)?;

        let start = Instant::now();
        let result = problem.solve_bytes(&bytes);
        let elapsed = start.elapsed();
        debug_event!("judge", "case", "{} took {elapsed:?}", case.name);

        if exceeds_limit(elapsed, limit) {
            let message = format!(
                "took {} ms, limit is {} ms",
                elapsed.as_millis(),
                config.time_limit_ms
            );
            report.fail(JudgeStatus::TimeLimitExceeded, &case.name, message);
            break;
        }

        let output = match result {
            Ok(answer) => answer.to_string(),
            Err(e) => {
                report.fail(JudgeStatus::RuntimeError, &case.name, e.to_string());
                break;
            }
        };
        report.outputs.push(output.clone());

        if let Some(expected_path) = &case.expected {
            let expected = first_line(&String::from_utf8_lossy(&read_file(expected_path)?));
            if expected != output {
                report.fail(
                    JudgeStatus::WrongAnswer,
                    &case.name,
                    format!("expected '{expected}', got '{output}'"),
                );
                break;
            }
        }

        report.passed += 1;
    }

    report.duration_ms = duration_ms(run_start.elapsed());
    log_event!(
        "judge",
        "finished",
        "{} ({}/{})",
        report.status.label(),
        report.passed,
        report.total
    );
    Ok(report)
}

// Running exactly up to the limit is still within it.
fn exceeds_limit(elapsed: Duration, limit: Duration) -> bool {
    elapsed > limit
}

impl JudgeReport {
    fn fail(&mut self, status: JudgeStatus, case: &str, message: String) {
        tracing::warn!("[judge] {} at {case}: {message}", status.label());
        self.status = status;
        self.failed_at = Some(case.to_string());
        self.message = Some(message);
    }
}

// Decoding is left to the caller; only the read itself can fail here.
fn read_file(path: &Path) -> JudgeResult<Vec<u8>> {
    fs::read(path).map_err(|source| JudgeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn first_line(text: &str) -> String {
    text.trim().lines().next().unwrap_or("").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_numeric_case_order() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["10.txt", "2.txt", "0.txt", "extra.txt", "notes.md"] {
            write(temp_dir.path(), name, "1 1");
        }

        let cases = discover_cases(temp_dir.path(), &JudgeConfig::default()).unwrap();
        let names: Vec<_> = cases.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["0.txt", "2.txt", "10.txt", "extra.txt"]);
    }

    #[test]
    fn test_expected_file_detection() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "0.txt", "1 1");
        write(temp_dir.path(), "0.out", "1");
        write(temp_dir.path(), "1.txt", "1 2");

        let cases = discover_cases(temp_dir.path(), &JudgeConfig::default()).unwrap();
        assert!(cases[0].expected.is_some());
        assert!(cases[1].expected.is_none());
    }

    #[test]
    fn test_accepted_run() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "0.txt", "4\n2 7 11 15\n9\n");
        write(temp_dir.path(), "0.out", "0 1\n");
        write(temp_dir.path(), "1.txt", "3\n3 2 4\n6\n");
        write(temp_dir.path(), "1.out", "1 2");
        write(temp_dir.path(), "2.txt", "1\n5\n10\n");

        let report = run_judge(Problem::TwoSum, temp_dir.path(), &JudgeConfig::default()).unwrap();
        assert_eq!(report.status, JudgeStatus::Accepted);
        assert_eq!(report.outputs, vec!["0 1", "1 2", "-1"]);
        assert_eq!(report.passed, 3);
        assert_eq!(report.total, 3);
        assert!(report.failed_at.is_none());
    }

    #[test]
    fn test_wrong_answer_stops_run() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "0.txt", "3 -5 -1 -9");
        write(temp_dir.path(), "0.out", "-5");
        write(temp_dir.path(), "1.txt", "1 4");

        let report = run_judge(Problem::Max, temp_dir.path(), &JudgeConfig::default()).unwrap();
        assert_eq!(report.status, JudgeStatus::WrongAnswer);
        assert_eq!(report.failed_at.as_deref(), Some("0.txt"));
        assert_eq!(report.outputs, vec!["-1"]);
        assert_eq!(report.passed, 0);
    }

    #[test]
    fn test_malformed_case_is_runtime_error() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "0.txt", "2 1 2");
        write(temp_dir.path(), "1.txt", "2 1 oops");

        let report = run_judge(Problem::Max, temp_dir.path(), &JudgeConfig::default()).unwrap();
        assert_eq!(report.status, JudgeStatus::RuntimeError);
        assert_eq!(report.failed_at.as_deref(), Some("1.txt"));
        assert_eq!(report.passed, 1);
        assert!(report.message.unwrap().contains("oops"));
    }

    #[test]
    fn test_invalid_utf8_case_is_runtime_error() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "0.txt", "2 1 2");
        fs::write(temp_dir.path().join("1.txt"), b"2 1 \xff").unwrap();
        write(temp_dir.path(), "2.txt", "1 7");

        let report = run_judge(Problem::Max, temp_dir.path(), &JudgeConfig::default()).unwrap();
        assert_eq!(report.status, JudgeStatus::RuntimeError);
        assert_eq!(report.failed_at.as_deref(), Some("1.txt"));
        assert_eq!(report.outputs, vec!["2"]);
        assert_eq!(report.passed, 1);
        assert_eq!(report.total, 3);
        assert!(report.message.unwrap().contains("UTF-8"));
    }

    #[test]
    fn test_limit_boundary() {
        let limit = Duration::from_millis(1000);
        assert!(!exceeds_limit(Duration::from_millis(999), limit));
        assert!(!exceeds_limit(limit, limit));
        assert!(exceeds_limit(Duration::from_millis(1001), limit));
        assert!(exceeds_limit(Duration::from_nanos(1), Duration::ZERO));
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = run_judge(Problem::Max, temp_dir.path(), &JudgeConfig::default()).unwrap_err();
        assert!(matches!(err, JudgeError::NoTestCases { .. }));
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        let err = run_judge(Problem::Max, &missing, &JudgeConfig::default()).unwrap_err();
        assert!(matches!(err, JudgeError::NotADirectory(_)));
    }

    #[test]
    fn test_custom_extensions() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.in", "2 3 9");
        write(temp_dir.path(), "a.ans", "9");
        let config = JudgeConfig {
            input_extension: "in".to_string(),
            expected_extension: "ans".to_string(),
            ..JudgeConfig::default()
        };

        let report = run_judge(Problem::Max, temp_dir.path(), &config).unwrap();
        assert!(report.status.is_accepted());
    }
}
