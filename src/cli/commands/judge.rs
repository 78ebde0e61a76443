//! Judge command - run a problem over a test-case directory.

use std::path::Path;

use super::emit_envelope;
use crate::config::JudgeConfig;
use crate::io::{Envelope, ErrorDetails, ExitCode, OutputFormat, ResultCode};
use crate::judge::{JudgeReport, run_judge};
use crate::problem::Problem;

pub fn run(problem: Problem, dir: &Path, config: &JudgeConfig, format: OutputFormat) -> ExitCode {
    let report = match run_judge(problem, dir, config) {
        Ok(report) => report,
        Err(e) => {
            if format.is_json() {
                let envelope: Envelope = Envelope::error(ResultCode::InternalError, e.to_string())
                    .with_problem(problem)
                    .with_error_details(ErrorDetails {
                        suggestions: vec![format!(
                            "Place inputs as <name>.{} files in the directory",
                            config.input_extension
                        )],
                        context: Some(serde_json::json!({ "dir": dir.display().to_string() })),
                    });
                return emit_envelope(&envelope, ExitCode::GeneralError);
            }
            eprintln!("Error: {e}");
            return ExitCode::GeneralError;
        }
    };

    let exit_code = if report.status.is_accepted() {
        ExitCode::Success
    } else {
        ExitCode::JudgeFailed
    };

    match format {
        OutputFormat::Text => {
            print_report(&report);
            exit_code
        }
        OutputFormat::Json => {
            let summary = format!("{} ({}/{})", report.status.label(), report.passed, report.total);
            let count = report.passed;
            let duration_ms = report.duration_ms;
            let envelope = if report.status.is_accepted() {
                Envelope::success(report).with_message(summary)
            } else {
                let mut envelope = Envelope::error(ResultCode::JudgeFailed, summary);
                envelope.data = Some(report);
                envelope
            };
            let envelope = envelope
                .with_problem(problem)
                .with_count(count)
                .with_duration_ms(duration_ms);
            emit_envelope(&envelope, exit_code)
        }
    }
}

fn print_report(report: &JudgeReport) {
    for output in &report.outputs {
        println!("{output}");
    }
    println!(
        "{}: {}/{} passed in {} ms",
        report.status.label(),
        report.passed,
        report.total,
        report.duration_ms
    );
    if let (Some(case), Some(message)) = (&report.failed_at, &report.message) {
        println!("  at {case}: {message}");
    }
}
