//! Max and two-sum commands: read stdin, solve, print.

use is_terminal::IsTerminal;
use std::io::Read;
use std::time::Instant;

use super::emit_envelope;
use crate::error::ScanError;
use crate::io::{Envelope, ErrorDetails, ExitCode, OutputFormat};
use crate::problem::{Answer, Problem};
use crate::utils::duration_ms;

/// Run `problem` over all of stdin.
pub fn run(problem: Problem, format: OutputFormat) -> ExitCode {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprintln!("Reading {problem} input from stdin (end with Ctrl-D)...");
    }

    // Bytes, not a String: undecodable input is a parse error, not an I/O one.
    let mut bytes = Vec::new();
    if let Err(e) = stdin.lock().read_to_end(&mut bytes) {
        eprintln!("Error: failed to read stdin: {e}");
        return ExitCode::GeneralError;
    }

    let start = Instant::now();
    let result = problem.solve_bytes(&bytes);
    let elapsed_ms = duration_ms(start.elapsed());
    tracing::debug!("[{problem}] solved in {elapsed_ms} ms");

    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => print_json(problem, result, elapsed_ms),
    }
}

fn print_text(result: Result<Answer, ScanError>) -> ExitCode {
    match result {
        Ok(answer) => {
            println!("{answer}");
            ExitCode::Success
        }
        Err(e) => {
            let exit_code = e.exit_code();
            eprintln!("Error ({}): {e}", exit_code.description());
            exit_code
        }
    }
}

fn print_json(problem: Problem, result: Result<Answer, ScanError>, duration_ms: u64) -> ExitCode {
    match result {
        Ok(answer) => {
            let envelope = match answer {
                Answer::Max(value) => Envelope::success(serde_json::json!(value))
                    .with_message(format!("Maximum is {value}")),
                Answer::Pair(Some(pair)) => Envelope::success(serde_json::json!(pair))
                    .with_message(format!("Positions {pair} sum to the target")),
                Answer::Pair(None) => {
                    Envelope::not_found("No two distinct positions sum to the target")
                        .with_hint("Text output prints -1 for this outcome")
                }
            }
            .with_problem(problem)
            .with_count(answer.len())
            .with_duration_ms(duration_ms);

            emit_envelope(&envelope, ExitCode::Success)
        }
        Err(e) => {
            let envelope: Envelope = Envelope::error(e.result_code(), e.to_string())
                .with_problem(problem)
                .with_error_details(ErrorDetails {
                    suggestions: e.suggestions(),
                    context: None,
                });

            emit_envelope(&envelope, e.exit_code())
        }
    }
}
