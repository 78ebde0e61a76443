//! Command implementations for the CLI.
//!
//! Each command is implemented in its own module.

pub mod init;
pub mod judge;
pub mod solve;

use serde::Serialize;

use crate::io::{Envelope, ExitCode};

/// Print a JSON envelope to stdout, returning `exit_code` once it is written.
pub(crate) fn emit_envelope<T: Serialize>(envelope: &Envelope<T>, exit_code: ExitCode) -> ExitCode {
    match envelope.to_json() {
        Ok(json) => {
            println!("{json}");
            exit_code
        }
        Err(e) => {
            eprintln!("Error: failed to serialize output: {e}");
            ExitCode::GeneralError
        }
    }
}
