//! Input/Output handling for the CLI.
//!
//! This module provides:
//! - Parsing of count-prefixed integer payloads
//! - Unified output formatting (text, JSON envelope)
//! - Consistent exit codes

pub mod envelope;
pub mod exit_code;
pub mod format;
pub mod input;

pub use envelope::{
    Envelope, ErrorDetails, Meta, MessageType, ResultCode, SCHEMA_VERSION, Status,
};
pub use exit_code::ExitCode;
pub use format::OutputFormat;
pub use input::{ProblemInput, decode_input, parse_input};
