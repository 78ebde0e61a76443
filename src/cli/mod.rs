//! Command-line interface.
//!
//! Argument parsing lives in [`args`]; each command is implemented in
//! [`commands`] and reports an [`ExitCode`](crate::io::ExitCode).

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
