//! Error types for input parsing and the scans.

use thiserror::Error;

use crate::io::{ExitCode, ResultCode};

/// Errors raised while reading a problem input or computing its answer.
///
/// "No pair found" is not an error; it is `Answer::Pair(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("Input is empty: expected a value count")]
    MissingCount,

    #[error("Invalid integer '{token}' at token {position}")]
    InvalidToken { position: usize, token: String },

    #[error("Value count must not be negative, got {0}")]
    NegativeCount(i64),

    #[error("Expected {expected} values, found {found}")]
    MissingValues { expected: usize, found: usize },

    #[error("Missing target value after the sequence")]
    MissingTarget,

    #[error("Input is not valid UTF-8 (first invalid byte at offset {offset})")]
    InvalidEncoding { offset: usize },

    #[error("Cannot take the maximum of an empty sequence")]
    EmptyInput,
}

impl ScanError {
    /// True when the input text itself is unusable.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, Self::EmptyInput)
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_malformed() {
            ExitCode::MalformedInput
        } else {
            ExitCode::EmptyInput
        }
    }

    pub fn result_code(&self) -> ResultCode {
        if self.is_malformed() {
            ResultCode::MalformedInput
        } else {
            ResultCode::EmptyInput
        }
    }

    /// Recovery suggestions shown in JSON error envelopes.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingCount | Self::NegativeCount(_) => {
                vec!["Start the input with the number of values, e.g. `3 1 2 3`".to_string()]
            }
            Self::InvalidToken { .. } => {
                vec!["Only whitespace-separated integers are accepted".to_string()]
            }
            Self::MissingValues { .. } => {
                vec!["Make sure the count matches the number of values given".to_string()]
            }
            Self::MissingTarget => {
                vec!["Append the target sum after the values".to_string()]
            }
            Self::InvalidEncoding { .. } => {
                vec!["Feed plain ASCII or UTF-8 text containing only integers".to_string()]
            }
            Self::EmptyInput => {
                vec!["Provide at least one value".to_string()]
            }
        }
    }
}

pub type ScanResult<T> = Result<T, ScanError>;
