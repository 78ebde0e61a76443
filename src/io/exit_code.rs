//! Process exit codes.
//!
//! Exit codes report how the program ended, never the answer itself.
//! A two-sum run that finds no pair still exits with `Success`.

/// Exit status of the `numscan` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// An answer was produced (including "no pair")
    Success = 0,
    /// I/O or configuration failure
    GeneralError = 1,
    /// The input could not be parsed
    MalformedInput = 2,
    /// Maximum requested over zero values
    EmptyInput = 3,
    /// A judge run finished with a failing verdict
    JudgeFailed = 4,
}

impl ExitCode {
    /// Short label used in stderr error lines.
    pub fn description(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::GeneralError => "general error",
            Self::MalformedInput => "malformed input",
            Self::EmptyInput => "empty input",
            Self::JudgeFailed => "judge failed",
        }
    }
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code as u8
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
