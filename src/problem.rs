//! The two computations the tool offers and their typed answers.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ScanError, ScanResult};
use crate::io::input::{ProblemInput, decode_input, parse_input};
use crate::max::find_max;
use crate::pair::{IndexPair, find_pair};

/// A computation over a count-prefixed integer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Problem {
    /// Maximum of the values
    Max,
    /// Two distinct positions summing to a target
    TwoSum,
}

impl Problem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Max => "max",
            Self::TwoSum => "two-sum",
        }
    }

    /// Whether the payload carries a target after the values.
    pub fn needs_target(&self) -> bool {
        matches!(self, Self::TwoSum)
    }

    pub fn solve(&self, input: &ProblemInput) -> ScanResult<Answer> {
        match self {
            Self::Max => find_max(&input.values).map(Answer::Max),
            Self::TwoSum => {
                let target = input.target.ok_or(ScanError::MissingTarget)?;
                Ok(Answer::Pair(find_pair(&input.values, target)))
            }
        }
    }

    /// Parse a raw payload and solve it.
    pub fn solve_text(&self, text: &str) -> ScanResult<Answer> {
        let input = parse_input(text, self.needs_target())?;
        tracing::debug!(
            "[{}] parsed {} value(s), target {:?}",
            self.as_str(),
            input.values.len(),
            input.target
        );
        self.solve(&input)
    }

    /// Decode a raw byte payload and solve it.
    pub fn solve_bytes(&self, bytes: &[u8]) -> ScanResult<Answer> {
        self.solve_text(decode_input(bytes)?)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one problem run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Max(i64),
    Pair(Option<IndexPair>),
}

impl Answer {
    /// False only when a pair search came up empty.
    pub fn is_found(&self) -> bool {
        !matches!(self, Self::Pair(None))
    }

    /// Number of indices in a pair answer: 2 when found, 0 otherwise.
    /// A maximum counts as a single value.
    pub fn len(&self) -> usize {
        match self {
            Self::Max(_) => 1,
            Self::Pair(Some(_)) => 2,
            Self::Pair(None) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Text rendering: the maximum, `first second`, or `-1` when no pair exists.
impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Max(value) => write!(f, "{value}"),
            Self::Pair(Some(pair)) => write!(f, "{pair}"),
            Self::Pair(None) => f.write_str("-1"),
        }
    }
}
