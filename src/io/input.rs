//! Stdin payload parsing.
//!
//! The payload is a count `n`, then `n` values, then (for two-sum) a target.
//! Tokens are separated by any whitespace, newlines included.

use crate::error::{ScanError, ScanResult};

/// Parsed form of one problem payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProblemInput {
    pub values: Vec<i64>,
    pub target: Option<i64>,
}

impl ProblemInput {
    pub fn new(values: Vec<i64>, target: Option<i64>) -> Self {
        Self { values, target }
    }
}

/// Parse `text` into a count-prefixed sequence and, when `with_target` is set,
/// a trailing target.
///
/// Tokens past the last expected one are ignored.
pub fn parse_input(text: &str, with_target: bool) -> ScanResult<ProblemInput> {
    let mut tokens = text.split_ascii_whitespace().enumerate();

    let count = match tokens.next() {
        Some((position, token)) => parse_token(position, token)?,
        None => return Err(ScanError::MissingCount),
    };
    if count < 0 {
        return Err(ScanError::NegativeCount(count));
    }
    // Counts beyond the address space can never be satisfied; they surface as MissingValues.
    let expected = usize::try_from(count).unwrap_or(usize::MAX);

    // The count is untrusted; cap the up-front reservation by the text size.
    let mut values = Vec::with_capacity(expected.min(text.len() / 2 + 1));
    for _ in 0..expected {
        match tokens.next() {
            Some((position, token)) => values.push(parse_token(position, token)?),
            None => {
                return Err(ScanError::MissingValues {
                    expected,
                    found: values.len(),
                });
            }
        }
    }

    let target = if with_target {
        match tokens.next() {
            Some((position, token)) => Some(parse_token(position, token)?),
            None => return Err(ScanError::MissingTarget),
        }
    } else {
        None
    };

    let trailing = tokens.count();
    if trailing > 0 {
        tracing::debug!("[input] ignoring {trailing} trailing token(s)");
    }

    Ok(ProblemInput { values, target })
}

/// Borrow raw input bytes as text, rejecting anything that is not UTF-8.
pub fn decode_input(bytes: &[u8]) -> ScanResult<&str> {
    std::str::from_utf8(bytes).map_err(|e| ScanError::InvalidEncoding {
        offset: e.valid_up_to(),
    })
}

fn parse_token(position: usize, token: &str) -> ScanResult<i64> {
    token.parse::<i64>().map_err(|_| ScanError::InvalidToken {
        position,
        token: token.to_string(),
    })
}
