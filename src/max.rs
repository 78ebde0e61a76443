//! Maximum-value scan.

use crate::error::{ScanError, ScanResult};

/// Largest value in `sequence`.
///
/// An empty sequence has no maximum and yields `ScanError::EmptyInput`.
pub fn find_max(sequence: &[i64]) -> ScanResult<i64> {
    sequence.iter().copied().max().ok_or(ScanError::EmptyInput)
}
