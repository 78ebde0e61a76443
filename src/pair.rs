//! Two-sum pair search.
//!
//! A single left-to-right scan that remembers the earliest index of every
//! value seen so far. The first position whose complement is already known
//! ends the scan.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

/// Two distinct positions whose values sum to the target.
///
/// `first` is always the earlier-seen index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexPair {
    pub first: usize,
    pub second: usize,
}

impl IndexPair {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }
}

impl fmt::Display for IndexPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

/// Find the first pair, in scan order, whose values add up to `target`.
///
/// Returns `None` when no two distinct positions qualify. Runs in O(n) time
/// and O(n) extra space.
pub fn find_pair(sequence: &[i64], target: i64) -> Option<IndexPair> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(sequence.len());

    for (i, &value) in sequence.iter().enumerate() {
        // An overflowing complement lies outside i64, so nothing can match it.
        if let Some(complement) = target.checked_sub(value) {
            if let Some(&first) = seen.get(&complement) {
                return Some(IndexPair::new(first, i));
            }
        }
        if let Entry::Vacant(slot) = seen.entry(value) {
            slot.insert(i);
        }
    }

    None
}
