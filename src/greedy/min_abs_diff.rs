//! Minimum absolute difference between any two elements
//!
//! After sorting, the closest pair is always adjacent, so a single pass over
//! neighbouring pairs is enough.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest `|a - b|` over all pairs of distinct positions.
///
/// Sorts `values` in place. Returns `None` when fewer than two values are
/// given. Differences are computed in `u64`, so extreme `i64` pairs do not
/// overflow.
pub fn minimum_absolute_difference(values: &mut [i64]) -> Option<u64> {
    values.sort_unstable();
    values.windows(2).map(|pair| pair[0].abs_diff(pair[1])).min()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifferenceReport {
    pub difference: u64,
}

impl fmt::Display for DifferenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.difference)
    }
}
