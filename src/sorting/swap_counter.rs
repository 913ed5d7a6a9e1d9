//! Adjacent-swap counting sort
//!
//! Sorts a sequence in place using only adjacent transpositions and reports
//! how many were performed.
//!
//! # Algorithm
//!
//! A cursor starts at index 1 and walks right. Whenever the element under the
//! cursor is smaller than its left neighbour the pair is swapped and counted.
//! If the swapped pair did not start at index 0 the cursor steps back one
//! position, so the element that just moved left is compared against its new
//! neighbour before the forward scan resumes.
//!
//! Every swap removes exactly one inversion, so the final count equals the
//! number of inversions in the input. The comparison is strict, which means
//! equal elements are never exchanged.
//!
//! # Example
//!
//! ```
//! use snippets_core::sorting::count_swaps;
//!
//! let mut values = vec![4, 2, 3, 1];
//! let report = count_swaps(&mut values).unwrap();
//!
//! assert_eq!(report.swaps, 5);
//! assert_eq!((report.first, report.last), (1, 4));
//! assert_eq!(values, vec![1, 2, 3, 4]);
//! ```

use crate::error::{Result, SnippetError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a swap-counting pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapReport {
    /// Number of adjacent transpositions applied
    pub swaps: u64,

    /// Element at index 0 of the sorted sequence
    pub first: i64,

    /// Element at the last index of the sorted sequence
    pub last: i64,
}

impl fmt::Display for SwapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Array is sorted in {} swaps.", self.swaps)?;
        writeln!(f, "First Element: {}", self.first)?;
        write!(f, "Last Element: {}", self.last)
    }
}

/// Sort `sequence` in place with adjacent swaps, returning the swap count.
///
/// Total over every slice, including empty and single-element ones.
pub fn sort_counting_swaps<T: Ord>(sequence: &mut [T]) -> u64 {
    let mut swaps = 0u64;
    let mut cursor = 1usize;

    while cursor < sequence.len() {
        if sequence[cursor] < sequence[cursor - 1] {
            sequence.swap(cursor, cursor - 1);
            swaps += 1;

            if cursor - 1 != 0 {
                cursor -= 1;
                continue;
            }
        }
        cursor += 1;
    }

    swaps
}

/// Sort `sequence` in place and report the swap count plus its end elements.
///
/// # Errors
///
/// Returns [`SnippetError::EmptySequence`] if `sequence` is empty.
pub fn count_swaps(sequence: &mut [i64]) -> Result<SwapReport> {
    let swaps = sort_counting_swaps(sequence);

    match (sequence.first(), sequence.last()) {
        (Some(&first), Some(&last)) => Ok(SwapReport { swaps, first, last }),
        _ => Err(SnippetError::EmptySequence),
    }
}
