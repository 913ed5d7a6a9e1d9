//! Input adapters for each exercise

use super::Exercise;
use crate::arrays::{minimum_bribes, rotate_left, ChaosReport, RotationReport};
use crate::error::{Result, SnippetError};
use crate::greedy::{minimum_absolute_difference, DifferenceReport};
use crate::io::InputReader;
use crate::sorting::{count_swaps, SwapReport};
use crate::strings::{make_anagram, AnagramReport};
use std::io::BufRead;

/// Bubble-sort swap counting.
///
/// Input: `n`, then `n` integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountSwaps;

impl Exercise for CountSwaps {
    type Output = SwapReport;

    fn name(&self) -> &'static str {
        "count-swaps"
    }

    fn solve<R: BufRead>(&self, input: &mut InputReader<R>) -> Result<SwapReport> {
        let n = input.read_count("sequence length")?;
        let mut values = input.read_exact::<i64>(n, "sequence values")?;
        tracing::debug!(len = values.len(), "counting swaps");
        count_swaps(&mut values)
    }
}

/// Left rotation.
///
/// Input: `n d`, then `n` integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RotateLeft;

impl Exercise for RotateLeft {
    type Output = RotationReport;

    fn name(&self) -> &'static str {
        "rotate-left"
    }

    fn solve<R: BufRead>(&self, input: &mut InputReader<R>) -> Result<RotationReport> {
        let header = input.read_exact::<usize>(2, "length and rotation count")?;
        let (n, d) = (header[0], header[1]);
        let mut values = input.read_exact::<i64>(n, "array values")?;
        tracing::debug!(len = n, rotation = d, "rotating");

        rotate_left(&mut values, d);
        Ok(RotationReport { values })
    }
}

/// New Year chaos over `t` independent queues.
///
/// Input: `t`, then for each case `n` and a queue of `n` stickers.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumBribes;

impl Exercise for MinimumBribes {
    type Output = ChaosReport;

    fn name(&self) -> &'static str {
        "minimum-bribes"
    }

    fn solve<R: BufRead>(&self, input: &mut InputReader<R>) -> Result<ChaosReport> {
        let cases = input.read_count("number of queues")?;
        let mut outcomes = Vec::new();

        for case in 0..cases {
            let n = input.read_count("queue length")?;
            let queue = input.read_exact::<i64>(n, "queue stickers")?;
            let outcome = minimum_bribes(&queue);
            tracing::debug!(case, len = n, %outcome, "queue analysed");
            outcomes.push(outcome);
        }

        Ok(ChaosReport { cases: outcomes })
    }
}

/// Minimum absolute difference.
///
/// Input: `n`, then `n` integers. At least two values are required.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinAbsDiff;

impl Exercise for MinAbsDiff {
    type Output = DifferenceReport;

    fn name(&self) -> &'static str {
        "min-abs-diff"
    }

    fn solve<R: BufRead>(&self, input: &mut InputReader<R>) -> Result<DifferenceReport> {
        let n = input.read_count("array length")?;
        let mut values = input.read_exact::<i64>(n, "array values")?;

        let difference = minimum_absolute_difference(&mut values)
            .ok_or(SnippetError::NotEnoughValues { needed: 2, found: n })?;
        Ok(DifferenceReport { difference })
    }
}

/// Making anagrams.
///
/// Input: two lines of text.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeAnagram;

impl Exercise for MakeAnagram {
    type Output = AnagramReport;

    fn name(&self) -> &'static str {
        "make-anagram"
    }

    fn solve<R: BufRead>(&self, input: &mut InputReader<R>) -> Result<AnagramReport> {
        let a = input.read_line("first string")?;
        let b = input.read_line("second string")?;
        Ok(AnagramReport {
            deletions: make_anagram(&a, &b),
        })
    }
}
