//! Making anagrams: deletions needed to turn two strings into anagrams
//!
//! Characters the strings share (counted with multiplicity) stay, everything
//! else is deleted. Lengths are measured in `char`s.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

fn char_counts(s: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Number of characters shared by `a` and `b`, with multiplicity
pub fn common_letters(a: &str, b: &str) -> usize {
    let counts_b = char_counts(b);
    char_counts(a)
        .iter()
        .map(|(c, &count_a)| count_a.min(counts_b.get(c).copied().unwrap_or(0)))
        .sum()
}

/// Minimum total deletions from `a` and `b` so the remainders are anagrams.
pub fn make_anagram(a: &str, b: &str) -> usize {
    a.chars().count() + b.chars().count() - 2 * common_letters(a, b)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnagramReport {
    pub deletions: usize,
}

impl fmt::Display for AnagramReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.deletions)
    }
}
