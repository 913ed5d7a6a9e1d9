//! Queue chaos: minimum number of bribes behind a final queue order
//!
//! Everyone in the queue wears a 1-based sticker equal to their starting
//! position. A person may bribe the one directly in front of them to swap
//! places, at most twice. Given the final order, count the bribes or report
//! that the order is impossible.
//!
//! # Algorithm
//!
//! Positions are scanned from the back. A sticker sitting more than two
//! places ahead of its start means the order is too chaotic. Otherwise every
//! person who overtook sticker `q[i]` must now stand somewhere in
//! `max(0, q[i] - 2)..i`, so only that window is checked for larger stickers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of bribes a single person may give
pub const MAX_BRIBES_PER_PERSON: i64 = 2;

/// Result of analysing one queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "bribes", rename_all = "snake_case")]
pub enum BribeOutcome {
    /// Queue is reachable with this many bribes
    Bribes(u64),

    /// Someone moved forward more than [`MAX_BRIBES_PER_PERSON`] places
    TooChaotic,
}

impl fmt::Display for BribeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BribeOutcome::Bribes(count) => write!(f, "{}", count),
            BribeOutcome::TooChaotic => f.write_str("Too chaotic"),
        }
    }
}

/// Count the bribes needed to produce `queue` from sorted order.
pub fn minimum_bribes(queue: &[i64]) -> BribeOutcome {
    let mut overtakes = 0u64;

    for (index, &sticker) in queue.iter().enumerate().rev() {
        let position = index as i64 + 1;
        if sticker.saturating_sub(position) > MAX_BRIBES_PER_PERSON {
            return BribeOutcome::TooChaotic;
        }

        let window_start = usize::try_from(sticker.saturating_sub(MAX_BRIBES_PER_PERSON))
            .unwrap_or(0)
            .min(index);
        overtakes += queue[window_start..index]
            .iter()
            .filter(|&&ahead| ahead > sticker)
            .count() as u64;
    }

    BribeOutcome::Bribes(overtakes)
}

/// Outcomes for every queue in a multi-case input, one line each
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaosReport {
    pub cases: Vec<BribeOutcome>,
}

impl fmt::Display for ChaosReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, outcome) in self.cases.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", outcome)?;
        }
        Ok(())
    }
}
