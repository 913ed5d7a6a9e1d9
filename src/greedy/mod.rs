//! Greedy exercises
//!
//! - **Minimum absolute difference:** sort, then take the tightest neighbour gap

pub mod min_abs_diff;

pub use min_abs_diff::{minimum_absolute_difference, DifferenceReport};
