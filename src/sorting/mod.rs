//! Sorting exercises
//!
//! - **Swap counter:** in-place adjacent-swap sort that reports how many
//!   transpositions it needed

pub mod swap_counter;

pub use swap_counter::{count_swaps, sort_counting_swaps, SwapReport};
