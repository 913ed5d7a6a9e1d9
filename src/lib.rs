//! Snippets Core - small algorithmic exercise kernels
//!
//! Each exercise is a pure function over an in-memory array or pair of
//! strings, plus a thin adapter that reads its line-oriented input format.
//! It implements:
//! - Adjacent-swap counting sort (bubble sort with rewind)
//! - Left rotation and queue-chaos bribe counting
//! - Minimum absolute difference
//! - Anagram deletion counting
//!
//! # Examples
//!
//! ```rust
//! use snippets_core::sorting::count_swaps;
//!
//! let mut values = vec![3, 2, 1];
//! let report = count_swaps(&mut values).unwrap();
//!
//! assert_eq!(report.swaps, 3);
//! assert_eq!(values, vec![1, 2, 3]);
//! ```

pub mod arrays;
pub mod config;
pub mod error;
pub mod greedy;
pub mod io;
pub mod logging;
pub mod runner;
pub mod sorting;
pub mod strings;

// Re-exports for convenience
pub use config::{OutputFormat, RunConfig};
pub use error::{Result, SnippetError};
pub use runner::{run_exercise, Exercise};
pub use sorting::{count_swaps, SwapReport};
