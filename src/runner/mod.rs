//! Exercise runner
//!
//! Ties a kernel to its input format and output rendering. Each exercise
//! implements [`Exercise`]: it pulls what it needs from an [`InputReader`]
//! and returns a report that can be rendered as text or JSON.
//!
//! # Example
//!
//! ```
//! use snippets_core::config::OutputFormat;
//! use snippets_core::runner::{run_exercise, CountSwaps};
//!
//! let mut out = Vec::new();
//! run_exercise(&CountSwaps, "3\n3 2 1\n".as_bytes(), &mut out, OutputFormat::Text).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Array is sorted in 3 swaps.\nFirst Element: 1\nLast Element: 3\n"
//! );
//! ```

mod exercises;

pub use exercises::{CountSwaps, MakeAnagram, MinAbsDiff, MinimumBribes, RotateLeft};

use crate::config::OutputFormat;
use crate::error::Result;
use crate::io::InputReader;
use serde::Serialize;
use std::fmt::Display;
use std::io::{BufRead, Write};

/// A single self-contained exercise
pub trait Exercise {
    /// Report produced by one run
    type Output: Serialize + Display;

    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Read this exercise's input and compute its report.
    fn solve<R: BufRead>(&self, input: &mut InputReader<R>) -> Result<Self::Output>;
}

/// Write `report` to `out` in the requested format, newline terminated.
pub fn render<T, W>(report: &T, out: &mut W, format: OutputFormat) -> Result<()>
where
    T: Serialize + Display,
    W: Write,
{
    match format {
        OutputFormat::Text => writeln!(out, "{}", report)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Solve `exercise` against `input` and render the report to `out`.
///
/// `out` is flushed before returning.
pub fn run_exercise<E, R, W>(exercise: &E, input: R, out: &mut W, format: OutputFormat) -> Result<()>
where
    E: Exercise,
    R: BufRead,
    W: Write,
{
    let mut reader = InputReader::new(input);
    let report = exercise.solve(&mut reader)?;
    tracing::debug!(
        exercise = exercise.name(),
        lines = reader.line_number(),
        ?format,
        "exercise solved"
    );

    render(&report, out, format)?;
    out.flush()?;
    Ok(())
}
