//! Left rotation of a sequence by `d` positions
//!
//! After rotation the element at index `i` is the one that used to sit at
//! `(i + d) % n`. Rotation amounts larger than the length wrap around.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rotate `values` left by `d` positions in place.
pub fn rotate_left<T>(values: &mut [T], d: usize) {
    if values.is_empty() {
        return;
    }
    let shift = d % values.len();
    values.rotate_left(shift);
}

/// Rotated sequence, printed as space separated values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationReport {
    pub values: Vec<i64>,
}

impl fmt::Display for RotationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
