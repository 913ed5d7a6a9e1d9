//! Array exercises
//!
//! - **Rotation:** left rotation by an arbitrary number of positions
//! - **Chaos:** bribe counting for a shuffled queue

pub mod chaos;
pub mod rotation;

pub use chaos::{minimum_bribes, BribeOutcome, ChaosReport, MAX_BRIBES_PER_PERSON};
pub use rotation::{rotate_left, RotationReport};
