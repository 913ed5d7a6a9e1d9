//! Text input and output plumbing shared by every exercise

mod reader;
mod sink;

pub use reader::InputReader;
pub use sink::OutputSink;
