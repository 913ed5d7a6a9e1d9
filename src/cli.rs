use clap::{Parser, Subcommand, ValueEnum};
use snippets_core::config::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snippets", about = "Small algorithmic exercises over stdin", version)]
pub struct Cli {
    /// Write results to this file instead of stdout (falls back to $OUTPUT_PATH)
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file instead of appending to it
    #[arg(long, global = true)]
    pub truncate: bool,

    #[arg(long, value_enum, default_value_t = FormatArg::Text, global = true)]
    pub format: FormatArg,

    /// Log debug events to stderr, ignoring $SNIPPETS_LOG
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Copy, Debug)]
pub enum Command {
    /// Sort with adjacent swaps and report the swap count
    CountSwaps,
    /// Rotate an array left by d positions
    RotateLeft,
    /// Count bribes in one or more shuffled queues
    MinimumBribes,
    /// Smallest absolute difference between any two values
    MinAbsDiff,
    /// Deletions needed to make two strings anagrams
    MakeAnagram,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
