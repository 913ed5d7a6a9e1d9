//! Run configuration: where results go and how they are rendered.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming a file that results are appended to
pub const OUTPUT_PATH_ENV: &str = "OUTPUT_PATH";

/// Rendering of an exercise report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Exact exercise output lines
    #[default]
    Text,
    /// One JSON object per run
    Json,
}

/// Configuration for a single exercise run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RunConfig {
    /// File to write results to. Default: stdout.
    pub output_path: Option<PathBuf>,
    /// Append to an existing output file instead of truncating. Default: true.
    pub append: Option<bool>,
    /// Report rendering. Default: text.
    pub format: OutputFormat,
}

impl RunConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_output_path_var(std::env::var_os(OUTPUT_PATH_ENV))
    }

    /// Build the configuration from a raw `OUTPUT_PATH` value. An empty value
    /// counts as unset.
    pub fn from_output_path_var(value: Option<OsString>) -> Self {
        Self {
            output_path: value.filter(|v| !v.is_empty()).map(PathBuf::from),
            ..Self::default()
        }
    }

    /// Returns the output file, if results should not go to stdout.
    pub fn effective_output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    /// Returns whether an output file is appended to, defaulting to true.
    pub fn effective_append(&self) -> bool {
        self.append.unwrap_or(true)
    }
}
