//! Output sink: stdout, or a file named by the run configuration

use crate::config::RunConfig;
use crate::error::Result;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Stdout, Write};

/// Destination for rendered reports
#[derive(Debug)]
pub enum OutputSink {
    Stdout(Stdout),
    File(BufWriter<File>),
}

impl OutputSink {
    /// Open the sink described by `config`.
    ///
    /// Files are created if missing and, unless the configuration says
    /// otherwise, appended to.
    pub fn open(config: &RunConfig) -> Result<Self> {
        match config.effective_output_path() {
            Some(path) => {
                let append = config.effective_append();
                tracing::debug!(path = %path.display(), append, "opening output file");

                let file = OpenOptions::new()
                    .create(true)
                    .write(true)
                    .append(append)
                    .truncate(!append)
                    .open(path)?;
                Ok(OutputSink::File(BufWriter::new(file)))
            }
            None => Ok(OutputSink::Stdout(io::stdout())),
        }
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputSink::Stdout(out) => out.write(buf),
            OutputSink::File(out) => out.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputSink::Stdout(out) => out.flush(),
            OutputSink::File(out) => out.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("snippets-sink-{}-{}", std::process::id(), name))
    }

    fn config_for(path: &PathBuf, append: Option<bool>) -> RunConfig {
        RunConfig {
            output_path: Some(path.clone()),
            append,
            ..RunConfig::default()
        }
    }

    #[test]
    fn test_file_sink_appends_by_default() {
        let path = scratch_path("append");
        let _ = std::fs::remove_file(&path);

        for line in ["first", "second"] {
            let mut sink = OutputSink::open(&config_for(&path, None)).unwrap();
            writeln!(sink, "{}", line).unwrap();
            sink.flush().unwrap();
        }

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_sink_truncates_when_asked() {
        let path = scratch_path("truncate");
        std::fs::write(&path, "stale contents\n").unwrap();

        let mut sink = OutputSink::open(&config_for(&path, Some(false))).unwrap();
        writeln!(sink, "fresh").unwrap();
        sink.flush().unwrap();
        drop(sink);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_stdout_without_path() {
        let sink = OutputSink::open(&RunConfig::default()).unwrap();
        assert!(matches!(sink, OutputSink::Stdout(_)));
    }
}
