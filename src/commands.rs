use crate::cli::{Cli, Command};
use anyhow::{Context, Result};
use snippets_core::io::OutputSink;
use snippets_core::runner::{
    run_exercise, CountSwaps, Exercise, MakeAnagram, MinAbsDiff, MinimumBribes, RotateLeft,
};
use snippets_core::RunConfig;

/// Merge CLI flags over the environment-derived configuration.
pub fn resolve_config(cli: &Cli, base: RunConfig) -> RunConfig {
    RunConfig {
        output_path: cli.output.clone().or(base.output_path),
        append: if cli.truncate { Some(false) } else { base.append },
        format: cli.format.into(),
    }
}

pub fn execute_command(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli, RunConfig::from_env());
    tracing::debug!(?config, command = ?cli.command, "resolved run configuration");

    match cli.command {
        Command::CountSwaps => execute(&CountSwaps, &config),
        Command::RotateLeft => execute(&RotateLeft, &config),
        Command::MinimumBribes => execute(&MinimumBribes, &config),
        Command::MinAbsDiff => execute(&MinAbsDiff, &config),
        Command::MakeAnagram => execute(&MakeAnagram, &config),
    }
}

fn execute<E: Exercise>(exercise: &E, config: &RunConfig) -> Result<()> {
    let mut sink = OutputSink::open(config).with_context(|| match config.effective_output_path() {
        Some(path) => format!("failed to open output file {}", path.display()),
        None => "failed to open stdout".to_string(),
    })?;

    let stdin = std::io::stdin();
    run_exercise(exercise, stdin.lock(), &mut sink, config.format)
        .with_context(|| format!("{} failed", exercise.name()))
}
