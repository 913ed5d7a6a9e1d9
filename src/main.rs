mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use commands::execute_command;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

const VERBOSE_FILTER: &str = "snippets_core=debug,snippets=debug";

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        snippets_core::logging::init_tracing_with_filter(VERBOSE_FILTER);
    } else {
        snippets_core::logging::init_tracing();
    }
    execute_command(cli)
}
