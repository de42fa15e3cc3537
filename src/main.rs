//! annotool - NullAway annotator runner
//!
//! A command line tool that runs the NullAway annotator against a Java
//! project with a reproducible workspace and flag set, and prunes OWASP
//! Benchmark test cases by their XML metadata.

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod error;
mod orchestrator;
mod pruner;
mod repository;
mod temp;

use cli::{Cli, Commands};

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run(args) => commands::run::run(cli.repo, cli.config, args),
        Commands::Prune(args) => commands::prune::run(cli.repo, cli.config, args, cli.verbose),
        Commands::Version => commands::version::run().map(|()| 0),
        Commands::Completions(args) => commands::completions::run(args).map(|()| 0),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(help) = e.help() {
                eprintln!("Help: {}", help);
            }
            std::process::exit(1);
        }
    }
}
