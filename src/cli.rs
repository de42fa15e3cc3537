//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// annotool - NullAway annotator runner and benchmark test case pruner
#[derive(Parser, Debug)]
#[command(
    name = "annotool",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Run the NullAway annotator and prune benchmark test cases",
    long_about = "annotool runs the NullAway annotator against the current repository with a \
                  reproducible workspace and flag set, and prunes OWASP Benchmark test cases \
                  whose metadata does not match a keep rule.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  annotool run\n    \
                  annotool prune\n    \
                  annotool prune --dry-run --json\n    \
                  annotool --config ci.yaml run"
)]
pub struct Cli {
    /// Directory to start repository discovery from (defaults to current directory)
    #[arg(long, short = 'r', global = true)]
    pub repo: Option<PathBuf>,

    /// Configuration file (defaults to annotool.yaml at the repository root)
    #[arg(long, short = 'c', global = true, env = "ANNOTOOL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prepare the workspace and run the annotator
    Run(RunArgs),

    /// Delete test cases whose metadata does not match the keep rule
    Prune(PruneArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Run the annotator:\n    annotool run\n\n\
                  Show the command without running it:\n    annotool run --print-command")]
pub struct RunArgs {
    /// Print the annotator command line and exit without touching the workspace
    #[arg(long)]
    pub print_command: bool,
}

/// Arguments for the prune command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Prune the benchmark test cases:\n    annotool prune\n\n\
                  Preview which pairs would be removed:\n    annotool prune --dry-run\n\n\
                  Prune another directory and print a JSON report:\n    annotool prune --dir cases --json")]
pub struct PruneArgs {
    /// Directory holding the test case pairs (defaults to the configured source_dir)
    #[arg(long, short = 'd')]
    pub dir: Option<PathBuf>,

    /// Classify and report without deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the per-pair report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    annotool completions bash > ~/.bash_completion.d/annotool\n\n\
                  Generate zsh completions:\n    annotool completions zsh > ~/.zfunc/_annotool")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(value_enum, ignore_case = true)]
    pub shell: clap_complete::Shell,
}
