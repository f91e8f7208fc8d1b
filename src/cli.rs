use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::report::ReportFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "metrics-guard")]
#[command(author, version, about = "Code metrics guard - enforce file and function size limits")]
#[command(long_about = "A tool that checks per-file and per-function code line counts\n\
    (comments and blank lines excluded) against configured limits.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Violations found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check files against code size thresholds
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Paths to check (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum code lines per file (overrides config)
    #[arg(long)]
    pub max_file_lines: Option<usize>,

    /// Maximum code lines per function (overrides config)
    #[arg(long)]
    pub max_function_lines: Option<usize>,

    /// Entries in the largest-files/largest-functions rankings
    #[arg(long)]
    pub top: Option<usize>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Do not respect .gitignore rules during discovery
    #[arg(long)]
    pub no_gitignore: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".metrics-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
