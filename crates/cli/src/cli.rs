//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Balances parallel test workers by aggregating per-test runtimes
/// across processes
#[derive(Parser)]
#[command(name = "pacer")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "PACER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Append one observed test runtime to the shared log
    Record(RecordArgs),
    /// Mark this worker finished; on the leader, merge the log
    Finish(FinishArgs),
    /// Show the ordered timing data without rewriting the log
    Report(ReportArgs),
    /// Initialize pacer configuration
    Init(InitArgs),
}

#[derive(clap::Args)]
pub struct RecordArgs {
    /// Test identifier, e.g. spec/foo/bar_spec
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Observed duration in seconds
    #[arg(value_name = "SECONDS")]
    pub time: f64,

    /// Override the configured log path
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct FinishArgs {
    /// This worker's 1-based index (worker 1 is the leader)
    #[arg(long, env = "PACER_WORKER", value_name = "N")]
    pub worker: Option<usize>,

    /// Total number of worker processes
    #[arg(long, env = "PACER_WORKERS", value_name = "N")]
    pub workers: Option<usize>,

    /// Override the configured log path
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Override the configured barrier directory
    #[arg(long, value_name = "DIR")]
    pub barrier: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct ReportArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Maximum rows to display (0 = all)
    #[arg(long, default_value_t = 0, value_name = "N")]
    pub limit: usize,

    /// Override the configured log path
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite an existing pacer.toml
    #[arg(long)]
    pub force: bool,
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
