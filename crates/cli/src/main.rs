use clap::Parser;

use pacer::cli::{Cli, Command};

mod cmd_finish;
mod cmd_init;
mod cmd_record;
mod cmd_report;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match &cli.command {
        Command::Record(args) => cmd_record::run(&cli, args),
        Command::Finish(args) => cmd_finish::run(&cli, args),
        Command::Report(args) => cmd_report::run(&cli, args),
        Command::Init(args) => cmd_init::run(&cli, args),
    }
}

/// Route diagnostics to stderr; `PACER_LOG` controls verbosity.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PACER_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
