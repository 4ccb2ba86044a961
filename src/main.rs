use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use treecat::Cli;

fn main() -> Result<()> {
    // Diagnostics go to stderr; the report and styled output own stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TREECAT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.run()
}
