use anyhow::Result;
use clap::Parser;
use frontend_options::Cli;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var; default to warnings so
    // unused-path findings are visible.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.command.execute()
}
