mod cli;
mod commands;
mod file_host;

use anyhow::Result;
use clap::Parser;
use hush_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stderr keeps stdout parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        cli::Commands::Scan {
            paths,
            format,
            check,
        } => commands::scan::handle(&config, paths, &format, check),
        cli::Commands::Hints {
            file,
            start,
            end,
            format,
        } => commands::hints::handle(file, start, end, &format),
        cli::Commands::Hover { file, line, column } => {
            commands::hover::handle(&config, file, line, column)
        }
        cli::Commands::Watch { file, interval_ms } => {
            commands::watch::handle(&config, file, interval_ms).await
        }
        cli::Commands::Config { path } => commands::config::handle(&config, path),
    }
}
