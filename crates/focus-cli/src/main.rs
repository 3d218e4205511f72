use clap::Parser;
use focus_core::config::FocusConfig;

mod cli;
mod commands;
mod render;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("focus error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = FocusConfig::load_from(cli.config.as_deref())?;
    init_tracing(&config, cli.quiet, cli.verbose)?;
    tracing::debug!(?config, "configuration loaded");

    match &cli.command {
        cli::Commands::Rank { file, limit } => commands::rank(&config, file, *limit),
        cli::Commands::Status { file } => commands::status(file),
        cli::Commands::Demo => commands::demo(&config).await,
    }
}

fn init_tracing(config: &FocusConfig, quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        config.log_filter.as_str()
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("FOCUS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
