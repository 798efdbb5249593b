use anyhow::Context;
use clap::Parser;
use navstack::cli::Cli;
use navstack::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    navstack::logging::init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let destination = cli.destination.unwrap_or(config.defaults.destination);
    tracing::info!(%destination, "navstack starting");

    navstack::ui::run(&config, destination).context("terminal UI failed")?;
    Ok(())
}
