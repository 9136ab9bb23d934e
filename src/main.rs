//! Breedcache CLI entry point.

use anyhow::Result;
use clap::Parser;

use breedcache::cli::{Cli, Commands};
use breedcache::infrastructure::config::ConfigLoader;
use breedcache::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => breedcache::cli::handle_error(err, json),
    }
}

async fn run(cli: Cli) -> Result<bool> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    LoggerImpl::init(&LogConfig::try_from(&config.logging)?)?;

    match cli.command {
        Commands::Lookup(args) => {
            breedcache::cli::commands::lookup::execute(args, &config, cli.json).await
        }
    }
}
