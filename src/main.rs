use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use twin_snake::game::{GameConfig, PlayerCount};
use twin_snake::logging;
use twin_snake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "twin_snake")]
#[command(version, about = "Snake for one or two players on one keyboard")]
struct Cli {
    /// Start a game with this many players instead of showing the title screen
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    players: Option<u8>,

    /// JSON file overriding the default game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let mut mode = PlayMode::new(config, cli.seed);
    if let Some(players) = cli.players {
        let player_count = PlayerCount::try_from(players)
            .map_err(anyhow::Error::msg)
            .context("Invalid --players")?;
        mode = mode.with_players(player_count);
    }

    mode.run().await
}
