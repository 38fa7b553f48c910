use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tile_snake::game::GameConfig;
use tile_snake::logging;
use tile_snake::modes::PlayMode;
use tracing::info;

#[derive(Parser)]
#[command(name = "tile_snake")]
#[command(version, about = "Classic Snake on a 24x24 terminal board")]
struct Cli {
    /// Append logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref())?;

    let config = GameConfig::default();
    let config_json = serde_json::to_string(&config).context("Failed to serialize config")?;
    info!(
        config = %config_json,
        seed = ?cli.seed,
        "starting tile_snake"
    );

    let mut play_mode = match cli.seed {
        Some(seed) => PlayMode::with_seed(config, seed),
        None => PlayMode::new(config),
    };
    play_mode.run().await?;

    Ok(())
}
