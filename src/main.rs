use anyhow::{Context, Result};
use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};
use term_snake::game::GameConfig;
use term_snake::modes::HumanMode;
use term_snake::persistence::{HighScoreStore, JsonHighScoreStore, MemoryHighScoreStore};

#[derive(Parser)]
#[command(name = "term_snake")]
#[command(version, about = "Classic grid snake for the terminal")]
struct Cli {
    /// Board width and height in cells
    #[arg(long)]
    tile_count: Option<usize>,

    /// Base tick interval in milliseconds (lower is faster)
    #[arg(long)]
    speed: Option<u64>,

    /// JSON file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where the high score is kept
    #[arg(long, default_value = "term_snake_high_score.json")]
    high_score_file: PathBuf,

    /// Keep the high score for this session only
    #[arg(long)]
    no_save: bool,

    /// Log file (the terminal itself is taken by the game)
    #[arg(long, default_value = "term_snake.log")]
    log_file: PathBuf,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Start with sound off
    #[arg(long)]
    mute: bool,
}

fn init_logging(path: &Path, level: LevelFilter) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;
    WriteLogger::init(level, Config::default(), file).context("Failed to initialize logger")?;
    Ok(())
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(tile_count) = cli.tile_count {
        config = config.with_tile_count(tile_count);
    }

    if let Some(speed) = cli.speed {
        config.base_speed_ms = speed;
    }

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid game settings")?;

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_file, cli.log_level)?;
    log::info!("Starting term_snake {}", env!("CARGO_PKG_VERSION"));

    let config = build_config(&cli)?;

    let store: Box<dyn HighScoreStore> = if cli.no_save {
        Box::new(MemoryHighScoreStore::default())
    } else {
        Box::new(JsonHighScoreStore::new(&cli.high_score_file))
    };

    let mut human_mode = HumanMode::new(config, store, !cli.mute);
    human_mode.run().await?;

    log::info!("Bye");
    Ok(())
}
