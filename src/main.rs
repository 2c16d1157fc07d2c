use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use gt_snake::game::{ColumnWrap, GameConfig};
use gt_snake::logging::{self, DEFAULT_LOG_FILE};
use gt_snake::modes::HumanMode;
use simplelog::LevelFilter;

#[derive(Parser)]
#[command(name = "gt_snake")]
#[command(version, about = "Snake on a wrapping grid, played in the terminal")]
struct Cli {
    /// TOML file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Grid columns
    #[arg(long)]
    cols: Option<usize>,

    /// Milliseconds between simulation ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Only wrap columns that fall off the left edge, like rows do
    #[arg(long)]
    strict_column_wrap: bool,

    /// Where to write the log
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if self.strict_column_wrap {
            config.column_wrap = ColumnWrap::Strict;
        }

        config.validate().context("Invalid game settings")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level: LevelFilter = cli
        .log_level
        .parse()
        .map_err(|_| anyhow!("Unknown log level: {}", cli.log_level))?;
    logging::init(&cli.log_file, level)?;

    let config = cli.game_config()?;

    let mut human_mode = HumanMode::new(config)?;
    human_mode.run().await?;

    Ok(())
}
