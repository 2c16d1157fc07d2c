//! File logging
//!
//! The terminal belongs to the TUI while a game runs, so log records go to a
//! file instead of stdout/stderr.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};

pub const DEFAULT_LOG_FILE: &str = "gt_snake.log";

/// Install a global logger writing to `path`. Can only succeed once per process.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    WriteLogger::init(level, Config::default(), file).context("Failed to initialize logger")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_reach_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snake.log");

        init(&path, LevelFilter::Info).unwrap();
        log::info!("logging smoke test");
        log::debug!("filtered out");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("logging smoke test"));
        assert!(!contents.contains("filtered out"));

        // The global logger is already taken
        assert!(init(&dir.path().join("other.log"), LevelFilter::Info).is_err());
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("snake.log");
        assert!(init(&path, LevelFilter::Info).is_err());
    }
}
