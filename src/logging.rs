//! File logging
//!
//! The terminal belongs to the game while it runs, so log records go to a
//! file instead of stdout or stderr.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Install a global logger writing to `path`. Call once per process.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file).context("Failed to initialize logger")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.log");

        init(&path, LevelFilter::Info).unwrap();
        log::info!("logger ready");
        log::debug!("filtered out");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("logger ready"));
        assert!(!contents.contains("filtered out"));

        // the global logger is already taken
        assert!(init(&dir.path().join("second.log"), LevelFilter::Info).is_err());
    }

    #[test]
    fn test_init_reports_bad_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("game.log");

        let err = init(&path, LevelFilter::Info).unwrap_err();
        assert!(err.to_string().contains("Failed to create log file"));
    }
}
