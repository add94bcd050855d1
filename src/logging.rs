use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use flexi_logger::{Age, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

const LOG_BASENAME: &str = "spendview";
const KEEP_LOG_FILES: usize = 7;

fn log_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "spendview", "SpendView")
        .ok_or_else(|| anyhow!("Could not determine data directory"))?;
    let dir = proj_dirs.data_dir().join("logs");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    Ok(dir)
}

/// The TUI owns the terminal, so its records go to a daily-rotated file.
/// Keep the returned handle alive for as long as logging is wanted.
pub(crate) fn init_file_logging() -> Result<LoggerHandle> {
    let dir = log_dir()?;
    start_file_logger(&dir)
}

fn start_file_logger(dir: &Path) -> Result<LoggerHandle> {
    Logger::try_with_env_or_str("info")
        .context("Invalid RUST_LOG")?
        .log_to_file(FileSpec::default().directory(dir).basename(LOG_BASENAME))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .format(flexi_logger::detailed_format)
        .start()
        .context("Failed to start file logger")
}

pub(crate) fn init_stderr_logging() -> Result<LoggerHandle> {
    Logger::try_with_env_or_str("warn")
        .context("Invalid RUST_LOG")?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .context("Failed to start logger")
}
