use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::cli::LogLevel;

pub const LOG_FILE: &str = "chase.log";

/// Sends log records at `level` and above to `chase.log` inside `dir`.
///
/// Without a level every log record is discarded.
pub fn init_logging(level: Option<LogLevel>, dir: &Path) -> Result<()> {
    let Some(level) = level else {
        log::set_max_level(log::LevelFilter::Off);
        return Ok(());
    };

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    env_logger::Builder::from_default_env()
        .filter_level(level.to_level_filter())
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:\t{} - {}",
                record.level(),
                buf.timestamp(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
