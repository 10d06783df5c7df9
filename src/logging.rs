//! File-backed `log` sink.
//!
//! The terminal belongs to the game while it runs, so records go to a file or
//! nowhere at all.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

use crate::config::AppConfig;

/// Appends one line per record to a file.
pub struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl FileLogger {
    pub fn open(path: &Path, level: LevelFilter) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        Ok(Self {
            level,
            file: Mutex::new(file),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "{} {:<5} {}: {}",
                ts,
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Install the file logger when `TILES_LOG_PATH` is configured.
///
/// Returns whether a logger was installed.
pub fn init(config: &AppConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };
    let logger = FileLogger::open(path, config.log_level)?;
    log::set_boxed_logger(Box::new(logger)).context("installing logger")?;
    log::set_max_level(config.log_level);
    log::info!("logging to {} at {}", path.display(), config.log_level);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn writes_records_at_or_above_level() {
        let path = std::env::temp_dir().join(format!("tiles-log-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let logger = FileLogger::open(&path, LevelFilter::Info).unwrap();

        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("tiles")
                .args(format_args!("kept"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("tiles")
                .args(format_args!("dropped"))
                .build(),
        );
        logger.flush();

        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(text.contains("INFO  tiles: kept"));
        assert!(!text.contains("dropped"));
    }

    #[test]
    fn no_path_installs_nothing() {
        assert!(!init(&AppConfig::default()).unwrap());
    }
}
