//! File logger for demos and debugging.
//!
//! Components log through the `log` facade; nothing is written until a
//! logger is installed.

use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

struct FileLogger {
    file_path: PathBuf,
    level: LevelFilter,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Install a logger appending records at or above `level` to `path`.
///
/// Fails if a logger is already installed.
pub fn init_logger(path: impl Into<PathBuf>, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = FileLogger {
        file_path: path.into(),
        level,
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}
