//! Logging infrastructure for edgegroups.
//!
//! Library crates log through the `log` facade. This crate provides the
//! backend: a thread-safe logger with optional file output and an
//! in-memory ring of recent entries the host can display.

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use anyhow::{anyhow, Result};

/// Log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Timestamp in HH:MM:SS format
    pub timestamp: String,
    /// Message level
    pub level: log::Level,
    /// Module that emitted the entry
    pub target: String,
    /// Message text
    pub message: String,
}

/// Parse a level name from configuration.
///
/// Accepts `warning` as an alias of `warn`.
pub fn parse_level(s: &str) -> Result<LevelFilter, String> {
    match s.to_lowercase().as_str() {
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        _ => Err(format!("Unknown log level: {}", s)),
    }
}

/// File and memory backed logger.
#[derive(Debug)]
pub struct Logger {
    /// Last N entries
    entries: Mutex<VecDeque<LogEntry>>,
    /// Maximum number of entries in memory
    max_entries: usize,
    /// Minimum level to record
    min_level: LevelFilter,
    /// Log file path
    file_path: Option<PathBuf>,
}

impl Logger {
    /// Create new logger instance
    pub fn new(file_path: Option<PathBuf>, max_entries: usize, min_level: LevelFilter) -> Self {
        if let Some(path) = &file_path {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }

            // Clear log file on startup
            if let Ok(mut file) = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)
            {
                let _ = writeln!(file, "=== edgegroups log start ===");
            }
        }

        Self {
            entries: Mutex::new(VecDeque::new()),
            max_entries,
            min_level,
            file_path,
        }
    }

    /// Get all in-memory entries
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn add_entry(&self, entry: LogEntry) {
        if let Some(path) = &self.file_path {
            // Write to file (create if deleted)
            if let Ok(mut file) = OpenOptions::new().append(true).create(true).open(path) {
                let _ = writeln!(
                    file,
                    "[{}] {} {}: {}",
                    entry.timestamp, entry.level, entry.target, entry.message
                );
            }
        }

        if let Ok(mut entries) = self.entries.lock() {
            entries.push_back(entry);
            while entries.len() > self.max_entries {
                entries.pop_front();
            }
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        self.add_entry(LogEntry {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

/// Global logger instance that persists for the application lifetime.
static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Initialize the global logger and install it as the `log` backend.
///
/// Must be called once at startup. A second call returns an error and keeps
/// the first logger.
///
/// # Arguments
///
/// * `file_path` - Path to the log file, `None` for memory only
/// * `max_entries` - Maximum number of log entries to keep in memory
/// * `min_level` - Minimum log level to record
pub fn init(file_path: Option<PathBuf>, max_entries: usize, min_level: LevelFilter) -> Result<()> {
    if LOGGER.get().is_some() {
        return Err(anyhow!("Logger already initialized"));
    }
    let logger = LOGGER.get_or_init(|| Logger::new(file_path, max_entries, min_level));
    log::set_logger(logger).map_err(|e| anyhow!("Failed to install logger: {}", e))?;
    log::set_max_level(min_level);
    Ok(())
}

/// Get all log entries of the global logger.
///
/// Returns an empty list when the logger was never initialized.
pub fn get_entries() -> Vec<LogEntry> {
    LOGGER.get().map(Logger::entries).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &Logger, level: log::Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("edgegroups::test")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Ok(LevelFilter::Debug));
        assert_eq!(parse_level("WARNING"), Ok(LevelFilter::Warn));
        assert!(parse_level("verbose").is_err());
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = Logger::new(None, 10, LevelFilter::Warn);

        emit(&logger, log::Level::Info, "skipped");
        emit(&logger, log::Level::Error, "kept");

        let entries = logger.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "kept");
        assert_eq!(entries[0].target, "edgegroups::test");
    }

    #[test]
    fn test_logger_limits_entries() {
        let logger = Logger::new(None, 2, LevelFilter::Debug);

        for i in 0..5 {
            emit(&logger, log::Level::Debug, &format!("entry {}", i));
        }

        let messages: Vec<_> = logger.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["entry 3", "entry 4"]);
    }

    #[test]
    fn test_logger_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("edgegroups.log");
        let logger = Logger::new(Some(path.clone()), 10, LevelFilter::Info);

        emit(&logger, log::Level::Warn, "activation failed");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("=== edgegroups log start ==="));
        assert!(content.contains("WARN edgegroups::test: activation failed"));
    }
}
