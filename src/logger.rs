//! Custom logging module.
//!
//! This module provides a logger that formats records and forwards them to a
//! callback, which the application uses to fill the log panel buffer.

use crate::error::AppError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of entries kept for the log panel.
///
pub const LOG_CAPACITY: usize = 500;

/// Shared buffer of formatted log lines, newest last.
///
pub type LogBuffer = Arc<Mutex<VecDeque<String>>>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Append `entry` to `buffer`, dropping the oldest entries past capacity.
///
pub fn push_entry(buffer: &LogBuffer, entry: String) {
    if let Ok(mut guard) = buffer.lock() {
        guard.push_back(entry);
        while guard.len() > LOG_CAPACITY {
            guard.pop_front();
        }
    }
}

/// Custom logger that captures logs to state
///
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Arc<Mutex<Option<Box<dyn Fn(String) + Send + Sync>>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    /// Return a logger that writes into `buffer`.
    ///
    pub fn with_buffer(level: LevelFilter, buffer: LogBuffer) -> Self {
        let logger = CustomLogger::new(level);
        logger.set_log_callback(Box::new(move |entry| push_entry(&buffer, entry)));
        logger
    }

    pub fn set_log_callback(&self, callback: Box<dyn Fn(String) + Send + Sync>) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
        // A poisoned lock leaves the logger running without capture
    }

    /// Install this logger as the global `log` backend.
    ///
    pub fn install(self) -> Result<(), AppError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self)).map_err(|e| AppError::Logger(e.to_string()))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    cb(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_entry_caps_buffer() {
        let buffer: LogBuffer = Arc::new(Mutex::new(VecDeque::new()));
        for i in 0..(LOG_CAPACITY + 10) {
            push_entry(&buffer, format!("entry {}", i));
        }
        let guard = buffer.lock().unwrap();
        assert_eq!(guard.len(), LOG_CAPACITY);
        assert_eq!(guard.front().unwrap(), "entry 10");
    }

    #[test]
    fn logger_forwards_enabled_records() {
        let buffer: LogBuffer = Arc::new(Mutex::new(VecDeque::new()));
        let logger = CustomLogger::with_buffer(LevelFilter::Info, Arc::clone(&buffer));
        logger.log(
            &Record::builder()
                .args(format_args!("catalog loaded"))
                .level(Level::Info)
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("toggled"))
                .level(Level::Debug)
                .build(),
        );
        let guard = buffer.lock().unwrap();
        assert_eq!(guard.len(), 1);
        assert!(guard[0].contains("INFO catalog loaded"));
    }

    #[test]
    fn install_routes_log_macros_into_buffer() {
        let buffer: LogBuffer = Arc::new(Mutex::new(VecDeque::new()));
        CustomLogger::with_buffer(LevelFilter::Info, Arc::clone(&buffer))
            .install()
            .unwrap();
        log::info!("catalog ready");
        let guard = buffer.lock().unwrap();
        assert!(guard.iter().any(|entry| entry.ends_with("INFO catalog ready")));
    }
}
