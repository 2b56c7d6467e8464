//! `log` backend that hands records to the host process
//!
//! The host installs a [`LogCallback`] and routes records into its own
//! logging system (logcat on Android) under [`LOG_TAG`].

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock, RwLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use super::types::{FfiLogLevel, LogCallback};

/// Tag under which the host logs every record
pub const LOG_TAG: &str = "TouchscreenGestureService";

static CALLBACK_LOGGER: OnceLock<CallbackLogger> = OnceLock::new();

struct CallbackLogger {
    callback: RwLock<Option<Arc<dyn LogCallback>>>,
    /// `LevelFilter` stored as its discriminant
    max_level: AtomicUsize,
}

impl CallbackLogger {
    fn new(max_level: Level) -> Self {
        Self {
            callback: RwLock::new(None),
            max_level: AtomicUsize::new(max_level.to_level_filter() as usize),
        }
    }

    fn max_level(&self) -> LevelFilter {
        level_filter_from_usize(self.max_level.load(Ordering::Relaxed))
    }

    fn set_max_level(&self, level: Level) {
        self.max_level
            .store(level.to_level_filter() as usize, Ordering::Relaxed);
    }

    fn set_callback(&self, callback: Option<Arc<dyn LogCallback>>) {
        if let Ok(mut guard) = self.callback.write() {
            *guard = callback;
        }
    }
}

impl Log for CallbackLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Ok(guard) = self.callback.read() else {
            return;
        };
        // No callback yet: the record is dropped
        if let Some(callback) = guard.as_ref() {
            let message = format_message(
                record.level(),
                record.target(),
                &record.args().to_string(),
            );
            callback.on_log(
                FfiLogLevel::from(record.level()),
                LOG_TAG.to_string(),
                message,
            );
        }
    }

    fn flush(&self) {}
}

fn level_filter_from_usize(value: usize) -> LevelFilter {
    match value {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Debug and trace records carry their module path; the rest are plain
fn format_message(level: Level, target: &str, message: &str) -> String {
    if level >= Level::Debug {
        format!("[{}] {}", target, message)
    } else {
        message.to_string()
    }
}

/// Install the callback logger as the global `log` backend
///
/// Calling this again after a successful install only updates the level.
/// Fails if another logger (e.g. `env_logger`) is already installed, since
/// records would never reach the callback. The callback may be attached
/// later with [`set_log_callback`].
pub fn init_callback_logger(max_level: Level) -> Result<(), SetLoggerError> {
    let logger = CALLBACK_LOGGER.get_or_init(|| CallbackLogger::new(max_level));
    if let Err(e) = log::set_logger(logger) {
        if !is_installed(logger) {
            return Err(e);
        }
    }
    logger.set_max_level(max_level);
    log::set_max_level(max_level.to_level_filter());
    Ok(())
}

/// Whether `logger` is the current global `log` backend
fn is_installed(logger: &CallbackLogger) -> bool {
    std::ptr::addr_eq(log::logger() as *const dyn Log, logger as *const CallbackLogger)
}

/// Attach or detach (`None`) the host callback
pub fn set_log_callback(callback: Option<Arc<dyn LogCallback>>) {
    if let Some(logger) = CALLBACK_LOGGER.get() {
        logger.set_callback(callback);
    }
}

/// Change the most verbose level forwarded to the host
pub fn set_log_level(level: Level) {
    if let Some(logger) = CALLBACK_LOGGER.get() {
        logger.set_max_level(level);
        log::set_max_level(level.to_level_filter());
    }
}
