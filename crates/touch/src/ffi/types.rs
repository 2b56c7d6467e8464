//! FFI-friendly types for UniFFI export

use crate::gesture::Gesture;

// ============================================================================
// Error Types
// ============================================================================

/// Errors raised while setting up the service or its logging
///
/// The gesture operations themselves never raise; they report failure as
/// `false`.
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum TouchServiceError {
    #[error("Config error: {message}")]
    Config { message: String },

    #[error("Logging error: {message}")]
    Logging { message: String },
}

impl From<anyhow::Error> for TouchServiceError {
    fn from(e: anyhow::Error) -> Self {
        TouchServiceError::Config {
            message: format!("{:#}", e),
        }
    }
}

// ============================================================================
// Gesture Types
// ============================================================================

/// FFI-friendly gesture descriptor
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct FfiGesture {
    pub id: i32,
    pub name: String,
    pub key_code: i32,
}

impl From<Gesture> for FfiGesture {
    fn from(g: Gesture) -> Self {
        Self {
            id: g.id,
            name: g.name,
            key_code: g.key_code,
        }
    }
}

impl From<FfiGesture> for Gesture {
    fn from(g: FfiGesture) -> Self {
        Gesture::new(g.id, g.name, g.key_code)
    }
}

// ============================================================================
// Log Callback
// ============================================================================

/// Log level for FFI callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<log::Level> for FfiLogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => FfiLogLevel::Error,
            log::Level::Warn => FfiLogLevel::Warn,
            log::Level::Info => FfiLogLevel::Info,
            log::Level::Debug => FfiLogLevel::Debug,
            log::Level::Trace => FfiLogLevel::Trace,
        }
    }
}

impl From<FfiLogLevel> for log::Level {
    fn from(level: FfiLogLevel) -> Self {
        match level {
            FfiLogLevel::Error => log::Level::Error,
            FfiLogLevel::Warn => log::Level::Warn,
            FfiLogLevel::Info => log::Level::Info,
            FfiLogLevel::Debug => log::Level::Debug,
            FfiLogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Receives log records from Rust
///
/// On Android the host forwards these to logcat under `tag`.
#[uniffi::export(callback_interface)]
pub trait LogCallback: Send + Sync {
    /// Called for every record at or above the configured level
    ///
    /// # Arguments
    /// * `level` - Record severity
    /// * `tag` - Log tag for the host logger (the service name)
    /// * `message` - Formatted message, prefixed with the module path for
    ///   records below info level
    fn on_log(&self, level: FfiLogLevel, tag: String, message: String);
}
