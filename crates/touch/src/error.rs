//! Error types for gesture control

use std::path::PathBuf;

/// Why a gesture toggle request did not reach the driver
#[derive(Debug, thiserror::Error)]
pub enum TouchError {
    #[error("Unknown gesture id: {0}")]
    UnknownGesture(i32),

    #[error("No command prefix for key code {key_code} (gesture {id})")]
    MissingPrefix { id: i32, key_code: i32 },

    #[error("Failed to write {}: {message}", path.display())]
    Write { path: PathBuf, message: String },
}

impl TouchError {
    /// Whether the request was rejected before any I/O was attempted
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::UnknownGesture(_) | Self::MissingPrefix { .. })
    }
}
