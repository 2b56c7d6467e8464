//! TouchscreenGestureService facade for UniFFI export
//!
//! This is the object the host framework's service process holds. It wraps
//! the gesture service core and converts to FFI-friendly types.

use std::path::Path;
use std::sync::Arc;

use log::info;

use crate::config::TouchConfig;
use crate::ffi::logging;
use crate::ffi::types::*;
use crate::service::TouchscreenGesture;

/// Touchscreen gesture service exported to the host
#[derive(uniffi::Object)]
pub struct TouchscreenGestureService {
    inner: TouchscreenGesture,
}

impl TouchscreenGestureService {
    /// Wrap an already-built service core (tests, custom writers)
    pub fn from_core(inner: TouchscreenGesture) -> Arc<Self> {
        Arc::new(Self { inner })
    }
}

#[uniffi::export]
impl TouchscreenGestureService {
    /// Create the service with settings from the touch config directory
    ///
    /// Falls back to the built-in defaults when no config file exists.
    #[uniffi::constructor]
    pub fn new() -> Result<Arc<Self>, TouchServiceError> {
        let config = TouchConfig::load()?;
        info!("Touchscreen gesture service starting");
        Ok(Self::from_core(TouchscreenGesture::from_config(&config)))
    }

    /// Create the service with settings from an explicit JSON file
    #[uniffi::constructor]
    pub fn with_config_file(path: String) -> Result<Arc<Self>, TouchServiceError> {
        let config = TouchConfig::from_file(Path::new(&path))?;
        info!("Touchscreen gesture service starting with config {}", path);
        Ok(Self::from_core(TouchscreenGesture::from_config(&config)))
    }

    /// List every gesture the driver supports
    pub fn get_supported_gestures(&self) -> Vec<FfiGesture> {
        self.inner
            .get_supported_gestures()
            .into_iter()
            .map(FfiGesture::from)
            .collect()
    }

    /// Enable or disable a gesture
    ///
    /// Returns `false` for unknown gestures and for failed driver writes.
    pub fn set_gesture_enabled(&self, gesture: FfiGesture, enabled: bool) -> bool {
        self.inner.set_gesture_enabled(&gesture.into(), enabled)
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Route Rust logs to the host
///
/// Call before creating the service. Calling again replaces the callback
/// and level. Fails when another logger already owns the process, in which
/// case nothing would reach `callback`.
#[uniffi::export]
pub fn initialize_logging(
    callback: Box<dyn LogCallback>,
    max_level: FfiLogLevel,
) -> Result<(), TouchServiceError> {
    logging::init_callback_logger(max_level.into()).map_err(|e| TouchServiceError::Logging {
        message: e.to_string(),
    })?;
    logging::set_log_callback(Some(Arc::from(callback)));
    Ok(())
}

/// Change the most verbose level forwarded to the host
#[uniffi::export]
pub fn set_logging_level(level: FfiLogLevel) {
    logging::set_log_level(level.into());
}
