//! FFI bindings for UniFFI export
//!
//! Exposes the gesture service to the host framework's Kotlin/Swift side.
//!
//! ## Usage from Kotlin
//!
//! ```kotlin
//! import uniffi.touch.*
//!
//! // Route Rust logs to logcat first; throws if another logger owns the process
//! initializeLogging(LogcatCallback(), FfiLogLevel.INFO)
//!
//! val service = TouchscreenGestureService()
//!
//! val gestures = service.getSupportedGestures()
//! val ok = service.setGestureEnabled(gestures.first { it.name == "Letter C" }, true)
//! ```

pub mod logging;
mod service;
mod types;

pub use logging::{LOG_TAG, init_callback_logger, set_log_callback, set_log_level};
pub use service::*;
pub use types::*;
