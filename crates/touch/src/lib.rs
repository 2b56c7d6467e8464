//! Touch crate - touchscreen gesture control
//!
//! This crate exposes the touchscreen driver's gesture features to the rest
//! of the system and toggles them through the driver's sysfs control node:
//! - Static gesture registry (id, name, key code, control node)
//! - Driver command derivation (key code prefix + `true`/`false`)
//! - Sysfs writer abstraction with filesystem and in-memory backends
//! - Service core implementing the two host operations
//! - UniFFI facade for the host framework
//!
//! The crate holds no mutable state besides a write lock; every type is
//! safe to share across the host's dispatch threads.

uniffi::setup_scaffolding!();

pub mod config;
pub mod error;
pub mod ffi;
pub mod gesture;
pub mod registry;
pub mod service;
pub mod sysfs;

pub use self::config::{MissingPrefixPolicy, TouchConfig};
pub use error::TouchError;
pub use gesture::{ControlCommand, Gesture, GestureDefinition};
pub use registry::{COMMAND_PREFIXES, GESTURE_CTRL_PATH, GESTURES, GestureRegistry};
pub use service::TouchscreenGesture;
pub use sysfs::{FileSysfsWriter, InMemorySysfs, SysfsWriter};
