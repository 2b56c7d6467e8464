//! Touchscreen gesture service
//!
//! Binds the static registry to a sysfs writer. Both operations are
//! synchronous and may be called from any thread.

use std::sync::{Arc, Mutex};

use log::{debug, error, info, warn};

use crate::config::{MissingPrefixPolicy, TouchConfig};
use crate::error::TouchError;
use crate::gesture::Gesture;
use crate::registry::GestureRegistry;
use crate::sysfs::{FileSysfsWriter, SysfsWriter};

/// Enumerates supported gestures and toggles them in the driver
pub struct TouchscreenGesture {
    registry: GestureRegistry,
    writer: Arc<dyn SysfsWriter>,
    missing_prefix: MissingPrefixPolicy,
    /// Serializes writes to the shared control node
    write_lock: Mutex<()>,
}

impl TouchscreenGesture {
    /// Create a service over a registry and writer, with default settings
    pub fn new(registry: GestureRegistry, writer: Arc<dyn SysfsWriter>) -> Self {
        Self {
            registry,
            writer,
            missing_prefix: MissingPrefixPolicy::default(),
            write_lock: Mutex::new(()),
        }
    }

    /// Create a service for the built-in gesture table with `config` applied
    pub fn with_config(config: &TouchConfig, writer: Arc<dyn SysfsWriter>) -> Self {
        let mut registry = GestureRegistry::default();
        if let Some(path) = &config.control_path {
            info!("Routing gesture commands to {}", path.display());
            registry = registry.with_control_path(path.clone());
        }
        Self::new(registry, writer).with_missing_prefix(config.missing_prefix)
    }

    /// The service as it runs on the device: built-in table, real sysfs
    pub fn from_config(config: &TouchConfig) -> Self {
        Self::with_config(config, Arc::new(FileSysfsWriter::new()))
    }

    pub fn with_missing_prefix(mut self, policy: MissingPrefixPolicy) -> Self {
        self.missing_prefix = policy;
        self
    }

    pub fn registry(&self) -> &GestureRegistry {
        &self.registry
    }

    /// All gestures the driver supports
    pub fn get_supported_gestures(&self) -> Vec<Gesture> {
        self.registry.list_gestures()
    }

    /// Enable or disable a gesture, reporting only success
    ///
    /// Only `gesture.id` is consulted; name and key code come from the
    /// registry. Failures are logged, never raised.
    pub fn set_gesture_enabled(&self, gesture: &Gesture, enabled: bool) -> bool {
        match self.try_set_gesture_enabled(gesture.id, enabled) {
            Ok(()) => true,
            Err(TouchError::UnknownGesture(id)) => {
                debug!("Ignoring request for unknown gesture {}", id);
                false
            }
            Err(e) => {
                error!("{}", e);
                false
            }
        }
    }

    /// Enable or disable the gesture with `id`
    pub fn try_set_gesture_enabled(&self, id: i32, enabled: bool) -> Result<(), TouchError> {
        let definition = self.registry.get(id).ok_or(TouchError::UnknownGesture(id))?;
        let command = self.registry.command(definition, enabled);

        if !command.has_prefix() {
            match self.missing_prefix {
                MissingPrefixPolicy::Reject => {
                    return Err(TouchError::MissingPrefix {
                        id,
                        key_code: definition.key_code,
                    });
                }
                MissingPrefixPolicy::WriteBare => warn!(
                    "No command prefix for key code {} ({}), writing bare value",
                    definition.key_code, definition.name
                ),
            }
        }

        let contents = command.contents();
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        self.writer
            .write_string(command.path, &contents)
            .map_err(|e| TouchError::Write {
                path: command.path.to_path_buf(),
                message: format!("{:#}", e),
            })?;

        debug!("Wrote {:?} to {}", contents, command.path.display());
        Ok(())
    }
}
