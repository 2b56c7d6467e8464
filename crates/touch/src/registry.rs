//! Static gesture registry
//!
//! The registry is two frozen tables: gesture definitions keyed by id, and
//! driver command prefixes keyed by key code. Both are plain `static`
//! arrays, so a registry can be shared across threads without locking.

use std::path::{Path, PathBuf};

use crate::gesture::{ControlCommand, Gesture, GestureDefinition};

/// Sysfs node of the touchscreen gesture driver
pub const GESTURE_CTRL_PATH: &str = "/sys/devices/virtual/touchscreen/touchscreen_dev/gesture_ctrl";

/// Gestures supported by the touchscreen driver
#[rustfmt::skip]
pub static GESTURES: [GestureDefinition; 9] = [
    GestureDefinition { id: 0, name: "One finger up swipe", key_code: 254, control_path: GESTURE_CTRL_PATH },
    GestureDefinition { id: 1, name: "One finger down swipe", key_code: 249, control_path: GESTURE_CTRL_PATH },
    GestureDefinition { id: 2, name: "One finger left swipe", key_code: 250, control_path: GESTURE_CTRL_PATH },
    GestureDefinition { id: 3, name: "One finger right swipe", key_code: 251, control_path: GESTURE_CTRL_PATH },
    GestureDefinition { id: 4, name: "Letter C", key_code: 252, control_path: GESTURE_CTRL_PATH },
    GestureDefinition { id: 5, name: "Letter E", key_code: 255, control_path: GESTURE_CTRL_PATH },
    GestureDefinition { id: 6, name: "Letter M", key_code: 256, control_path: GESTURE_CTRL_PATH },
    GestureDefinition { id: 7, name: "Letter O", key_code: 253, control_path: GESTURE_CTRL_PATH },
    GestureDefinition { id: 8, name: "Letter W", key_code: 257, control_path: GESTURE_CTRL_PATH },
];

/// Driver command prefix for each gesture key code
pub static COMMAND_PREFIXES: [(i32, &str); 9] = [
    (254, "up="),
    (249, "down="),
    (250, "left="),
    (251, "right="),
    (252, "c="),
    (255, "e="),
    (256, "m="),
    (253, "o="),
    (257, "w="),
];

/// Read-only lookup over a gesture table and its prefix table
#[derive(Debug, Clone)]
pub struct GestureRegistry {
    definitions: &'static [GestureDefinition],
    prefixes: &'static [(i32, &'static str)],
    /// Replaces every definition's control path when set
    control_path: Option<PathBuf>,
}

impl Default for GestureRegistry {
    fn default() -> Self {
        Self::new(&GESTURES, &COMMAND_PREFIXES)
    }
}

impl GestureRegistry {
    /// Create a registry over the given tables
    pub fn new(
        definitions: &'static [GestureDefinition],
        prefixes: &'static [(i32, &'static str)],
    ) -> Self {
        debug_assert!(
            definitions
                .iter()
                .enumerate()
                .all(|(i, d)| definitions[..i].iter().all(|o| o.id != d.id)),
            "gesture ids must be unique"
        );
        Self {
            definitions,
            prefixes,
            control_path: None,
        }
    }

    /// Route every gesture's command to `path` instead of its own node
    pub fn with_control_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.control_path = Some(path.into());
        self
    }

    /// Number of registered gestures
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// All registered definitions
    pub fn definitions(&self) -> &'static [GestureDefinition] {
        self.definitions
    }

    /// Descriptors for every registered gesture
    pub fn list_gestures(&self) -> Vec<Gesture> {
        self.definitions.iter().map(GestureDefinition::descriptor).collect()
    }

    /// Find a definition by its external id
    pub fn get(&self, id: i32) -> Option<&'static GestureDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }

    /// Whether `id` is registered
    pub fn contains(&self, id: i32) -> bool {
        self.get(id).is_some()
    }

    /// Command prefix for a key code
    ///
    /// `None` means the key code has no entry; `Some("")` is an entry whose
    /// prefix is empty.
    pub fn prefix_for(&self, key_code: i32) -> Option<&'static str> {
        self.prefixes
            .iter()
            .find(|(code, _)| *code == key_code)
            .map(|(_, prefix)| *prefix)
    }

    /// The node a definition's commands are written to
    pub fn control_path<'a>(&'a self, definition: &'a GestureDefinition) -> &'a Path {
        self.control_path
            .as_deref()
            .unwrap_or_else(|| Path::new(definition.control_path))
    }

    /// Derive the command that enables or disables a definition
    pub fn command<'a>(
        &'a self,
        definition: &'a GestureDefinition,
        enabled: bool,
    ) -> ControlCommand<'a> {
        ControlCommand {
            path: self.control_path(definition),
            prefix: self.prefix_for(definition.key_code),
            enabled,
        }
    }
}
