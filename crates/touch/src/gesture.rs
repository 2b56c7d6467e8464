//! Gesture model types

use std::path::Path;

use serde::Serialize;

/// A gesture definition in the static registry table
///
/// Definitions are `'static` data: they are never built at runtime and live
/// for the whole process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureDefinition {
    /// External identifier, unique within a registry
    pub id: i32,
    /// Human-readable label (e.g. "Letter C")
    pub name: &'static str,
    /// Key code the driver reports when the gesture fires
    pub key_code: i32,
    /// Sysfs node that enables or disables this gesture
    pub control_path: &'static str,
}

impl GestureDefinition {
    /// The public descriptor for this definition (control path omitted)
    pub fn descriptor(&self) -> Gesture {
        Gesture {
            id: self.id,
            name: self.name.to_string(),
            key_code: self.key_code,
        }
    }
}

/// A gesture as seen by callers of the service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Gesture {
    pub id: i32,
    pub name: String,
    pub key_code: i32,
}

impl Gesture {
    pub fn new(id: i32, name: impl Into<String>, key_code: i32) -> Self {
        Self {
            id,
            name: name.into(),
            key_code,
        }
    }
}

/// A driver command derived for one toggle request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlCommand<'a> {
    /// Node the command is written to
    pub path: &'a Path,
    /// Prefix selected by key code; `None` when the key code has no entry
    pub prefix: Option<&'static str>,
    pub enabled: bool,
}

impl ControlCommand<'_> {
    /// Whether the key code had an entry in the prefix table
    pub fn has_prefix(&self) -> bool {
        self.prefix.is_some()
    }

    /// The exact bytes written to the node, e.g. `up=true`
    pub fn contents(&self) -> String {
        let value = if self.enabled { "true" } else { "false" };
        format!("{}{}", self.prefix.unwrap_or_default(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_hides_control_path() {
        let def = GestureDefinition {
            id: 4,
            name: "Letter C",
            key_code: 252,
            control_path: "/sys/test/gesture_ctrl",
        };
        assert_eq!(def.descriptor(), Gesture::new(4, "Letter C", 252));
    }

    #[test]
    fn test_gesture_json_shape() {
        let json = serde_json::to_string(&Gesture::new(8, "Letter W", 257)).unwrap();
        assert_eq!(json, r#"{"id":8,"name":"Letter W","key_code":257}"#);
    }

    #[test]
    fn test_command_contents() {
        let path = Path::new("/sys/test/gesture_ctrl");
        let on = ControlCommand {
            path,
            prefix: Some("up="),
            enabled: true,
        };
        let off = ControlCommand {
            enabled: false,
            ..on.clone()
        };
        assert_eq!(on.contents(), "up=true");
        assert_eq!(off.contents(), "up=false");
    }

    #[test]
    fn test_missing_and_empty_prefix_are_distinct() {
        let path = Path::new("/sys/test/gesture_ctrl");
        let missing = ControlCommand {
            path,
            prefix: None,
            enabled: true,
        };
        let empty = ControlCommand {
            path,
            prefix: Some(""),
            enabled: true,
        };

        assert_eq!(missing.contents(), "true");
        assert_eq!(empty.contents(), "true");
        assert!(!missing.has_prefix());
        assert!(empty.has_prefix());
        assert_ne!(missing, empty);
    }
}
