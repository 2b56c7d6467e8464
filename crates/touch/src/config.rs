//! Configuration for the gesture service
//!
//! Every setting is optional. Settings are loaded from (in order of priority):
//! 1. An explicit JSON file passed by the caller
//! 2. `touch.json` in the touch config directory
//! 3. Built-in defaults (the driver's own control node, bare writes for
//!    key codes without a prefix)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config filename in the touch config directory
pub const CONFIG_FILE: &str = "touch.json";

/// What to do when a gesture's key code has no command prefix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingPrefixPolicy {
    /// Write the bare `true`/`false` value and log a warning
    #[default]
    WriteBare,
    /// Fail the request without touching the node
    Reject,
}

/// Gesture service settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TouchConfig {
    /// Node to write every command to instead of the per-gesture path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_path: Option<PathBuf>,
    pub missing_prefix: MissingPrefixPolicy,
}

impl TouchConfig {
    /// Load `touch.json` from the config directory, or defaults if absent
    pub fn load() -> Result<Self> {
        if config::config_exists(CONFIG_FILE) {
            return config::load_json(CONFIG_FILE);
        }
        Ok(Self::default())
    }

    /// Load settings from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        config::load_json_file(path)
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse touch config JSON")
    }

    /// Write these settings to `touch.json` in the config directory
    pub fn save(&self) -> Result<PathBuf> {
        config::save_json(CONFIG_FILE, self)
    }
}
