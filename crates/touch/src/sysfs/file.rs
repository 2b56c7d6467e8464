//! Filesystem-backed sysfs writer

use anyhow::{Context, Result};
use std::path::Path;

use super::SysfsWriter;

/// Writes commands to the real filesystem
///
/// Uses truncating writes, so each command replaces the node's content.
/// No trailing newline is added.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSysfsWriter;

impl FileSysfsWriter {
    pub fn new() -> Self {
        Self
    }
}

impl SysfsWriter for FileSysfsWriter {
    fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write sysfs node: {}", path.display()))
    }
}
