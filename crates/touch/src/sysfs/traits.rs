//! Sysfs writer trait definition

use anyhow::Result;
use std::path::Path;

/// Writes driver commands to sysfs nodes
///
/// Implementations replace the whole content of the node on each write;
/// nothing is appended. This is the only I/O the gesture service performs.
pub trait SysfsWriter: Send + Sync {
    /// Overwrite `path` with `contents`
    fn write_string(&self, path: &Path, contents: &str) -> Result<()>;
}
