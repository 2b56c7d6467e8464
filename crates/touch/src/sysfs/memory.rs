//! In-memory sysfs implementation
//!
//! Used in tests to observe exactly which commands reach the driver, and
//! to simulate nodes that reject writes.

use anyhow::{Result, anyhow, bail};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::SysfsWriter;

/// In-memory implementation of SysfsWriter
///
/// Keeps the current content of every node plus an ordered log of
/// successful writes. Failed writes leave no trace in either.
#[derive(Debug, Default)]
pub struct InMemorySysfs {
    nodes: RwLock<HashMap<PathBuf, String>>,
    writes: RwLock<Vec<(PathBuf, String)>>,
    failing: RwLock<HashSet<PathBuf>>,
}

impl InMemorySysfs {
    /// Create an empty sysfs with no nodes
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write to `path` fail, like a read-only or absent node
    pub fn fail_path(&self, path: impl Into<PathBuf>) {
        if let Ok(mut failing) = self.failing.write() {
            failing.insert(path.into());
        }
    }

    /// Current content of a node
    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        self.nodes.read().ok()?.get(path.as_ref()).cloned()
    }

    /// Successful writes, oldest first
    pub fn writes(&self) -> Vec<(PathBuf, String)> {
        self.writes.read().map(|w| w.clone()).unwrap_or_default()
    }

    /// Number of successful writes
    pub fn write_count(&self) -> usize {
        self.writes.read().map(|w| w.len()).unwrap_or_default()
    }
}

impl SysfsWriter for InMemorySysfs {
    fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        let failing = self
            .failing
            .read()
            .map_err(|_| anyhow!("sysfs state poisoned"))?;
        if failing.contains(path) {
            bail!("Permission denied: {}", path.display());
        }

        let mut nodes = self.nodes.write().map_err(|_| anyhow!("sysfs state poisoned"))?;
        let mut writes = self.writes.write().map_err(|_| anyhow!("sysfs state poisoned"))?;
        nodes.insert(path.to_path_buf(), contents.to_string());
        writes.push((path.to_path_buf(), contents.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_read() {
        let sysfs = InMemorySysfs::new();
        let path = Path::new("/sys/test/gesture_ctrl");

        sysfs.write_string(path, "up=true").unwrap();
        sysfs.write_string(path, "up=false").unwrap();

        assert_eq!(sysfs.read(path).as_deref(), Some("up=false"));
        assert_eq!(sysfs.write_count(), 2);
        assert_eq!(sysfs.writes()[0].1, "up=true");
    }

    #[test]
    fn test_failing_path_records_nothing() {
        let sysfs = InMemorySysfs::new();
        let path = Path::new("/sys/test/gesture_ctrl");
        sysfs.fail_path(path);

        assert!(sysfs.write_string(path, "c=true").is_err());
        assert_eq!(sysfs.write_count(), 0);
        assert!(sysfs.read(path).is_none());
    }

    #[test]
    fn test_other_paths_unaffected_by_failure() {
        let sysfs = InMemorySysfs::new();
        sysfs.fail_path("/sys/test/broken");

        sysfs
            .write_string(Path::new("/sys/test/gesture_ctrl"), "w=true")
            .unwrap();
        assert_eq!(sysfs.write_count(), 1);
    }
}
