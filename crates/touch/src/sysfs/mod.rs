//! Sysfs writer trait and implementations
//!
//! The trait lets the gesture service run against the real filesystem or
//! an in-memory stand-in that records every command.

mod file;
mod memory;
mod traits;

pub use file::FileSysfsWriter;
pub use memory::InMemorySysfs;
pub use traits::SysfsWriter;
