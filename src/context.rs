//! Service context bundling the port trait objects.

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;

/// Bundles the ports the store depends on.
pub struct ServiceContext {
    /// Clock for stamping saved forms.
    pub clock: Box<dyn Clock>,
    /// Filesystem for the roster and form files.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a context backed by the system clock and the real disk.
    #[must_use]
    pub fn live() -> Self {
        Self { clock: Box::new(LiveClock), fs: Box::new(LiveFileSystem) }
    }

    /// Creates a context from explicit port implementations.
    #[must_use]
    pub fn new(clock: Box<dyn Clock>, fs: Box<dyn FileSystem>) -> Self {
        Self { clock, fs }
    }
}
