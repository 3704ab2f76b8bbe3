//! Filesystem port used by the roster store.

use std::path::Path;

/// Error type surfaced by port implementations.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Reads and writes the roster snapshot and the saved form.
///
/// The store never touches `std::fs` directly, so tests can swap in an
/// in-memory implementation.
pub trait FileSystem: Send + Sync {
    /// Reads a whole file as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, PortError>;

    /// Writes a file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError>;

    /// Returns `true` if the path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Removes a file. Removing a missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    fn remove(&self, path: &Path) -> Result<(), PortError>;
}
