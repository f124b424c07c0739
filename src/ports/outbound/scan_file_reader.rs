use crate::nessus::domain::RawScanFile;
use crate::shared::Result;
use std::path::Path;

/// ScanFileReader port for reading scan files from storage
///
/// The whole file is read into memory; parsing happens in the domain.
pub trait ScanFileReader {
    /// Reads a scan file
    ///
    /// # Arguments
    /// * `path` - Path to the `.nessus` file
    ///
    /// # Returns
    /// The file contents together with its absolute path and size in bytes
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist (`ScanFileNotFound`)
    /// - The path is a symbolic link, not a regular file, or too large
    /// - The file cannot be read or is not valid UTF-8
    fn read_scan_file(&self, path: &Path) -> Result<RawScanFile>;
}
