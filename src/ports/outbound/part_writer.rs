use crate::shared::Result;
use std::path::Path;

/// PartWriter port for storing the parts produced by splitting a scan file
pub trait PartWriter {
    /// Writes one part, replacing any existing file at `path`
    ///
    /// # Errors
    /// Returns `FileWriteError` if the parent directory is missing, the
    /// target is a symbolic link, or the write fails
    fn write_part(&self, path: &Path, content: &str) -> Result<()>;
}
