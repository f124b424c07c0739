use crate::nessus::domain::RawScanFile;
use crate::ports::outbound::ScanFileReader;
use crate::shared::error::NessusError;
use crate::shared::security::{validate_file_size, validate_regular_file, DEFAULT_MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading scan files from the file system
///
/// Scan files are read whole; symbolic links, non-regular files and files
/// above the size cap are rejected before any byte is read.
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// # Arguments
    /// * `max_file_size` - Upper bound in bytes
    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanFileReader for FileSystemReader {
    fn read_scan_file(&self, path: &Path) -> Result<RawScanFile> {
        let size = validate_regular_file(path)?;
        validate_file_size(size, path, self.max_file_size)?;

        let absolute = path.canonicalize().map_err(|e| NessusError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        let content = fs::read_to_string(&absolute).map_err(|e| NessusError::FileReadError {
            path: absolute.clone(),
            details: e.to_string(),
        })?;

        Ok(RawScanFile::new(absolute, size, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_scan_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scan.nessus");
        fs::write(&path, "<NessusClientData_v2/>").unwrap();

        let raw = FileSystemReader::new().read_scan_file(&path).unwrap();

        assert_eq!(raw.content, "<NessusClientData_v2/>");
        assert_eq!(raw.size, 22);
        assert!(raw.path.is_absolute());
        assert!(raw.path.ends_with("scan.nessus"));
    }

    #[test]
    fn test_read_scan_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.nessus");

        let err = FileSystemReader::new().read_scan_file(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NessusError>(),
            Some(NessusError::ScanFileNotFound { .. })
        ));
    }

    #[test]
    fn test_read_scan_file_too_large() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scan.nessus");
        fs::write(&path, "0123456789abcdef").unwrap();

        let reader = FileSystemReader::with_max_file_size(8);
        let err = reader.read_scan_file(&path).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_read_scan_file_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scan.nessus");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = FileSystemReader::new().read_scan_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_scan_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("scan.nessus");
        let link = temp_dir.path().join("link.nessus");
        fs::write(&target, "<NessusClientData_v2/>").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = FileSystemReader::new().read_scan_file(&link).unwrap_err();
        assert!(err.to_string().contains("Security violation"));
    }
}
