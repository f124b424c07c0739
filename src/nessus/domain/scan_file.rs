use super::scan_document::ScanDocument;
use crate::shared::error::NessusError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Contents of a scan file as read from storage, before parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawScanFile {
    pub path: PathBuf,
    pub size: u64,
    pub content: String,
}

impl RawScanFile {
    pub fn new(path: PathBuf, size: u64, content: String) -> Self {
        Self {
            path,
            size,
            content,
        }
    }
}

/// A loaded and parsed scan file with its file metadata
#[derive(Debug, Clone)]
pub struct ScanFile {
    path: PathBuf,
    size: u64,
    document: ScanDocument,
}

impl ScanFile {
    /// Parses raw file contents
    ///
    /// # Errors
    /// `ScanFileParseError` when the contents are not well-formed XML
    pub fn parse(raw: RawScanFile) -> Result<Self> {
        let document =
            ScanDocument::parse(&raw.content).map_err(|e| NessusError::ScanFileParseError {
                path: raw.path.clone(),
                details: e.to_string(),
            })?;
        Ok(Self {
            path: raw.path,
            size: raw.size,
            document,
        })
    }

    /// Absolute path the file was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn size_human(&self) -> String {
        human_size(self.size)
    }

    pub fn document(&self) -> &ScanDocument {
        &self.document
    }
}

/// Formats a byte count with binary units, e.g. `1.5 KiB`
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 8] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi"];
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{:.1} {}B", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1} YiB", size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(0), "0.0 B");
        assert_eq!(human_size(512), "512.0 B");
        assert_eq!(human_size(1536), "1.5 KiB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.0 MiB");
        assert_eq!(human_size(3 * 1024_u64.pow(4)), "3.0 TiB");
    }

    #[test]
    fn test_parse_keeps_metadata() {
        let raw = RawScanFile::new(
            PathBuf::from("/scans/weekly.nessus"),
            2048,
            "<NessusClientData_v2><Report name=\"weekly\"/></NessusClientData_v2>".to_string(),
        );
        let file = ScanFile::parse(raw).unwrap();
        assert_eq!(file.path(), Path::new("/scans/weekly.nessus"));
        assert_eq!(file.size(), 2048);
        assert_eq!(file.size_human(), "2.0 KiB");
        assert_eq!(file.document().report_name(), Some("weekly"));
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let raw = RawScanFile::new(
            PathBuf::from("/scans/broken.nessus"),
            10,
            "<NessusClientData_v2><Report>".to_string(),
        );
        let err = ScanFile::parse(raw).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to parse scan file"));
        assert!(message.contains("/scans/broken.nessus"));
    }
}
