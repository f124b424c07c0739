use nessus_file_reader::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ScanFileReader serving in-memory scan files
#[derive(Default)]
pub struct MockScanFileReader {
    files: HashMap<PathBuf, String>,
}

impl MockScanFileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl ScanFileReader for MockScanFileReader {
    fn read_scan_file(&self, path: &Path) -> Result<RawScanFile> {
        let content = self
            .files
            .get(path)
            .ok_or_else(|| NessusError::ScanFileNotFound {
                path: path.to_path_buf(),
            })?;
        Ok(RawScanFile::new(
            path.to_path_buf(),
            content.len() as u64,
            content.clone(),
        ))
    }
}
