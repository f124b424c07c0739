use nessus_file_reader::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock PartWriter that keeps written parts in memory
#[derive(Default, Clone)]
pub struct MockPartWriter {
    pub parts: Arc<Mutex<Vec<(PathBuf, String)>>>,
    fail_on: Option<usize>,
}

impl MockPartWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails the `n`-th write (1-based)
    pub fn failing_on(n: usize) -> Self {
        Self {
            fail_on: Some(n),
            ..Self::default()
        }
    }

    pub fn written(&self) -> Vec<(PathBuf, String)> {
        self.parts.lock().unwrap().clone()
    }
}

impl PartWriter for MockPartWriter {
    fn write_part(&self, path: &Path, content: &str) -> Result<()> {
        let mut parts = self.parts.lock().unwrap();
        if self.fail_on == Some(parts.len() + 1) {
            return Err(NessusError::FileWriteError {
                path: path.to_path_buf(),
                details: "disk full".to_string(),
            }
            .into());
        }
        parts.push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}
