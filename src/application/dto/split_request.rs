use std::path::PathBuf;

/// SplitRequest - request DTO for splitting a scan file by host count
#[derive(Debug, Clone)]
pub struct SplitRequest {
    /// Scan file to split; parts are written next to it
    pub file: PathBuf,
    /// Maximum number of hosts per part, must be greater than 0
    pub batch_size: usize,
}

impl SplitRequest {
    pub fn new(file: PathBuf, batch_size: usize) -> Self {
        Self { file, batch_size }
    }
}
