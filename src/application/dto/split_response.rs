use std::path::PathBuf;

/// SplitResponse - files written by a split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitResponse {
    /// Paths of the parts in order (`_part1`, `_part2`, ...)
    pub parts: Vec<PathBuf>,
    /// Hosts found in the source file
    pub host_count: usize,
}

impl SplitResponse {
    pub fn new(parts: Vec<PathBuf>, host_count: usize) -> Self {
        Self { parts, host_count }
    }
}
