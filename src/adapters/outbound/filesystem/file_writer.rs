use crate::ports::outbound::{OutputPresenter, PartWriter};
use crate::shared::error::NessusError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Checks shared by every file output: the parent directory must exist and
/// an existing target must not be a symbolic link
fn validate_output_path(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.is_dir() {
            return Err(NessusError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }
    }

    if let Ok(metadata) = fs::symlink_metadata(path) {
        if metadata.is_symlink() {
            return Err(NessusError::FileWriteError {
                path: path.to_path_buf(),
                details: "Security: Output path is a symbolic link. Writing to symbolic links is not allowed.".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    validate_output_path(path)?;
    fs::write(path, content).map_err(|e| NessusError::FileWriteError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;
    Ok(())
}

/// FileSystemWriter adapter for writing query results to a file
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        write_file(&self.output_path, content)?;
        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing query results to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

/// FileSystemPartWriter adapter for the parts of a split scan file
///
/// Existing parts from an earlier run are overwritten.
pub struct FileSystemPartWriter;

impl FileSystemPartWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemPartWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PartWriter for FileSystemPartWriter {
    fn write_part(&self, path: &Path, content: &str) -> Result<()> {
        write_file(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("hosts.json");

        FileSystemWriter::new(output_path.clone())
            .present("{\"hosts\": []}")
            .unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "{\"hosts\": []}");
    }

    #[test]
    fn test_file_writer_parent_directory_not_found() {
        let output_path = PathBuf::from("/nonexistent/directory/hosts.json");

        let result = FileSystemWriter::new(output_path).present("x");

        let err_string = result.unwrap_err().to_string();
        assert!(err_string.contains("Failed to write to file"));
        assert!(err_string.contains("Parent directory does not exist"));
    }

    #[test]
    fn test_part_writer_overwrites_existing_part() {
        let temp_dir = TempDir::new().unwrap();
        let part = temp_dir.path().join("scan_part1.nessus");
        fs::write(&part, "old").unwrap();

        FileSystemPartWriter::new().write_part(&part, "new").unwrap();

        assert_eq!(fs::read_to_string(&part).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn test_part_writer_rejects_symlink_target() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("elsewhere.txt");
        let part = temp_dir.path().join("scan_part1.nessus");
        fs::write(&target, "keep").unwrap();
        std::os::unix::fs::symlink(&target, &part).unwrap();

        let err = FileSystemPartWriter::new()
            .write_part(&part, "new")
            .unwrap_err();

        assert!(err.to_string().contains("symbolic link"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep");
    }

    #[test]
    fn test_stdout_presenter_success() {
        assert!(StdoutPresenter::new().present("").is_ok());
    }
}
