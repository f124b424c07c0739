use crate::shared::error::NessusError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Default upper bound for scan files (1 GiB).
/// Exports of large networks routinely reach hundreds of megabytes.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        return Err(NessusError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} operations on symbolic links are not allowed", operation),
            hint: "Point the command at the real file instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that a path exists and is a regular file, returning its size
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist (`NessusError::ScanFileNotFound`)
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path) -> Result<u64> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(NessusError::ScanFileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        Err(e) => {
            return Err(NessusError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into());
        }
    };

    if metadata.is_symlink() {
        return Err(NessusError::SecurityError {
            path: path.to_path_buf(),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Point the command at the real file instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(NessusError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Raise max_file_size_mb in nfr.config.yml if the file is trusted".to_string(),
        }
        .into());
    }
    Ok(())
}
