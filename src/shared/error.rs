use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between usage errors
/// and failures while reading or splitting scan files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every requested file was processed
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing file, malformed XML, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for reading and splitting scan files.
///
/// Only hard failures live here. A property, preference or plugin that is
/// missing from an otherwise well-formed file is reported as data by the
/// accessors, never as an error.
#[derive(Debug, Error)]
pub enum NessusError {
    #[error("Scan file not found: {path}\n\n💡 Hint: Please verify the path to the .nessus file")]
    ScanFileNotFound { path: PathBuf },

    #[error("Failed to parse scan file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a complete, well-formed .nessus export")]
    ScanFileParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Malformed report: {reason}\n\n💡 Hint: Only NessusClientData_v2 files with a <Report> section can be split")]
    MalformedReport { reason: String },

    /// Validation error for user supplied parameters
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
