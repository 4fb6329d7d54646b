//! Error types for moor-utils.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for moor-utils operations.
pub type Result<T> = std::result::Result<T, UtilsError>;

/// Errors surfaced by the utility layer.
///
/// Each file-writer step has its own variant so callers can tell exactly
/// where a write stopped.
#[derive(Debug, Error)]
pub enum UtilsError {
    /// Target file is present and overwrite was not requested
    #[error("failed to write file '{}': file already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// Parent directory could not be created
    #[error("failed to create dir '{}': {source}", .path.display())]
    DirectoryCreation {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// File could not be opened or created for writing
    #[error("failed to open file '{}': {source}", .path.display())]
    FileOpen {
        /// File that could not be opened
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Fewer bytes were written than requested
    #[error("failed to write to file '{}': {detail}", .path.display())]
    WriteIncomplete {
        /// File being written
        path: PathBuf,
        /// What went wrong (short count or I/O error)
        detail: String,
        /// Underlying I/O error, absent for a short write
        source: Option<io::Error>,
    },

    /// Written content could not be committed to disk
    #[error("failed to flush file '{}': {source}", .path.display())]
    Flush {
        /// File being flushed
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Source file could not be read
    #[error("failed to read file '{}': {source}", .path.display())]
    Read {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Key-derivation primitive reported an error
    #[error("Cannot generate passphrase hash")]
    HashDerivation,

    /// Malformed caller input
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration values out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl UtilsError {
    /// Check if this error came out of the file-writer state machine.
    pub fn is_file_write_error(&self) -> bool {
        matches!(
            self,
            UtilsError::AlreadyExists(_)
                | UtilsError::DirectoryCreation { .. }
                | UtilsError::FileOpen { .. }
                | UtilsError::WriteIncomplete { .. }
                | UtilsError::Flush { .. }
        )
    }
}
