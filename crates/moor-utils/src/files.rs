//! Guarded file creation over a [`FileOps`] provider.
//!
//! A write runs a fixed sequence of steps and stops at the first failure,
//! returning the error variant for that step:
//!
//! ```text
//! exists? ──yes, no overwrite──▶ AlreadyExists
//!    │ no
//!    ▼
//! create parent dirs ──fail──▶ DirectoryCreation
//!    ▼
//! open ──fail──▶ FileOpen
//!    ▼
//! write ──short/fail──▶ WriteIncomplete
//!    ▼
//! flush + sync ──fail──▶ Flush
//!    ▼
//!   Ok
//! ```

use crate::error::{Result, UtilsError};
use crate::file_ops::FileOps;
use crate::path_safety::backend_directory_path;
use std::path::{Path, PathBuf};

/// A single file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWriteRequest {
    /// Target file.
    pub path: PathBuf,
    /// Bytes written verbatim.
    pub content: Vec<u8>,
    /// Replace an existing file instead of failing (default: false).
    pub overwrite: bool,
}

impl FileWriteRequest {
    /// Create a request that refuses to overwrite.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: false,
        }
    }

    /// Set whether an existing file is replaced.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// Create the parent directory of `path`, if it has one.
fn create_parent_dir<F: FileOps>(ops: &F, path: &Path) -> Result<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };

    ops.create_dir_all(parent).map_err(|source| {
        tracing::warn!(path = %parent.display(), error = %source, "Failed to create dir");
        UtilsError::DirectoryCreation {
            path: parent.to_path_buf(),
            source,
        }
    })
}

/// Create parent directories and open `path` for writing.
fn open_target<F: FileOps>(ops: &F, path: &Path, overwrite: bool) -> Result<F::Handle> {
    create_parent_dir(ops, path)?;

    ops.open_for_write(path, overwrite).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "Failed to open file");
        UtilsError::FileOpen {
            path: path.to_path_buf(),
            source,
        }
    })
}

pub(crate) fn write_file<F: FileOps>(ops: &F, request: &FileWriteRequest) -> Result<()> {
    let path = request.path.as_path();
    tracing::debug!(
        path = %path.display(),
        bytes = request.content.len(),
        overwrite = request.overwrite,
        "Writing file"
    );

    if !request.overwrite && ops.exists(path) {
        return Err(UtilsError::AlreadyExists(path.to_path_buf()));
    }

    let mut handle = open_target(ops, path, request.overwrite)?;

    let expected = request.content.len();
    match ops.write(&mut handle, &request.content) {
        Ok(written) if written == expected => {}
        Ok(written) => {
            tracing::warn!(path = %path.display(), written, expected, "Short write");
            return Err(UtilsError::WriteIncomplete {
                path: path.to_path_buf(),
                detail: format!("wrote {written} of {expected} bytes"),
                source: None,
            });
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Write failed");
            return Err(UtilsError::WriteIncomplete {
                path: path.to_path_buf(),
                detail: e.to_string(),
                source: Some(e),
            });
        }
    }

    ops.flush(&mut handle).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "Failed to flush file");
        UtilsError::Flush {
            path: path.to_path_buf(),
            source,
        }
    })?;

    tracing::trace!(path = %path.display(), "File written");
    Ok(())
}

pub(crate) fn contents_of<F: FileOps>(ops: &F, path: &Path) -> Result<Vec<u8>> {
    ops.read(path).map_err(|source| UtilsError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn check_and_create_config_file<F: FileOps>(ops: &F, path: &Path) -> Result<()> {
    if ops.exists(path) {
        tracing::trace!(path = %path.display(), "Config file present");
        return Ok(());
    }

    tracing::debug!(path = %path.display(), "Creating empty config file");
    let mut handle = open_target(ops, path, false)?;
    ops.flush(&mut handle).map_err(|source| UtilsError::Flush {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn make_dir<F: FileOps>(ops: &F, base: &Path, name: &str) -> Result<PathBuf> {
    let dir = backend_directory_path(base, name);

    ops.create_dir_all(&dir)
        .map_err(|source| UtilsError::DirectoryCreation {
            path: dir.clone(),
            source,
        })?;
    Ok(dir)
}
