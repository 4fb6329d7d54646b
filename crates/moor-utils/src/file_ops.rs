//! File-system provider used by the file writer.
//!
//! Every primitive the writer needs is a separate trait method so a test
//! double can fail any single step.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Primitive file-system operations.
pub trait FileOps {
    /// Open file handle returned by [`open_for_write`](Self::open_for_write).
    type Handle;

    /// Check whether `path` exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create `path` and all missing parents. Succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Open `path` for writing.
    ///
    /// With `overwrite` the file is created or truncated; without it the
    /// open fails if the file already exists.
    fn open_for_write(&self, path: &Path, overwrite: bool) -> io::Result<Self::Handle>;

    /// Write `data`, returning the number of bytes written.
    fn write(&self, handle: &mut Self::Handle, data: &[u8]) -> io::Result<usize>;

    /// Flush buffered data and commit it to storage.
    fn flush(&self, handle: &mut Self::Handle) -> io::Result<()>;

    /// Read the whole file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Bytes available to unprivileged users on the filesystem holding `path`.
    fn available_space(&self, path: &Path) -> io::Result<u64>;
}

/// [`FileOps`] over the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileOps;

impl FileOps for LocalFileOps {
    type Handle = File;

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn open_for_write(&self, path: &Path, overwrite: bool) -> io::Result<File> {
        let mut options = OpenOptions::new();
        options.write(true);
        if overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }
        options.open(path)
    }

    fn write(&self, handle: &mut File, data: &[u8]) -> io::Result<usize> {
        handle.write_all(data)?;
        Ok(data.len())
    }

    fn flush(&self, handle: &mut File) -> io::Result<()> {
        handle.flush()?;
        handle.sync_all()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn available_space(&self, path: &Path) -> io::Result<u64> {
        fs2::available_space(path)
    }
}
