//! The effectful half of the crate behind one explicit value.
//!
//! `Utils` owns a file-system provider and a crypto provider. Components
//! that persist files or secrets take a `Utils` (or a reference to one)
//! instead of reaching for process-wide state, so tests can hand them one
//! built from fakes.

use crate::config::UtilsConfig;
use crate::crypto::{self, CryptoProvider, SystemCrypto};
use crate::error::{Result, UtilsError};
use crate::file_ops::{FileOps, LocalFileOps};
use crate::files::{self, FileWriteRequest};
use crate::retry::{try_action_for_with_interval, TimeoutAction};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Utilities provider.
///
/// # Example
///
/// ```no_run
/// use moor_utils::{FileWriteRequest, Utils};
///
/// # fn example() -> moor_utils::Result<()> {
/// let utils = Utils::new();
///
/// utils.write_file(&FileWriteRequest::new("/tmp/moor/id", "primary\n"))?;
/// let bytes = utils.contents_of("/tmp/moor/id")?;
/// assert_eq!(bytes, b"primary\n");
///
/// let salt = utils.random_bytes(16);
/// assert_eq!(salt.len(), 16);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Utils<F = LocalFileOps, C = SystemCrypto> {
    files: F,
    crypto: C,
    config: UtilsConfig,
}

impl Default for Utils {
    fn default() -> Self {
        Self::new()
    }
}

impl Utils {
    /// Create a provider over the local file system and system crypto.
    pub fn new() -> Self {
        Self::with_providers(LocalFileOps, SystemCrypto)
    }
}

impl<F: FileOps, C: CryptoProvider> Utils<F, C> {
    /// Create a provider from explicit collaborators with default config.
    pub fn with_providers(files: F, crypto: C) -> Self {
        Self {
            files,
            crypto,
            config: UtilsConfig::default(),
        }
    }

    /// Replace the configuration after validating it.
    pub fn with_config(mut self, config: UtilsConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Get the active configuration.
    pub fn config(&self) -> &UtilsConfig {
        &self.config
    }

    /// Get the file-system provider.
    pub fn files(&self) -> &F {
        &self.files
    }

    /// Write a file according to `request`.
    ///
    /// # Errors
    ///
    /// Returns the variant for the first failing step: `AlreadyExists`,
    /// `DirectoryCreation`, `FileOpen`, `WriteIncomplete` or `Flush`.
    pub fn write_file(&self, request: &FileWriteRequest) -> Result<()> {
        files::write_file(&self.files, request)
    }

    /// Create `path` with `content`, creating parent directories as needed.
    ///
    /// Fails with `AlreadyExists` if the file is present and `overwrite`
    /// is false.
    pub fn make_file_with_content(
        &self,
        path: impl AsRef<Path>,
        content: impl AsRef<[u8]>,
        overwrite: bool,
    ) -> Result<()> {
        let request = FileWriteRequest::new(path.as_ref(), content.as_ref()).overwrite(overwrite);
        self.write_file(&request)
    }

    /// Read the whole file at `path`.
    pub fn contents_of(&self, path: impl AsRef<Path>) -> Result<Vec<u8>> {
        files::contents_of(&self.files, path.as_ref())
    }

    /// Create an empty config file (and its directory) unless one exists.
    pub fn check_and_create_config_file(&self, path: impl AsRef<Path>) -> Result<()> {
        files::check_and_create_config_file(&self.files, path.as_ref())
    }

    /// Create `base/name` (or `base` when `name` is empty) and return it.
    pub fn make_dir(&self, base: impl AsRef<Path>, name: &str) -> Result<PathBuf> {
        files::make_dir(&self.files, base.as_ref(), name)
    }

    /// Bytes available on the filesystem holding `path`.
    pub fn filesystem_bytes_available(&self, path: impl AsRef<Path>) -> Result<u64> {
        self.files
            .available_space(path.as_ref())
            .map_err(UtilsError::from)
    }

    /// Derive the hex passphrase hash with the configured parameters.
    pub fn generate_scrypt_hash_for(&self, passphrase: &str) -> Result<String> {
        crypto::generate_scrypt_hash_for(&self.crypto, &self.config.hash, passphrase)
    }

    /// Return exactly `len` cryptographically random bytes.
    pub fn random_bytes(&self, len: usize) -> Vec<u8> {
        crypto::random_bytes(&self.crypto, len)
    }

    /// [`try_action_for`](crate::try_action_for) using the configured poll
    /// interval.
    pub fn try_action_for<T, A>(&self, on_timeout: T, timeout: Duration, action: A)
    where
        T: FnOnce(),
        A: FnMut() -> TimeoutAction,
    {
        try_action_for_with_interval(
            on_timeout,
            timeout,
            self.config.retry.poll_interval(),
            action,
        )
    }
}
