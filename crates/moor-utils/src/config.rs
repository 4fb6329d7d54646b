//! Configuration for the utility layer.
//!
//! Hosts can embed [`UtilsConfig`] in their own config files (every field has
//! a serde default) or load the tunable parts from the environment.

use crate::error::{Result, UtilsError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete configuration for a [`Utils`](crate::Utils) instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilsConfig {
    /// Retry/timeout executor configuration
    #[serde(default)]
    pub retry: RetryConfig,
    /// Passphrase hash parameters
    #[serde(default)]
    pub hash: HashParams,
}

/// Configuration for the retry/timeout executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Sleep between attempts in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    100
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl RetryConfig {
    /// Get the poll interval as a Duration.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// scrypt parameters for passphrase hashing.
///
/// The defaults are fixed: stored hashes are only comparable when every
/// field matches the values used to produce them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashParams {
    /// log2 of the CPU/memory cost N
    #[serde(default = "default_log_n")]
    pub log_n: u8,
    /// Block size
    #[serde(default = "default_r")]
    pub r: u32,
    /// Parallelisation
    #[serde(default = "default_p")]
    pub p: u32,
    /// Derived key length in bytes
    #[serde(default = "default_key_len")]
    pub key_len: usize,
    /// Salt bytes (empty by default)
    #[serde(default)]
    pub salt: String,
}

fn default_log_n() -> u8 {
    14
}

fn default_r() -> u32 {
    8
}

fn default_p() -> u32 {
    1
}

fn default_key_len() -> usize {
    64
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            log_n: default_log_n(),
            r: default_r(),
            p: default_p(),
            key_len: default_key_len(),
            salt: String::new(),
        }
    }
}

impl HashParams {
    /// Validate the parameters.
    pub fn validate(&self) -> Result<()> {
        if self.log_n == 0 || self.log_n >= 64 {
            return Err(UtilsError::InvalidConfig(format!(
                "log_n must be in 1..64, got {}",
                self.log_n
            )));
        }
        if self.r == 0 {
            return Err(UtilsError::InvalidConfig("r must be > 0".into()));
        }
        if self.p == 0 {
            return Err(UtilsError::InvalidConfig("p must be > 0".into()));
        }
        if !(10..=64).contains(&self.key_len) {
            return Err(UtilsError::InvalidConfig(format!(
                "key_len must be in 10..=64, got {}",
                self.key_len
            )));
        }
        Ok(())
    }
}

impl UtilsConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `MOOR_RETRY_POLL_MS` | `100` |
    ///
    /// Hash parameters are not read from the environment.
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            retry: RetryConfig {
                poll_interval_ms: std::env::var("MOOR_RETRY_POLL_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(default.retry.poll_interval_ms),
            },
            hash: default.hash,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.retry.poll_interval_ms == 0 {
            return Err(UtilsError::InvalidConfig(
                "poll_interval_ms must be > 0".into(),
            ));
        }
        self.hash.validate()
    }
}
