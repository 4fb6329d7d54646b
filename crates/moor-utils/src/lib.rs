//! # moor-utils
//!
//! Host-side safety utilities for the Moor VM manager.
//!
//! Every function in this crate sits on a trust boundary between user input
//! and the host: shell command lines, mount targets, persisted secrets and
//! config files.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                   moor-utils (host)                    │
//! ├────────────────────────────────────────────────────────┤
//! │                                                        │
//! │  pure helpers          Utils<F, C>                     │
//! │  ┌─────────────┐       ┌────────────────────────────┐  │
//! │  │ quoting     │       │ make_file_with_content()   │  │
//! │  │ validate    │       │ contents_of()              │  │
//! │  │ path_safety │       │ generate_scrypt_hash_for() │  │
//! │  │ strings     │       │ random_bytes()             │  │
//! │  │ retry       │       └────────────────────────────┘  │
//! │  └─────────────┘            │               │          │
//! │                             ▼               ▼          │
//! │                      ┌───────────┐  ┌────────────────┐ │
//! │                      │  FileOps  │  │ CryptoProvider │ │
//! │                      └───────────┘  └────────────────┘ │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use moor_utils::{invalid_target_path, to_cmd, QuoteType, Utils};
//!
//! # fn example() -> moor_utils::Result<()> {
//! assert!(invalid_target_path("/dev/sda"));
//!
//! let cmd = to_cmd(&["echo", "it's me"], QuoteType::QuoteEveryArg);
//! assert_eq!(cmd, "echo it\\'s\\ me");
//!
//! let utils = Utils::new();
//! utils.make_file_with_content("/tmp/moor/instance.conf", b"cpus=2\n", false)?;
//! let hash = utils.generate_scrypt_hash_for("passphrase")?;
//! assert_eq!(hash.len(), 128);
//! # Ok(())
//! # }
//! ```

mod config;
mod crypto;
mod error;
mod file_ops;
mod files;
mod path_safety;
mod quoting;
mod retry;
mod strings;
mod utils;
mod validate;
mod vm;

pub use config::{HashParams, RetryConfig, UtilsConfig};
pub use crypto::{CryptoProvider, SystemCrypto};
pub use error::{Result, UtilsError};
pub use file_ops::{FileOps, LocalFileOps};
pub use files::FileWriteRequest;
pub use path_safety::{backend_directory_path, invalid_target_path};
pub use quoting::{escape_for_shell, to_cmd, QuoteType};
pub use retry::{
    try_action_for, try_action_for_async, try_action_for_with_interval, TimeoutAction,
    DEFAULT_POLL_INTERVAL, MIN_POLL_INTERVAL,
};
pub use strings::{
    match_line_for, split, trim, trim_begin, trim_begin_with, trim_end, trim_end_with,
    trim_newline, trim_with,
};
pub use utils::Utils;
pub use validate::{
    has_only_digits, require_valid_hostname, require_valid_mac_address, valid_hostname,
    valid_mac_address, validate_server_address,
};
pub use vm::{is_running, make_uuid, VmState};
