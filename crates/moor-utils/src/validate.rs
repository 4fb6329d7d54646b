//! Identifier validators for user-supplied names and addresses.

use crate::error::{Result, UtilsError};
use crate::strings::split;
use regex::Regex;
use std::sync::LazyLock;

static HOSTNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9-]*$").expect("valid hostname regex"));

static MAC_ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{2}:){5}[0-9A-Fa-f]{2}$").expect("valid MAC address regex")
});

/// Check that `name` is a usable instance hostname.
///
/// Must start with an ASCII letter; the rest may be letters, digits or `-`.
pub fn valid_hostname(name: &str) -> bool {
    HOSTNAME_PATTERN.is_match(name)
}

/// Check that `address` is six colon-separated pairs of hex digits.
pub fn valid_mac_address(address: &str) -> bool {
    MAC_ADDRESS_PATTERN.is_match(address)
}

/// Check that `s` is non-empty and consists only of ASCII digits.
pub fn has_only_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Error-returning form of [`valid_hostname`].
pub fn require_valid_hostname(name: &str) -> Result<()> {
    if valid_hostname(name) {
        Ok(())
    } else {
        Err(UtilsError::InvalidArgument(format!(
            "invalid hostname '{name}'"
        )))
    }
}

/// Error-returning form of [`valid_mac_address`].
pub fn require_valid_mac_address(address: &str) -> Result<()> {
    if valid_mac_address(address) {
        Ok(())
    } else {
        Err(UtilsError::InvalidArgument(format!(
            "invalid MAC address '{address}'"
        )))
    }
}

/// Validate a daemon address of the form `unix:<socket>` or `<host>:<port>`.
pub fn validate_server_address(address: &str) -> Result<()> {
    if address.is_empty() {
        return Err(UtilsError::InvalidArgument("empty server address".into()));
    }

    let tokens = split(address, ":");
    let server_name = tokens.first().map(String::as_str).unwrap_or_default();

    let Some(port) = tokens.get(1) else {
        let reason = if server_name == "unix" {
            "missing socket file"
        } else {
            "missing port number"
        };
        return Err(UtilsError::InvalidArgument(format!(
            "{reason} in address '{address}'"
        )));
    };

    if server_name != "unix" && !has_only_digits(port) {
        return Err(UtilsError::InvalidArgument(format!(
            "invalid port number in address '{address}'"
        )));
    }

    Ok(())
}
