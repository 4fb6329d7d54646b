//! Passphrase hashing and random bytes.
//!
//! The derivation uses a fixed salt and cost, so the same passphrase always
//! hashes to the same value. Hashes are compared against a stored value to
//! authenticate a client.

use crate::config::HashParams;
use crate::error::{Result, UtilsError};
use rand::rngs::OsRng;
use rand::RngCore;

/// Cryptographic primitives used by the hasher.
pub trait CryptoProvider {
    /// Fill `out` with a memory-hard derivation of `passphrase`.
    fn derive_key(
        &self,
        passphrase: &[u8],
        params: &HashParams,
        out: &mut [u8],
    ) -> std::result::Result<(), String>;

    /// Fill `buf` from a cryptographically strong random source.
    fn fill_random(&self, buf: &mut [u8]);
}

/// scrypt + OS randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCrypto;

impl CryptoProvider for SystemCrypto {
    fn derive_key(
        &self,
        passphrase: &[u8],
        params: &HashParams,
        out: &mut [u8],
    ) -> std::result::Result<(), String> {
        let scrypt_params = scrypt::Params::new(params.log_n, params.r, params.p, out.len())
            .map_err(|e| format!("invalid scrypt parameters: {e}"))?;

        scrypt::scrypt(passphrase, params.salt.as_bytes(), &scrypt_params, out)
            .map_err(|e| format!("scrypt failed: {e}"))
    }

    fn fill_random(&self, buf: &mut [u8]) {
        OsRng.fill_bytes(buf);
    }
}

pub(crate) fn generate_scrypt_hash_for<C: CryptoProvider>(
    crypto: &C,
    params: &HashParams,
    passphrase: &str,
) -> Result<String> {
    let mut key = vec![0u8; params.key_len];

    crypto
        .derive_key(passphrase.as_bytes(), params, &mut key)
        .map_err(|reason| {
            tracing::warn!(%reason, "Passphrase key derivation failed");
            UtilsError::HashDerivation
        })?;

    Ok(hex::encode(key))
}

pub(crate) fn random_bytes<C: CryptoProvider>(crypto: &C, len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    crypto.fill_random(&mut bytes);
    bytes
}
