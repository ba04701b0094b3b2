//! Key persistence for the file codec. The key is 32 random bytes stored
//! base64-encoded in a single file; once written it is never regenerated,
//! because a replacement key would orphan any previously encoded file.

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine};
use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;
use zeroize::Zeroize;

pub const KEY_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum KeyfileError {
    #[error("key file unreadable: {0}")]
    Io(String),
    #[error("key file is not valid base64: {0}")]
    Base64(String),
    #[error("invalid key length; expected 32 bytes")]
    InvalidLength,
}

/// Whether `ensure_key` had to create the key file or found one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    Created,
    Existing,
}

/// Raw symmetric key bytes. Zeroed on drop to reduce the key's lifetime in
/// memory.
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Builds a key from raw bytes. The key must be exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyfileError> {
        if bytes.len() != KEY_LEN {
            return Err(KeyfileError::InvalidLength);
        }
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material.
        f.write_str("SecretKey([redacted])")
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Generates and persists a fresh key if none exists at `path`. An existing
/// key file is left byte-identical no matter how often this is called.
pub fn ensure_key(path: &Path) -> Result<KeyStatus, KeyfileError> {
    if path.exists() {
        return Ok(KeyStatus::Existing);
    }

    let mut bytes = [0u8; KEY_LEN];
    OsRng.fill_bytes(&mut bytes);
    let encoded = STANDARD_NO_PAD.encode(bytes);
    bytes.zeroize();

    fs::write(path, encoded).map_err(|e| KeyfileError::Io(format!("{e}")))?;
    Ok(KeyStatus::Created)
}

/// Loads the key from `path`, generating one first if the file is absent.
/// A key file that exists but cannot be read or decoded is an error; no
/// replacement key is ever written over it.
pub fn load_key(path: &Path) -> Result<SecretKey, KeyfileError> {
    ensure_key(path)?;

    let content = fs::read_to_string(path).map_err(|e| KeyfileError::Io(format!("{e}")))?;
    let decoded = STANDARD_NO_PAD
        .decode(content.trim().as_bytes())
        .map_err(|e| KeyfileError::Base64(format!("{e}")))?;
    SecretKey::from_bytes(&decoded)
}
