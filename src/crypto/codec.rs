//! Whole-file authenticated encryption built on ChaCha20-Poly1305.
//! The encoded file is a JSON envelope of nonce + ciphertext + auth tag, all
//! base64 encoded, so tampering is detected on decode instead of producing
//! corrupted plaintext.

use std::fs;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine};
use chacha20poly1305::aead::{Aead, AeadCore, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroize;

use crate::crypto::keyfile::SecretKey;

const NONCE_SIZE: usize = 12;
const TAG_SIZE: usize = 16;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("input file {} not found", .0.display())]
    MissingInput(PathBuf),
    #[error("unable to read {}: {}", .0.display(), .1)]
    Read(PathBuf, String),
    #[error("unable to write {}: {}", .0.display(), .1)]
    Write(PathBuf, String),
    #[error("encryption failed: {0}")]
    EncryptFailed(String),
    #[error("decryption failed: {0}")]
    DecryptFailed(String),
    #[error("invalid envelope: {0}")]
    Envelope(String),
}

/// Serializable envelope for an encoded file. The values are base64 encoded
/// so the file on disk is plain JSON text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Envelope {
    pub nonce: String,
    pub ciphertext: String,
    pub tag: String,
}

/// Encrypts and decrypts whole files with a symmetric key.
pub struct FileCodec {
    key: Key,
}

impl FileCodec {
    pub fn new(secret: &SecretKey) -> Self {
        let mut key = Key::default();
        key.copy_from_slice(secret.as_bytes());
        Self { key }
    }

    /// Seals plaintext bytes into an envelope with a fresh random nonce.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Envelope, CodecError> {
        let cipher = ChaCha20Poly1305::new(&self.key);
        let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);

        let mut ciphertext_and_tag = cipher
            .encrypt(&nonce, plaintext)
            .map_err(|e| CodecError::EncryptFailed(format!("{e}")))?;
        if ciphertext_and_tag.len() < TAG_SIZE {
            return Err(CodecError::EncryptFailed(
                "ciphertext shorter than authentication tag".to_string(),
            ));
        }
        let tag_start = ciphertext_and_tag.len() - TAG_SIZE;
        let tag_bytes = ciphertext_and_tag.split_off(tag_start);
        let ciphertext = ciphertext_and_tag;

        Ok(Envelope {
            nonce: STANDARD_NO_PAD.encode(nonce),
            ciphertext: STANDARD_NO_PAD.encode(ciphertext),
            tag: STANDARD_NO_PAD.encode(tag_bytes),
        })
    }

    /// Opens an envelope back into plaintext bytes. Fails if the ciphertext
    /// was tampered with or the key does not match.
    pub fn decrypt(&self, envelope: &Envelope) -> Result<Vec<u8>, CodecError> {
        let nonce_bytes = STANDARD_NO_PAD
            .decode(envelope.nonce.as_bytes())
            .map_err(|e| CodecError::Envelope(format!("{e}")))?;
        let ciphertext = STANDARD_NO_PAD
            .decode(envelope.ciphertext.as_bytes())
            .map_err(|e| CodecError::Envelope(format!("{e}")))?;
        let tag = STANDARD_NO_PAD
            .decode(envelope.tag.as_bytes())
            .map_err(|e| CodecError::Envelope(format!("{e}")))?;

        if nonce_bytes.len() != NONCE_SIZE {
            return Err(CodecError::Envelope("nonce length mismatch".to_string()));
        }

        let mut combined = Vec::with_capacity(ciphertext.len() + tag.len());
        combined.extend_from_slice(&ciphertext);
        combined.extend_from_slice(&tag);

        let cipher = ChaCha20Poly1305::new(&self.key);
        cipher
            .decrypt(Nonce::from_slice(&nonce_bytes), combined.as_ref())
            .map_err(|e| CodecError::DecryptFailed(format!("{e}")))
    }

    /// Reads the whole plaintext file, encrypts it, and writes the envelope to
    /// `encoded_path`, overwriting any previous content. Nothing is written
    /// when the plaintext is absent or encryption fails.
    pub fn encode_file(&self, plaintext_path: &Path, encoded_path: &Path) -> Result<(), CodecError> {
        if !plaintext_path.exists() {
            return Err(CodecError::MissingInput(plaintext_path.to_path_buf()));
        }
        let data = fs::read(plaintext_path)
            .map_err(|e| CodecError::Read(plaintext_path.to_path_buf(), format!("{e}")))?;

        let envelope = self.encrypt(&data)?;
        let json = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| CodecError::Envelope(format!("{e}")))?;

        fs::write(encoded_path, json)
            .map_err(|e| CodecError::Write(encoded_path.to_path_buf(), format!("{e}")))
    }

    /// Reads the whole encoded file, decrypts it, and writes the recovered
    /// plaintext to `plaintext_path`, overwriting any previous content. The
    /// encoded file is left untouched on failure and no plaintext is written.
    pub fn decode_file(&self, encoded_path: &Path, plaintext_path: &Path) -> Result<(), CodecError> {
        if !encoded_path.exists() {
            return Err(CodecError::MissingInput(encoded_path.to_path_buf()));
        }
        let raw = fs::read_to_string(encoded_path)
            .map_err(|e| CodecError::Read(encoded_path.to_path_buf(), format!("{e}")))?;
        let envelope: Envelope =
            serde_json::from_str(&raw).map_err(|e| CodecError::Envelope(format!("{e}")))?;

        let plaintext = self.decrypt(&envelope)?;

        fs::write(plaintext_path, plaintext)
            .map_err(|e| CodecError::Write(plaintext_path.to_path_buf(), format!("{e}")))
    }
}

impl Drop for FileCodec {
    fn drop(&mut self) {
        // Zero the key material on drop to reduce its lifetime in memory.
        self.key.as_mut_slice().zeroize();
    }
}
