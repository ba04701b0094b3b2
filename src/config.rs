//! File locations for the codec. The three paths are an explicit value passed
//! into every operation rather than module globals, so tests can point the
//! whole flow at a temporary directory. An optional JSON file can override any
//! of the default names.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_PLAINTEXT: &str = ".env";
pub const DEFAULT_ENCODED: &str = ".enc";
pub const DEFAULT_KEY: &str = "secret.key";

#[derive(Debug, Error)]
pub enum PathsError {
    #[error("config file unreadable: {0}")]
    Io(String),
    #[error("config parse failed: {0}")]
    Parse(String),
}

/// Locations of the plaintext file, its encoded counterpart, and the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub plaintext: PathBuf,
    pub encoded: PathBuf,
    pub key: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            plaintext: PathBuf::from(DEFAULT_PLAINTEXT),
            encoded: PathBuf::from(DEFAULT_ENCODED),
            key: PathBuf::from(DEFAULT_KEY),
        }
    }
}

/// On-disk override file. Every field is optional; missing fields keep their
/// default names.
#[derive(Debug, Deserialize)]
struct RawPaths {
    plaintext: Option<PathBuf>,
    encoded: Option<PathBuf>,
    key: Option<PathBuf>,
}

impl Paths {
    /// Places all three files under `base` with their default names.
    pub fn in_dir(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            plaintext: base.join(DEFAULT_PLAINTEXT),
            encoded: base.join(DEFAULT_ENCODED),
            key: base.join(DEFAULT_KEY),
        }
    }

    /// Loads path overrides from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PathsError> {
        let raw_json =
            fs::read_to_string(&path).map_err(|e| PathsError::Io(format!("{e}")))?;
        let raw: RawPaths =
            serde_json::from_str(&raw_json).map_err(|e| PathsError::Parse(format!("{e}")))?;

        let defaults = Paths::default();
        Ok(Self {
            plaintext: raw.plaintext.unwrap_or(defaults.plaintext),
            encoded: raw.encoded.unwrap_or(defaults.encoded),
            key: raw.key.unwrap_or(defaults.key),
        })
    }
}
