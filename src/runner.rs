//! Top-level decision flow: make sure a key exists, then encode if the
//! plaintext file is present, decode if only the encoded file is, and do
//! nothing when neither exists. One decision per run, no retries.

use thiserror::Error;

use crate::config::Paths;
use crate::crypto::codec::{CodecError, FileCodec};
use crate::crypto::keyfile::{self, KeyStatus, KeyfileError};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Key(#[from] KeyfileError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Which direction the run took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Encoded,
    Decoded,
    NothingToDo,
}

/// Result of one invocation. Callers report the key status first so the
/// output order matches the decision order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub key: KeyStatus,
    pub action: Action,
}

pub fn run(paths: &Paths) -> Result<RunOutcome, RunError> {
    let key_status = keyfile::ensure_key(&paths.key)?;

    let action = if paths.plaintext.exists() {
        let key = keyfile::load_key(&paths.key)?;
        FileCodec::new(&key).encode_file(&paths.plaintext, &paths.encoded)?;
        Action::Encoded
    } else if paths.encoded.exists() {
        let key = keyfile::load_key(&paths.key)?;
        FileCodec::new(&key).decode_file(&paths.encoded, &paths.plaintext)?;
        Action::Decoded
    } else {
        Action::NothingToDo
    };

    Ok(RunOutcome {
        key: key_status,
        action,
    })
}

#[cfg(test)]
mod tests {
    use super::{run, Action};
    use crate::config::Paths;
    use crate::crypto::keyfile::KeyStatus;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn encodes_when_only_plaintext_exists() {
        let dir = TempDir::new().expect("temp dir");
        let paths = Paths::in_dir(dir.path());
        fs::write(&paths.plaintext, b"A=1\n").expect("write plaintext");

        let outcome = run(&paths).expect("run should succeed");
        assert_eq!(outcome.key, KeyStatus::Created);
        assert_eq!(outcome.action, Action::Encoded);
        assert!(paths.encoded.exists());
        assert_eq!(
            fs::read(&paths.plaintext).expect("plaintext survives"),
            b"A=1\n"
        );
    }

    #[test]
    fn decodes_when_only_encoded_exists() {
        let dir = TempDir::new().expect("temp dir");
        let paths = Paths::in_dir(dir.path());
        fs::write(&paths.plaintext, b"TOKEN=abc\n").expect("write plaintext");

        run(&paths).expect("encoding run should succeed");
        fs::remove_file(&paths.plaintext).expect("drop plaintext");

        let outcome = run(&paths).expect("decoding run should succeed");
        assert_eq!(outcome.key, KeyStatus::Existing);
        assert_eq!(outcome.action, Action::Decoded);
        assert_eq!(
            fs::read(&paths.plaintext).expect("plaintext restored"),
            b"TOKEN=abc\n"
        );
    }

    #[test]
    fn reports_nothing_to_do_when_neither_file_exists() {
        let dir = TempDir::new().expect("temp dir");
        let paths = Paths::in_dir(dir.path());

        let outcome = run(&paths).expect("run should succeed");
        assert_eq!(outcome.action, Action::NothingToDo);
        assert!(!paths.plaintext.exists());
        assert!(!paths.encoded.exists());
        // The key is still provisioned so later runs can proceed.
        assert!(paths.key.exists());
    }

    #[test]
    fn prefers_encoding_when_both_files_exist() {
        let dir = TempDir::new().expect("temp dir");
        let paths = Paths::in_dir(dir.path());
        fs::write(&paths.plaintext, b"FIRST=1\n").expect("write plaintext");
        run(&paths).expect("first run encodes");

        fs::write(&paths.plaintext, b"SECOND=2\n").expect("rewrite plaintext");
        let outcome = run(&paths).expect("second run should succeed");
        assert_eq!(outcome.action, Action::Encoded);

        fs::remove_file(&paths.plaintext).expect("drop plaintext");
        run(&paths).expect("third run decodes");
        assert_eq!(
            fs::read(&paths.plaintext).expect("plaintext restored"),
            b"SECOND=2\n"
        );
    }

    #[test]
    fn key_survives_the_full_round_trip() {
        let dir = TempDir::new().expect("temp dir");
        let paths = Paths::in_dir(dir.path());
        fs::write(&paths.plaintext, b"X=y\n").expect("write plaintext");

        run(&paths).expect("encoding run");
        let key_bytes = fs::read(&paths.key).expect("key exists");

        fs::remove_file(&paths.plaintext).expect("drop plaintext");
        run(&paths).expect("decoding run");
        assert_eq!(
            fs::read(&paths.key).expect("key still exists"),
            key_bytes
        );
    }
}
