//! Cryptography module covering key persistence and whole-file authenticated
//! encryption. Each submodule focuses on a single responsibility so the
//! security model stays simple and auditable.

pub mod codec;
pub mod keyfile;
