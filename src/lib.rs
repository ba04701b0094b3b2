//! Two small, unrelated utilities around a local `.env` file: an authenticated
//! codec that keeps the file encrypted at rest with a locally stored key, and
//! an extractor that lists the variable names the file defines. The crate is
//! deliberately small and transparent so every byte that touches disk is easy
//! to audit.

pub mod config;
pub mod crypto;
pub mod extract;
pub mod runner;
