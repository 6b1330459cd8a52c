//! dirprint-core: Deterministic content fingerprints for directory trees
//!
//! Walks a directory, filters it through root-level ignore policy files,
//! hashes every surviving file concurrently and folds the per-file digests
//! into a single SHA-256 fingerprint.
//!
//! # Policy files
//!
//! - **.gitignore**
//! - **.dockerignore**
//! - **.csbignore**
//!
//! Only the copies at the root are read. The `.git` directory is always
//! excluded.

pub mod config;
pub mod digest;
pub mod error;
pub mod fingerprint;
pub mod policy;
pub mod traversal;

// Re-export commonly used types
pub use config::{DEFAULT_MAX_FILES, FingerprintConfig};
pub use digest::{DirectoryFingerprint, FileRecord, combine, digest_bytes, digest_file};
pub use error::{FingerprintError, Result};
pub use fingerprint::{hash_directory, hash_directory_with};
pub use policy::IgnoreMatcher;
pub use traversal::walk;
