//! Digest module: Per-file hashing and fingerprint aggregation
//!
//! Every accepted file is hashed with SHA-256. The fingerprint is the
//! SHA-256 of the sorted, concatenated per-file digests.

mod aggregator;
mod hasher;

pub use aggregator::{DirectoryFingerprint, FileRecord, combine};
pub use hasher::{digest_bytes, digest_file};

#[cfg(test)]
mod tests;
