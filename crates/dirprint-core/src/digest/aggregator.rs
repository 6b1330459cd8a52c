//! Aggregation of per-file digests into one fingerprint

use serde::{Deserialize, Serialize};

use super::hasher::digest_bytes;

/// A file accepted by the walker and its content digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to the root, `/`-separated
    pub path: String,
    pub digest: String,
}

impl FileRecord {
    #[must_use]
    pub fn new(path: impl Into<String>, digest: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            digest: digest.into(),
        }
    }
}

/// Result of fingerprinting a directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryFingerprint {
    pub fingerprint: String,
    /// Sorted relative paths of every hashed file
    pub files: Vec<String>,
}

impl DirectoryFingerprint {
    /// Number of files that contributed to the fingerprint
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Whether this fingerprint equals a previously recorded one
    #[must_use]
    pub fn matches(&self, expected: &str) -> bool {
        self.fingerprint.eq_ignore_ascii_case(expected.trim())
    }
}

/// Combine file records into a fingerprint
///
/// Paths and digests are sorted as two independent sequences. Only the
/// digests feed the final hash, so the result depends on the multiset of
/// file contents and not on which path holds which content.
#[must_use]
pub fn combine(records: Vec<FileRecord>) -> DirectoryFingerprint {
    let (mut files, mut digests): (Vec<String>, Vec<String>) = records
        .into_iter()
        .map(|record| (record.path, record.digest))
        .unzip();

    files.sort();
    digests.sort();

    DirectoryFingerprint {
        fingerprint: digest_bytes(digests.concat().as_bytes()),
        files,
    }
}
