//! Content hashing

use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{FingerprintError, Result};

/// SHA-256 of `bytes` as lowercase hex
#[must_use]
pub fn digest_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Read the whole file and return its content digest
///
/// The file is loaded into memory in full; no size limit is applied.
///
/// # Errors
/// Returns `TraversalIo` if the file cannot be read.
pub async fn digest_file(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| FingerprintError::io(path, e))?;
    Ok(digest_bytes(&bytes))
}
