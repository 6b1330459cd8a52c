//! Entry point: fingerprint a directory tree

use std::path::Path;

use tracing::{info, instrument};

use crate::config::FingerprintConfig;
use crate::digest::{DirectoryFingerprint, combine};
use crate::error::Result;
use crate::policy::IgnoreMatcher;
use crate::traversal::walk;

/// Fingerprint `root` with the default configuration
///
/// # Errors
/// Returns an error if a policy file cannot be read, the walk fails, or the
/// tree holds more than 50,000 eligible files.
pub async fn hash_directory(root: &Path) -> Result<DirectoryFingerprint> {
    hash_directory_with(root, &FingerprintConfig::default()).await
}

/// Fingerprint `root` with an explicit configuration
///
/// # Errors
/// Returns an error if a policy file cannot be read, the walk fails, or the
/// tree holds more than `config.max_files` eligible files.
#[instrument(skip_all, fields(root = %root.display()))]
pub async fn hash_directory_with(
    root: &Path,
    config: &FingerprintConfig,
) -> Result<DirectoryFingerprint> {
    let matcher = IgnoreMatcher::compile(root, config).await?;
    let records = walk(root, &matcher, config).await?;
    let result = combine(records);

    info!(
        "Fingerprinted {} files: {}",
        result.file_count(),
        result.fingerprint
    );
    Ok(result)
}
