//! Check command: Compare a directory with a recorded fingerprint

use std::path::Path;

use anyhow::{Context, Result};
use dirprint_core::{FingerprintConfig, hash_directory_with};
use tracing::info;

/// Run the check command, returning whether the directory is unchanged
///
/// # Errors
/// Returns an error if fingerprinting fails.
pub async fn run(path: &Path, expected: &str, config: &FingerprintConfig) -> Result<bool> {
    let unchanged = is_unchanged(path, expected, config).await?;
    println!("{}", if unchanged { "unchanged" } else { "changed" });
    Ok(unchanged)
}

/// Whether `path` still has the fingerprint `expected`
///
/// `config` must allow at least as many files as the run that recorded it.
///
/// # Errors
/// Returns an error if fingerprinting fails.
pub async fn is_unchanged(
    path: &Path,
    expected: &str,
    config: &FingerprintConfig,
) -> Result<bool> {
    let result = hash_directory_with(path, config)
        .await
        .with_context(|| format!("Failed to fingerprint {}", path.display()))?;

    if !result.matches(expected) {
        info!(
            "Fingerprint changed: expected {}, got {}",
            expected.trim(),
            result.fingerprint
        );
        return Ok(false);
    }
    Ok(true)
}
