//! Hash command: Print a directory fingerprint

use std::path::Path;

use anyhow::{Context, Result};
use dirprint_core::{DirectoryFingerprint, hash_directory_with};
use tracing::debug;

use super::{OutputFormat, config_from};

/// Run the hash command
///
/// # Errors
/// Returns an error if fingerprinting fails.
pub async fn run(
    path: &Path,
    format: OutputFormat,
    max_files: usize,
    concurrency: usize,
) -> Result<()> {
    let config = config_from(max_files, concurrency);
    debug!("Hashing {} with {:?}", path.display(), config);

    let result = hash_directory_with(path, &config)
        .await
        .with_context(|| format!("Failed to fingerprint {}", path.display()))?;

    println!("{}", render(&result, format)?);
    Ok(())
}

/// Render a fingerprint for output
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(result: &DirectoryFingerprint, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Plain => result.fingerprint.clone(),
        OutputFormat::WithFiles => {
            let mut out = result.fingerprint.clone();
            for file in &result.files {
                out.push('\n');
                out.push_str(file);
            }
            out
        }
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
    })
}
