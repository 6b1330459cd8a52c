//! CLI commands

pub mod check;
pub mod hash;

use dirprint_core::FingerprintConfig;

/// Configuration shared by `hash` and `check`
#[must_use]
pub fn config_from(max_files: usize, concurrency: usize) -> FingerprintConfig {
    FingerprintConfig::default()
        .with_max_files(max_files)
        .with_max_concurrency(concurrency)
}

/// How `hash` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fingerprint only
    Plain,
    /// Fingerprint followed by one file per line
    WithFiles,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn from_flags(files: bool, json: bool) -> Self {
        match (files, json) {
            (_, true) => Self::Json,
            (true, false) => Self::WithFiles,
            (false, false) => Self::Plain,
        }
    }
}
