//! Error types for fingerprinting

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fingerprinting a directory
#[derive(Debug, Error)]
pub enum FingerprintError {
    #[error("Failed to read policy file {}: {source}", path.display())]
    PolicyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid ignore rules: {0}")]
    Policy(#[from] ignore::Error),

    #[error("Failed to access {}: {source}", path.display())]
    TraversalIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory contains more than {limit} files")]
    Overflow { limit: usize },

    #[error("Worker task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl FingerprintError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::TraversalIo {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FingerprintError>;
