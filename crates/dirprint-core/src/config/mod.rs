//! Configuration for a fingerprint run

/// Maximum number of accepted files in one traversal
pub const DEFAULT_MAX_FILES: usize = 50_000;

/// Default number of concurrent list/hash tasks
pub const DEFAULT_MAX_CONCURRENCY: usize = 64;

/// Root-level policy files, in merge order
pub const DEFAULT_POLICY_FILES: [&str; 3] = [".gitignore", ".dockerignore", ".csbignore"];

/// Version-control metadata directory that is always excluded
pub const DEFAULT_VCS_DIR: &str = ".git";

/// Configuration for fingerprinting a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintConfig {
    pub max_files: usize,
    pub max_concurrency: usize,
    pub policy_files: Vec<String>,
    pub vcs_dir: String,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            policy_files: DEFAULT_POLICY_FILES.iter().map(ToString::to_string).collect(),
            vcs_dir: DEFAULT_VCS_DIR.to_string(),
        }
    }
}

impl FingerprintConfig {
    /// Set the file ceiling
    #[must_use]
    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    /// Set the number of tasks allowed in flight at once
    #[must_use]
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    /// Replace the list of root-level policy files
    #[must_use]
    pub fn with_policy_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy_files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Set the always-ignored metadata directory
    #[must_use]
    pub fn with_vcs_dir(mut self, vcs_dir: impl Into<String>) -> Self {
        self.vcs_dir = vcs_dir.into();
        self
    }

    /// Concurrency actually used by the walker (at least one)
    #[must_use]
    pub fn effective_concurrency(&self) -> usize {
        self.max_concurrency.max(1)
    }
}
