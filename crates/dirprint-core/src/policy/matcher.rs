//! Ignore matcher: gitignore-style predicate over relative paths

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use tracing::{debug, warn};

use crate::config::FingerprintConfig;
use crate::error::{FingerprintError, Result};

/// Compiled ignore rules for one directory tree
///
/// Rules are ordered: the last matching rule wins, so a later `!pattern`
/// re-includes a path excluded by an earlier one. Paths below an excluded
/// directory stay excluded regardless of later negations.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    rules: Gitignore,
    root: PathBuf,
    sources: Vec<PathBuf>,
}

impl IgnoreMatcher {
    /// Load the configured policy files from `root` and compile them
    ///
    /// # Errors
    /// Returns `PolicyRead` if a policy file exists but cannot be read.
    pub async fn compile(root: &Path, config: &FingerprintConfig) -> Result<Self> {
        let mut loaded = Vec::new();

        for name in &config.policy_files {
            let path = root.join(name);
            match tokio::fs::read(&path).await {
                Ok(bytes) => {
                    debug!("Loaded policy file {}", path.display());
                    loaded.push((name.clone(), String::from_utf8_lossy(&bytes).into_owned()));
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(source) => return Err(FingerprintError::PolicyRead { path, source }),
            }
        }

        Self::from_sources(root, &loaded, &config.vcs_dir)
    }

    /// Build a matcher from already-read `(file name, contents)` pairs
    ///
    /// Each source contributes its lines followed by its own name, and the
    /// `vcs_dir` rules are appended last so nothing can re-include them.
    /// Lines that are not valid globs are skipped. A relative `root` is
    /// resolved against the current directory.
    ///
    /// # Errors
    /// Returns `TraversalIo` if `root` cannot be made absolute and `Policy`
    /// if the combined rule set cannot be compiled.
    pub fn from_sources(
        root: &Path,
        sources: &[(String, String)],
        vcs_dir: &str,
    ) -> Result<Self> {
        // Gitignore strips its root from queries by string prefix, so both
        // sides must be the same absolute path.
        let root = &std::path::absolute(root)
            .map_err(|e| FingerprintError::io(root, e))?;
        let mut builder = GitignoreBuilder::new(root);
        let mut loaded = Vec::with_capacity(sources.len());

        for (name, contents) in sources {
            let from = root.join(name);
            for line in contents.lines() {
                if let Err(e) = builder.add_line(Some(from.clone()), line) {
                    warn!("Skipping invalid pattern in {}: {}", name, e);
                }
            }
            add_literal(&mut builder, &from, name);
            loaded.push(from);
        }

        let vcs = vcs_dir.trim_matches('/');
        if !vcs.is_empty() {
            add_literal(&mut builder, &root.join(vcs), &format!("/{vcs}/"));
            add_literal(&mut builder, &root.join(vcs), &format!("/{vcs}/**"));
        }

        Ok(Self {
            rules: builder.build()?,
            root: root.clone(),
            sources: loaded,
        })
    }

    /// Whether `path` (relative to the root) is excluded
    ///
    /// Checks every ancestor directory first; an excluded ancestor excludes
    /// the path even if a later negation would match the path itself.
    #[must_use]
    pub fn is_ignored(&self, path: impl AsRef<Path>, is_dir: bool) -> bool {
        let path = path.as_ref();
        let ancestor_ignored = path
            .ancestors()
            .skip(1)
            .filter(|p| !p.as_os_str().is_empty())
            .any(|dir| self.matches_entry(dir, true));

        ancestor_ignored || self.matches_entry(path, is_dir)
    }

    /// Match a single entry without looking at its ancestors
    ///
    /// The walker only asks about entries whose parents were already accepted.
    pub(crate) fn matches_entry(&self, path: &Path, is_dir: bool) -> bool {
        self.rules
            .matched(self.root.join(path), is_dir)
            .is_ignore()
    }

    /// Policy files that were loaded, in merge order
    #[must_use]
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Number of compiled rules, including the implicit ones
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

fn add_literal(builder: &mut GitignoreBuilder, from: &Path, pattern: &str) {
    if let Err(e) = builder.add_line(Some(from.to_path_buf()), pattern) {
        warn!("Skipping invalid pattern {}: {}", pattern, e);
    }
}
