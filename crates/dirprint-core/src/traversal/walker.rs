//! Directory walker: Bounded fan-out over directory listings and file reads

use std::collections::VecDeque;
use std::fs::FileType;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, trace, warn};

use crate::config::FingerprintConfig;
use crate::digest::{FileRecord, digest_file};
use crate::error::{FingerprintError, Result};
use crate::policy::IgnoreMatcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
}

/// An accepted directory entry
#[derive(Debug)]
struct Entry {
    path: PathBuf,
    relative: PathBuf,
    kind: EntryKind,
}

enum Job {
    List { dir: PathBuf, relative: PathBuf },
    Hash { path: PathBuf, relative: PathBuf },
}

enum Outcome {
    Listed(Vec<Entry>),
    Hashed(FileRecord),
}

/// Walk `root` and hash every file the matcher accepts
///
/// At most `config.effective_concurrency()` list or hash tasks run at once.
/// Results are gathered by a single collector loop, so the returned records
/// are in completion order. The first failure aborts every in-flight task
/// and no records are returned.
///
/// # Errors
/// Returns `TraversalIo` if a directory or file cannot be listed, stat'ed or
/// read, and `Overflow` once more than `config.max_files` files are accepted.
pub async fn walk(
    root: &Path,
    matcher: &IgnoreMatcher,
    config: &FingerprintConfig,
) -> Result<Vec<FileRecord>> {
    let matcher = Arc::new(matcher.clone());
    let limit = config.effective_concurrency();

    let mut pending = VecDeque::from([Job::List {
        dir: root.to_path_buf(),
        relative: PathBuf::new(),
    }]);
    let mut tasks: JoinSet<Result<Outcome>> = JoinSet::new();
    let mut records = Vec::new();
    let mut accepted = 0usize;

    debug!(
        "Walking {} (max {} files, {} tasks)",
        root.display(),
        config.max_files,
        limit
    );

    // Dropping `tasks` on an early return aborts everything still running.
    loop {
        while tasks.len() < limit {
            let Some(job) = pending.pop_front() else {
                break;
            };
            tasks.spawn(run_job(job, Arc::clone(&matcher)));
        }

        let Some(joined) = tasks.join_next().await else {
            break;
        };

        match joined?? {
            Outcome::Listed(entries) => {
                enqueue(entries, &mut pending, &mut accepted, root, config)?;
            }
            Outcome::Hashed(record) => records.push(record),
        }
    }

    Ok(records)
}

/// Queue jobs for newly listed entries, enforcing the file ceiling
fn enqueue(
    entries: Vec<Entry>,
    pending: &mut VecDeque<Job>,
    accepted: &mut usize,
    root: &Path,
    config: &FingerprintConfig,
) -> Result<()> {
    for entry in entries {
        match entry.kind {
            EntryKind::Dir => pending.push_back(Job::List {
                dir: entry.path,
                relative: entry.relative,
            }),
            EntryKind::File => {
                *accepted += 1;
                if *accepted > config.max_files {
                    warn!(
                        "Aborting walk of {}: more than {} files",
                        root.display(),
                        config.max_files
                    );
                    return Err(FingerprintError::Overflow {
                        limit: config.max_files,
                    });
                }
                pending.push_back(Job::Hash {
                    path: entry.path,
                    relative: entry.relative,
                });
            }
        }
    }
    Ok(())
}

async fn run_job(job: Job, matcher: Arc<IgnoreMatcher>) -> Result<Outcome> {
    match job {
        Job::List { dir, relative } => list_dir(&dir, &relative, &matcher)
            .await
            .map(Outcome::Listed),
        Job::Hash { path, relative } => {
            let digest = digest_file(&path).await?;
            trace!("Hashed {}", path.display());
            Ok(Outcome::Hashed(FileRecord::new(to_slash(&relative), digest)))
        }
    }
}

/// List one directory and keep the entries the matcher accepts
async fn list_dir(dir: &Path, relative: &Path, matcher: &IgnoreMatcher) -> Result<Vec<Entry>> {
    let mut read_dir = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| FingerprintError::io(dir, e))?;
    let mut entries = Vec::new();

    while let Some(dir_entry) = read_dir
        .next_entry()
        .await
        .map_err(|e| FingerprintError::io(dir, e))?
    {
        let path = dir_entry.path();
        let entry_relative = relative.join(dir_entry.file_name());

        let Some(kind) = classify(&dir_entry, &path, &entry_relative, matcher).await? else {
            continue;
        };

        if matcher.matches_entry(&entry_relative, kind == EntryKind::Dir) {
            trace!("Ignored {}", entry_relative.display());
            continue;
        }

        entries.push(Entry {
            path,
            relative: entry_relative,
            kind,
        });
    }

    Ok(entries)
}

/// Decide whether an entry is a file or a directory, following symlinks
///
/// Returns `None` for entries that are neither, for symlinks the matcher
/// ignores as both a file and a directory (without stat'ing the target), and
/// for symlinks whose target cannot be stat'ed but whose name is ignored.
async fn classify(
    dir_entry: &tokio::fs::DirEntry,
    path: &Path,
    relative: &Path,
    matcher: &IgnoreMatcher,
) -> Result<Option<EntryKind>> {
    let file_type = dir_entry
        .file_type()
        .await
        .map_err(|e| FingerprintError::io(path, e))?;

    if !file_type.is_symlink() {
        return Ok(kind_of(file_type));
    }

    // Ignored whichever kind the target turns out to be
    if matcher.matches_entry(relative, false) && matcher.matches_entry(relative, true) {
        return Ok(None);
    }

    match tokio::fs::metadata(path).await {
        Ok(metadata) => Ok(kind_of(metadata.file_type())),
        Err(_) if matcher.matches_entry(relative, false) => Ok(None),
        Err(e) => Err(FingerprintError::io(path, e)),
    }
}

fn kind_of(file_type: FileType) -> Option<EntryKind> {
    if file_type.is_dir() {
        Some(EntryKind::Dir)
    } else if file_type.is_file() {
        Some(EntryKind::File)
    } else {
        None
    }
}

/// Render a relative path with `/` separators
pub(crate) fn to_slash(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
