/// Error types for the scan pipeline.
///
/// [`ScanError`] covers everything that aborts a run: an invalid root, a
/// listing failure, a worker that could not start, or a report that could
/// not be written. [`WalkError`] is the per-target failure; it never leaves
/// the worker that hit it and is folded into a failed `ScanResult` instead.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors. Any of these stops the run before (or instead of) output.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The root path does not exist.
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },

    /// The root path exists but is not a directory.
    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// The root directory has no entries at all.
    #[error("path: {} is an empty directory", path.display())]
    EmptyDirectory { path: PathBuf },

    /// Stat, listing, or file-write failure.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A worker thread could not be started.
    #[error("failed to spawn worker {worker}: {source}")]
    Spawn {
        worker: usize,
        #[source]
        source: io::Error,
    },

    /// A TSV report row could not be serialised or written.
    #[error("failed to write report {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// A traversal step under one scan target failed (e.g. access denied on a
/// nested directory).
///
/// `partial` is the number of files counted before the walk aborted. It is
/// advisory only and never reaches the report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("walk of {} failed after {partial} files: {message}", path.display())]
pub struct WalkError {
    /// The scan target whose walk failed.
    pub path: PathBuf,
    /// Files counted before the failure.
    pub partial: u64,
    /// Description of the failing step.
    pub message: String,
}
