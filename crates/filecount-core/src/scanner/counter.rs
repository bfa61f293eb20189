/// Recursive file counter — the work each worker does for one scan target.
///
/// Walks with `jwalk` in serial mode: the worker thread is the unit of
/// concurrency, so each walk stays on the thread that owns its chunk.
use crate::error::WalkError;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Counts the non-directory entries under a directory.
///
/// `Sync` because one counter is shared by every worker thread.
pub trait DirCounter: Sync {
    /// Count every non-directory entry below `dir`, at any depth.
    ///
    /// `worker` identifies the calling worker for diagnostics only.
    fn count(&self, dir: &Path, worker: usize) -> Result<u64, WalkError>;
}

/// Filesystem-backed [`DirCounter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkCounter {
    /// Emit one debug event per file found.
    trace_files: bool,
}

impl WalkCounter {
    pub fn new(trace_files: bool) -> Self {
        Self { trace_files }
    }
}

impl DirCounter for WalkCounter {
    /// Symlinks are counted as files and never followed. The first
    /// traversal error aborts the walk; the error carries the partial count.
    fn count(&self, dir: &Path, worker: usize) -> Result<u64, WalkError> {
        let walker = jwalk::WalkDir::new(dir)
            .skip_hidden(false)
            .follow_links(false)
            .parallelism(jwalk::Parallelism::Serial);

        let mut count: u64 = 0;
        for entry_result in walker {
            let entry = entry_result.map_err(|err| WalkError {
                path: dir.to_path_buf(),
                partial: count,
                message: err.to_string(),
            })?;

            if entry.file_type().is_dir() {
                // jwalk yields an unreadable directory as an `Ok` entry and
                // keeps its `read_dir` failure on the entry itself.
                children_readable(dir, count, entry.read_children_error.as_ref())?;
                continue;
            }
            count += 1;
            if self.trace_files {
                debug!("worker {worker} found {}", entry.path().display());
            }
        }

        Ok(count)
    }
}

/// Turn a directory's failed child listing into a [`WalkError`] for the
/// target rooted at `dir`, carrying the files counted so far.
fn children_readable<E: fmt::Display>(
    dir: &Path,
    partial: u64,
    error: Option<&E>,
) -> Result<(), WalkError> {
    match error {
        Some(err) => Err(WalkError {
            path: dir.to_path_buf(),
            partial,
            message: err.to_string(),
        }),
        None => Ok(()),
    }
}
