/// Scan targets and the per-target result produced by a worker.
use std::fmt;
use std::io;
use std::path::{Component, Path, PathBuf};

/// A directory to be counted: the scan root or one of its immediate
/// subdirectories.
///
/// Always absolute and lexically normalised (no `.` or `..` components).
/// Symlinks in the path are left as-is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScanTarget(PathBuf);

impl ScanTarget {
    /// Make `path` absolute against the current directory and normalise it.
    ///
    /// Fails only if the current directory cannot be determined or `path`
    /// is empty.
    pub fn resolve(path: &Path) -> io::Result<Self> {
        let absolute = std::path::absolute(path)?;
        let mut normal = PathBuf::with_capacity(absolute.as_os_str().len());
        for component in absolute.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    normal.pop();
                }
                other => normal.push(other.as_os_str()),
            }
        }
        Ok(Self(normal))
    }

    /// Target for an immediate child of this directory.
    pub fn child(&self, name: impl AsRef<Path>) -> Self {
        Self(self.0.join(name))
    }

    #[inline]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for ScanTarget {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.display(), f)
    }
}

/// Whether counting a target completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    Success,
    /// The walk aborted; the result's count is advisory only.
    Failure,
}

/// Outcome of counting one [`ScanTarget`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanResult {
    pub target: ScanTarget,
    /// Non-directory entries found. For a failure this is the partial
    /// number accumulated before the walk aborted.
    pub count: u64,
    pub outcome: ScanOutcome,
}

impl ScanResult {
    pub fn success(target: ScanTarget, count: u64) -> Self {
        Self {
            target,
            count,
            outcome: ScanOutcome::Success,
        }
    }

    pub fn failure(target: ScanTarget, partial: u64) -> Self {
        Self {
            target,
            count: partial,
            outcome: ScanOutcome::Failure,
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.outcome == ScanOutcome::Success
    }
}
