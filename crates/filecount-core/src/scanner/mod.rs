/// Scanner module — orchestrates a file count over one root.
///
/// The pipeline runs in five steps:
/// - **Probe:** validate the root and list its immediate children.
/// - **Partition:** split the subdirectories into one contiguous chunk per worker.
/// - **Dispatch:** count every chunk on its own thread and join them all.
/// - **Merge:** append the root's own direct-file count as a successful result.
/// - **Aggregate:** group successful results by count, descending.
///
/// Configuration is an immutable [`ScanConfig`] handed to [`Scanner::new`];
/// there is no global state.
pub mod counter;
pub mod dispatch;
pub mod partition;
pub mod probe;

pub use counter::{DirCounter, WalkCounter};
pub use dispatch::dispatch;
pub use partition::{partition, WorkChunk};
pub use probe::{probe, Probe};

use crate::analysis::aggregate;
use crate::error::ScanError;
use crate::model::{Report, ScanResult, ScanTarget};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Default worker budget.
pub const DEFAULT_WORKERS: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(workers) => workers,
    None => panic!("default worker budget must be non-zero"),
};

/// Everything a scan needs to know, fixed for the lifetime of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directory whose subdirectories are counted. Relative paths are
    /// resolved against the current directory.
    pub root: PathBuf,
    /// Upper bound on concurrent workers.
    pub workers: NonZeroUsize,
    /// Emit a debug event for every file found.
    pub verbose: bool,
}

impl ScanConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            workers: DEFAULT_WORKERS,
            verbose: false,
        }
    }
}

/// Result of a completed scan.
#[derive(Debug, Clone)]
pub struct ScanSummary {
    /// The root, absolute and normalised.
    pub root: ScanTarget,
    /// Successful results grouped by count.
    pub report: Report,
    /// Targets whose walk failed. Never part of the report; kept so callers
    /// can surface them if they choose to.
    pub failures: Vec<ScanResult>,
}

impl ScanSummary {
    /// Files counted across the root and every successfully counted
    /// subdirectory.
    pub fn total_files(&self) -> u64 {
        self.report.total_files()
    }
}

/// Runs the probe → partition → dispatch → aggregate pipeline.
#[derive(Debug, Clone)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan the configured root with the filesystem-backed counter.
    pub fn run(&self) -> Result<ScanSummary, ScanError> {
        self.run_with(&WalkCounter::new(self.config.verbose))
    }

    /// Scan the configured root, counting subdirectories with `counter`.
    ///
    /// Root-level failures (missing, not a directory, empty, unreadable)
    /// abort before any worker starts. Per-subdirectory failures are
    /// recorded in [`ScanSummary::failures`] and left out of the report.
    pub fn run_with<C>(&self, counter: &C) -> Result<ScanSummary, ScanError>
    where
        C: DirCounter + ?Sized,
    {
        let start = Instant::now();
        let probe = probe(&self.config.root)?;
        info!("Scanning {}", probe.root);

        let chunks = partition(&probe.subdirectories, self.config.workers);
        debug!(
            "Dispatching {} subdirectories across {} workers",
            probe.subdirectories.len(),
            chunks.len()
        );

        let mut results = dispatch(&chunks, counter)?;
        results.push(ScanResult::success(
            probe.root.clone(),
            probe.direct_file_count,
        ));

        let (successes, failures): (Vec<ScanResult>, Vec<ScanResult>) =
            results.into_iter().partition(ScanResult::is_success);
        for failure in &failures {
            debug!("Excluded from report: {}", failure.target);
        }
        if !failures.is_empty() {
            debug!("{} subdirectories could not be counted", failures.len());
        }

        let report = aggregate(successes);
        info!(
            "Counted {} files in {} paths in {:?}",
            report.total_files(),
            report.path_count(),
            start.elapsed()
        );

        Ok(ScanSummary {
            root: probe.root,
            report,
            failures,
        })
    }
}
