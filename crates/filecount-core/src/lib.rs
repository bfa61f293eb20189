/// filecount core — probing, counting, aggregation, and reporting.
///
/// This crate contains all business logic with zero CLI dependencies.
/// It is designed to be reusable across different frontends (CLI, TUI, GUI).
///
/// # Modules
///
/// - [`model`] — Scan targets, per-target results, and the grouped report.
/// - [`scanner`] — Root probing, work partitioning, and concurrent counting.
/// - [`analysis`] — Grouping of scan results by file count.
/// - [`report`] — Console listing and TSV file output.
/// - [`error`] — Error types shared by every stage.
pub mod analysis;
pub mod error;
pub mod model;
pub mod report;
pub mod scanner;

pub use error::{ScanError, WalkError};
