/// Data model for filecount scans.
///
/// Re-exports the scan target and result types and the grouped report.
pub mod report;
pub mod target;

pub use report::{CountGroup, Report};
pub use target::{ScanOutcome, ScanResult, ScanTarget};
