/// Human-readable listing printed after every successful scan.
use crate::model::{Report, ScanTarget};
use std::fmt::Write;

/// Render the listing: a total line, a blank line, a two-column header with
/// an underline row, one `count<TAB><TAB>path` row per reported path, and a
/// trailing blank line.
pub fn render(report: &Report, root: &ScanTarget) -> String {
    let mut out = String::with_capacity(64 + report.path_count() * 64);
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "total number of files in {root}: {}",
        report.total_files()
    );
    out.push_str("\nnum files\tpath\n");
    out.push_str("---------\t----\n");
    for (count, path) in report.rows() {
        let _ = writeln!(out, "{count}\t\t{path}");
    }
    out.push('\n');
    out
}
