/// Tab-separated report file.
///
/// Header `file count<TAB>path`, then one row per reported path in report
/// order. An existing file at the destination is overwritten.
use crate::error::ScanError;
use crate::model::Report;
use serde::Serialize;
use std::borrow::Cow;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use tracing::debug;

/// Report file name used when none is given.
pub const DEFAULT_OUTPUT_FILE: &str = "filecounts.tsv";

const HEADER: [&str; 2] = ["file count", "path"];

#[derive(Serialize)]
struct TsvRow<'a> {
    file_count: u64,
    path: Cow<'a, str>,
}

/// Write `report` to `destination` as TSV.
pub fn write_tsv(report: &Report, destination: &Path) -> Result<(), ScanError> {
    let file = create_report_file(destination).map_err(|err| ScanError::io(destination, err))?;
    let report_err = |source: csv::Error| ScanError::Report {
        path: destination.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(file);

    writer.write_record(HEADER).map_err(report_err)?;
    for (file_count, path) in report.rows() {
        writer
            .serialize(TsvRow {
                file_count,
                path: path.as_path().to_string_lossy(),
            })
            .map_err(report_err)?;
    }
    writer
        .flush()
        .map_err(|err| ScanError::io(destination, err))?;

    debug!(
        "Wrote {} report rows to {}",
        report.path_count(),
        destination.display()
    );
    Ok(())
}

/// Create or truncate the report file: read/write for the owner, read-only
/// for everyone else, never executable.
fn create_report_file(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options.open(path)
}
