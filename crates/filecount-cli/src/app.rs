/// One invocation: scan, print the listing, then optionally write the TSV.
///
/// The listing is always written before the report file is touched, so a
/// report write failure still leaves the console output in place.
use crate::config::AppConfig;
use anyhow::Context;
use filecount_core::report::{render, write_tsv};
use filecount_core::scanner::{ScanSummary, Scanner};
use std::io::Write;
use tracing::info;

/// Run a scan described by `config`, writing the listing to `out`.
///
/// Root-level failures return before anything is written to `out`.
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> anyhow::Result<ScanSummary> {
    let summary = Scanner::new(config.scan.clone())
        .run()
        .with_context(|| format!("failed to count files in {}", config.scan.root.display()))?;

    out.write_all(render(&summary.report, &summary.root).as_bytes())
        .and_then(|()| out.flush())
        .context("failed to print file counts")?;

    if config.output.report {
        let destination = &config.output.output_file;
        write_tsv(&summary.report, destination)
            .with_context(|| format!("failed to write report {}", destination.display()))?;
        info!("Report written to {}", destination.display());
    }

    Ok(summary)
}
