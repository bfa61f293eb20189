/// Immutable run configuration built once from the parsed arguments.
use crate::args::Args;
use filecount_core::scanner::ScanConfig;
use std::path::PathBuf;

/// Where the TSV report goes, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Write the TSV file after the console listing.
    pub report: bool,
    pub output_file: PathBuf,
}

/// Everything one invocation needs: how to scan and how to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Build the configuration, or `None` when no usable `--path` was given.
    pub fn from_args(args: &Args) -> Option<Self> {
        let root = args
            .path
            .as_ref()
            .filter(|path| !path.as_os_str().is_empty())?;

        Some(Self {
            scan: ScanConfig {
                root: root.clone(),
                workers: args.workers,
                verbose: args.verbose,
            },
            output: OutputConfig {
                report: args.report,
                output_file: args.output_file.clone(),
            },
        })
    }
}
