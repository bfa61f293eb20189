/// Command line surface.
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;
use filecount_core::report::DEFAULT_OUTPUT_FILE;
use filecount_core::scanner::DEFAULT_WORKERS;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Count the files under each subdirectory of a directory, sorted by count.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "filecount",
    version,
    about = "Count the files under each subdirectory of a directory, sorted by count",
    long_about = "Counts the files directly inside --path and, in parallel, every file \
                  at any depth under each of its immediate subdirectories. Results are \
                  listed by descending file count and can also be written to a TSV file.",
    after_help = "EXAMPLES:\n    \
        filecount --path /srv/data\n    \
        filecount --path /srv/data --workers 16 --report --output-file data.tsv"
)]
pub struct Args {
    /// Directory to count (required)
    #[arg(
        long,
        value_name = "DIR",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub path: Option<PathBuf>,

    /// Maximum number of subdirectories counted concurrently
    #[arg(long, default_value_t = DEFAULT_WORKERS, value_name = "NUM")]
    pub workers: NonZeroUsize,

    /// Output verbose messages
    #[arg(long)]
    pub verbose: bool,

    /// Also write a TSV file listing
    #[arg(long)]
    pub report: bool,

    /// Name of the report to create
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE, value_name = "FILE")]
    pub output_file: PathBuf,
}
