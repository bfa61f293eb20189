/// Report output — the console listing and the TSV file.
///
/// Both print one row per `(count, path)` pair in report order, so paths
/// that share a count each get their own row.
pub mod console;
pub mod tsv;

pub use console::render;
pub use tsv::{write_tsv, DEFAULT_OUTPUT_FILE};
