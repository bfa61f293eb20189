/// filecount CLI — argument parsing, configuration, and the run loop.
///
/// All counting logic lives in `filecount-core`; this crate turns command
/// line flags into an immutable [`AppConfig`] and drives one scan with it.
pub mod app;
pub mod args;
pub mod config;

pub use app::run;
pub use args::Args;
pub use config::{AppConfig, OutputConfig};
