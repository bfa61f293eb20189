/// Analysis modules — post-scan grouping of results.
pub mod grouping;

pub use grouping::aggregate;
