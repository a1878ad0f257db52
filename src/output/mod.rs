//! Output module: gzip snapshots of trimmed documents

pub mod compression_handler;

pub use compression_handler::{read_gzip, CompressionHandler, OutputSummary};
