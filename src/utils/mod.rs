//! Utility Module
//!
//! Internal helpers shared by the binary and the pipeline.

pub mod logging;

pub use self::logging::init_logging;
