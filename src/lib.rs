//! Main Library File for Swagger Trimming
//! Fetches the Kubernetes OpenAPI document for a release tag, clears its
//! `description` values and stores it as a gzip snapshot.

// Configuration and Core Pipeline
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Stage 1: Fetch
pub mod source;

// Stage 3: Trim
pub mod cleaner;

// Stage 4: Compress & Write
pub mod hash_utils;
pub mod output;

// Reading snapshots back
pub mod snapshot;

// Shared Utilities
pub mod utils;

// Re-exports for crate consumers
pub use cleaner::{trim_descriptions, DescriptionTrimmer, TrimStats};
pub use config::ProcessingConfig;
pub use error::{Error, Result};
pub use output::{CompressionHandler, OutputSummary};
pub use pipeline::{Pipeline, PipelineReport};
pub use snapshot::{load_most_recent, snapshot_file_name, Snapshot};
pub use source::SwaggerFetcher;
pub use types::{encode_document, parse_document, Document};
