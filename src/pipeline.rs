//! Swagger Trimming Pipeline: fetch, parse, trim, compress and write
//!
//! Stages run strictly in order; the first failing stage aborts the run.

use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{info, instrument};

use crate::{
    cleaner::{DescriptionTrimmer, TrimStats},
    config::ProcessingConfig,
    error::Result,
    output::{CompressionHandler, OutputSummary},
    source::SwaggerFetcher,
    types::{kind_of, parse_document, Document},
};

/// Outcome of a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Source URL, absent when bytes were supplied directly
    pub url: Option<String>,
    pub fetched_bytes: usize,
    pub trim: TrimStats,
    pub output: OutputSummary,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct Pipeline {
    config: ProcessingConfig,
    fetcher: SwaggerFetcher,
    trimmer: DescriptionTrimmer,
    compression: CompressionHandler,
}

impl Pipeline {
    /// Creates a pipeline after validating `config`.
    pub fn new(config: ProcessingConfig) -> Result<Self> {
        config.validate()?;
        let fetcher = SwaggerFetcher::new(config.source.clone())?;
        let trimmer = DescriptionTrimmer::new(&config.trim);
        let compression = CompressionHandler::new(&config.output);

        Ok(Self {
            config,
            fetcher,
            trimmer,
            compression,
        })
    }

    pub fn config(&self) -> &ProcessingConfig {
        &self.config
    }

    /// Runs every stage for release `tag`, writing the snapshot to `out_path`.
    #[instrument(skip(self, out_path))]
    pub async fn execute(&self, tag: &str, out_path: impl AsRef<Path>) -> Result<PipelineReport> {
        let start = Instant::now();
        let url = self.config.source.url_for(tag)?;

        // Stage 1: Fetch
        info!("Stage 1: Fetch");
        let bytes = self.fetcher.fetch_url(&url).await?;

        let mut report = self.run_local_stages(&bytes, out_path.as_ref())?;
        report.url = Some(url);
        report.elapsed = start.elapsed();
        Ok(report)
    }

    /// Runs the parse, trim and write stages on already-fetched content.
    pub fn process_bytes(&self, bytes: &[u8], out_path: impl AsRef<Path>) -> Result<PipelineReport> {
        let start = Instant::now();
        let mut report = self.run_local_stages(bytes, out_path.as_ref())?;
        report.elapsed = start.elapsed();
        Ok(report)
    }

    fn run_local_stages(&self, bytes: &[u8], out_path: &Path) -> Result<PipelineReport> {
        let document = self.stage_parse(bytes)?;
        let (trimmed, trim) = self.stage_trim(&document);
        drop(document);
        let output = self.stage_write(&trimmed, out_path)?;

        Ok(PipelineReport {
            url: None,
            fetched_bytes: bytes.len(),
            trim,
            output,
            elapsed: Duration::ZERO,
        })
    }

    /// Stage 2: Parse
    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    fn stage_parse(&self, bytes: &[u8]) -> Result<Document> {
        info!("Stage 2: Parse");
        let document = parse_document(bytes)?;
        info!("Parsed {} document", kind_of(&document));
        Ok(document)
    }

    /// Stage 3: Trim
    #[instrument(skip(self, document))]
    fn stage_trim(&self, document: &Document) -> (Document, TrimStats) {
        info!("Stage 3: Trim `{}` fields", self.trimmer.designated_key());
        let (trimmed, stats) = self.trimmer.trim_with_stats(document);
        info!("Cleared {} fields across {} mappings", stats.fields_cleared, stats.mappings_visited);
        (trimmed, stats)
    }

    /// Stage 4: Compress & Write
    #[instrument(skip(self, document))]
    fn stage_write(&self, document: &Document, out_path: &Path) -> Result<OutputSummary> {
        info!("Stage 4: Compress & Write");
        self.compression.write_document(document, out_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, output::read_gzip};
    use serde_json::json;

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let mut config = ProcessingConfig::default();
        config.trim.designated_key.clear();
        assert!(matches!(Pipeline::new(config), Err(Error::Config(_))));
    }

    #[test]
    fn process_bytes_writes_trimmed_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("swagger.json.gz");
        let pipeline = Pipeline::new(ProcessingConfig::default()).unwrap();
        let input = br#"{"paths": {"/v1": {"description": "list", "get": {"description": "fetch"}}}}"#;

        let report = pipeline.process_bytes(input, &out).unwrap();

        let written: Document = serde_json::from_slice(&read_gzip(&out).unwrap()).unwrap();
        assert_eq!(written, json!({"paths": {"/v1": {"description": "", "get": {"description": ""}}}}));
        assert_eq!(report.url, None);
        assert_eq!(report.fetched_bytes, input.len());
        assert_eq!(report.trim.fields_cleared, 2);
        assert_eq!(report.output.path, out);
    }

    #[test]
    fn decode_failure_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("swagger.json.gz");
        let pipeline = Pipeline::new(ProcessingConfig::default()).unwrap();

        let err = pipeline.process_bytes(b"<html>rate limited</html>", &out).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(!out.exists());
    }
}
