//! Compression handling for trimmed swagger snapshots
//!
//! Snapshots are compact JSON wrapped in a single gzip member.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use tracing::{debug, info, instrument};

use crate::{
    config::OutputConfig,
    error::Result,
    hash_utils::DigestWriter,
    types::{encode_document, Document},
};

/// What was written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSummary {
    pub path: PathBuf,

    /// Length of the uncompressed JSON text
    pub raw_bytes: u64,

    /// Size of the gzip file
    pub compressed_bytes: u64,

    /// Hex SHA-256 of the gzip file
    pub sha256: String,
}

impl OutputSummary {
    /// Compressed size as a fraction of the raw size
    pub fn ratio(&self) -> f64 {
        if self.raw_bytes == 0 {
            return 0.0;
        }
        self.compressed_bytes as f64 / self.raw_bytes as f64
    }
}

/// Handles gzip output of documents
#[derive(Debug, Clone)]
pub struct CompressionHandler {
    level: Compression,
}

impl CompressionHandler {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            level: Compression::new(config.compression_level),
        }
    }

    /// Encodes `document` compactly and writes it gzip-compressed to `path`,
    /// truncating any existing file.
    ///
    /// A failure part way through may leave a truncated file behind.
    #[instrument(skip(self, document, path), fields(path = %path.as_ref().display()))]
    pub fn write_document(&self, document: &Document, path: impl AsRef<Path>) -> Result<OutputSummary> {
        let path = path.as_ref();
        let encoded = encode_document(document)?;
        debug!("Encoded {} bytes of JSON", encoded.len());

        let (sha256, compressed_bytes) = {
            let file = File::create(path)?;
            let mut encoder = GzEncoder::new(DigestWriter::new(BufWriter::new(file)), self.level);
            encoder.write_all(&encoded)?;
            let digest_writer = encoder.finish()?;
            let (mut buffered, digest, written) = digest_writer.finish();
            buffered.flush()?;
            (digest, written)
        };

        let summary = OutputSummary {
            path: path.to_path_buf(),
            raw_bytes: encoded.len() as u64,
            compressed_bytes,
            sha256,
        };
        info!(
            "Wrote {} ({} -> {} bytes, sha256 {})",
            path.display(),
            summary.raw_bytes,
            summary.compressed_bytes,
            summary.sha256
        );
        Ok(summary)
    }
}

impl Default for CompressionHandler {
    fn default() -> Self {
        Self::new(&OutputConfig::default())
    }
}

/// Reads and decompresses a gzip file.
pub fn read_gzip(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let file = File::open(path.as_ref())?;
    let mut decoder = GzDecoder::new(file);
    let mut contents = Vec::new();
    decoder.read_to_end(&mut contents)?;
    Ok(contents)
}
