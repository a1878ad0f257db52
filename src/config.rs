//! Configuration types and validation for the pipeline

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default host serving raw repository content
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com";

/// Key whose values are cleared by the trimmer
pub const DESCRIPTION_KEY: &str = "description";

/// Location of the swagger document inside a source repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwaggerSource {
    pub base_url: String,
    pub org: String,
    pub repo: String,
}

/// Trimmer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimConfig {
    pub designated_key: String,
}

/// Output writer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// gzip level (0-9)
    pub compression_level: u32,
}

/// Global pipeline execution config
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    pub source: SwaggerSource,
    pub trim: TrimConfig,
    pub output: OutputConfig,
}

impl SwaggerSource {
    /// Builds the URL of `api/openapi-spec/swagger.json` at the given tag
    pub fn url_for(&self, tag: &str) -> Result<String> {
        if tag.trim().is_empty() {
            return Err(Error::config("release tag must not be empty"));
        }
        Ok(format!(
            "{}/{}/{}/{}/api/openapi-spec/swagger.json",
            self.base_url.trim_end_matches('/'),
            self.org,
            self.repo,
            tag
        ))
    }
}

// Defaults
impl Default for SwaggerSource {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            org: "kubernetes".into(),
            repo: "kubernetes".into(),
        }
    }
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            designated_key: DESCRIPTION_KEY.into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            compression_level: flate2::Compression::default().level(),
        }
    }
}

impl ProcessingConfig {
    /// Validates all sections before the pipeline touches the network
    pub fn validate(&self) -> Result<()> {
        if self.source.base_url.is_empty() {
            return Err(Error::config("source base URL must not be empty"));
        }
        if !self.source.base_url.starts_with("http://") && !self.source.base_url.starts_with("https://") {
            return Err(Error::config(format!(
                "source base URL must be http(s): {}",
                self.source.base_url
            )));
        }
        if self.source.org.is_empty() || self.source.repo.is_empty() {
            return Err(Error::config("source org and repo must not be empty"));
        }
        if self.trim.designated_key.is_empty() {
            return Err(Error::config("designated key must not be empty"));
        }
        if self.output.compression_level > 9 {
            return Err(Error::config(format!(
                "compression level must be 0-9, got {}",
                self.output.compression_level
            )));
        }
        Ok(())
    }
}
