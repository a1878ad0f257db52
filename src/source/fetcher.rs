//! HTTP fetcher for the upstream swagger document

use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::{
    config::SwaggerSource,
    error::{Error, Result},
};

/// Downloads `swagger.json` for a release tag with a single GET
#[derive(Debug, Clone)]
pub struct SwaggerFetcher {
    client: Client,
    source: SwaggerSource,
}

impl SwaggerFetcher {
    /// Creates a fetcher for the given source.
    ///
    /// No request timeout is configured.
    pub fn new(source: SwaggerSource) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client, source })
    }

    pub fn source(&self) -> &SwaggerSource {
        &self.source
    }

    /// Fetches the raw document body for `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] on transport failure and [`Error::Status`]
    /// when the server answers with a non-success status.
    #[instrument(skip(self))]
    pub async fn fetch(&self, tag: &str) -> Result<Vec<u8>> {
        let url = self.source.url_for(tag)?;
        self.fetch_url(&url).await
    }

    /// Fetches an already-built URL.
    pub async fn fetch_url(&self, url: &str) -> Result<Vec<u8>> {
        info!("Fetching {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!("Fetched {} bytes (HTTP {})", body.len(), status.as_u16());
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_tag_fails_before_any_request() {
        let source = SwaggerSource {
            base_url: "http://0.0.0.0:9".into(),
            ..SwaggerSource::default()
        };
        let fetcher = SwaggerFetcher::new(source).unwrap();
        assert!(matches!(fetcher.fetch("").await, Err(Error::Config(_))));
    }
}
