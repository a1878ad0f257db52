//! Remote swagger document retrieval

pub mod fetcher;

pub use fetcher::SwaggerFetcher;
