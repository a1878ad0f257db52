//! Logging setup for the command-line driver

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::error::{Error, Result};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "swagger_trim=info,load_trimmed_swagger=info";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a compact subscriber writing to stderr.
///
/// Stdout is left free for the usage message.
pub fn init_logging() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::config(format!("failed to set tracing subscriber: {e}")))
}
