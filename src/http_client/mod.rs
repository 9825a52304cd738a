//! Construction of the shared HTTP client used by the request dispatcher.
//!
//! A single `reqwest::Client` is built up front from `HttpClientConfig` and
//! shared across invocations. Connection pooling lives here; the dispatcher
//! itself stays single-attempt.

use thiserror::Error;

use crate::config::HttpClientConfig;

/// Errors that can occur while building the HTTP client.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// An error occurred while building the underlying `reqwest::Client`.
    #[error("Failed to create HTTP client: {0}")]
    BuildError(#[from] reqwest::Error),
}

/// Builds the shared HTTP client from the given configuration.
///
/// # Arguments
/// * `config` - Connection pool and connect timeout settings
///
/// # Returns
/// * `Result<reqwest::Client, HttpClientError>` - The configured client, or an
///   error if client creation fails.
pub fn build_http_client(config: &HttpClientConfig) -> Result<reqwest::Client, HttpClientError> {
    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(config.max_idle_per_host)
        .pool_idle_timeout(Some(config.idle_timeout))
        .connect_timeout(config.connect_timeout)
        .build()?;
    Ok(client)
}
