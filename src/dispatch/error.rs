//! Error types for the request dispatcher.

use thiserror::Error;

/// Defines the possible errors of a single dispatch attempt.
///
/// Every variant is terminal for its invocation; the dispatcher never
/// retries.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The endpoint answered with a status other than 200.
    #[error("Deploy request failed with status: {0}")]
    Status(reqwest::StatusCode),

    /// The request could not be sent, or the exchange failed at the
    /// transport level.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered 200 but the body was not valid JSON.
    #[error("Failed to parse response body: {0}")]
    Body(#[from] serde_json::Error),
}
