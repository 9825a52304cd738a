//! The request dispatcher: one asynchronous HTTP POST per invocation.
//!
//! A `Dispatcher` serializes a fully built `DeployRequest` as JSON, POSTs it
//! to the configured endpoint, and resolves to either the parsed response
//! body (status exactly 200) or a `DispatchError` (any other status, a
//! transport failure, or an unparseable body). There are no retries, no
//! timeout beyond connection establishment, and no shared state between
//! invocations.

mod error;

use std::future::Future;

use reqwest::{StatusCode, header::CONTENT_TYPE};
use url::Url;

pub use error::DispatchError;

use crate::models::DeployRequest;

/// Submits deploy requests to the compile-and-deploy endpoint.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    /// The compile-and-deploy web action the request is POSTed to.
    endpoint: Url,
    /// The shared HTTP client.
    client: reqwest::Client,
}

impl Dispatcher {
    /// Creates a new `Dispatcher` for the given endpoint.
    pub fn new(endpoint: Url, client: reqwest::Client) -> Self {
        Self { endpoint, client }
    }

    /// Performs one POST of the serialized request.
    ///
    /// # Returns
    /// * `Ok(body)` - the response body parsed as JSON, iff the status was
    ///   exactly 200.
    /// * `Err(DispatchError)` - any other status, a transport-level failure,
    ///   or a 200 response whose body is not JSON.
    pub async fn send(&self, request: &DeployRequest) -> Result<serde_json::Value, DispatchError> {
        tracing::debug!(endpoint = %self.endpoint, "Posting deploy request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(endpoint = %self.endpoint, %status, "Deploy request rejected");
            return Err(DispatchError::Status(status));
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str(&body)?;
        tracing::info!(endpoint = %self.endpoint, "Deploy request succeeded");
        Ok(parsed)
    }

    /// Returns the invocable handle for one submission.
    ///
    /// Nothing is sent until the returned future is awaited. On completion
    /// exactly one of the two continuations has run: `on_success` with the
    /// parsed response body, or `on_failure` for every failure, including
    /// errors raised while sending the request.
    pub fn call<S, F>(
        &self,
        request: DeployRequest,
        on_success: S,
        on_failure: F,
    ) -> impl Future<Output = ()>
    where
        S: FnOnce(serde_json::Value),
        F: FnOnce(),
    {
        let dispatcher = self.clone();
        async move {
            match dispatcher.send(&request).await {
                Ok(body) => on_success(body),
                Err(error) => {
                    tracing::warn!(error = %error, "Deploy request failed");
                    on_failure();
                }
            }
        }
    }
}
