//! Configuration module for whisk-deploy.

mod app_config;
mod helpers;
mod http;

pub use app_config::AppConfig;
pub use helpers::{deserialize_duration_from_seconds, serialize_duration_to_seconds};
pub use http::HttpClientConfig;
