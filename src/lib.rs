#![warn(missing_docs)]
//! whisk-deploy is a client for a remote compile-and-deploy service: it turns a
//! set of named form fields into a deploy request, submits it over HTTP, and
//! renders the outcome as an HTML fragment.

pub mod cmd;
pub mod config;
pub mod dispatch;
pub mod form;
pub mod http_client;
pub mod models;
pub mod render;
