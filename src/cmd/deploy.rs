//! The `deploy` subcommand: submit one compile-and-deploy request.

use clap::Parser;
use thiserror::Error;

use crate::{
    config::AppConfig,
    dispatch::Dispatcher,
    form::{Form, FormError},
    http_client::{HttpClientError, build_http_client},
    models::DeployRequest,
    render::{ResultRenderer, StatusPane},
};

/// Errors that abort the deploy subcommand before dispatch.
#[derive(Error, Debug)]
pub enum Error {
    /// Application configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    /// The form file could not be loaded, or a required field is missing.
    #[error("Form error: {0}")]
    Form(#[from] FormError),
    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] HttpClientError),
}

/// Arguments of the `deploy` subcommand.
#[derive(Parser, Debug)]
pub struct DeployArgs {
    /// Path to the form file holding the request fields.
    #[arg(short, long)]
    form: String,
    /// Path to the configuration directory. Defaults to `configs`.
    #[arg(short, long)]
    config_dir: Option<String>,
}

/// Runs one deploy submission end to end and prints the final pane content.
pub async fn execute(args: DeployArgs) -> Result<(), Error> {
    // 1. Configuration and form loading
    let config = AppConfig::new(args.config_dir.as_deref())?;
    let form = Form::load(args.form.clone().into())?;

    // 2. Payload construction. A missing required field aborts here, before
    //    any network activity or pane update.
    let request = DeployRequest::from_form(&form)?;
    tracing::debug!(?request, "Deploy request built");

    // 3. Dispatch
    let client = build_http_client(&config.http)?;
    let dispatcher = Dispatcher::new(config.endpoint.clone(), client);

    let pane = StatusPane::new();
    let renderer = ResultRenderer::new(config.web_base.clone(), &request, pane.clone());
    renderer.in_progress();

    dispatcher.call(request, |body| renderer.success(body), || renderer.failure()).await;

    // 4. Reporting
    println!("{}", pane.read());

    Ok(())
}
