use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

use super::HttpClientConfig;

/// Provides the default base URL under which deployed web actions are served.
fn default_web_base() -> Url {
    Url::parse("https://openwhisk.ng.bluemix.net/api/v1/web/")
        .expect("default web base URL is valid")
}

/// Application configuration for whisk-deploy.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// URL of the compile-and-deploy web action the request is POSTed to.
    pub endpoint: Url,

    /// Base URL under which deployed web actions become reachable. The
    /// result link is built from this base plus the target namespace,
    /// package and action names.
    #[serde(default = "default_web_base")]
    pub web_base: Url,

    /// Configuration for the shared HTTP client.
    #[serde(default)]
    pub http: HttpClientConfig,
}

impl AppConfig {
    /// Creates a new `AppConfig` by reading from the configuration directory.
    ///
    /// Values from `app.yaml` can be overridden with `WSKDEPLOY`-prefixed
    /// environment variables, e.g. `WSKDEPLOY__ENDPOINT`.
    pub fn new(config_dir: Option<&str>) -> Result<Self, ConfigError> {
        let config_dir_str = config_dir.unwrap_or("configs");
        let s = Config::builder()
            .add_source(File::with_name(&format!("{}/app.yaml", config_dir_str)))
            .add_source(Environment::with_prefix("WSKDEPLOY").separator("__"))
            .build()?;
        s.try_deserialize()
    }
}
