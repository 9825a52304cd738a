//! Data models for whisk-deploy.

mod deploy;

pub use deploy::{CloudantCredentials, DeployRequest, WhiskTarget};
