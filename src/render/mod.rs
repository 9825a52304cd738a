//! Rendering of submission outcomes as HTML fragments.
//!
//! Deploy results are shown in a single output pane. `StatusPane` models that
//! pane as a shared fragment slot; `ResultRenderer` writes the three fixed
//! states into it: an in-progress marker before dispatch, a link to the
//! deployed action on success, and a fixed failure message otherwise.
//! Overlapping submissions race on the pane and the last write wins.

mod escape;

use std::sync::{Arc, Mutex};

use url::Url;

pub use escape::escape_html;

use crate::models::DeployRequest;

/// Fragment shown from dispatch start until a continuation runs.
const IN_PROGRESS_FRAGMENT: &str = "[ Query is compiling ]";

/// Fragment shown when the submission fails for any reason.
const FAILURE_FRAGMENT: &str = "compilation or deployment failed";

/// A shared slot holding the HTML fragment of the most recent state change.
#[derive(Debug, Clone, Default)]
pub struct StatusPane {
    fragment: Arc<Mutex<String>>,
}

impl StatusPane {
    /// Creates a new, empty pane.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the pane content with the given fragment.
    pub fn set(&self, fragment: impl Into<String>) {
        *self.fragment.lock().unwrap() = fragment.into();
    }

    /// Returns the current pane content.
    pub fn read(&self) -> String {
        self.fragment.lock().unwrap().clone()
    }
}

/// Renders the outcome of one deploy submission into a status pane.
///
/// The result link is computed from the target names carried by the payload,
/// not from the response body.
pub struct ResultRenderer {
    web_base: Url,
    namespace: String,
    pkgname: String,
    action: String,
    pane: StatusPane,
}

impl ResultRenderer {
    /// Creates a renderer for the given submission.
    pub fn new(web_base: Url, request: &DeployRequest, pane: StatusPane) -> Self {
        Self {
            web_base,
            namespace: request.whisk.namespace.clone(),
            pkgname: request.pkgname.clone(),
            action: request.action.clone(),
            pane,
        }
    }

    /// The URL the deployed web action is served under.
    pub fn result_url(&self) -> String {
        format!("{}{}/{}/{}.json", self.web_base, self.namespace, self.pkgname, self.action)
    }

    /// Marks the submission as in progress.
    pub fn in_progress(&self) {
        self.pane.set(IN_PROGRESS_FRAGMENT);
    }

    /// Renders a link to the deployed action.
    ///
    /// The response body is only logged; its shape is opaque here.
    pub fn success(&self, response: serde_json::Value) {
        tracing::debug!(%response, "Deploy response received");
        let url = self.result_url();
        self.pane.set(format!(r#"<a href="{url}">{url}</a>"#));
    }

    /// Renders the fixed failure message.
    pub fn failure(&self) {
        self.pane.set(FAILURE_FRAGMENT);
    }
}
