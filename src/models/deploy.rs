//! The deploy request payload and its builder.
//!
//! A `DeployRequest` is built fresh from a form context for every submission,
//! serialized once as the POST body, and discarded when the call resolves.
//! Option flags on the form carry one of two marker values; a flag maps to
//! `true` iff the field equals its sentinel exactly.

use serde::{Deserialize, Serialize};

use crate::form::{Form, FormError};

/// Credentials for the Cloudant database backing the deployed action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CloudantCredentials {
    /// The Cloudant account username.
    pub username: String,
    /// The Cloudant account password.
    pub password: String,
}

/// The OpenWhisk deployment target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WhiskTarget {
    /// The OpenWhisk API key.
    pub api_key: String,
    /// The namespace the action is deployed into.
    pub namespace: String,
}

/// A compile-and-deploy request, serialized as the JSON body of the POST.
///
/// The field names are the wire names expected by the compile service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeployRequest {
    /// Cloudant credentials for the deployed action's data backend.
    pub cloudant: CloudantCredentials,
    /// The OpenWhisk target the compiled action is deployed to.
    pub whisk: WhiskTarget,
    /// The package the action is deployed into.
    pub pkgname: String,
    /// The name of the deployed action.
    pub action: String,
    /// The source language of the query.
    pub source: String,
    /// Whether the compiler must follow the exact compilation path given,
    /// rather than filling in intermediate steps.
    pub exactpath: bool,
    /// Whether to emit code for every intermediate language instead of the
    /// target only.
    pub emitall: bool,
    /// Whether to evaluate the query instead of deploying it.
    pub eval: bool,
    /// The data schema, as JSON-encoded text.
    pub schema: String,
    /// The evaluation input, as JSON-encoded text.
    pub input: String,
    /// Whether to render emitted identifiers in plain ASCII.
    pub ascii: bool,
    /// Extra Java import declarations for emitted Java code.
    pub javaimports: String,
    /// The query text to compile.
    pub query: String,
    /// The optimization configuration, as JSON-encoded text.
    pub optims: String,
}

impl DeployRequest {
    /// Builds a deploy request from the given form context.
    ///
    /// Every field except `query` falls back to a default when absent from
    /// the form. A missing `query` is the one validation error; it is
    /// surfaced before any network activity.
    pub fn from_form(form: &Form) -> Result<Self, FormError> {
        let query = form.require("query")?.to_string();
        Ok(Self {
            cloudant: CloudantCredentials {
                username: form.value_or("cloudant-username", ""),
                password: form.value_or("cloudant-password", ""),
            },
            whisk: WhiskTarget {
                api_key: form.value_or("wsk-api_key", ""),
                namespace: form.value_or("wsk-namespace", ""),
            },
            pkgname: form.value_or("wsk-pkg", ""),
            action: form.value_or("wsk-action", ""),
            source: form.value_or("source", ""),
            exactpath: form.is_flag_set("exactpath", "FillPath", "ExactPath"),
            emitall: form.is_flag_set("emitall", "EmitTarget", "EmitAll"),
            eval: form.is_flag_set("eval", "Compile", "Eval"),
            schema: form.value_or("schema", "{}"),
            input: form.value_or("input", "{}"),
            ascii: form.is_flag_set("charset", "Greek", "Ascii"),
            javaimports: form.value_or("java_imports", ""),
            query,
            optims: form.value_or("optim", "[]"),
        })
    }
}
