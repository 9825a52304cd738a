//! The form context: an explicit document model of named input fields.
//!
//! A deploy request starts as a set of named text fields, as entered on a
//! deploy form. `Form` captures that surface as a plain value: lookups take
//! the form as an explicit parameter and there is no ambient state. A missing
//! optional field is a normal, silently-defaulted case; a missing required
//! field is an explicit error, never a panic.

use std::{collections::HashMap, fs, path::PathBuf};

use config::{Config, File, FileFormat};
use thiserror::Error;

/// Errors that can occur while reading form fields.
#[derive(Debug, Error)]
pub enum FormError {
    /// A required field is absent from the form.
    #[error("Required form field '{0}' is missing")]
    MissingField(String),

    /// An error occurred while reading the form file.
    #[error("Failed to read form file: {0}")]
    IoError(#[from] std::io::Error),

    /// An error occurred while parsing the form file.
    #[error("Failed to parse form file: {0}")]
    ParseError(#[from] config::ConfigError),

    /// The form file does not have a YAML extension.
    #[error("Unsupported form file format")]
    UnsupportedFormat,
}

/// A set of named text fields, as entered on the deploy form.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: HashMap<String, String>,
}

impl Form {
    /// Creates a form from a map of field names to values.
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Loads a form from a flat YAML file mapping field names to values.
    ///
    /// The file stands in for a filled-in deploy form.
    pub fn load(path: PathBuf) -> Result<Self, FormError> {
        let is_yaml =
            matches!(path.extension().and_then(|ext| ext.to_str()), Some("yaml") | Some("yml"));
        if !is_yaml {
            return Err(FormError::UnsupportedFormat);
        }

        let form_str = fs::read_to_string(&path)?;

        let config =
            Config::builder().add_source(File::from_str(&form_str, FileFormat::Yaml)).build()?;
        let fields = config.try_deserialize()?;

        Ok(Self { fields })
    }

    /// Returns the value of the named field, or the supplied default if the
    /// field is absent.
    pub fn value_or(&self, name: &str, default: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_else(|| default.to_string())
    }

    /// Returns `true` iff the named field's value (or the default, if the
    /// field is absent) equals the sentinel exactly.
    pub fn is_flag_set(&self, name: &str, default: &str, sentinel: &str) -> bool {
        self.value_or(name, default) == sentinel
    }

    /// Returns the value of a required field, or `FormError::MissingField`
    /// if it is absent.
    pub fn require(&self, name: &str) -> Result<&str, FormError> {
        self.fields
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| FormError::MissingField(name.to_string()))
    }
}

impl FromIterator<(String, String)> for Form {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { fields: iter.into_iter().collect() }
    }
}
